use {
    super::{
        client::{Client, Response},
        error::Result as PexelsResult,
        query::QueryArgs,
    },
    serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize},
    serde_json::{Map, Value as JsonValue},
};

/// Value of the `size` argument sent by default with [`Client::search`] and [`Client::popular`].
const DEFAULT_SIZE: u8 = 1;

/// URLs of the different renditions of a [`Photo`].
///
/// Renditions missing from the response are `None`. Renditions this crate doesn't know about are
/// kept in [`PhotoSource::extra`].
#[derive(Debug, PartialEq, Clone, Default, Deserialize, Serialize)]
pub struct PhotoSource {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub large2x: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub portrait: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub landscape: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub tiny: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Structure representing a photo.
///
/// Every field is optional: the API decides what it sends. A field holding a value of the wrong
/// type (e.g. a string `id`) is read as `None` instead of failing the whole page. Fields this
/// crate doesn't know about are kept in [`Photo::extra`].
#[derive(Debug, PartialEq, Clone, Deserialize, Serialize)]
pub struct Photo {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// The Pexels page of the photo.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub photographer: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub photographer_url: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub photographer_id: Option<u64>,
    /// Average color of the photo, as a `#RRGGBB` string.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub avg_color: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub src: Option<PhotoSource>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub liked: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// The query passed to [`Client::search`] that returned this photo.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub original_query: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Reads any JSON value, keeping it only if it has the expected type.
fn lenient<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = JsonValue::deserialize(de)?;
    Ok(serde_json::from_value(value).ok())
}

/// A page of photos, as returned by the `search` and `popular` endpoints.
#[derive(Debug, PartialEq, Clone, Default, Deserialize, Serialize)]
pub struct PhotoPage {
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,

    /// Error message sent by the API instead of results, e.g. for an invalid API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    /// Deserialize the body into a [`PhotoPage`].
    pub fn into_page(self) -> PexelsResult<PhotoPage> {
        Ok(serde_json::from_value(self.body)?)
    }
}

impl Client {
    fn default_args(&self) -> QueryArgs {
        QueryArgs::new()
            .arg("size", DEFAULT_SIZE)
            .arg("page", self.page())
            .arg("per_page", self.photos_per_page())
    }

    /// Search for photos matching `query`.
    ///
    /// `args` are sent along with `query`, `size`, `page` and `per_page`, overriding them when
    /// they share a name. Every returned photo has [`Photo::original_query`] set to `query`, even
    /// if `args` replaced the query actually sent.
    ///
    /// ```no_run
    /// # use pexels::{client::Client, query::QueryArgs};
    /// # #[tokio::main]
    /// # async fn main() -> pexels::error::Result<()> {
    /// let mut client = Client::new("my-api-key")?;
    /// let result = client
    ///     .search("cats", QueryArgs::new().arg("orientation", "square"))
    ///     .await?;
    ///
    /// for photo in result.photos {
    ///     assert_eq!(photo.original_query.as_deref(), Some("cats"));
    /// }
    /// # Ok(()) }
    /// ```
    pub async fn search(&mut self, query: &str, args: QueryArgs) -> PexelsResult<PhotoPage> {
        let args = QueryArgs::new()
            .arg("query", query)
            .merge(self.default_args())
            .merge(args);

        let mut result = self.request("search", &args).await?.into_page()?;

        for photo in &mut result.photos {
            photo.original_query = Some(query.to_string());
        }

        Ok(result)
    }

    /// Returns the current popular photos.
    ///
    /// `args` are sent along with `size`, `page` and `per_page`, overriding them when they share
    /// a name.
    ///
    /// ```no_run
    /// # use pexels::{client::Client, query::QueryArgs};
    /// # #[tokio::main]
    /// # async fn main() -> pexels::error::Result<()> {
    /// let mut client = Client::new("my-api-key")?;
    /// client.set_page(2);
    ///
    /// let result = client.popular(QueryArgs::new()).await?;
    /// assert_eq!(result.page, Some(2));
    /// # Ok(()) }
    /// ```
    pub async fn popular(&mut self, args: QueryArgs) -> PexelsResult<PhotoPage> {
        let args = self.default_args().merge(args);

        self.request("popular", &args).await?.into_page()
    }
}
