use super::{
    error::{Error, Result},
    query::QueryArgs,
};

use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    StatusCode,
};

use url::Url;

mod rate_limit;

pub use rate_limit::RateLimits;

/// Base URL of version 1 of the Pexels API.
pub const DEFAULT_BASE_URL: &str = "https://api.pexels.com/v1/";

/// Page requested by [`Client::search`] and [`Client::popular`] until [`Client::set_page`] is
/// called.
pub const DEFAULT_PAGE: &str = "1";

/// Photos per page requested until [`Client::set_photos_per_page`] is called.
pub const DEFAULT_PHOTOS_PER_PAGE: &str = "20";

/// A parsed API response.
///
/// Statuses outside of the 2xx range are not turned into errors: the API describes most
/// failures with a JSON body, which is returned here like any other.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// The HTTP status of the response.
    pub status: StatusCode,
    /// The JSON body of the response.
    pub body: serde_json::Value,
}

/// Client struct.
#[derive(Debug)]
pub struct Client {
    client: reqwest::Client,
    base_url: Url,

    page: String,
    photos_per_page: String,

    limits: Option<RateLimits>,
}

impl Client {
    /// Create a new client for the official API, authenticating every request with `key`.
    ///
    /// The key is sent as is in the `Authorization` header. It isn't validated beyond being a
    /// legal header value.
    pub fn new(key: impl AsRef<str>) -> Result<Self> {
        Client::with_base_url(DEFAULT_BASE_URL, key)
    }

    /// Create a new client sending its requests to `base_url` instead of the official API.
    ///
    /// Endpoint paths are resolved relative to `base_url`; a trailing slash is added to it if
    /// missing.
    pub fn with_base_url(base_url: &str, key: impl AsRef<str>) -> Result<Self> {
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };

        let mut auth = HeaderValue::from_str(key.as_ref())?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);

        match reqwest::Client::builder().default_headers(headers).build() {
            Ok(c) => Ok(Client {
                client: c,
                base_url,

                page: String::from(DEFAULT_PAGE),
                photos_per_page: String::from(DEFAULT_PHOTOS_PER_PAGE),

                limits: None,
            }),
            Err(e) => Err(Error::CannotCreateClient(format!("{:?}", e))),
        }
    }

    /// The URL endpoint paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The page sent with the next [`Client::search`] or [`Client::popular`] call.
    pub fn page(&self) -> &str {
        &self.page
    }

    /// The number of photos per page sent with the next [`Client::search`] or
    /// [`Client::popular`] call.
    pub fn photos_per_page(&self) -> &str {
        &self.photos_per_page
    }

    /// Set the page to request on subsequent calls. The value isn't checked.
    pub fn set_page(&mut self, page: impl ToString) {
        self.page = page.to_string();
    }

    /// Set the number of photos per page to request on subsequent calls. The value isn't checked.
    pub fn set_photos_per_page(&mut self, photos_per_page: impl ToString) {
        self.photos_per_page = photos_per_page.to_string();
    }

    /// The rate limits reported with the last response, or `None` if no request was made yet.
    ///
    /// Every request overwrites them, whether it succeeded or not.
    pub fn limits(&self) -> Option<RateLimits> {
        self.limits
    }

    /// The full URL of a request to `path` with the given arguments.
    ///
    /// When `args` is empty the URL has no query string at all, not even a lone `?`.
    pub fn endpoint_url(&self, path: &str, args: &QueryArgs) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        if !args.is_empty() {
            url.query_pairs_mut().extend_pairs(args.iter());
        }
        Ok(url)
    }

    /// Send a GET request to `path`, relative to the base URL, and parse its body as JSON.
    ///
    /// The rate limits returned by [`Client::limits`] are updated from the response headers
    /// before the body is looked at.
    ///
    /// ```no_run
    /// # use pexels::{client::Client, query::QueryArgs};
    /// # #[tokio::main]
    /// # async fn main() -> pexels::error::Result<()> {
    /// let mut client = Client::new("my-api-key")?;
    /// let response = client
    ///     .request("curated", &QueryArgs::new().arg("per_page", 1))
    ///     .await?;
    ///
    /// println!("{}: {}", response.status, response.body);
    /// # Ok(()) }
    /// ```
    pub async fn request(&mut self, path: &str, args: &QueryArgs) -> Result<Response> {
        let url = self.endpoint_url(path, args)?;
        log::debug!("GET {}", url);

        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                // nothing came back, so nothing is known about the quota either
                self.limits = Some(RateLimits::default());
                log::error!("pexels: couldn't send request to {}: {}", path, e);
                return Err(e.into());
            }
        };

        let status = response.status();
        self.limits = Some(RateLimits::from_headers(response.headers()));

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::error!("pexels: couldn't read response from {}: {}", path, e);
                return Err(e.into());
            }
        };

        match serde_json::from_str(&body) {
            Ok(body) => Ok(Response { status, body }),
            Err(source) => {
                log::error!("pexels: failed response from {} (HTTP {})", path, status);
                Err(Error::MalformedResponse { status, source })
            }
        }
    }
}
