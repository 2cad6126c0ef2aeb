use reqwest::{header::InvalidHeaderValue, StatusCode};

use thiserror::Error;

/// Result type for `pexels`, using [`pexels::error::Error`].
///
/// [`pexels::error::Error`]: enum.Error.html
pub type Result<T> = ::std::result::Result<T, Error>;

/// Enum for `pexels` errors.
#[derive(Error, Debug)]
pub enum Error {
    /// The client couldn't be created. Contains a description of the error.
    #[error("Couldn't create client: {0}")]
    CannotCreateClient(String),

    /// The base URL or a path joined onto it isn't a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request couldn't be sent, or the response body couldn't be read. Contains a
    /// description of the error.
    #[error("Couldn't send request: {0}")]
    CannotSendRequest(String),

    /// The API answered with a body that isn't JSON. This is the only way a request that reached
    /// the server fails: non-2xx statuses with a JSON body are returned as regular responses.
    #[error("Malformed response (HTTP {status}): {source}")]
    MalformedResponse {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// The body is valid JSON but doesn't describe a page of photos.
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl From<InvalidHeaderValue> for Error {
    fn from(e: InvalidHeaderValue) -> Error {
        Error::CannotCreateClient(format!("Invalid header value: {}", e))
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::CannotSendRequest(format!("{}", e))
    }
}
