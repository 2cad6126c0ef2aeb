//! Wrapper crate for the [Pexels](https://www.pexels.com/api/) photo API.
//!
//! ## Usage
//!
//! First, create a [`Client`] with your API key. The key is sent as is in the `Authorization`
//! header of every request.
//!
//! ```no_run
//! # use pexels::client::Client;
//! # fn main() -> Result<(), pexels::error::Error> {
//! let client = Client::new("my-api-key")?;
//! # Ok(()) }
//! ```
//!
//! Now it's ready to go! For example you can search for photos of cats like this:
//!
//! ```no_run
//! # use pexels::{client::Client, query::QueryArgs};
//! # #[tokio::main]
//! # async fn main() -> Result<(), pexels::error::Error> {
//! # let mut client = Client::new("my-api-key")?;
//! let result = client.search("cats", QueryArgs::new()).await?;
//!
//! for photo in result.photos {
//!     println!("#{:?} by {:?}", photo.id, photo.photographer);
//! }
//! # Ok(()) }
//! ```
//!
//! Results are paginated. The page and the number of photos per page sent with each request are
//! stored in the client and can be changed with [`Client::set_page`] and
//! [`Client::set_photos_per_page`], or overridden for a single call through its [`QueryArgs`].
//!
//! ## Rate Limiting
//!
//! The API reports how many requests are left in the current period with each response. The
//! client keeps the values sent with the last response, available through [`Client::limits`]:
//!
//! ```no_run
//! # use pexels::{client::Client, query::QueryArgs};
//! # #[tokio::main]
//! # async fn main() -> Result<(), pexels::error::Error> {
//! # let mut client = Client::new("my-api-key")?;
//! client.popular(QueryArgs::new()).await?;
//!
//! if let Some(limits) = client.limits() {
//!     println!("{:?} requests left until {:?}", limits.remaining, limits.reset_at());
//! }
//! # Ok(()) }
//! ```
//!
//! `pexels` doesn't enforce these limits itself, nor does it retry failed requests.
//!
//! [`Client`]: client/struct.Client.html
//! [`Client::set_page`]: client/struct.Client.html#method.set_page
//! [`Client::set_photos_per_page`]: client/struct.Client.html#method.set_photos_per_page
//! [`Client::limits`]: client/struct.Client.html#method.limits
//! [`QueryArgs`]: query/struct.QueryArgs.html

/// Client related structures.
pub mod client;

/// Error management.
pub mod error;

/// Photo search.
pub mod photo;

/// Query string arguments.
pub mod query;
