//! HTTP fetcher for the remote datasets.
//!
//! Each dataset is fetched with a single GET request. The response body is
//! returned as a [`Payload`] shaped by the expected format: decoded text for
//! text and CSV datasets, a parsed JSON value for JSON datasets and raw bytes
//! for spreadsheets.
//!
//! # Example
//!
//! ```no_run
//! use datafetch_core::fetch::{HttpClient, Payload, PayloadFormat};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new();
//! let payload = client
//!     .fetch("https://example.com/data.json", PayloadFormat::Json)
//!     .await?;
//! if let Payload::Json(value) = payload {
//!     println!("{value}");
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod payload;

pub use client::HttpClient;
pub use error::FetchError;
pub use payload::{Payload, PayloadFormat};
