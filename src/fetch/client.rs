//! HTTP client wrapper for fetching datasets.
//!
//! This module provides the `HttpClient` struct which issues one GET per
//! dataset and decodes the body according to the expected [`PayloadFormat`].

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument};
use url::Url;

use super::error::FetchError;
use super::payload::{Payload, PayloadFormat};
use crate::user_agent;

/// HTTP client for fetching dataset bodies.
///
/// Created once per run and reused for every dataset. By default no timeout
/// is applied: an unresponsive server stalls the request until the
/// connection is closed.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a new HTTP client without timeouts.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeouts(None, None)
    }

    /// Creates a new HTTP client with optional connect and whole-request timeouts.
    ///
    /// `None` leaves the corresponding timeout disabled.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_timeouts(connect_timeout: Option<Duration>, read_timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder()
            .gzip(true)
            .user_agent(user_agent::default_fetch_user_agent());
        if let Some(timeout) = connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = read_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Fetches `url` and decodes the body as `format`.
    ///
    /// Only `200 OK` counts as success; every other status is returned as
    /// [`FetchError::HttpStatus`].
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if:
    /// - The URL is invalid
    /// - The request fails (network error, configured timeout)
    /// - The server returns any status other than 200
    /// - A JSON body does not parse
    #[instrument(skip(self), fields(url = %url, format = ?format))]
    pub async fn fetch(&self, url: &str, format: PayloadFormat) -> Result<Payload, FetchError> {
        debug!("starting fetch");

        Url::parse(url).map_err(|_| FetchError::invalid_url(url))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_transport_error(url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(status = status.as_u16(), "non-200 response");
            return Err(FetchError::http_status(url, status.as_u16()));
        }

        let payload = match format {
            PayloadFormat::Text => Payload::Text(
                response
                    .text()
                    .await
                    .map_err(|e| map_transport_error(url, e))?,
            ),
            PayloadFormat::Json => {
                let body = response
                    .bytes()
                    .await
                    .map_err(|e| map_transport_error(url, e))?;
                let value =
                    serde_json::from_slice(&body).map_err(|e| FetchError::decode(url, e))?;
                Payload::Json(value)
            }
            PayloadFormat::Bytes => Payload::Bytes(
                response
                    .bytes()
                    .await
                    .map_err(|e| map_transport_error(url, e))?
                    .to_vec(),
            ),
        };

        info!("fetch complete");
        Ok(payload)
    }
}

fn map_transport_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::timeout(url)
    } else {
        FetchError::network(url, error)
    }
}
