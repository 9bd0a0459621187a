//! The roast backend seam.
//!
//! `RoastBackend` is what the view talks to; `HttpRoastBackend` is the real
//! implementation over reqwest. Tests swap in their own backend.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{ErrorBody, RoastError, RoastRequest, RoastResponse};

pub const DEFAULT_ENDPOINT: &str = "/api/roast";

#[async_trait]
pub trait RoastBackend: Send + Sync {
    /// Returns a short description of where roasts come from (shown in the UI).
    fn name(&self) -> &str;

    /// Sends one roast request and waits for its settlement.
    async fn roast(&self, request: &RoastRequest) -> Result<RoastResponse, RoastError>;
}

/// Backend reached over HTTP: `POST {base_url}{endpoint}` with a JSON body.
pub struct HttpRoastBackend {
    url: String,
    client: reqwest::Client,
}

impl HttpRoastBackend {
    pub fn new(base_url: &str, endpoint: &str) -> Self {
        Self {
            url: join_url(base_url, endpoint),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RoastBackend for HttpRoastBackend {
    fn name(&self) -> &str {
        &self.url
    }

    async fn roast(&self, request: &RoastRequest) -> Result<RoastResponse, RoastError> {
        info!(
            "Roast request: url={}, mode={}, input_len={}",
            self.url,
            request.mode.id(),
            request.input.chars().count()
        );

        // reqwest's .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| RoastError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Roast response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| RoastError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            warn!("Roast API error: {} - {}", status.as_u16(), body);
            return Err(RoastError::Server {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<RoastResponse>(&body).map_err(|e| {
            warn!("Malformed roast response: {} ({} bytes)", e, body.len());
            RoastError::Parse(e.to_string())
        })
    }
}

/// Joins a base URL and an endpoint path with exactly one slash between them.
fn join_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}
