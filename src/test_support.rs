//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::api::{RoastBackend, RoastError, RoastRequest, RoastResponse};
use crate::core::mode::RoastMode;

/// A backend for tests that don't need real API calls.
/// Always answers with an empty body.
pub struct NoopBackend;

#[async_trait]
impl RoastBackend for NoopBackend {
    fn name(&self) -> &str {
        "noop"
    }

    async fn roast(&self, _request: &RoastRequest) -> Result<RoastResponse, RoastError> {
        Ok(RoastResponse::default())
    }
}

/// Creates a test App with a NoopBackend and the default mode.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopBackend), RoastMode::default())
}
