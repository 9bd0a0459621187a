pub mod client;
pub mod types;

pub use client::{HttpRoastBackend, RoastBackend, DEFAULT_ENDPOINT};
pub use types::{RoastError, RoastRequest, RoastResponse};
