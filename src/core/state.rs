//! # Application State
//!
//! Everything the roast view knows, in one struct. No TUI types here;
//! presentation-only state (cursor, dropdown highlight) lives in `tui`.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn RoastBackend>  // where requests go
//! ├── mode: RoastMode                 // selected tone, always one of five
//! ├── mode_menu_open: bool            // dropdown expanded?
//! ├── request: RequestState           // idle / loading / success / failure
//! └── generation: u64                 // id of the latest submission
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::RoastBackend;
use crate::core::mode::RoastMode;

/// Maximum input length, counted in characters.
pub const MAX_INPUT_CHARS: usize = 300;

/// Lifecycle of the most recent submission. Exactly one is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    /// Waiting on the request stamped with this generation.
    Loading { generation: u64 },
    /// Roast text ready to display.
    Success(String),
    /// Error text ready to display (validation, server or transport).
    Failure(String),
}

pub struct App {
    pub backend: Arc<dyn RoastBackend>,
    pub mode: RoastMode,
    pub mode_menu_open: bool,
    pub request: RequestState,
    pub generation: u64,
}

impl App {
    pub fn new(backend: Arc<dyn RoastBackend>, mode: RoastMode) -> Self {
        Self {
            backend,
            mode,
            mode_menu_open: false,
            request: RequestState::Idle,
            generation: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.request, RequestState::Loading { .. })
    }

    /// Roast to show, if the last submission succeeded.
    pub fn roast(&self) -> Option<&str> {
        match &self.request {
            RequestState::Success(text) => Some(text),
            _ => None,
        }
    }

    /// Error to show, if the last submission failed.
    pub fn error(&self) -> Option<&str> {
        match &self.request {
            RequestState::Failure(msg) => Some(msg),
            _ => None,
        }
    }

    /// Whether the submit control should accept a press for `input`.
    pub fn can_submit(&self, input: &str) -> bool {
        !self.is_loading() && !input.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.mode, RoastMode::Roast2);
        assert!(!app.mode_menu_open);
        assert_eq!(app.request, RequestState::Idle);
        assert_eq!(app.generation, 0);
        assert!(!app.is_loading());
    }

    #[test]
    fn test_roast_and_error_are_exclusive() {
        let mut app = test_app();

        app.request = RequestState::Success("Bold choice.".to_string());
        assert_eq!(app.roast(), Some("Bold choice."));
        assert_eq!(app.error(), None);

        app.request = RequestState::Failure("rate limited".to_string());
        assert_eq!(app.roast(), None);
        assert_eq!(app.error(), Some("rate limited"));
    }

    #[test]
    fn test_can_submit() {
        let mut app = test_app();
        assert!(app.can_submit("hello"));
        assert!(!app.can_submit("   "));

        app.request = RequestState::Loading { generation: 1 };
        assert!(!app.can_submit("hello"));
    }
}
