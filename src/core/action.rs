//! # Actions
//!
//! Everything that can happen in the roast view becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! Backend answers? That's `Action::RoastSettled { .. }`.
//!
//! `update()` mutates the state and returns an `Effect` describing the I/O
//! the adapter should perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::api::types::VALIDATION_MESSAGE;
use crate::api::{RoastError, RoastRequest, RoastResponse};
use crate::core::mode::RoastMode;
use crate::core::state::{App, RequestState};

#[derive(Debug)]
pub enum Action {
    /// Submit control pressed with the current input text (untrimmed).
    Submit(String),
    /// The request stamped with `generation` finished.
    RoastSettled {
        generation: u64,
        result: Result<RoastResponse, RoastError>,
    },
    /// Mode selector button pressed.
    ToggleModeMenu,
    /// Dropdown dismissed without choosing.
    CloseModeMenu,
    /// Option chosen in the dropdown.
    SelectMode(RoastMode),
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send this request; report back with the same generation.
    SpawnRequest { generation: u64, request: RoastRequest },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            if app.is_loading() {
                debug!("Submit ignored: request already in flight");
                return Effect::None;
            }

            let Some(request) = RoastRequest::from_input(&text, app.mode) else {
                info!("Submit blocked: input is blank");
                app.request = RequestState::Failure(VALIDATION_MESSAGE.to_string());
                return Effect::None;
            };

            app.generation += 1;
            let generation = app.generation;
            app.request = RequestState::Loading { generation };
            info!(
                "Submitting roast request #{} (mode={})",
                generation,
                request.mode.id()
            );
            Effect::SpawnRequest { generation, request }
        }
        Action::RoastSettled { generation, result } => {
            if app.request != (RequestState::Loading { generation }) {
                debug!(
                    "Discarding stale settlement #{} (current: {:?})",
                    generation, app.request
                );
                return Effect::None;
            }

            app.request = match result {
                Ok(response) => {
                    info!("Roast request #{} succeeded", generation);
                    RequestState::Success(response.into_display_text())
                }
                Err(e) => {
                    info!("Roast request #{} failed: {}", generation, e);
                    RequestState::Failure(e.user_message())
                }
            };
            Effect::None
        }
        Action::ToggleModeMenu => {
            app.mode_menu_open = !app.mode_menu_open;
            Effect::None
        }
        Action::CloseModeMenu => {
            app.mode_menu_open = false;
            Effect::None
        }
        Action::SelectMode(mode) => {
            app.mode = mode;
            app.mode_menu_open = false;
            debug!("Mode selected: {}", mode.id());
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
