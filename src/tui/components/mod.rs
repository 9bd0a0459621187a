//! # TUI Components
//!
//! All UI pieces of the roast view.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive everything they draw as fields or parameters:
//! - `Header`: title and tagline
//! - `SubmitBar`: key hints and the submit control
//! - `ResultPanel`: the roast or the error, never both
//!
//! ### Stateful Components (Event-Driven)
//!
//! Keep local state and emit high-level events:
//! - `InputBox`: the text area with its character counter
//! - `ModeMenu`: the mode selector button and dropdown
//!
//! Components receive external data as props rather than reading `App`
//! directly, so each can be rendered in isolation against a `TestBackend`.

pub mod header;
pub mod input_box;
pub mod mode_menu;
pub mod result_panel;
pub mod submit_bar;

pub use header::Header;
pub use input_box::{InputBox, InputEvent};
pub use mode_menu::{ModeMenu, ModeMenuEvent, ModeMenuState};
pub use result_panel::{Outcome, ResultPanel};
pub use submit_bar::SubmitBar;
