//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the view,
//! and translates keyboard events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resize, or a
//!   request settling.
//!
//! Requests run on tokio tasks and report back through a std mpsc channel
//! as `Action::RoastSettled`, which the loop drains between draws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::api::{HttpRoastBackend, RoastBackend, RoastRequest};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, ModeMenuEvent, ModeMenuState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    pub input_box: InputBox,
    pub mode_menu: ModeMenuState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: continuous redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Build the HTTP backend from resolved config.
pub fn build_backend(config: &ResolvedConfig) -> Arc<dyn RoastBackend> {
    Arc::new(HttpRoastBackend::new(&config.base_url, &config.endpoint))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend = build_backend(&config);
    info!("Roast backend: {}", backend.name());
    let mut app = App::new(backend, config.mode);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effect = handle_event(&mut app, &mut tui, event);
            should_quit |= apply_effect(effect, &app, &tx);
        }

        // Settled requests from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            should_quit |= apply_effect(effect, &app, &tx);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Route one terminal event through the open dropdown or the form.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Resize => return Effect::None,
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        _ => {}
    }

    // When the dropdown is open, it gets every key
    if app.mode_menu_open {
        return match tui.mode_menu.handle_event(&event) {
            Some(ModeMenuEvent::Select(mode)) => update(app, Action::SelectMode(mode)),
            Some(ModeMenuEvent::Dismiss) => update(app, Action::CloseModeMenu),
            None => Effect::None,
        };
    }

    match event {
        // Esc on the form is the "Back" link
        TuiEvent::Escape => update(app, Action::Quit),
        TuiEvent::ToggleModes => {
            tui.mode_menu.open_at(app.mode);
            update(app, Action::ToggleModeMenu)
        }
        _ => match tui.input_box.handle_event(&event) {
            Some(InputEvent::Submit(text)) => update(app, Action::Submit(text)),
            Some(InputEvent::ContentChanged) | None => Effect::None,
        },
    }
}

/// Perform the I/O an effect asks for. Returns true when the loop should exit.
fn apply_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SpawnRequest { generation, request } => {
            spawn_request(app.backend.clone(), generation, request, tx.clone());
            false
        }
    }
}

fn spawn_request(
    backend: Arc<dyn RoastBackend>,
    generation: u64,
    request: RoastRequest,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning roast request #{}", generation);
    tokio::spawn(async move {
        let result = backend.roast(&request).await;
        if let Err(e) = &result {
            warn!("Roast request #{} failed: {}", generation, e);
        }
        if tx.send(Action::RoastSettled { generation, result }).is_err() {
            warn!(
                "Failed to deliver settlement #{}: receiver dropped",
                generation
            );
        }
    });
}
