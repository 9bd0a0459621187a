//! # Mode Menu Component
//!
//! The roast mode selector: a one-line button showing the current mode and,
//! when open, a dropdown listing all modes under it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ModeMenuState` lives in `TuiState` (keyboard highlight)
//! - `ModeMenu` is created each frame with borrowed state and props
//!
//! Whether the dropdown is open and which mode is selected are core state;
//! this component only tracks which row the keyboard highlight is on.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, List, ListItem, ListState};
use unicode_width::UnicodeWidthStr;

use crate::core::mode::RoastMode;
use crate::tui::event::TuiEvent;

const CAPTION: &str = "Choose roast mode";
const DROPDOWN_WIDTH: u16 = 24;
const SELECTED_MARKER: &str = "▌";

/// Persistent state for the dropdown's keyboard highlight.
#[derive(Default)]
pub struct ModeMenuState {
    pub list_state: ListState,
}

impl ModeMenuState {
    /// Start highlighting the currently selected mode (called when opening).
    pub fn open_at(&mut self, current: RoastMode) {
        self.list_state.select(Some(current.index()));
    }

    pub fn highlighted(&self) -> RoastMode {
        let index = self.list_state.selected().unwrap_or(0);
        RoastMode::ALL[index.min(RoastMode::ALL.len() - 1)]
    }

    /// Handle a key event while the dropdown is open.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<ModeMenuEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::ToggleModes => Some(ModeMenuEvent::Dismiss),
            TuiEvent::CursorUp => {
                let index = self.highlighted().index().saturating_sub(1);
                self.list_state.select(Some(index));
                None
            }
            TuiEvent::CursorDown => {
                let index = (self.highlighted().index() + 1).min(RoastMode::ALL.len() - 1);
                self.list_state.select(Some(index));
                None
            }
            TuiEvent::Submit => Some(ModeMenuEvent::Select(self.highlighted())),
            _ => None,
        }
    }
}

/// Events emitted by the open dropdown.
#[derive(Debug, PartialEq, Eq)]
pub enum ModeMenuEvent {
    Select(RoastMode),
    Dismiss,
}

/// Every mode paired with whether it is the selected one.
pub fn options(selected: RoastMode) -> impl Iterator<Item = (RoastMode, bool)> {
    RoastMode::ALL.into_iter().map(move |m| (m, m == selected))
}

/// Transient render wrapper for the selector row and its dropdown.
pub struct ModeMenu<'a> {
    state: &'a mut ModeMenuState,
    selected: RoastMode,
    open: bool,
}

impl<'a> ModeMenu<'a> {
    pub fn new(state: &'a mut ModeMenuState, selected: RoastMode, open: bool) -> Self {
        Self {
            state,
            selected,
            open,
        }
    }

    /// Render the selector row into `row`, then the dropdown (if open) on top
    /// of whatever lies below it inside `bounds`.
    pub fn render(&mut self, frame: &mut Frame, row: Rect, bounds: Rect) {
        let button = self.render_row(frame, row);
        if self.open {
            self.render_dropdown(frame, button, bounds);
        }
    }

    fn render_row(&self, frame: &mut Frame, row: Rect) -> Rect {
        let label = format!(" {} ▾ ", self.selected.label());
        let button_width = (label.width() as u16 + 2).min(row.width);

        let [caption_area, button_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(button_width)]).areas(row);

        frame.render_widget(
            Line::from(Span::styled(CAPTION, Style::default().fg(Color::Gray))),
            Rect { y: caption_area.y + 1, height: 1, ..caption_area },
        );

        let border = if self.open { Color::Blue } else { Color::DarkGray };
        let button = Line::from(label).style(Style::default().add_modifier(Modifier::BOLD));
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        frame.render_widget(block, button_area);
        frame.render_widget(button, inner(button_area));

        button_area
    }

    fn render_dropdown(&mut self, frame: &mut Frame, button: Rect, bounds: Rect) {
        let height = (RoastMode::ALL.len() as u16 + 2).min(bounds.bottom().saturating_sub(button.bottom()));
        let width = DROPDOWN_WIDTH.min(bounds.width);
        let area = Rect {
            x: button.right().saturating_sub(width).max(bounds.x),
            y: button.bottom(),
            width,
            height,
        };
        if area.height == 0 {
            return;
        }

        // Clear underlying content
        frame.render_widget(Clear, area);

        let items: Vec<ListItem> = options(self.selected)
            .map(|(mode, is_selected)| {
                let (marker, style) = if is_selected {
                    (
                        Span::styled(SELECTED_MARKER, Style::default().fg(Color::Blue)),
                        Style::default().fg(Color::Black).bg(Color::LightBlue),
                    )
                } else {
                    (Span::raw(" "), Style::default().fg(Color::Gray))
                };
                ListItem::new(Line::from(vec![marker, Span::raw(" "), Span::raw(mode.label())]))
                    .style(style)
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
