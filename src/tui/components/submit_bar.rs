//! # SubmitBar Component
//!
//! The row under the input box: key hints on the left, the submit control on
//! the right. The control reads `Roasting...` while a request is in flight
//! and is drawn disabled whenever a press would not send anything.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub const SUBMIT_LABEL: &str = "Roast Me!";
pub const LOADING_LABEL: &str = "Roasting...";

pub struct SubmitBar {
    /// A request is in flight (Prop)
    pub loading: bool,
    /// Submit would currently do something (Prop)
    pub enabled: bool,
    /// Loading animation frame (Prop)
    pub spinner_frame: usize,
}

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

impl SubmitBar {
    pub fn new(loading: bool, enabled: bool, spinner_frame: usize) -> Self {
        Self {
            loading,
            enabled,
            spinner_frame,
        }
    }

    fn button_text(&self) -> String {
        if self.loading {
            let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
            format!(" {glyph} {LOADING_LABEL} ")
        } else {
            format!(" {SUBMIT_LABEL} ")
        }
    }
}

impl Component for SubmitBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let button = self.button_text();
        let button_width = Line::from(button.as_str()).width() as u16;

        let [hints_area, button_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(button_width)]).areas(area);

        let key = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);
        let hints = Line::from(vec![
            Span::styled("Enter", key),
            Span::styled(" roast  ", dim),
            Span::styled("Tab", key),
            Span::styled(" mode  ", dim),
            Span::styled("Esc", key),
            Span::styled(" back", dim),
        ]);
        frame.render_widget(hints, hints_area);

        let style = if self.enabled {
            Style::default()
                .fg(Color::White)
                .bg(Color::LightRed)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        };
        frame.render_widget(Line::from(Span::styled(button, style)), button_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(bar: &mut SubmitBar) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_idle_label() {
        let buffer = render(&mut SubmitBar::new(false, true, 0));
        assert!(text(&buffer).contains(SUBMIT_LABEL));
        assert!(!text(&buffer).contains(LOADING_LABEL));
    }

    #[test]
    fn test_loading_label() {
        let buffer = render(&mut SubmitBar::new(true, false, 3));
        assert!(text(&buffer).contains(LOADING_LABEL));
        assert!(!text(&buffer).contains(SUBMIT_LABEL));
    }

    #[test]
    fn test_disabled_button_is_grey() {
        let buffer = render(&mut SubmitBar::new(false, false, 0));
        // Last cell belongs to the button
        let cell = &buffer[(59, 0)];
        assert_eq!(cell.bg, Color::DarkGray);

        let buffer = render(&mut SubmitBar::new(false, true, 0));
        assert_eq!(buffer[(59, 0)].bg, Color::LightRed);
    }
}
