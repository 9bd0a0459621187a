use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Header, InputBox, ModeMenu, Outcome, ResultPanel, SubmitBar};

/// Widest the form gets; wider terminals center it.
const MAX_FORM_WIDTH: u16 = 80;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let area = centered_column(frame.area(), MAX_FORM_WIDTH);

    use Constraint::{Length, Min};
    let [header_area, _, mode_area, input_area, submit_area, _, result_area, footer_area] =
        Layout::vertical([
            Length(Header::height()),
            Length(1),
            Length(3),
            Length(InputBox::height()),
            Length(1),
            Length(1),
            Min(0),
            Length(1),
        ])
        .areas(area);

    Header.render(frame, header_area);

    tui.input_box.dimmed = app.mode_menu_open;
    tui.input_box.render(frame, input_area);

    let enabled = app.can_submit(&tui.input_box.buffer);
    SubmitBar::new(app.is_loading(), enabled, spinner_frame).render(frame, submit_area);

    ResultPanel::new(outcome(app)).render(frame, result_area);

    let footer = Line::from(Span::styled(
        format!("→ {}", app.backend.name()),
        Style::default().fg(Color::DarkGray),
    ))
    .right_aligned();
    frame.render_widget(footer, footer_area);

    // Dropdown last so it draws over the input box
    let dropdown_bounds = Rect {
        y: mode_area.y,
        height: area.bottom().saturating_sub(mode_area.y),
        ..area
    };
    ModeMenu::new(&mut tui.mode_menu, app.mode, app.mode_menu_open).render(
        frame,
        mode_area,
        dropdown_bounds,
    );
}

/// What the result panel should show for the current request state.
pub fn outcome(app: &App) -> Outcome<'_> {
    match (app.roast(), app.error()) {
        (_, Some(error)) => Outcome::Error(error),
        (Some(roast), None) => Outcome::Roast(roast),
        (None, None) => Outcome::Empty,
    }
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::RequestState;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_idle() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Get Roasted"));
        assert!(text.contains("Choose roast mode"));
        assert!(text.contains("Roast Me!"));
        assert!(text.contains("0/300"));
        assert!(!text.contains("Your Roast"));
    }

    #[test]
    fn test_draw_ui_loading() {
        let mut app = test_app();
        app.request = RequestState::Loading { generation: 1 };
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Roasting..."));
    }

    #[test]
    fn test_draw_ui_success() {
        let mut app = test_app();
        app.request = RequestState::Success("Bold choice.".to_string());
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Your Roast"));
        assert!(text.contains("Bold choice."));
    }

    #[test]
    fn test_draw_ui_failure_hides_roast() {
        let mut app = test_app();
        app.request = RequestState::Failure("rate limited".to_string());
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("rate limited"));
        assert!(!text.contains("Your Roast"));
    }

    #[test]
    fn test_draw_ui_open_menu() {
        let mut app = test_app();
        app.mode_menu_open = true;
        let mut tui = TuiState::new();
        tui.mode_menu.open_at(app.mode);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Clown Mode"));
        assert!(tui.input_box.dimmed);
    }

    #[test]
    fn test_outcome_mapping() {
        let mut app = test_app();
        assert_eq!(outcome(&app), Outcome::Empty);
        app.request = RequestState::Success("x".to_string());
        assert_eq!(outcome(&app), Outcome::Roast("x"));
        app.request = RequestState::Failure("y".to_string());
        assert_eq!(outcome(&app), Outcome::Error("y"));
    }

    #[test]
    fn test_centered_column() {
        let area = Rect::new(0, 0, 120, 10);
        assert_eq!(centered_column(area, 80), Rect::new(20, 0, 80, 10));
        let narrow = Rect::new(0, 0, 50, 10);
        assert_eq!(centered_column(narrow, 80), narrow);
    }
}
