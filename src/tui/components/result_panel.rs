//! # Result Panel
//!
//! Shows whichever outcome the last submission produced: the roast, the
//! error, or nothing. Never both; the caller passes one `Outcome`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    Empty,
    Roast(&'a str),
    Error(&'a str),
}

pub struct ResultPanel<'a> {
    pub outcome: Outcome<'a>,
}

impl<'a> ResultPanel<'a> {
    pub fn new(outcome: Outcome<'a>) -> Self {
        Self { outcome }
    }

    fn paragraph(&self) -> Option<Paragraph<'a>> {
        match self.outcome {
            Outcome::Empty => None,
            Outcome::Error(msg) => Some(
                Paragraph::new(msg)
                    .style(Style::default().fg(Color::LightRed))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::bordered()
                            .border_type(BorderType::Rounded)
                            .border_style(Style::default().fg(Color::Red))
                            .padding(Padding::horizontal(1)),
                    ),
            ),
            Outcome::Roast(text) => {
                // whitespace-pre-line: keep the backend's line breaks
                let lines: Vec<Line> = text.lines().map(Line::from).collect();
                let title = Span::styled(
                    " Your Roast ",
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                );
                Some(
                    Paragraph::new(lines)
                        .style(Style::default().fg(Color::White))
                        .wrap(Wrap { trim: true })
                        .block(
                            Block::new()
                                .borders(Borders::LEFT | Borders::TOP)
                                .border_type(BorderType::Thick)
                                .border_style(Style::default().fg(Color::LightRed))
                                .title(title)
                                .padding(Padding::horizontal(1)),
                        ),
                )
            }
        }
    }

    /// Rows needed to show the whole outcome at `width`.
    pub fn required_height(&self, width: u16) -> u16 {
        self.paragraph()
            .map(|p| p.line_count(width) as u16)
            .unwrap_or(0)
    }
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(paragraph) = self.paragraph() else {
            return;
        };
        let height = self.required_height(area.width).min(area.height);
        frame.render_widget(paragraph, Rect { height, ..area });
    }
}
