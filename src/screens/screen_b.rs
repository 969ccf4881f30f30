//! Screen B controller.
//!
//! Intermediate screen with a single button that pushes a fresh
//! Screen A back onto the stack (it does not pop back to the existing
//! one).

use crate::components::{standard_layout, Footer, Header};
use crate::screens::screen_trait::{Screen, ScreenAction};
use crate::screens::ScreenId;
use crate::styles::{theme, BUTTON_HIGHLIGHT_SYMBOL};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const BUTTON_TEXT: &str = "Go to Screen A";
const EVENT_LABEL: &str = "button_a_tapped_event";

/// Screen B controller.
pub struct ScreenB;

impl ScreenB {
    /// Create a fresh Screen B instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ScreenB {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ScreenB {
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let t = theme();
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(t.background_style()), area);

        let (header_chunk, content_chunk, footer_chunk) = standard_layout(area);
        Header::render(
            frame,
            header_chunk,
            ScreenId::B.title(),
            "Intermediate screen. The only button pushes a fresh Screen A.",
        )?;

        let content = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(BUTTON_HIGHLIGHT_SYMBOL, t.highlight_style()),
                Span::styled(BUTTON_TEXT, t.highlight_style()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Records ", t.muted_style()),
                Span::styled(EVENT_LABEL, Style::default().fg(t.accent)),
                Span::styled(" after the push.", t.muted_style()),
            ]),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(t.border_focused_style())
                .border_type(ratatui::widgets::BorderType::Rounded)
                .title(" Buttons ")
                .title_style(t.title_style())
                .title_alignment(Alignment::Center),
        );
        frame.render_widget(content, content_chunk);

        Footer::render(
            frame,
            footer_chunk,
            "Enter: Activate | Backspace: Back | q: Quit",
        )?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<ScreenAction> {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Enter => {
                        return Ok(ScreenAction::Push {
                            target: ScreenId::A,
                            label: EVENT_LABEL,
                        });
                    }
                    KeyCode::Char('q') => return Ok(ScreenAction::Quit),
                    _ => {}
                }
            }
        }
        Ok(ScreenAction::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn button_pushes_screen_a() {
        let mut screen = ScreenB::new();
        let action = screen.handle_event(press(KeyCode::Enter)).unwrap();
        assert_eq!(
            action,
            ScreenAction::Push {
                target: ScreenId::A,
                label: "button_a_tapped_event",
            }
        );
    }

    #[test]
    fn repeated_activations_are_not_coalesced() {
        let mut screen = ScreenB::new();
        let first = screen.handle_event(press(KeyCode::Enter)).unwrap();
        let second = screen.handle_event(press(KeyCode::Enter)).unwrap();
        assert_eq!(first, second);
        assert!(matches!(first, ScreenAction::Push { .. }));
    }
}
