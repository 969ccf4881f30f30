//! Screen C controller.
//!
//! Terminal-looking screen whose single button re-enters itself: each
//! activation pushes a brand new Screen C instance, never a reference
//! to the current one. Repeated activations grow the stack without
//! limit; there is no de-duplication and no depth cap.

use crate::components::{standard_layout, Footer, Header};
use crate::screens::screen_trait::{Screen, ScreenAction};
use crate::screens::ScreenId;
use crate::styles::{theme, BUTTON_HIGHLIGHT_SYMBOL};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use std::sync::atomic::{AtomicU64, Ordering};

const BUTTON_TEXT: &str = "Push another Screen C";
const EVENT_LABEL: &str = "button_c_tapped_event";

/// Monotonic counter so each instance is visibly distinct on screen.
static INSTANCES: AtomicU64 = AtomicU64::new(0);

/// Screen C controller.
pub struct ScreenC {
    generation: u64,
}

impl ScreenC {
    /// Create a fresh Screen C instance with its own generation number.
    pub fn new() -> Self {
        Self {
            generation: INSTANCES.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Instance number of this particular Screen C.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for ScreenC {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ScreenC {
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let t = theme();
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(t.background_style()), area);

        let (header_chunk, content_chunk, footer_chunk) = standard_layout(area);
        Header::render(
            frame,
            header_chunk,
            ScreenId::C.title(),
            "Self-looping screen. The only button pushes a brand new Screen C.",
        )?;

        let content = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(BUTTON_HIGHLIGHT_SYMBOL, t.highlight_style()),
                Span::styled(BUTTON_TEXT, t.highlight_style()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Instance #", t.muted_style()),
                Span::styled(self.generation.to_string(), Style::default().fg(t.accent)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Records ", t.muted_style()),
                Span::styled(EVENT_LABEL, Style::default().fg(t.accent)),
                Span::styled(" after the push.", t.muted_style()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "The stack grows without limit here; only Backspace unwinds it.",
                Style::default().fg(t.warning),
            )),
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
                            target: ScreenId::C,
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
