//! Screen A controller.
//!
//! The entry/hub screen. It has two buttons: one pushes Screen B, the
//! other pushes Screen C. Each activation produces exactly one push
//! request paired with one fixed event label.

use crate::components::{standard_layout, Footer, Header};
use crate::screens::screen_trait::{Screen, ScreenAction};
use crate::screens::ScreenId;
use crate::styles::{theme, BUTTON_HIGHLIGHT_SYMBOL};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

/// Buttons on this screen, in display order: (target, text, event label)
const BUTTONS: [(ScreenId, &str, &'static str); 2] = [
    (ScreenId::B, "Go to Screen B", "button_b_tapped_event"),
    (ScreenId::C, "Go to Screen C", "button_c_tapped_event"),
];

/// Screen A controller.
pub struct ScreenA {
    selected: usize,
    list_state: ListState,
}

impl ScreenA {
    /// Create a fresh Screen A instance.
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    fn move_up(&mut self) {
        self.selected = if self.selected == 0 {
            BUTTONS.len() - 1
        } else {
            self.selected - 1
        };
        self.list_state.select(Some(self.selected));
    }

    fn move_down(&mut self) {
        self.selected = (self.selected + 1) % BUTTONS.len();
        self.list_state.select(Some(self.selected));
    }

    /// Activate the currently selected button.
    fn activate(&self) -> ScreenAction {
        let (target, _, label) = BUTTONS[self.selected];
        ScreenAction::Push { target, label }
    }
}

impl Default for ScreenA {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ScreenA {
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let t = theme();
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(t.background_style()), area);

        let (header_chunk, content_chunk, footer_chunk) = standard_layout(area);
        Header::render(
            frame,
            header_chunk,
            ScreenId::A.title(),
            "Hub screen. Pick a destination; each selection pushes a fresh screen and records one event.",
        )?;

        let content_split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(content_chunk);

        let items: Vec<ListItem> = BUTTONS
            .iter()
            .map(|(_, text, _)| ListItem::new(Line::from(Span::styled(*text, t.text_style()))))
            .collect();
        let buttons = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(t.border_focused_style())
                    .border_type(ratatui::widgets::BorderType::Rounded)
                    .title(" Buttons ")
                    .title_style(t.title_style())
                    .title_alignment(Alignment::Center),
            )
            .highlight_style(t.highlight_style())
            .highlight_symbol(BUTTON_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(buttons, content_split[0], &mut self.list_state);

        let (_, _, label) = BUTTONS[self.selected];
        let info = Paragraph::new(vec![
            Line::from(Span::styled("On activation:", t.title_style())),
            Line::from(""),
            Line::from(vec![
                Span::styled("1. push ", t.text_style()),
                Span::styled(
                    format!("Screen {}", BUTTONS[self.selected].0),
                    Style::default().fg(t.success),
                ),
            ]),
            Line::from(vec![
                Span::styled("2. record ", t.text_style()),
                Span::styled(label, Style::default().fg(t.accent)),
            ]),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(t.border))
                .border_type(ratatui::widgets::BorderType::Rounded)
                .title(" What happens ")
                .title_style(t.muted_style())
                .title_alignment(Alignment::Center),
        );
        frame.render_widget(info, content_split[1]);

        Footer::render(
            frame,
            footer_chunk,
            "↑↓: Select | Enter: Activate | Backspace: Back | q: Quit",
        )?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<ScreenAction> {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.move_up(),
                    KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.move_down(),
                    KeyCode::Enter => return Ok(self.activate()),
                    KeyCode::Char('q') => return Ok(ScreenAction::Quit),
                    _ => {}
                }
            }
        }
        Ok(ScreenAction::None)
    }
}
