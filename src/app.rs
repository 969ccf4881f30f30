//! App router: the navigation controller.
//!
//! Owns the navigation stack and the event sink, routes input to the
//! current screen, and applies the action the screen returns. A push
//! request is handled as a single synchronous sequence: resolve the
//! source, instantiate the target, push it, then record the event.
//! Nothing interleaves between the push and the event.

use crate::analytics::{EventSink, NavigationEvent};
use crate::navigation::NavStack;
use crate::screens::{self, ScreenAction, ScreenId};
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use std::time::Duration;
use tracing::info;

/// Main application state.
pub struct App<S: EventSink> {
    stack: NavStack,
    sink: S,
    should_quit: bool,
}

impl<S: EventSink> App<S> {
    /// Create the app with Screen A as the initial screen.
    pub fn new(sink: S) -> Self {
        let mut stack = NavStack::new();
        stack.push(ScreenId::A, screens::build(ScreenId::A));
        Self {
            stack,
            sink,
            should_quit: false,
        }
    }

    /// Run the draw/poll loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        let result = self.event_loop(&mut tui);
        tui.exit()?;
        result
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        loop {
            self.draw(tui)?;

            if self.should_quit {
                break;
            }

            // Poll for events with 250ms timeout
            if let Some(event) = tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(event)?;
            }
        }
        Ok(())
    }

    fn draw(&mut self, tui: &mut Tui) -> Result<()> {
        tui.terminal_mut().draw(|frame| {
            let area = frame.area();
            if let Some(entry) = self.stack.current_mut() {
                let _ = entry.screen.render(frame, area);
            }
        })?;
        Ok(())
    }

    /// Handle one input event.
    ///
    /// Backspace is the back-navigation key and is handled here, not by
    /// screens: pop is the stack owner's operation. Everything else is
    /// routed to the current screen.
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = &event {
            if key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Backspace | KeyCode::Esc)
            {
                self.navigate_back();
                return Ok(());
            }
        }

        let action = match self.stack.current_mut() {
            Some(entry) => entry.screen.handle_event(event)?,
            None => ScreenAction::Quit,
        };
        self.apply_action(action);
        Ok(())
    }

    /// Apply an action returned by a screen.
    fn apply_action(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Push { target, label } => {
                let Some(source) = self.stack.current_id() else {
                    return;
                };
                // Push first, then record: the two always happen
                // together and in this order.
                self.stack.push(target, screens::build(target));
                self.sink.record(NavigationEvent {
                    source,
                    target,
                    label,
                });
            }
            ScreenAction::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Pop the current screen. Popping the root ends the session.
    fn navigate_back(&mut self) {
        self.stack.pop();
        if self.stack.depth() == 0 {
            info!("root screen popped, quitting");
            self.should_quit = true;
        }
    }

    /// The navigation stack (read-only).
    pub fn stack(&self) -> &NavStack {
        &self.stack
    }

    /// Identifier of the screen currently shown.
    pub fn current_screen(&self) -> Option<ScreenId> {
        self.stack.current_id()
    }

    /// The event sink (read-only).
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Whether the app has been asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
