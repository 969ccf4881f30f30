//! Screen trait and associated types.
//!
//! Screens own their state and handle both rendering and events in a
//! self-contained way. Event handling returns an action instead of
//! mutating the navigation stack, so the stack stays exclusively owned
//! by the app router.

use crate::screens::ScreenId;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Push a fresh instance of the target screen and record an
    /// analytics event with the given label.
    ///
    /// The label is a fixed token decided at the button site, not
    /// derived at runtime.
    Push {
        target: ScreenId,
        label: &'static str,
    },
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
///
/// Handlers run synchronously on the event loop thread: they never
/// block, suspend, or spawn work. One input event maps to at most one
/// returned action.
pub trait Screen {
    /// Render the screen into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;

    /// Handle an input event and return the resulting action.
    fn handle_event(&mut self, event: Event) -> Result<ScreenAction>;
}
