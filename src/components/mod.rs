//! Shared render components used by every screen.

pub mod footer;
pub mod header;

pub use footer::Footer;
pub use header::Header;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split an area into the standard header / content / footer chunks.
pub fn standard_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(2), // Footer
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}
