//! Screen controllers for the application.
//!
//! Each screen controller owns its state and handles both rendering and
//! events. Screens never touch the navigation stack directly; event
//! handlers return a [`ScreenAction`] and the app router applies it.
//!
//! # Screen graph
//!
//! ```text
//!        "B" button          (only button)
//! ┌───┐ ──────────────▶ ┌───┐
//! │ A │                 │ B │
//! └───┘ ◀────────────── └───┘
//!   │
//!   │ "C" button
//!   ▼
//! ┌───┐ ──┐
//! │ C │   │ (only button: pushes a *fresh* C)
//! └───┘ ◀─┘
//! ```
//!
//! The initial screen is A. There is no terminal screen: every screen
//! has at least one outbound transition, and C's self-transition grows
//! the stack without bound under repeated activation.

pub mod screen_a;
pub mod screen_b;
pub mod screen_c;
pub mod screen_trait;

pub use screen_a::ScreenA;
pub use screen_b::ScreenB;
pub use screen_c::ScreenC;
pub use screen_trait::{Screen, ScreenAction};

use serde::Serialize;
use std::fmt;

/// Closed set of screen identifiers.
///
/// The set is fixed at compile time, so "unknown screen" is not a
/// runtime condition: every transition site matches exhaustively and
/// [`build`] is total over this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScreenId {
    A,
    B,
    C,
}

impl ScreenId {
    /// Title shown in the screen header.
    pub fn title(self) -> &'static str {
        match self {
            Self::A => "Screen A",
            Self::B => "Screen B",
            Self::C => "Screen C",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

/// Screen factory: instantiate a fresh, navigable screen for an id.
///
/// Every call returns a new instance, including repeated calls for the
/// same id. This is what makes C's self-loop push distinct screens.
pub fn build(id: ScreenId) -> Box<dyn Screen> {
    match id {
        ScreenId::A => Box::new(ScreenA::new()),
        ScreenId::B => Box::new(ScreenB::new()),
        ScreenId::C => Box::new(ScreenC::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_is_total_over_screen_ids() {
        for id in [ScreenId::A, ScreenId::B, ScreenId::C] {
            // Must not panic for any known id.
            let _screen = build(id);
        }
    }

    #[test]
    fn screen_ids_display_as_single_letters() {
        assert_eq!(ScreenId::A.to_string(), "A");
        assert_eq!(ScreenId::B.to_string(), "B");
        assert_eq!(ScreenId::C.to_string(), "C");
    }

    #[test]
    fn screen_id_serializes_as_variant_name() {
        assert_eq!(serde_json::to_string(&ScreenId::C).unwrap(), "\"C\"");
    }
}
