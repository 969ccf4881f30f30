//! Theme and style system for ScreenFlow
//!
//! Provides consistent styling across the three screens with support
//! for light, dark, and colorless themes.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::RwLock;

/// Button selection indicator shown next to the selected button
pub const BUTTON_HIGHLIGHT_SYMBOL: &str = "» ";

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Dark,
    primary: Color::Cyan,
    accent: Color::Magenta,
    success: Color::Green,
    warning: Color::Yellow,
    text: Color::White,
    text_muted: Color::DarkGray,
    border: Color::DarkGray,
    border_focused: Color::Cyan,
    highlight_bg: Color::DarkGray,
    background: Color::Reset,
});

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap();
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap().clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,
    /// Main accent color (borders, titles, key UI elements)
    pub primary: Color,
    /// Secondary accent (event labels, counters)
    pub accent: Color,
    /// Success states
    pub success: Color,
    /// Warning states (unbounded stack notice)
    pub warning: Color,
    /// Normal text
    pub text: Color,
    /// De-emphasized text (hints, metadata)
    pub text_muted: Color,
    /// Unfocused borders
    pub border: Color,
    /// Focused borders
    pub border_focused: Color,
    /// Background for highlighted rows
    pub highlight_bg: Color,
    /// Screen background
    pub background: Color,
}

impl Theme {
    /// Build a palette for the given theme type
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self {
                theme_type,
                primary: Color::Cyan,
                accent: Color::Magenta,
                success: Color::Green,
                warning: Color::Yellow,
                text: Color::White,
                text_muted: Color::DarkGray,
                border: Color::DarkGray,
                border_focused: Color::Cyan,
                highlight_bg: Color::DarkGray,
                background: Color::Reset,
            },
            ThemeType::Light => Self {
                theme_type,
                primary: Color::Blue,
                accent: Color::Magenta,
                success: Color::Green,
                warning: Color::Rgb(180, 120, 0),
                text: Color::Black,
                text_muted: Color::Gray,
                border: Color::Gray,
                border_focused: Color::Blue,
                highlight_bg: Color::Rgb(220, 220, 220),
                background: Color::Reset,
            },
            ThemeType::NoColor => Self {
                theme_type,
                primary: Color::Reset,
                accent: Color::Reset,
                success: Color::Reset,
                warning: Color::Reset,
                text: Color::Reset,
                text_muted: Color::Reset,
                border: Color::Reset,
                border_focused: Color::Reset,
                highlight_bg: Color::Reset,
                background: Color::Reset,
            },
        }
    }

    /// Style for screen and block titles
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for de-emphasized text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for focused borders
    pub fn border_focused_style(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Style for the screen background
    pub fn background_style(&self) -> Style {
        Style::default().bg(self.background)
    }

    /// Style for the selected button row
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_type_parses_common_spellings() {
        assert_eq!(ThemeType::from_str("light").unwrap(), ThemeType::Light);
        assert_eq!(ThemeType::from_str("no-color").unwrap(), ThemeType::NoColor);
        assert_eq!(ThemeType::from_str("anything").unwrap(), ThemeType::Dark);
    }

    #[test]
    fn nocolor_theme_has_no_colors() {
        let t = Theme::new(ThemeType::NoColor);
        assert_eq!(t.primary, Color::Reset);
        assert_eq!(t.text, Color::Reset);
    }
}
