//! ScreenFlow - a three-screen navigation-stack demo
//!
//! This library provides the core functionality for the demo: screen
//! controllers, a navigation stack with a single owner, and an injected
//! analytics event sink that records one named event per transition.

// Core modules
pub mod analytics;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod navigation;
pub mod screens;
pub mod styles;
pub mod tui;

// Re-exports for convenience
pub use analytics::{EventSink, NavigationEvent};
pub use app::App;
pub use config::Config;
pub use navigation::NavStack;
pub use screens::{Screen, ScreenAction, ScreenId};
