//! Navigation stack.
//!
//! The stack is the only shared mutable resource in the application and
//! it has exactly one owner: the app router. Screens request pushes by
//! returning a [`ScreenAction`](crate::screens::ScreenAction); they
//! never hold a reference to the stack or its contents.

use crate::screens::{Screen, ScreenId};
use tracing::debug;

/// One entry on the navigation stack.
pub struct StackEntry {
    /// Identifier of the screen held by this entry.
    pub id: ScreenId,
    /// The screen instance itself.
    pub screen: Box<dyn Screen>,
}

/// Ordered sequence of screens the user can traverse backward through.
///
/// Depth is unbounded by design: pushing the same screen id repeatedly
/// adds a fresh entry every time.
#[derive(Default)]
pub struct NavStack {
    entries: Vec<StackEntry>,
}

impl NavStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a screen onto the stack, making it the current screen.
    pub fn push(&mut self, id: ScreenId, screen: Box<dyn Screen>) {
        self.entries.push(StackEntry { id, screen });
        debug!(screen = %id, depth = self.entries.len(), "pushed screen");
    }

    /// Pop the current screen, returning to the one beneath it.
    pub fn pop(&mut self) -> Option<StackEntry> {
        let entry = self.entries.pop();
        if let Some(ref e) = entry {
            debug!(screen = %e.id, depth = self.entries.len(), "popped screen");
        }
        entry
    }

    /// Number of screens currently on the stack.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// The current (topmost) entry, if any.
    pub fn current(&self) -> Option<&StackEntry> {
        self.entries.last()
    }

    /// Mutable access to the current entry, for event routing and
    /// rendering.
    pub fn current_mut(&mut self) -> Option<&mut StackEntry> {
        self.entries.last_mut()
    }

    /// Identifier of the current screen, if any.
    pub fn current_id(&self) -> Option<ScreenId> {
        self.entries.last().map(|e| e.id)
    }

    /// All entries, bottom first.
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::build;

    #[test]
    fn push_makes_screen_current() {
        let mut stack = NavStack::new();
        stack.push(ScreenId::A, build(ScreenId::A));
        stack.push(ScreenId::B, build(ScreenId::B));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current_id(), Some(ScreenId::B));
    }

    #[test]
    fn pop_is_lifo() {
        let mut stack = NavStack::new();
        stack.push(ScreenId::A, build(ScreenId::A));
        stack.push(ScreenId::C, build(ScreenId::C));
        assert_eq!(stack.pop().map(|e| e.id), Some(ScreenId::C));
        assert_eq!(stack.pop().map(|e| e.id), Some(ScreenId::A));
        assert!(stack.pop().is_none());
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn repeated_pushes_are_never_deduplicated() {
        let mut stack = NavStack::new();
        for _ in 0..100 {
            stack.push(ScreenId::C, build(ScreenId::C));
        }
        assert_eq!(stack.depth(), 100);
        assert!(stack.entries().iter().all(|e| e.id == ScreenId::C));
    }
}
