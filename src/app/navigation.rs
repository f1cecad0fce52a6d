// SPDX-License-Identifier: MPL-2.0
//! Screen history.
//!
//! Screens are kept on a stack rooted at [`Screen::Welcome`]. Only the top
//! screen is shown, but every screen on the stack stays mounted. Popping a
//! screen unmounts it; the caller uses the returned screens to reset their
//! state.

use super::Screen;

/// Stack of mounted screens, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Welcome],
        }
    }

    /// The screen currently shown.
    #[must_use]
    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::Welcome)
    }

    /// Whether `screen` is mounted anywhere on the stack.
    #[must_use]
    pub fn is_mounted(&self, screen: Screen) -> bool {
        self.stack.contains(&screen)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Shows `screen` on top of the current one.
    ///
    /// Pushing the screen already on top does nothing.
    pub fn push(&mut self, screen: Screen) {
        if self.current() != screen {
            self.stack.push(screen);
        }
    }

    /// Leaves the current screen and returns it, unless it is the root.
    pub fn back(&mut self) -> Option<Screen> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    /// Shows `screen`, popping back to it when it is already mounted and
    /// pushing it otherwise. Returns the screens that were unmounted.
    pub fn navigate(&mut self, screen: Screen) -> Vec<Screen> {
        let Some(position) = self.stack.iter().rposition(|s| *s == screen) else {
            self.stack.push(screen);
            return Vec::new();
        };

        let mut popped = self.stack.split_off(position + 1);
        popped.reverse();
        popped
    }
}
