/// Notification produced by every tree visibility mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TreeVisibilityChanged {
    pub(crate) open: bool,
}

/// Shell-wide UI state owned by the root controller.
#[derive(Debug)]
pub(crate) struct UiState {
    tree_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { tree_open: true }
    }
}

impl UiState {
    /// Return whether the tree sidebar is open.
    pub(crate) fn is_tree_open(&self) -> bool {
        self.tree_open
    }

    /// Flip the tree flag and return the change to broadcast.
    pub(crate) fn toggle_tree(&mut self) -> TreeVisibilityChanged {
        self.tree_open = !self.tree_open;
        self.snapshot()
    }

    /// Describe the current flag as a notification, used for initial sync.
    pub(crate) fn snapshot(&self) -> TreeVisibilityChanged {
        TreeVisibilityChanged {
            open: self.tree_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UiState;

    #[test]
    fn given_new_state_when_created_then_tree_is_open() {
        assert!(UiState::default().is_tree_open());
    }

    #[test]
    fn given_toggle_when_applied_then_notification_matches_new_state() {
        let mut state = UiState::default();

        let change = state.toggle_tree();
        assert!(!change.open);
        assert!(!state.is_tree_open());

        let change = state.toggle_tree();
        assert!(change.open);
        assert_eq!(change, state.snapshot());
    }
}
