/// Intent events handled by the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StatusBarIntent {
    /// Build the tree-view toggle and sync it with the current state.
    InstallTreeToggle { open: bool },
    /// The tree-view toggle was clicked.
    ToggleTreeView,
    /// Tree visibility changed; mirror it on the toggle.
    SyncTreeToggle { open: bool },
}

/// Effect events produced by the status bar reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StatusBarEffect {
    TreeViewToggleRequested,
}

/// Status bar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum StatusBarEvent {
    Intent(StatusBarIntent),
    Effect(StatusBarEffect),
}
