/// Fixed height of the status bar strip.
pub(crate) const STATUS_BAR_HEIGHT: f32 = 24.0;

/// One of the two ordered item slots of the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusRegion {
    Left,
    Right,
}

/// Handle to an item appended to the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct StatusItemId(u64);

impl StatusItemId {
    pub(super) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// A labelled status entry with an optional icon glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusItem {
    id: StatusItemId,
    icon: Option<String>,
    label: String,
}

impl StatusItem {
    pub(super) fn new(
        id: StatusItemId,
        label: String,
        icon: Option<String>,
    ) -> Self {
        Self { id, icon, label }
    }

    pub(crate) fn id(&self) -> StatusItemId {
        self.id
    }

    pub(crate) fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub(crate) fn label(&self) -> &str {
        &self.label
    }
}

/// Visual state of the tree-view toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TreeToggleViewModel {
    pub(crate) active: bool,
}

/// Read-only snapshot of the status bar for rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatusBarViewModel<'a> {
    pub(crate) tree_toggle: Option<TreeToggleViewModel>,
    pub(crate) left: &'a [StatusItem],
    pub(crate) right: &'a [StatusItem],
}
