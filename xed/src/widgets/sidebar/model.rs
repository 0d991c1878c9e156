/// Width of the draggable strip between the sidebar and the editor.
pub(crate) const SIDEBAR_HANDLE_WIDTH: f32 = 4.0;

/// Read-only snapshot of the sidebar for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SidebarViewModel {
    pub(crate) visible: bool,
    pub(crate) width: f32,
    pub(crate) is_resizing: bool,
}
