use iced::Point;

/// Intent events handled by the sidebar widget.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SidebarIntent {
    /// Tree visibility changed; show or hide the panel.
    SetVisible { open: bool },
    /// Cursor position in window coordinates, used as drag baseline.
    CursorMoved { position: Point },
    /// Pointer pressed on the resize handle.
    ResizePressed,
    /// Pointer moved while a resize session is active.
    ResizeDragged { x: f32 },
    /// Pointer released anywhere in the window.
    ResizeReleased,
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SidebarEffect {
    ResizeFinished { width: f32 },
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// Notification orchestrated by app-level routing.
    Effect(SidebarEffect),
}
