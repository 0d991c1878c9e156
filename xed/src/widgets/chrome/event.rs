use iced::window;

/// Intent events handled by the chrome widget.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ChromeIntent {
    /// The host window handle was resolved at startup.
    Attach(window::Id),
    /// No host window could be resolved at startup.
    HostUnavailable,
    CloseWindow,
    MinimizeWindow,
    ToggleMaximize,
    /// Answer to the maximized-state query issued by `ToggleMaximize`.
    MaximizedResolved { maximized: bool },
    StartWindowDrag,
}

/// Effect events produced by the chrome reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ChromeEffect {
    CloseWindow { id: window::Id },
    MinimizeWindow { id: window::Id },
    QueryMaximized { id: window::Id },
    Maximize { id: window::Id },
    Unmaximize { id: window::Id },
    StartWindowDrag { id: window::Id },
}

/// Chrome event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEvent {
    /// Intent event reduced by the chrome widget.
    Intent(ChromeIntent),
    /// Host window operation orchestrated by app-level routing.
    Effect(ChromeEffect),
}
