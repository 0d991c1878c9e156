use iced::window;

use super::errors::ChromeError;

/// Host window binding as seen by the chrome widget.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(super) enum HostWindow {
    #[default]
    Pending,
    Attached(window::Id),
    Unavailable,
}

/// Chrome window control state.
#[derive(Debug, Default)]
pub(super) struct ChromeState {
    host: HostWindow,
}

impl ChromeState {
    #[cfg(test)]
    pub(super) fn host(&self) -> HostWindow {
        self.host
    }

    pub(super) fn attach(&mut self, id: window::Id) {
        self.host = HostWindow::Attached(id);
    }

    pub(super) fn mark_unavailable(&mut self) {
        self.host = HostWindow::Unavailable;
    }

    pub(super) fn controls_enabled(&self) -> bool {
        matches!(self.host, HostWindow::Attached(_))
    }

    /// Return the attached window or the error describing `action`.
    pub(super) fn window_for(
        &self,
        action: &'static str,
    ) -> Result<Option<window::Id>, ChromeError> {
        match self.host {
            HostWindow::Attached(id) => Ok(Some(id)),
            HostWindow::Unavailable => {
                log::debug!("window controls disabled, {action} ignored");
                Ok(None)
            },
            HostWindow::Pending => {
                Err(ChromeError::WindowUnavailable { action })
            },
        }
    }
}
