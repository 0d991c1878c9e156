use thiserror::Error;

/// Errors raised while relaying window control clicks to the host.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ChromeError {
    #[error("cannot {action} window: host window is not resolved yet")]
    WindowUnavailable { action: &'static str },
}
