/// View model for the chrome widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChromeViewModel {
    pub(crate) controls_enabled: bool,
}
