pub(crate) mod resize_handle;
pub(crate) mod sidebar_panel;
