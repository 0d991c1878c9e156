pub(crate) mod chrome;
pub(crate) mod sidebar;
pub(crate) mod status_bar;
