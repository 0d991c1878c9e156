pub(crate) mod status_bar;
