pub(crate) mod startup;
pub(crate) mod tree_view;
