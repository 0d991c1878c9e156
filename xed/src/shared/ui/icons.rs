pub(crate) const LOGO_SMALL: &[u8] =
    include_bytes!("../../../assets/svg/logo.svg");
pub(crate) const WINDOW_CLOSE: &[u8] =
    include_bytes!("../../../assets/svg/window-close.svg");
pub(crate) const WINDOW_MINIMIZE: &[u8] =
    include_bytes!("../../../assets/svg/window-minimize.svg");
pub(crate) const WINDOW_MAXIMIZE: &[u8] =
    include_bytes!("../../../assets/svg/window-maximize.svg");
pub(crate) const TREE_VIEW_TOGGLE: &[u8] =
    include_bytes!("../../../assets/svg/list-tree.svg");
