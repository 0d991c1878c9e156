use super::model::{StatusItem, StatusItemId, StatusRegion};

/// Runtime state of both status regions and the tree toggle slot.
#[derive(Debug, Default)]
pub(super) struct StatusBarState {
    left: Vec<StatusItem>,
    right: Vec<StatusItem>,
    tree_toggle: Option<TreeToggleState>,
    next_item_id: u64,
}

#[derive(Debug, Clone, Copy)]
struct TreeToggleState {
    active: bool,
}

impl StatusBarState {
    pub(super) fn items(&self, region: StatusRegion) -> &[StatusItem] {
        match region {
            StatusRegion::Left => &self.left,
            StatusRegion::Right => &self.right,
        }
    }

    pub(super) fn push_item(
        &mut self,
        region: StatusRegion,
        label: String,
        icon: Option<String>,
    ) -> StatusItemId {
        let item =
            StatusItem::new(StatusItemId::new(self.next_item_id), label, icon);
        self.next_item_id += 1;

        let id = item.id();
        self.items_mut(region).push(item);
        id
    }

    pub(super) fn clear(&mut self, region: StatusRegion) {
        self.items_mut(region).clear();
    }

    pub(super) fn has_tree_toggle(&self) -> bool {
        self.tree_toggle.is_some()
    }

    pub(super) fn tree_toggle_active(&self) -> Option<bool> {
        self.tree_toggle.map(|toggle| toggle.active)
    }

    pub(super) fn install_tree_toggle(&mut self, open: bool) {
        self.tree_toggle = Some(TreeToggleState { active: open });
    }

    /// Mirror tree visibility; returns `false` when no toggle is installed.
    pub(super) fn sync_tree_toggle(&mut self, open: bool) -> bool {
        match self.tree_toggle.as_mut() {
            Some(toggle) => {
                toggle.active = open;
                true
            },
            None => false,
        }
    }

    fn items_mut(&mut self, region: StatusRegion) -> &mut Vec<StatusItem> {
        match region {
            StatusRegion::Left => &mut self.left,
            StatusRegion::Right => &mut self.right,
        }
    }
}
