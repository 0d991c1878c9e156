mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{
    StatusBarEffect, StatusBarEvent, StatusBarIntent,
};
pub(crate) use self::model::{
    StatusBarViewModel, StatusItemId, StatusRegion, TreeToggleViewModel,
};
use self::state::StatusBarState;

/// Status bar widget owning the left/right regions and the tree toggle.
pub(crate) struct StatusBarWidget {
    state: StatusBarState,
}

impl StatusBarWidget {
    /// Create an empty status bar.
    pub(crate) fn new() -> Self {
        Self {
            state: StatusBarState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: StatusBarIntent,
    ) -> Task<StatusBarEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Append a labelled item to `region` and return its handle.
    pub(crate) fn push_item(
        &mut self,
        region: StatusRegion,
        label: impl Into<String>,
        icon: Option<&str>,
    ) -> StatusItemId {
        self.state
            .push_item(region, label.into(), icon.map(str::to_owned))
    }

    /// Detach every item of `region`.
    pub(crate) fn clear(&mut self, region: StatusRegion) {
        self.state.clear(region);
    }

    /// Return the items of `region` in append order.
    #[cfg(test)]
    pub(crate) fn items(
        &self,
        region: StatusRegion,
    ) -> &[model::StatusItem] {
        self.state.items(region)
    }

    /// Return the toggle's active flag, or `None` before installation.
    #[cfg(test)]
    pub(crate) fn tree_toggle_active(&self) -> Option<bool> {
        self.state.tree_toggle_active()
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> StatusBarViewModel<'_> {
        StatusBarViewModel {
            tree_toggle: self
                .state
                .tree_toggle_active()
                .map(|active| TreeToggleViewModel { active }),
            left: self.state.items(StatusRegion::Left),
            right: self.state.items(StatusRegion::Right),
        }
    }
}
