mod event;
mod model;
mod reducer;
mod resize;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{SidebarEffect, SidebarEvent, SidebarIntent};
pub(crate) use self::model::SidebarViewModel;
use self::state::SidebarState;
use crate::settings::SidebarSettings;

/// Tree sidebar widget: panel visibility plus the drag resizer.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    /// Construct the sidebar from the configured layout.
    pub(crate) fn new(settings: SidebarSettings) -> Self {
        Self {
            state: SidebarState::new(settings),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarIntent,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Return whether a resize session is in progress.
    pub(crate) fn is_resizing(&self) -> bool {
        self.state.is_resizing()
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidebarViewModel {
        SidebarViewModel {
            visible: self.state.is_visible(),
            width: self.state.width(),
            is_resizing: self.state.is_resizing(),
        }
    }
}
