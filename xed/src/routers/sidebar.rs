use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{SidebarEffect, SidebarEvent};

/// Route a sidebar event through the widget reducer and map effects.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(intent) => {
            app.widgets.sidebar.reduce(intent).map(AppEvent::Sidebar)
        },
        SidebarEvent::Effect(SidebarEffect::ResizeFinished { width }) => {
            log::debug!("sidebar resized to {width}");
            Task::none()
        },
    }
}
