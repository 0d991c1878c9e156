use iced::Task;

use super::flow;
use crate::app::{App, AppEvent};
use crate::widgets::status_bar::{StatusBarEffect, StatusBarEvent};

/// Route a status bar event through the widget reducer and map effects.
pub(crate) fn route(app: &mut App, event: StatusBarEvent) -> Task<AppEvent> {
    match event {
        StatusBarEvent::Intent(intent) => {
            app.widgets.status_bar.reduce(intent).map(AppEvent::StatusBar)
        },
        StatusBarEvent::Effect(StatusBarEffect::TreeViewToggleRequested) => {
            flow::tree_view::toggle_tree_view(app)
        },
    }
}
