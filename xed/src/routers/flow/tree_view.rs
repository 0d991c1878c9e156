use iced::Task;

use crate::app::{App, AppEvent};
use crate::state::TreeVisibilityChanged;
use crate::widgets::sidebar::SidebarIntent;
use crate::widgets::status_bar::StatusBarIntent;

/// Flip the tree flag and propagate it to the toggle and the sidebar.
pub(crate) fn toggle_tree_view(app: &mut App) -> Task<AppEvent> {
    let change = app.ui.toggle_tree();
    log::info!(
        "tree view state: {}",
        if change.open { "open" } else { "closed" }
    );

    broadcast(app, change)
}

/// Apply a tree visibility change to every widget that mirrors it.
pub(crate) fn broadcast(
    app: &mut App,
    change: TreeVisibilityChanged,
) -> Task<AppEvent> {
    let TreeVisibilityChanged { open } = change;

    let toggle = app
        .widgets
        .status_bar
        .reduce(StatusBarIntent::SyncTreeToggle { open })
        .map(AppEvent::StatusBar);
    let sidebar = app
        .widgets
        .sidebar
        .reduce(SidebarIntent::SetVisible { open })
        .map(AppEvent::Sidebar);

    Task::batch([toggle, sidebar])
}
