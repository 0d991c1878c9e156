use iced::Task;

use super::tree_view;
use crate::app::{App, AppEvent};
use crate::routers::chrome;
use crate::widgets::status_bar::{StatusBarIntent, StatusRegion};

const CURSOR_POSITION_LABEL: &str = "Ln 1, Col 1";
const ENCODING_LABEL: &str = "UTF-8";

/// Wire the shell once the runtime is ready.
///
/// The host window is resolved first; the status bar gets its tree toggle
/// and default items, and both the toggle and the sidebar are synced with
/// the current tree flag.
pub(crate) fn initialize(app: &mut App) -> Task<AppEvent> {
    let attach = chrome::attach_host_window();

    let install = app
        .widgets
        .status_bar
        .reduce(StatusBarIntent::InstallTreeToggle {
            open: app.ui.is_tree_open(),
        })
        .map(AppEvent::StatusBar);

    // Startup owns the default items; drop anything appended before it.
    app.widgets.status_bar.clear(StatusRegion::Left);
    app.widgets.status_bar.clear(StatusRegion::Right);
    app.widgets.status_bar.push_item(
        StatusRegion::Left,
        CURSOR_POSITION_LABEL,
        None,
    );
    app.widgets
        .status_bar
        .push_item(StatusRegion::Right, ENCODING_LABEL, None);

    let current = app.ui.snapshot();
    let sync = tree_view::broadcast(app, current);

    Task::batch([attach, install, sync])
}
