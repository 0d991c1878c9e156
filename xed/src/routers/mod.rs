use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod chrome;
pub(crate) mod flow;
pub(crate) mod sidebar;
pub(crate) mod status_bar;
pub(crate) mod window;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => flow::startup::initialize(app),
        // Chrome widget
        AppEvent::Chrome(event) => chrome::route(app, event),
        // Sidebar widget
        AppEvent::Sidebar(event) => sidebar::route(app, event),
        // Status bar widget
        AppEvent::StatusBar(event) => status_bar::route(app, event),
        // Direct operations
        AppEvent::ResizeWindow(direction) => {
            window::start_window_resize(direction)
        },
    }
}
