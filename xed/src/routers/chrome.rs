use iced::{Task, window};

use crate::app::{App, AppEvent};
use crate::widgets::chrome::{ChromeEffect, ChromeEvent, ChromeIntent};

/// Route a chrome event through the widget reducer or to the host window.
pub(crate) fn route(app: &mut App, event: ChromeEvent) -> Task<AppEvent> {
    match event {
        ChromeEvent::Intent(intent) => {
            app.widgets.chrome.reduce(intent).map(AppEvent::Chrome)
        },
        ChromeEvent::Effect(effect) => route_effect(effect),
    }
}

/// Resolve the host window and hand it to the chrome widget.
pub(crate) fn attach_host_window() -> Task<AppEvent> {
    window::latest().map(|id| {
        let intent = match id {
            Some(id) => ChromeIntent::Attach(id),
            None => ChromeIntent::HostUnavailable,
        };
        AppEvent::Chrome(ChromeEvent::Intent(intent))
    })
}

fn route_effect(effect: ChromeEffect) -> Task<AppEvent> {
    match effect {
        ChromeEffect::CloseWindow { id } => window::close(id),
        ChromeEffect::MinimizeWindow { id } => window::minimize(id, true),
        ChromeEffect::QueryMaximized { id } => {
            window::is_maximized(id).map(|maximized| {
                AppEvent::Chrome(ChromeEvent::Intent(
                    ChromeIntent::MaximizedResolved { maximized },
                ))
            })
        },
        ChromeEffect::Maximize { id } => window::maximize(id, true),
        ChromeEffect::Unmaximize { id } => window::maximize(id, false),
        ChromeEffect::StartWindowDrag { id } => window::drag(id),
    }
}
