use iced::{Subscription, event, mouse, window};

use super::{App, AppEvent};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    if drag_active(app) {
        event::listen_with(sidebar_drag_event)
    } else {
        Subscription::none()
    }
}

/// Window-wide pointer tracking only lives for the length of a drag.
fn drag_active(app: &App) -> bool {
    app.widgets.sidebar.is_resizing()
}

fn sidebar_drag_event(
    event: iced::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    let intent = match event {
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            SidebarIntent::ResizeDragged { x: position.x }
        },
        iced::Event::Mouse(mouse::Event::ButtonReleased(_)) => {
            SidebarIntent::ResizeReleased
        },
        _ => return None,
    };

    Some(AppEvent::Sidebar(SidebarEvent::Intent(intent)))
}
