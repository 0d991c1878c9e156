use iced::window::Direction;
use iced::{Task, window};

use crate::app::AppEvent;

/// Start a native resize from one of the window-edge grips.
pub(crate) fn start_window_resize(direction: Direction) -> Task<AppEvent> {
    window::latest().and_then(move |id| window::drag_resize(id, direction))
}
