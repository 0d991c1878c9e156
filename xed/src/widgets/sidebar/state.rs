use iced::Point;

use super::resize::{DragOutcome, SidebarResizer, WidthBounds};
use crate::settings::SidebarSettings;

/// Internal runtime state for sidebar visibility and width.
#[derive(Debug)]
pub(super) struct SidebarState {
    visible: bool,
    width: f32,
    cursor: Point,
    resizer: SidebarResizer,
}

impl SidebarState {
    pub(super) fn new(settings: SidebarSettings) -> Self {
        Self {
            visible: true,
            width: settings.width,
            cursor: Point::ORIGIN,
            resizer: SidebarResizer::new(WidthBounds::new(
                settings.min_width,
                settings.max_width,
            )),
        }
    }

    pub(super) fn is_visible(&self) -> bool {
        self.visible
    }

    pub(super) fn width(&self) -> f32 {
        self.width
    }

    pub(super) fn is_resizing(&self) -> bool {
        self.resizer.is_active()
    }

    pub(super) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(super) fn update_cursor(&mut self, position: Point) {
        self.cursor = position;
    }

    pub(super) fn begin_resize(&mut self) {
        self.resizer.press(self.cursor.x, self.width);
    }

    pub(super) fn drag_resize(&mut self, cursor_x: f32) -> DragOutcome {
        self.cursor.x = cursor_x;
        let outcome = self.resizer.drag(cursor_x);
        if let DragOutcome::Applied(width) = outcome {
            self.width = width;
        }
        outcome
    }

    pub(super) fn end_resize(&mut self) -> bool {
        self.resizer.release()
    }
}
