use iced::Task;

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::resize::DragOutcome;
use super::state::SidebarState;

/// Reduce a sidebar intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut SidebarState,
    intent: SidebarIntent,
) -> Task<SidebarEvent> {
    match intent {
        SidebarIntent::SetVisible { open } => {
            state.set_visible(open);
            Task::none()
        },
        SidebarIntent::CursorMoved { position } => {
            if !state.is_resizing() {
                state.update_cursor(position);
            }
            Task::none()
        },
        SidebarIntent::ResizePressed => {
            state.begin_resize();
            Task::none()
        },
        SidebarIntent::ResizeDragged { x } => {
            if let DragOutcome::Rejected { candidate } = state.drag_resize(x)
            {
                log::trace!("sidebar width {candidate} out of bounds, ignored");
            }
            Task::none()
        },
        SidebarIntent::ResizeReleased => {
            if state.end_resize() {
                let width = state.width();
                Task::done(SidebarEvent::Effect(
                    SidebarEffect::ResizeFinished { width },
                ))
            } else {
                Task::none()
            }
        },
    }
}
