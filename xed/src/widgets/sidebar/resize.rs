//! Pointer-drag resizing of the sidebar panel.
//!
//! A session starts on pointer-down over the handle and captures the cursor
//! X coordinate together with the panel width. Every pointer move proposes
//! `start_width + (x - start_x)`; proposals outside [`WidthBounds`] are
//! dropped for that event instead of being clamped, so the panel stops at
//! its last accepted width until the pointer returns to the valid range.

/// Inclusive range of widths the sidebar may be dragged to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WidthBounds {
    min: f32,
    max: f32,
}

impl WidthBounds {
    /// Build bounds from `min..=max`; callers guarantee `min <= max`.
    pub(crate) fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub(crate) fn contains(&self, width: f32) -> bool {
        (self.min..=self.max).contains(&width)
    }
}

/// Baseline captured on pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ResizeSession {
    start_x: f32,
    start_width: f32,
}

/// Result of feeding one pointer move to the resizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum DragOutcome {
    /// No session is active; the move was ignored.
    Idle,
    Applied(f32),
    Rejected { candidate: f32 },
}

/// Idle/dragging state machine driving the sidebar width.
#[derive(Debug)]
pub(super) struct SidebarResizer {
    bounds: WidthBounds,
    session: Option<ResizeSession>,
}

impl SidebarResizer {
    pub(super) fn new(bounds: WidthBounds) -> Self {
        Self {
            bounds,
            session: None,
        }
    }

    pub(super) fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start a session, or rebase the running one.
    pub(super) fn press(&mut self, cursor_x: f32, current_width: f32) {
        self.session = Some(ResizeSession {
            start_x: cursor_x,
            start_width: current_width,
        });
    }

    pub(super) fn drag(&self, cursor_x: f32) -> DragOutcome {
        let Some(session) = self.session else {
            return DragOutcome::Idle;
        };

        let candidate = session.start_width + (cursor_x - session.start_x);
        if self.bounds.contains(candidate) {
            DragOutcome::Applied(candidate)
        } else {
            DragOutcome::Rejected { candidate }
        }
    }

    /// End the session; returns whether one was active.
    pub(super) fn release(&mut self) -> bool {
        self.session.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{DragOutcome, SidebarResizer, WidthBounds};

    fn resizer() -> SidebarResizer {
        SidebarResizer::new(WidthBounds::new(150.0, 500.0))
    }

    #[test]
    fn given_idle_resizer_when_dragged_then_move_is_ignored() {
        let resizer = resizer();

        assert_eq!(resizer.drag(420.0), DragOutcome::Idle);
    }

    #[test]
    fn given_session_when_dragged_inside_bounds_then_width_follows_pointer() {
        let mut resizer = resizer();
        resizer.press(100.0, 300.0);

        assert_eq!(resizer.drag(150.0), DragOutcome::Applied(350.0));
        assert_eq!(resizer.drag(40.0), DragOutcome::Applied(240.0));
    }

    #[test]
    fn given_session_when_candidate_hits_bounds_exactly_then_it_is_applied() {
        let mut resizer = resizer();
        resizer.press(0.0, 300.0);

        assert_eq!(resizer.drag(-150.0), DragOutcome::Applied(150.0));
        assert_eq!(resizer.drag(200.0), DragOutcome::Applied(500.0));
    }

    #[test]
    fn given_session_when_candidate_leaves_bounds_then_it_is_rejected_not_clamped()
     {
        let mut resizer = resizer();
        resizer.press(100.0, 300.0);

        assert_eq!(
            resizer.drag(500.0),
            DragOutcome::Rejected { candidate: 700.0 }
        );
        assert_eq!(
            resizer.drag(-60.0),
            DragOutcome::Rejected { candidate: 140.0 }
        );
    }

    #[test]
    fn given_second_press_without_release_when_dragged_then_last_baseline_wins()
     {
        let mut resizer = resizer();
        resizer.press(100.0, 300.0);
        resizer.press(200.0, 250.0);

        assert_eq!(resizer.drag(210.0), DragOutcome::Applied(260.0));
    }

    #[test]
    fn given_idle_resizer_when_released_repeatedly_then_nothing_happens() {
        let mut resizer = resizer();

        assert!(!resizer.release());
        assert!(!resizer.release());
        assert!(!resizer.release());
        assert!(!resizer.is_active());
    }

    #[test]
    fn given_released_session_when_dragged_then_move_is_ignored() {
        let mut resizer = resizer();
        resizer.press(100.0, 300.0);

        assert!(resizer.release());
        assert_eq!(resizer.drag(150.0), DragOutcome::Idle);
    }
}
