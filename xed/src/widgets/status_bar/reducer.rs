use iced::Task;

use super::event::{StatusBarEffect, StatusBarEvent, StatusBarIntent};
use super::state::StatusBarState;

/// Reduce a status bar intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut StatusBarState,
    intent: StatusBarIntent,
) -> Task<StatusBarEvent> {
    match intent {
        StatusBarIntent::InstallTreeToggle { open } => {
            state.install_tree_toggle(open);
            Task::none()
        },
        StatusBarIntent::ToggleTreeView => {
            if !state.has_tree_toggle() {
                log::debug!("tree view toggle clicked before installation");
                return Task::none();
            }
            Task::done(StatusBarEvent::Effect(
                StatusBarEffect::TreeViewToggleRequested,
            ))
        },
        StatusBarIntent::SyncTreeToggle { open } => {
            if !state.sync_tree_toggle(open) {
                log::debug!("tree view toggle not installed, sync skipped");
            }
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::widgets::status_bar::{
        StatusBarIntent, StatusBarWidget, StatusRegion,
    };

    #[test]
    fn given_fresh_status_bar_when_rendered_then_no_toggle_exists() {
        let widget = StatusBarWidget::new();

        assert_eq!(widget.vm().tree_toggle, None);
    }

    #[test]
    fn given_install_with_open_tree_when_reduced_then_toggle_is_active() {
        let mut widget = StatusBarWidget::new();

        let _task =
            widget.reduce(StatusBarIntent::InstallTreeToggle { open: true });

        assert_eq!(widget.tree_toggle_active(), Some(true));
    }

    #[test]
    fn given_sync_events_when_reduced_then_active_flag_follows_visibility() {
        let mut widget = StatusBarWidget::new();
        let _task =
            widget.reduce(StatusBarIntent::InstallTreeToggle { open: true });

        let _task =
            widget.reduce(StatusBarIntent::SyncTreeToggle { open: false });
        assert_eq!(widget.tree_toggle_active(), Some(false));

        let _task =
            widget.reduce(StatusBarIntent::SyncTreeToggle { open: true });
        assert_eq!(widget.tree_toggle_active(), Some(true));
    }

    #[test]
    fn given_toggle_click_when_reduced_then_toggle_state_waits_for_sync() {
        let mut widget = StatusBarWidget::new();
        let _task =
            widget.reduce(StatusBarIntent::InstallTreeToggle { open: true });

        let _task = widget.reduce(StatusBarIntent::ToggleTreeView);

        assert_eq!(widget.tree_toggle_active(), Some(true));
    }

    #[test]
    fn given_items_in_both_regions_when_appended_then_order_is_preserved() {
        let mut widget = StatusBarWidget::new();

        let first = widget.push_item(StatusRegion::Left, "Ln 1, Col 1", None);
        let encoding =
            widget.push_item(StatusRegion::Right, "UTF-8", Some("#"));
        let second = widget.push_item(StatusRegion::Left, "Spaces: 4", None);

        let left: Vec<_> = widget
            .items(StatusRegion::Left)
            .iter()
            .map(|item| (item.id(), item.label().to_string()))
            .collect();
        assert_eq!(
            left,
            vec![
                (first, String::from("Ln 1, Col 1")),
                (second, String::from("Spaces: 4")),
            ]
        );

        let right = widget.items(StatusRegion::Right);
        assert_eq!(right.len(), 1);
        assert_eq!(right[0].id(), encoding);
        assert_eq!(right[0].icon(), Some("#"));
        assert_ne!(first, second);
    }

    #[test]
    fn given_populated_region_when_cleared_then_only_that_region_empties() {
        let mut widget = StatusBarWidget::new();
        let _ = widget.push_item(StatusRegion::Left, "Ln 1, Col 1", None);
        let _ = widget.push_item(StatusRegion::Right, "UTF-8", None);

        widget.clear(StatusRegion::Left);

        assert!(widget.items(StatusRegion::Left).is_empty());
        assert_eq!(widget.items(StatusRegion::Right).len(), 1);
    }
}
