use iced::Task;

use super::errors::ChromeError;
use super::event::{ChromeEffect, ChromeEvent, ChromeIntent};
use super::state::ChromeState;

/// Reduce a chrome intent into state updates and host window effects.
pub(super) fn reduce(
    state: &mut ChromeState,
    intent: ChromeIntent,
) -> Task<ChromeEvent> {
    match resolve(state, intent) {
        Ok(Some(effect)) => Task::done(ChromeEvent::Effect(effect)),
        Ok(None) => Task::none(),
        Err(err) => {
            log::error!("{err}");
            Task::none()
        },
    }
}

/// Decide which host operation, if any, an intent maps to.
pub(super) fn resolve(
    state: &mut ChromeState,
    intent: ChromeIntent,
) -> Result<Option<ChromeEffect>, ChromeError> {
    let effect = match intent {
        ChromeIntent::Attach(id) => {
            state.attach(id);
            log::debug!("window controls attached to {id:?}");
            None
        },
        ChromeIntent::HostUnavailable => {
            state.mark_unavailable();
            log::error!(
                "host window API not available, window controls disabled"
            );
            None
        },
        ChromeIntent::CloseWindow => state
            .window_for("close")?
            .map(|id| ChromeEffect::CloseWindow { id }),
        ChromeIntent::MinimizeWindow => state
            .window_for("minimize")?
            .map(|id| ChromeEffect::MinimizeWindow { id }),
        ChromeIntent::ToggleMaximize => state
            .window_for("query maximized state of")?
            .map(|id| ChromeEffect::QueryMaximized { id }),
        ChromeIntent::MaximizedResolved { maximized } => {
            let action = if maximized { "unmaximize" } else { "maximize" };
            state.window_for(action)?.map(|id| {
                if maximized {
                    ChromeEffect::Unmaximize { id }
                } else {
                    ChromeEffect::Maximize { id }
                }
            })
        },
        ChromeIntent::StartWindowDrag => state
            .window_for("drag")?
            .map(|id| ChromeEffect::StartWindowDrag { id }),
    };

    Ok(effect)
}
