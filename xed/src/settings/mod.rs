mod errors;
mod model;
mod storage;

pub(crate) use model::{SettingsData, SidebarSettings};
pub(crate) use storage::{SettingsLoadStatus, load_settings};

/// Load settings for startup, falling back to defaults on any failure.
pub(crate) fn load_initial_settings() -> SettingsData {
    match load_settings() {
        Ok(load) => {
            let (settings, status) = load.into_parts();
            match status {
                SettingsLoadStatus::Loaded => {
                    log::debug!("settings loaded from disk");
                },
                SettingsLoadStatus::Missing => {},
                SettingsLoadStatus::Invalid(message) => {
                    log::warn!("settings file ignored: {message}");
                },
            }
            settings
        },
        Err(err) => {
            log::warn!("failed to load settings: {err}");
            SettingsData::default()
        },
    }
}
