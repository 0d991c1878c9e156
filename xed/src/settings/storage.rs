use std::fs;
use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::SettingsData;

/// Status describing how settings were loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub(crate) struct SettingsLoad {
    settings: SettingsData,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    fn new(settings: SettingsData, status: SettingsLoadStatus) -> Self {
        Self { settings, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (SettingsData, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

pub(crate) fn load_settings() -> Result<SettingsLoad, SettingsError> {
    load_settings_from_path(&settings_path())
}

fn load_settings_from_path(path: &Path) -> Result<SettingsLoad, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match serde_json::from_str::<SettingsData>(&data) {
        Ok(value) => value,
        Err(err) => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    if let Err(message) = parsed.validate() {
        return Ok(SettingsLoad::new(
            SettingsData::default(),
            SettingsLoadStatus::Invalid(message),
        ));
    }

    Ok(SettingsLoad::new(parsed, SettingsLoadStatus::Loaded))
}

fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("xed")
            .join("settings.json");
    }

    std::env::temp_dir().join("xed").join("settings.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{SettingsData, SettingsLoadStatus, load_settings_from_path};

    #[test]
    fn given_missing_file_when_load_then_returns_default_with_missing_status() {
        let root = test_temp_dir("missing");
        let path = root.join("settings.json");

        let loaded = load_settings_from_path(&path)
            .expect("missing settings should not be an io error");
        let (settings, status) = loaded.into_parts();

        assert!(matches!(status, SettingsLoadStatus::Missing));
        assert_eq!(settings, SettingsData::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_partial_sidebar_section_when_load_then_missing_fields_use_defaults()
     {
        let root = test_temp_dir("partial");
        let path = root.join("settings.json");
        fs::write(&path, r#"{ "sidebar": { "width": 320 } }"#)
            .expect("test payload should be written");

        let loaded = load_settings_from_path(&path)
            .expect("settings should load successfully");
        let (settings, status) = loaded.into_parts();

        assert!(matches!(status, SettingsLoadStatus::Loaded));
        assert_eq!(settings.sidebar.width, 320.0);
        assert_eq!(settings.sidebar.min_width, 150.0);
        assert_eq!(settings.sidebar.max_width, 500.0);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_default_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("settings.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let loaded = load_settings_from_path(&path)
            .expect("loading invalid settings should not fail with io error");
        let (settings, status) = loaded.into_parts();

        assert_eq!(settings, SettingsData::default());
        match status {
            SettingsLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_out_of_range_width_when_load_then_defaults_are_used() {
        let root = test_temp_dir("out_of_range");
        let path = root.join("settings.json");
        fs::write(&path, r#"{ "sidebar": { "width": 900 } }"#)
            .expect("test payload should be written");

        let loaded = load_settings_from_path(&path)
            .expect("settings should load without io error");
        let (settings, status) = loaded.into_parts();

        assert!(matches!(status, SettingsLoadStatus::Invalid(_)));
        assert_eq!(settings, SettingsData::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "xed-settings-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
