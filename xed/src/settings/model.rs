use serde::Deserialize;

const DEFAULT_SIDEBAR_WIDTH: f32 = 250.0;
const DEFAULT_SIDEBAR_MIN_WIDTH: f32 = 150.0;
const DEFAULT_SIDEBAR_MAX_WIDTH: f32 = 500.0;

/// Shell settings read from the user config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct SettingsData {
    pub(crate) sidebar: SidebarSettings,
}

/// Sidebar layout: starting width and the accepted resize range.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct SidebarSettings {
    pub(crate) width: f32,
    pub(crate) min_width: f32,
    pub(crate) max_width: f32,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIDEBAR_WIDTH,
            min_width: DEFAULT_SIDEBAR_MIN_WIDTH,
            max_width: DEFAULT_SIDEBAR_MAX_WIDTH,
        }
    }
}

impl SettingsData {
    /// Check cross-field constraints that serde cannot express.
    pub(crate) fn validate(&self) -> Result<(), String> {
        let sidebar = &self.sidebar;
        let finite = [sidebar.width, sidebar.min_width, sidebar.max_width]
            .iter()
            .all(|value| value.is_finite());

        if !finite || sidebar.min_width <= 0.0 {
            return Err(String::from(
                "sidebar widths must be positive finite numbers",
            ));
        }

        if sidebar.min_width > sidebar.max_width {
            return Err(format!(
                "sidebar min_width {} exceeds max_width {}",
                sidebar.min_width, sidebar.max_width
            ));
        }

        if !(sidebar.min_width..=sidebar.max_width).contains(&sidebar.width) {
            return Err(format!(
                "sidebar width {} is outside [{}, {}]",
                sidebar.width, sidebar.min_width, sidebar.max_width
            ));
        }

        Ok(())
    }
}
