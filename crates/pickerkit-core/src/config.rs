//! Picker-wide styling and behavior settings.
//!
//! [`PickerConfiguration`] is an immutable value handed to the views that need
//! it. For convenience a single process-lifetime default can be installed at
//! startup with [`install_global`] and read anywhere with [`global`].
//!
//! Every field has a default, so partial JSON documents are accepted:
//!
//! ```json
//! { "colors": { "tint": "#FF2D55" }, "source_order": "CameraFirst" }
//! ```

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

use crate::color::Color;
use crate::fit::{Alignment, ScaleMode};

/// Error types for configuration handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid configuration JSON.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The values are individually valid but contradict each other.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// [`install_global`] was called after a global configuration was
    /// already fixed.
    #[error("A global configuration is already installed")]
    AlreadyInstalled,
}

/// Colors used across the picker chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerColors {
    /// Accent color for selection badges and buttons.
    pub tint: Color,
    pub background: Color,
    pub text: Color,
    /// Hairline under toolbars and cells.
    pub border: Color,
}

impl Default for PickerColors {
    fn default() -> Self {
        Self {
            tint: Color::rgb(0, 122, 255),
            background: Color::rgb(28, 28, 30),
            text: Color::WHITE,
            border: Color::rgba(255, 255, 255, 51),
        }
    }
}

/// User-visible strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerTitles {
    pub library: String,
    pub camera: String,
    pub video: String,
    pub done: String,
    pub cancel: String,
    /// Shown when the library has no items.
    pub empty_library: String,
}

impl Default for PickerTitles {
    fn default() -> Self {
        Self {
            library: "Library".to_string(),
            camera: "Photo".to_string(),
            video: "Video".to_string(),
            done: "Done".to_string(),
            cancel: "Cancel".to_string(),
            empty_library: "No photos or videos".to_string(),
        }
    }
}

/// Icon identifiers resolved by the host UI's asset catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerIcons {
    pub close: String,
    pub camera_switch: String,
    pub flash: String,
    pub video_badge: String,
    pub check: String,
}

impl Default for PickerIcons {
    fn default() -> Self {
        Self {
            close: "icon-close".to_string(),
            camera_switch: "icon-camera-switch".to_string(),
            flash: "icon-flash".to_string(),
            video_badge: "icon-video".to_string(),
            check: "icon-check".to_string(),
        }
    }
}

/// Which source tab comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum SourceOrder {
    CameraFirst,
    #[default]
    LibraryFirst,
}

/// A top-level picker tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickerTab {
    Library,
    Camera,
}

/// How grid thumbnails are fitted into their cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitDefaults {
    pub scale_mode: ScaleMode,
    pub alignment: Alignment,
}

impl Default for FitDefaults {
    // Grid cells are square, so thumbnails fill them
    fn default() -> Self {
        Self {
            scale_mode: ScaleMode::AspectFill,
            alignment: Alignment::Center,
        }
    }
}

/// Picker-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfiguration {
    pub colors: PickerColors,
    pub titles: PickerTitles,
    pub icons: PickerIcons,
    pub source_order: SourceOrder,
    pub allow_video: bool,
    pub allow_multiple_selection: bool,
    pub show_camera_tab: bool,
    /// Crop captured photos to a square.
    pub crop_to_square: bool,
    /// Maximum number of selected items, 0 = unlimited.
    pub max_selection: u32,
    pub fit_defaults: FitDefaults,
}

impl Default for PickerConfiguration {
    fn default() -> Self {
        Self {
            colors: PickerColors::default(),
            titles: PickerTitles::default(),
            icons: PickerIcons::default(),
            source_order: SourceOrder::default(),
            allow_video: true,
            allow_multiple_selection: true,
            show_camera_tab: true,
            crop_to_square: false,
            max_selection: 0,
            fit_defaults: FitDefaults::default(),
        }
    }
}

impl PickerConfiguration {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PickerConfiguration = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Visible tabs in display order.
    pub fn tabs(&self) -> Vec<PickerTab> {
        match (self.show_camera_tab, self.source_order) {
            (false, _) => vec![PickerTab::Library],
            (true, SourceOrder::LibraryFirst) => vec![PickerTab::Library, PickerTab::Camera],
            (true, SourceOrder::CameraFirst) => vec![PickerTab::Camera, PickerTab::Library],
        }
    }

    /// Title shown for a tab.
    pub fn tab_title(&self, tab: PickerTab) -> &str {
        match tab {
            PickerTab::Library => &self.titles.library,
            PickerTab::Camera => &self.titles.camera,
        }
    }

    /// Check that the settings do not contradict each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.allow_multiple_selection && self.max_selection > 1 {
            return Err(ConfigError::Invalid(format!(
                "max_selection is {} but multiple selection is disabled",
                self.max_selection
            )));
        }

        if let Some(tab) = self
            .tabs()
            .into_iter()
            .find(|&tab| self.tab_title(tab).trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!("{:?} tab has an empty title", tab)));
        }

        Ok(())
    }
}

static GLOBAL: OnceLock<PickerConfiguration> = OnceLock::new();

/// Fix the process-wide configuration.
///
/// Must run before the first call to [`global`]; afterwards the value can no
/// longer change.
pub fn install_global(config: PickerConfiguration) -> Result<(), ConfigError> {
    config.validate()?;
    GLOBAL
        .set(config)
        .map_err(|_| ConfigError::AlreadyInstalled)?;
    tracing::debug!("installed global picker configuration");
    Ok(())
}

/// The process-wide configuration.
///
/// Falls back to (and fixes) [`PickerConfiguration::default`] if nothing was
/// installed.
pub fn global() -> &'static PickerConfiguration {
    GLOBAL.get_or_init(|| {
        tracing::warn!("no picker configuration installed, using defaults");
        PickerConfiguration::default()
    })
}
