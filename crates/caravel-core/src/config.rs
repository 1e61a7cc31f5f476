use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Carousel geometry and gesture tuning.
///
/// All widths share the unit of the viewport width fed to the controller.
/// The defaults are the pixel values the component shipped with; terminals
/// usually want [`CarouselConfig::compact`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Widths up to this value (inclusive) are classified Narrow
    #[serde(default = "default_narrow_breakpoint")]
    pub narrow_breakpoint: u16,
    /// Widths up to this value (inclusive) are classified Medium
    #[serde(default = "default_medium_breakpoint")]
    pub medium_breakpoint: u16,
    /// Items per page on a Narrow viewport
    #[serde(default = "default_narrow_page_size")]
    pub narrow_page_size: usize,
    /// Items per page on a Medium viewport
    #[serde(default = "default_medium_page_size")]
    pub medium_page_size: usize,
    /// Items per page on a Wide viewport
    #[serde(default = "default_wide_page_size")]
    pub wide_page_size: usize,
    /// Space between adjacent items on the track
    #[serde(default = "default_gap")]
    pub gap: u16,
    /// Minimum horizontal drag distance that counts as a swipe
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: u16,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: default_narrow_breakpoint(),
            medium_breakpoint: default_medium_breakpoint(),
            narrow_page_size: default_narrow_page_size(),
            medium_page_size: default_medium_page_size(),
            wide_page_size: default_wide_page_size(),
            gap: default_gap(),
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

impl CarouselConfig {
    /// Preset scaled to terminal columns instead of pixels.
    pub fn compact() -> Self {
        Self {
            narrow_breakpoint: 80,
            medium_breakpoint: 120,
            gap: 2,
            swipe_threshold: 5,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the status bar
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
    /// Show the indicator dots below the track
    #[serde(default = "default_true")]
    pub show_indicators: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_status_bar: default_true(),
            show_indicators: default_true(),
        }
    }
}

fn default_narrow_breakpoint() -> u16 {
    768
}

fn default_medium_breakpoint() -> u16 {
    1024
}

fn default_narrow_page_size() -> usize {
    1
}

fn default_medium_page_size() -> usize {
    2
}

fn default_wide_page_size() -> usize {
    3
}

fn default_gap() -> u16 {
    20
}

fn default_swipe_threshold() -> u16 {
    50
}

fn default_tick_rate() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/caravel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("caravel")
            .join("config.toml")
    }
}
