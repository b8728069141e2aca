use crate::carousel::CarouselConfig;
use crate::contact::rate_limit::{RATE_LIMIT_MAX, RATE_LIMIT_WINDOW_SECS};
use crate::errors::{Result, SlideError};
use crate::nav_menu::{HEADER_SCROLL_THRESHOLD_PX, MOBILE_BREAKPOINT_PX};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Carousels
    pub carousel: CarouselConfig,
    pub gallery: CarouselConfig,

    // Navigation
    pub nav_breakpoint_px: f32,
    pub resize_debounce_ms: u64,
    pub header_scroll_threshold_px: f32,

    // Contact form
    pub form_access_key: String,
    pub rate_limit_max: u32,
    pub rate_limit_window_secs: i64,

    // Window state
    pub window_size: (f32, f32),

    pub debug_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::carousel(),
            gallery: CarouselConfig::gallery(),

            nav_breakpoint_px: MOBILE_BREAKPOINT_PX,
            resize_debounce_ms: 250,
            header_scroll_threshold_px: HEADER_SCROLL_THRESHOLD_PX,

            form_access_key: String::new(),
            rate_limit_max: RATE_LIMIT_MAX,
            rate_limit_window_secs: RATE_LIMIT_WINDOW_SECS,

            window_size: (1280.0, 860.0),

            debug_logging: false,
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "slidekit", "Slidekit")
}

impl Settings {
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Falls back to the default window when the stored value cannot be
    /// represented.
    pub fn rate_limit_window(&self) -> chrono::Duration {
        chrono::Duration::try_seconds(self.rate_limit_window_secs)
            .filter(|window| *window > chrono::Duration::zero())
            .unwrap_or_else(|| chrono::Duration::seconds(RATE_LIMIT_WINDOW_SECS))
    }

    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Where the contact form keeps its rate-limit counter.
    pub fn rate_limit_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().join("contact_rate_limit.json"))
    }

    /// Loads from the platform config dir, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                e.log_and_report();
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Err(e) = self.save_to(&path) {
                e.log_and_report();
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for (name, config) in [("carousel", &self.carousel), ("gallery", &self.gallery)] {
            if config.autoplay_period_ms == 0 {
                return Err(SlideError::SettingsError {
                    message: format!("{name}.autoplay_period_ms must be positive"),
                });
            }
            if config.swipe_threshold_px.is_nan() || config.swipe_threshold_px < 0.0 {
                return Err(SlideError::SettingsError {
                    message: format!("{name}.swipe_threshold_px must be a non-negative number"),
                });
            }
        }
        if self.rate_limit_max == 0 {
            return Err(SlideError::SettingsError {
                message: "rate_limit_max must be at least 1".to_string(),
            });
        }
        if self.rate_limit_window_secs <= 0
            || chrono::Duration::try_seconds(self.rate_limit_window_secs).is_none()
        {
            return Err(SlideError::SettingsError {
                message: format!(
                    "rate_limit_window_secs must be a positive number of seconds, got {}",
                    self.rate_limit_window_secs
                ),
            });
        }
        Ok(())
    }
}
