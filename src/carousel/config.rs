use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-instance tuning for a [`SlideController`](super::SlideController).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// How long the move animation holds the transition lock.
    pub transition_ms: u64,
    pub autoplay_period_ms: u64,
    /// Gestures must travel strictly further than this to navigate.
    pub swipe_threshold_px: f32,
    /// Whether autoplay is armed at start-up and re-armed after interaction.
    pub autoplay: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::carousel()
    }
}

impl CarouselConfig {
    /// Hero carousel: 500 ms slide, advances every 5 s.
    pub fn carousel() -> Self {
        Self {
            transition_ms: 500,
            autoplay_period_ms: 5000,
            swipe_threshold_px: 50.0,
            autoplay: true,
        }
    }

    /// Scroll-snapped gallery: 600 ms smooth scroll, advances every 3.5 s.
    pub fn gallery() -> Self {
        Self {
            transition_ms: 600,
            autoplay_period_ms: 3500,
            swipe_threshold_px: 50.0,
            autoplay: true,
        }
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn autoplay_period(&self) -> Duration {
        Duration::from_millis(self.autoplay_period_ms)
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }
}
