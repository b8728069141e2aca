use crate::errors::{Result, SlideError};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const RATE_LIMIT_MAX: u32 = 3;
pub const RATE_LIMIT_WINDOW_SECS: i64 = 5 * 60;

/// Persisted submission counter. Field names match what the browser build
/// kept in local storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitState {
    #[serde(default)]
    pub count: u32,
    /// Epoch milliseconds of the last successful submission.
    #[serde(default, rename = "lastTime")]
    pub last_time: i64,
}

/// Client-side storage for the rate limiter. Best effort only.
pub trait RateLimitStore {
    fn load(&self) -> Result<Option<RateLimitState>>;
    fn save(&mut self, state: &RateLimitState) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub state: Option<RateLimitState>,
}

impl RateLimitStore for MemoryStore {
    fn load(&self) -> Result<Option<RateLimitState>> {
        Ok(self.state)
    }

    fn save(&mut self, state: &RateLimitState) -> Result<()> {
        self.state = Some(*state);
        Ok(())
    }
}

/// JSON file standing in for browser local storage.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, err: impl std::fmt::Display) -> SlideError {
        SlideError::StorageError {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }
}

impl RateLimitStore for JsonFileStore {
    fn load(&self) -> Result<Option<RateLimitState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| self.storage_error(e))?;
        let state = serde_json::from_str(&content)?;
        Ok(Some(state))
    }

    fn save(&mut self, state: &RateLimitState) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| self.storage_error(e))?;
        }
        let content = serde_json::to_string(state)?;
        std::fs::write(&self.path, content).map_err(|e| self.storage_error(e))?;
        Ok(())
    }
}

/// At most `max` successful submissions per rolling window measured from the
/// last one.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    max: u32,
    window: Duration,
    state: RateLimitState,
}

impl RateLimiter {
    pub fn new(max: u32, window: Duration) -> Self {
        Self {
            max,
            window,
            state: RateLimitState::default(),
        }
    }

    pub fn with_state(mut self, state: RateLimitState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> RateLimitState {
        self.state
    }

    /// True when another submission is allowed. A lapsed window resets the
    /// count.
    pub fn check(&mut self, now: DateTime<Utc>) -> bool {
        if now.timestamp_millis() - self.state.last_time > self.window.num_milliseconds() {
            self.state.count = 0;
        }
        self.state.count < self.max
    }

    pub fn record(&mut self, now: DateTime<Utc>) {
        self.state.count += 1;
        self.state.last_time = now.timestamp_millis();
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RATE_LIMIT_MAX, Duration::seconds(RATE_LIMIT_WINDOW_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn three_per_window() {
        let mut limiter = RateLimiter::default();
        for i in 0..3 {
            assert!(limiter.check(at(i)));
            limiter.record(at(i));
        }
        assert!(!limiter.check(at(10)));
        // Window is measured from the last submission at t=2
        assert!(!limiter.check(at(302)));
        assert!(limiter.check(at(303)));
        assert_eq!(limiter.state().count, 0);
    }

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested").join("rate.json"));
        assert_eq!(store.load().unwrap(), None);

        let state = RateLimitState { count: 2, last_time: 1234 };
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), Some(state));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"lastTime\":1234"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rate.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonFileStore::new(path).load().unwrap_err();
        assert_eq!(err.error_code(), "JSON_ERROR");
    }
}
