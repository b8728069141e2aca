use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlideError {
    #[error("Slide index {index} is out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },

    #[error("A slide set needs at least one slide")]
    EmptySlideSet,

    #[error("Settings error: {message}")]
    SettingsError { message: String },

    #[error("Storage error for '{path}': {message}")]
    StorageError { path: PathBuf, message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, SlideError>;

impl SlideError {
    /// Returns true if this error is recoverable (user can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SlideError::OutOfRange { .. }
                | SlideError::StorageError { .. }
                | SlideError::IoError { .. }
        )
    }

    /// Returns a user-friendly error message with recovery suggestions
    pub fn user_message(&self) -> String {
        let base_message = self.to_string();
        let suggestion = match self {
            SlideError::OutOfRange { .. } => "Pick one of the available slides.",
            SlideError::EmptySlideSet => "Add at least one slide to the carousel markup.",
            SlideError::SettingsError { .. } | SlideError::JsonError { .. } => {
                "The settings file could not be read. Defaults will be used instead."
            }
            SlideError::StorageError { .. } | SlideError::IoError { .. } => {
                "Local storage is unavailable. Check disk space and permissions."
            }
        };

        format!("{}\n\n{}", base_message, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SlideError::OutOfRange { .. } => "OUT_OF_RANGE",
            SlideError::EmptySlideSet => "EMPTY_SLIDE_SET",
            SlideError::SettingsError { .. } => "SETTINGS_ERROR",
            SlideError::StorageError { .. } => "STORAGE_ERROR",
            SlideError::IoError { .. } => "IO_ERROR",
            SlideError::JsonError { .. } => "JSON_ERROR",
        }
    }

    pub fn log_and_report(&self) {
        if self.is_recoverable() {
            log::warn!("[{}] {}", self.error_code(), self);
        } else {
            log::error!("[{}] {}", self.error_code(), self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_is_recoverable() {
        let error = SlideError::OutOfRange { index: 7, len: 3 };

        assert!(error.is_recoverable());
        assert_eq!(error.error_code(), "OUT_OF_RANGE");
        assert!(error.to_string().contains("7"));
        assert!(error.user_message().contains("available slides"));
    }

    #[test]
    fn every_variant_has_its_own_code() {
        let errors = [
            SlideError::OutOfRange { index: 1, len: 1 },
            SlideError::EmptySlideSet,
            SlideError::SettingsError { message: "bad".to_string() },
            SlideError::StorageError { path: PathBuf::from("x.json"), message: "denied".to_string() },
            SlideError::IoError { source: std::io::Error::other("disk") },
            serde_json::from_str::<u32>("{").unwrap_err().into(),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(errors.iter().all(|e| !e.user_message().is_empty()));
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let error: SlideError = parse.into();

        assert!(!error.is_recoverable());
        assert_eq!(error.error_code(), "JSON_ERROR");
    }
}
