//! Contact form: validation, sanitizing, CAPTCHA gating and client-side rate
//! limiting. Delivery to the form-processing service is left to the host.

pub mod message_modal;
pub mod rate_limit;
pub mod sanitize;
pub mod validation;

pub use message_modal::MessageModal;
pub use rate_limit::{JsonFileStore, MemoryStore, RateLimitState, RateLimitStore, RateLimiter};
pub use sanitize::{sanitize, SubmissionPayload};
pub use validation::{counter, is_valid_email, validate_field, CharCounter, ContactForm, CounterLevel, Field, FieldError, ValidationReport};

use chrono::{DateTime, Utc};
use thiserror::Error;

const DEFAULT_FAILURE: &str = "Sorry, there was an error sending your message. Please try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("Too many submission attempts. Please wait before trying again.")]
    RateLimited,

    #[error("Please fix the errors above and try again.")]
    Invalid(ValidationReport),

    #[error("Security verification required")]
    CaptchaRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Message for the status line under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl FormStatus {
    fn success(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, message: message.into() }
    }

    fn error(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, message: message.into() }
    }
}

impl From<&FormError> for FormStatus {
    fn from(err: &FormError) -> Self {
        FormStatus::error(err.to_string())
    }
}

/// What the form-processing service said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed { message: String },
}

#[derive(Debug)]
pub struct ContactFormHandler<S: RateLimitStore> {
    pub form: ContactForm,
    access_key: String,
    captcha_verified: bool,
    submitting: bool,
    limiter: RateLimiter,
    store: S,
}

impl<S: RateLimitStore> ContactFormHandler<S> {
    /// Restores the limiter from `store`; unreadable storage starts fresh.
    pub fn new(access_key: impl Into<String>, limiter: RateLimiter, store: S) -> Self {
        let limiter = match store.load() {
            Ok(Some(state)) => limiter.with_state(state),
            Ok(None) => limiter,
            Err(e) => {
                log::warn!("Could not load rate limit data: {}", e);
                limiter
            }
        };
        Self {
            form: ContactForm::default(),
            access_key: access_key.into(),
            captcha_verified: false,
            submitting: false,
            limiter,
            store,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn captcha_verified(&self) -> bool {
        self.captcha_verified
    }

    /// The submit button is live only after CAPTCHA and while idle.
    pub fn submit_enabled(&self) -> bool {
        self.captcha_verified && !self.submitting
    }

    pub fn rate_limit_state(&self) -> RateLimitState {
        self.limiter.state()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // CAPTCHA widget callbacks
    pub fn on_captcha_success(&mut self) {
        self.captcha_verified = true;
        log::debug!("captcha verification successful");
    }

    pub fn on_captcha_expire(&mut self) -> FieldError {
        self.captcha_verified = false;
        FieldError::new(
            Field::Captcha,
            "Security verification expired. Please complete the CAPTCHA again.",
        )
    }

    pub fn on_captcha_error(&mut self) -> FieldError {
        self.captcha_verified = false;
        FieldError::new(Field::Captcha, "Security verification error. Please try again.")
    }

    /// Runs every client-side gate and, when all pass, marks the form as
    /// submitting and returns what should be sent.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<SubmissionPayload, FormError> {
        if self.submitting {
            return Err(FormError::AlreadySubmitting);
        }
        if !self.limiter.check(now) {
            return Err(FormError::RateLimited);
        }
        let report = self.form.validate();
        if !report.is_valid() {
            return Err(FormError::Invalid(report));
        }
        if !self.captcha_verified {
            return Err(FormError::CaptchaRequired);
        }

        self.submitting = true;
        Ok(SubmissionPayload::from_form(&self.access_key, &self.form))
    }

    /// Settles an in-flight submission. CAPTCHA must be redone either way.
    pub fn finish_submit(&mut self, now: DateTime<Utc>, outcome: SubmitOutcome) -> FormStatus {
        self.submitting = false;
        self.captcha_verified = false;

        match outcome {
            SubmitOutcome::Delivered => {
                self.limiter.record(now);
                if let Err(e) = self.store.save(&self.limiter.state()) {
                    log::warn!("Could not save rate limit data: {}", e);
                }
                self.form.reset();
                log::info!("contact form delivered");
                FormStatus::success(
                    "Thank you! Your message has been sent successfully. We'll get back to you soon.",
                )
            }
            SubmitOutcome::Failed { message } => {
                log::error!("Form submission error: {}", message);
                FormStatus::error(failure_message(&message))
            }
        }
    }
}

fn failure_message(raw: &str) -> String {
    let lower = raw.to_lowercase();
    if lower.contains("network") || lower.contains("fetch") {
        "Network error. Please check your connection and try again.".to_string()
    } else if lower.contains("rate limit") {
        "Too many requests. Please wait a moment before trying again.".to_string()
    } else if raw.trim().is_empty() {
        DEFAULT_FAILURE.to_string()
    } else {
        raw.to_string()
    }
}
