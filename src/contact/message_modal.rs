use super::sanitize::SubmissionPayload;
use super::validation::ContactForm;
use super::{FormError, SubmitOutcome};
use crate::carousel::Key;
use crate::toast::Toast;

/// "Send a message" dialog opened from the chef's profile. Keeps its own
/// CAPTCHA state, separate from the main contact form.
#[derive(Debug, Default, Clone)]
pub struct MessageModal {
    pub form: ContactForm,
    access_key: String,
    open: bool,
    captcha_verified: bool,
    submitting: bool,
}

impl MessageModal {
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn captcha_verified(&self) -> bool {
        self.captcha_verified
    }

    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close button or backdrop. The typed message survives.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn click_backdrop(&mut self) {
        self.close();
    }

    pub fn handle_key(&mut self, key: Key) -> bool {
        if key == Key::Escape && self.open {
            self.close();
            return true;
        }
        false
    }

    // CAPTCHA widget callbacks
    pub fn on_captcha_success(&mut self) {
        self.captcha_verified = true;
    }

    pub fn on_captcha_expire(&mut self) {
        self.captcha_verified = false;
    }

    pub fn on_captcha_error(&mut self) {
        self.captcha_verified = false;
    }

    pub fn begin_send(&mut self) -> Result<SubmissionPayload, FormError> {
        if self.submitting {
            return Err(FormError::AlreadySubmitting);
        }
        if !self.captcha_verified {
            return Err(FormError::CaptchaRequired);
        }
        let report = self.form.validate();
        if !report.is_valid() {
            return Err(FormError::Invalid(report));
        }

        self.submitting = true;
        Ok(SubmissionPayload::from_form(&self.access_key, &self.form))
    }

    /// On delivery the form resets, the dialog closes and CAPTCHA must be
    /// redone. A failure leaves everything in place for a retry.
    pub fn finish_send(&mut self, outcome: SubmitOutcome) -> Toast {
        self.submitting = false;
        match outcome {
            SubmitOutcome::Delivered => {
                self.form.reset();
                self.captcha_verified = false;
                self.close();
                log::info!("modal message delivered");
                Toast::success("Thank you! Your message has been sent.")
            }
            SubmitOutcome::Failed { message } => {
                log::error!("Message form submission error: {}", message);
                Toast::error("There was an error sending your message. Please try again.")
            }
        }
    }
}
