use crate::contact::{is_valid_email, SubmitOutcome};
use crate::toast::Toast;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterError {
    #[error("A subscription is already in progress")]
    AlreadySubmitting,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Single-field email signup in the page footer.
#[derive(Debug, Default, Clone)]
pub struct NewsletterForm {
    pub email: String,
    submitting: bool,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Checks the address and marks the form busy. Returns the trimmed address
    /// to hand to the mailing-list service.
    pub fn begin_subscribe(&mut self) -> Result<String, NewsletterError> {
        if self.submitting {
            return Err(NewsletterError::AlreadySubmitting);
        }
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(NewsletterError::InvalidEmail);
        }
        self.submitting = true;
        Ok(email.to_string())
    }

    pub fn finish_subscribe(&mut self, outcome: SubmitOutcome) -> Toast {
        self.submitting = false;
        match outcome {
            SubmitOutcome::Delivered => {
                self.email.clear();
                log::info!("newsletter subscription delivered");
                Toast::success("Thank you for subscribing!")
            }
            SubmitOutcome::Failed { message } => {
                log::error!("Newsletter subscription error: {}", message);
                Toast::error("Subscription failed. Please try again.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;

    #[test]
    fn rejects_bad_addresses_without_locking() {
        let mut form = NewsletterForm::new();
        form.email = "not-an-email".to_string();

        assert_eq!(form.begin_subscribe(), Err(NewsletterError::InvalidEmail));
        assert!(!form.is_submitting());
        assert_eq!(form.email, "not-an-email");
    }

    #[test]
    fn second_submit_waits_for_the_first() {
        let mut form = NewsletterForm::new();
        form.email = "  guest@example.com ".to_string();

        assert_eq!(form.begin_subscribe().unwrap(), "guest@example.com");
        assert_eq!(form.begin_subscribe(), Err(NewsletterError::AlreadySubmitting));
    }

    #[test]
    fn success_resets_and_failure_keeps_the_address() {
        let mut form = NewsletterForm::new();
        form.email = "guest@example.com".to_string();
        form.begin_subscribe().unwrap();

        let toast = form.finish_subscribe(SubmitOutcome::Failed { message: "timeout".to_string() });
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(form.email, "guest@example.com");
        assert!(!form.is_submitting());

        form.begin_subscribe().unwrap();
        let toast = form.finish_subscribe(SubmitOutcome::Delivered);
        assert_eq!(toast.kind, ToastKind::Success);
        assert!(form.email.is_empty());
    }
}
