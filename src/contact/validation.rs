use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

// Letters from any script, spaces, hyphens and apostrophes
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\s\-']+$").expect("valid name pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    Captcha,
}

impl Field {
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
            Field::Captcha => "captcha",
        }
    }

    /// Character budget shown by the live counter.
    pub fn max_len(&self) -> Option<usize> {
        match self {
            Field::Name => Some(50),
            Field::Email | Field::Subject => Some(100),
            Field::Message => Some(1000),
            Field::Captcha => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Outcome of validating the whole form in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
    /// Honeypot was ticked; the submission is silently refused.
    pub spam: bool,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && !self.spam
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Hidden honeypot checkbox. Humans never see it.
    pub botcheck: bool,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
            Field::Captcha => "",
        }
    }

    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        let name = self.name.trim();
        if name.is_empty() {
            report.errors.push(FieldError::new(Field::Name, "Name is required"));
        } else if name.chars().count() < 2 {
            report.errors.push(FieldError::new(Field::Name, "Name must be at least 2 characters"));
        } else if !is_valid_name(name) {
            report.errors.push(FieldError::new(Field::Name, "Name contains invalid characters"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            report.errors.push(FieldError::new(Field::Email, "Email is required"));
        } else if !is_valid_email(email) {
            report.errors.push(FieldError::new(Field::Email, "Please enter a valid email address"));
        }

        let subject = self.subject.trim();
        if subject.is_empty() {
            report.errors.push(FieldError::new(Field::Subject, "Subject is required"));
        } else if subject.chars().count() < 5 {
            report.errors.push(FieldError::new(Field::Subject, "Subject must be at least 5 characters"));
        }

        let message = self.message.trim();
        if message.is_empty() {
            report.errors.push(FieldError::new(Field::Message, "Message is required"));
        } else if message.chars().count() < 10 {
            report.errors.push(FieldError::new(Field::Message, "Message must be at least 10 characters"));
        }

        if self.botcheck {
            log::warn!("Spam detected via honeypot");
            report.spam = true;
        }

        report
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Blur-time check for a single field. Empty values pass here; `validate`
/// reports them on submit.
pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match field {
        Field::Name if !is_valid_name(value) => {
            Some(FieldError::new(Field::Name, "Name contains invalid characters"))
        }
        Field::Email if !is_valid_email(value) => {
            Some(FieldError::new(Field::Email, "Please enter a valid email address"))
        }
        _ => None,
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email) && email.chars().count() <= 100
}

pub fn is_valid_name(name: &str) -> bool {
    let len = name.chars().count();
    NAME_PATTERN.is_match(name) && (2..=50).contains(&len)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharCounter {
    pub text: String,
    pub level: CounterLevel,
}

/// Live `(len/max)` counter for fields that have a budget.
pub fn counter(field: Field, len: usize) -> Option<CharCounter> {
    let max = field.max_len()?;
    let level = if len * 10 > max * 9 {
        CounterLevel::Danger
    } else if len * 10 > max * 7 {
        CounterLevel::Warning
    } else {
        CounterLevel::Normal
    };
    Some(CharCounter {
        text: format!("({len}/{max})"),
        level,
    })
}
