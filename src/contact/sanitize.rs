use super::validation::ContactForm;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script>").expect("valid script pattern"));
static JS_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").expect("valid scheme pattern"));
static EVENT_HANDLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on\w+\s*=").expect("valid handler pattern"));

/// Strips script blocks, `javascript:` URLs and inline event handlers, then
/// trims.
pub fn sanitize(value: &str) -> String {
    let value = SCRIPT_BLOCK.replace_all(value, "");
    let value = JS_SCHEME.replace_all(&value, "");
    let value = EVENT_HANDLER.replace_all(&value, "");
    value.trim().to_string()
}

/// The only fields handed to the form-processing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub botcheck: bool,
}

impl SubmissionPayload {
    pub fn from_form(access_key: &str, form: &ContactForm) -> Self {
        Self {
            access_key: sanitize(access_key),
            name: sanitize(&form.name),
            email: sanitize(&form.email),
            subject: sanitize(&form.subject),
            message: sanitize(&form.message),
            botcheck: form.botcheck,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_script_blocks_across_lines() {
        let input = "Hello <SCRIPT type=\"x\">alert(1);\nmore()</script>world";
        assert_eq!(sanitize(input), "Hello world");
    }

    #[test]
    fn removes_schemes_and_handlers() {
        assert_eq!(sanitize("  JavaScript:alert(1) "), "alert(1)");
        assert_eq!(sanitize("<img src=x onerror = steal()>"), "<img src=x  steal()>");
    }

    #[test]
    fn payload_keeps_only_known_fields() {
        let form = ContactForm {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Tasting menu".to_string(),
            message: "Hello <script>x()</script>there".to_string(),
            botcheck: false,
        };
        let payload = SubmissionPayload::from_form("key-123", &form);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["name"], "Ada");
        assert_eq!(json["message"], "Hello there");
        assert_eq!(json.as_object().unwrap().len(), 6);
    }
}
