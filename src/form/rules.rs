//! Pure validation rules for the contact form.
//!
//! Each field owns exactly one rule. Rules only look at the text they are
//! given, so they can be exercised without any document attached.

use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::FieldId;
use super::view::FieldState;

pub const SUCCESS_MESSAGE: &str = "Looks good.";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Please fix this field.";

const NAME_MESSAGE: &str = "Only letters, hyphens, apostrophes; min 2.";
const EMAIL_MESSAGE: &str = "Enter a valid email.";
const PHONE_MESSAGE: &str = "Exactly 10 digits; numbers only.";
const MIN_LENGTH_MESSAGE: &str = "At least 6 characters.";
const COMMENTS_MESSAGE: &str = "Cannot be empty.";

const CREDENTIAL_MIN_LEN: usize = 6;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z'\-]+$").expect("valid name pattern"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|.(".+"))"#,
        r"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$",
    ))
    .expect("valid email pattern")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone pattern"));

/// Static rule attached to a field.
#[derive(Clone, Copy)]
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub failure: Option<&'static str>,
}

impl Rule {
    pub fn evaluate(&self, value: &str) -> FieldState {
        if (self.check)(value) {
            FieldState::success(SUCCESS_MESSAGE)
        } else {
            FieldState::error(self.failure.unwrap_or(DEFAULT_FAILURE_MESSAGE))
        }
    }
}

// The per-field text is only shown on failure; a passing field always shows
// SUCCESS_MESSAGE rather than echoing the field's hint.
pub fn rule_for(field: FieldId) -> Rule {
    match field {
        FieldId::FirstName | FieldId::LastName => Rule {
            check: is_valid_name,
            failure: Some(NAME_MESSAGE),
        },
        FieldId::Email => Rule {
            check: is_valid_email,
            failure: Some(EMAIL_MESSAGE),
        },
        FieldId::Phone => Rule {
            check: is_valid_phone,
            failure: Some(PHONE_MESSAGE),
        },
        FieldId::Username | FieldId::Password => Rule {
            check: is_valid_credential,
            failure: Some(MIN_LENGTH_MESSAGE),
        },
        FieldId::Comments => Rule {
            check: is_non_empty,
            failure: Some(COMMENTS_MESSAGE),
        },
    }
}

/// Runs the field's rule and returns the state to display.
pub fn evaluate(field: FieldId, value: &str) -> FieldState {
    rule_for(field).evaluate(value)
}

pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Leading letter followed by at least one letter, hyphen or apostrophe.
/// The raw value is matched, so surrounding whitespace fails.
pub fn is_valid_name(value: &str) -> bool {
    is_non_empty(value) && NAME_PATTERN.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(&value.to_lowercase())
}

/// Exactly ten ASCII digits. Separators and spaces are rejected.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

pub fn has_min_trimmed_len(value: &str, min: usize) -> bool {
    is_non_empty(value) && value.trim().chars().count() >= min
}

fn is_valid_credential(value: &str) -> bool {
    has_min_trimmed_len(value, CREDENTIAL_MIN_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::view::FieldStatus;

    #[test]
    fn names_accept_letters_hyphens_apostrophes() {
        for name in ["Ann", "Lee", "O'Neil", "Mary-Jane", "Jo", "d'Artagnan"] {
            assert!(is_valid_name(name), "{name} should pass");
        }
    }

    #[test]
    fn names_reject_short_or_malformed_input() {
        for name in ["", "   ", "A", "1Ann", "-Ann", "Ann Lee", "Zoë", " Ann"] {
            assert!(!is_valid_name(name), "{name:?} should fail");
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("ann@lee.com"));
        assert!(is_valid_email("First.Last@Mail.Example.ORG"));
        assert!(is_valid_email("a@[192.168.0.1]"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a..b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_requires_exactly_ten_digits() {
        assert!(is_valid_phone("1234567890"));
        assert!(!is_valid_phone("123456789"));
        assert!(!is_valid_phone("12345678901"));
        assert!(!is_valid_phone("123-456-7890"));
        assert!(!is_valid_phone("(123)4567890"));
        assert!(!is_valid_phone(" 1234567890"));
        assert!(!is_valid_phone("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn credentials_use_trimmed_length() {
        assert!(has_min_trimmed_len("abcdef", 6));
        assert!(has_min_trimmed_len("  abcdef  ", 6));
        assert!(!has_min_trimmed_len("abcde", 6));
        assert!(!has_min_trimmed_len("  abcde   ", 6));
        assert!(!has_min_trimmed_len("        ", 6));
    }

    #[test]
    fn comments_need_visible_text() {
        assert!(!is_non_empty(""));
        assert!(!is_non_empty(" \t\n"));
        assert!(is_non_empty("hello"));
        assert!(is_non_empty("  x "));
    }

    #[test]
    fn evaluate_reports_field_messages() {
        let ok = evaluate(FieldId::Phone, "5551234567");
        assert_eq!(ok.status, FieldStatus::Success);
        assert_eq!(ok.message, SUCCESS_MESSAGE);

        let bad = evaluate(FieldId::Phone, "555-1234");
        assert_eq!(bad.status, FieldStatus::Error);
        assert_eq!(bad.message, "Exactly 10 digits; numbers only.");

        let bad = evaluate(FieldId::LastName, "L");
        assert_eq!(bad.message, "Only letters, hyphens, apostrophes; min 2.");
    }

    #[test]
    fn passing_fields_never_show_their_hint() {
        let valid = [
            (FieldId::FirstName, "Ann"),
            (FieldId::LastName, "Lee"),
            (FieldId::Email, "ann@lee.com"),
            (FieldId::Phone, "5551234567"),
            (FieldId::Username, "annlee1"),
            (FieldId::Password, "secret1"),
            (FieldId::Comments, "hello"),
        ];
        for (field, value) in valid {
            let state = evaluate(field, value);
            assert_eq!(state.message, SUCCESS_MESSAGE, "{}", field);
            assert_ne!(Some(state.message.as_str()), rule_for(field).failure);
        }
    }

    #[test]
    fn rule_without_message_falls_back_to_default() {
        let rule = Rule {
            check: is_non_empty,
            failure: None,
        };
        assert_eq!(rule.evaluate("").message, DEFAULT_FAILURE_MESSAGE);
    }
}
