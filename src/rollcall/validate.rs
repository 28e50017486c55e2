//! Field validation for student drafts.
//!
//! Every validator is a pure function from the raw field value to a message:
//! an empty string when the value is acceptable, otherwise one fixed,
//! human-readable message. Register and update share these functions through
//! [`validate_draft`].
//!
//! Pattern checks run against the value as entered, so surrounding whitespace
//! fails the email, phone and roll number patterns. Only the "required" checks
//! trim.

use crate::model::{Field, FieldErrors, StudentDraft, ValidDraft};
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_CHARSET: &str = "Name should only contain letters and spaces";
pub const NAME_TOO_SHORT: &str = "Name should be at least 2 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Please enter a valid 10-digit Indian mobile number";
pub const ROLL_NO_REQUIRED: &str = "Roll number is required";
pub const ROLL_NO_INVALID: &str =
    "Roll number should be 4-15 characters (letters and numbers only)";
pub const COURSE_REQUIRED: &str = "Course is required";
pub const COURSE_INVALID: &str = "Please select a valid course";

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").unwrap());
static ROLL_NO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{4,15}$").unwrap());

/// How strictly the roll number is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Every validator, including the roll number pattern.
    #[default]
    Full,
    /// Roll number is only checked for presence. Matches the legacy update form.
    RollNoPresenceOnly,
}

pub fn validate_name(name: &str) -> String {
    if name.trim().is_empty() {
        return NAME_REQUIRED.to_string();
    }
    if !NAME_RE.is_match(name) {
        return NAME_CHARSET.to_string();
    }
    if name.trim().chars().count() < 2 {
        return NAME_TOO_SHORT.to_string();
    }
    String::new()
}

pub fn validate_email(email: &str) -> String {
    if email.trim().is_empty() {
        return EMAIL_REQUIRED.to_string();
    }
    if !EMAIL_RE.is_match(email) {
        return EMAIL_INVALID.to_string();
    }
    String::new()
}

pub fn validate_phone(phone: &str) -> String {
    if phone.trim().is_empty() {
        return PHONE_REQUIRED.to_string();
    }
    if !PHONE_RE.is_match(phone) {
        return PHONE_INVALID.to_string();
    }
    String::new()
}

pub fn validate_roll_no(roll_no: &str) -> String {
    if roll_no.trim().is_empty() {
        return ROLL_NO_REQUIRED.to_string();
    }
    if !ROLL_NO_RE.is_match(roll_no) {
        return ROLL_NO_INVALID.to_string();
    }
    String::new()
}

pub fn validate_course<S: AsRef<str>>(course: &str, courses: &[S]) -> String {
    if course.is_empty() {
        return COURSE_REQUIRED.to_string();
    }
    if !courses.iter().any(|c| c.as_ref() == course) {
        return COURSE_INVALID.to_string();
    }
    String::new()
}

/// Runs every field validator against `draft`.
///
/// Returns the full error map (all fields, empty for the ones that passed)
/// when any validator fails.
pub fn validate_draft<S: AsRef<str>>(
    draft: &StudentDraft,
    courses: &[S],
    mode: ValidationMode,
) -> Result<ValidDraft, FieldErrors> {
    let mut errors = FieldErrors::default();

    let roll_no = match mode {
        ValidationMode::Full => validate_roll_no(&draft.roll_no),
        ValidationMode::RollNoPresenceOnly if draft.roll_no.trim().is_empty() => {
            ROLL_NO_REQUIRED.to_string()
        }
        ValidationMode::RollNoPresenceOnly => String::new(),
    };
    errors.set(Field::RollNo, roll_no);
    errors.set(Field::Name, validate_name(&draft.name));
    errors.set(Field::Email, validate_email(&draft.email));
    errors.set(Field::Phone, validate_phone(&draft.phone));
    errors.set(Field::Course, validate_course(&draft.course, courses));

    if errors.has_errors() {
        Err(errors)
    } else {
        Ok(ValidDraft::new(draft.clone()))
    }
}
