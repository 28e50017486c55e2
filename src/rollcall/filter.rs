//! Live-input filters.
//!
//! These model what a form does while the user types: digits never make it
//! into the name field, and the phone field only ever holds up to ten digits.
//! They are applied by the view layer before a draft is submitted; the command
//! layer itself never filters, so a submitted name containing digits is
//! rejected by the validator instead of being silently cleaned.
//!
//! Both filters are idempotent.

use crate::model::{Field, StudentDraft};

pub const NAME_DIGITS_WARNING: &str = "Numbers are not allowed in name";

const PHONE_MAX_DIGITS: usize = 10;

/// Strips ASCII digits from a name value.
pub fn filter_name(value: &str) -> String {
    value.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Keeps only ASCII digits and truncates to ten.
pub fn filter_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_MAX_DIGITS)
        .collect()
}

/// A draft after live filtering, with any one-shot warnings the filters raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredDraft {
    pub draft: StudentDraft,
    pub warnings: Vec<(Field, String)>,
}

/// Applies the name and phone filters to a draft.
///
/// When the name filter actually removed something, a transient warning is
/// attached. Filtering the result again yields no warning.
pub fn filter_draft(draft: StudentDraft) -> FilteredDraft {
    let mut warnings = Vec::new();

    let name = filter_name(&draft.name);
    if name != draft.name {
        warnings.push((Field::Name, NAME_DIGITS_WARNING.to_string()));
    }
    let phone = filter_phone(&draft.phone);

    FilteredDraft {
        draft: StudentDraft {
            name,
            phone,
            ..draft
        },
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_filter_strips_digits_only() {
        assert_eq!(filter_name("J4ne D0e"), "Jne De");
        assert_eq!(filter_name("Jane-Doe!"), "Jane-Doe!");
        assert_eq!(filter_name("٣Jane"), "٣Jane");
    }

    #[test]
    fn phone_filter_keeps_ten_digits() {
        assert_eq!(filter_phone("+91 98765-43210"), "9198765432");
        assert_eq!(filter_phone("98765 43210"), "9876543210");
        assert_eq!(filter_phone("abc"), "");
    }

    #[test]
    fn filters_are_idempotent() {
        for input in ["J4ne", "+91 (987) 654-3210 ext 9", "", "plain"] {
            let once = filter_name(input);
            assert_eq!(filter_name(&once), once);
            let once = filter_phone(input);
            assert_eq!(filter_phone(&once), once);
        }
    }

    #[test]
    fn filter_draft_warns_when_name_changed() {
        let draft = StudentDraft {
            name: "Jane2 Doe".into(),
            phone: "98765 43210".into(),
            ..StudentDraft::default()
        };
        let filtered = filter_draft(draft);
        assert_eq!(filtered.draft.name, "Jane Doe");
        assert_eq!(filtered.draft.phone, "9876543210");
        assert_eq!(
            filtered.warnings,
            vec![(Field::Name, NAME_DIGITS_WARNING.to_string())]
        );

        let again = filter_draft(filtered.draft.clone());
        assert!(again.warnings.is_empty());
        assert_eq!(again.draft, filtered.draft);
    }
}
