use serde::{Deserialize, Serialize};
use std::fmt;

/// The form fields of a student record, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RollNo,
    Name,
    Email,
    Phone,
    Course,
    Address,
}

impl Field {
    /// Fields that carry a validator. Address is free text.
    pub const VALIDATED: [Field; 5] = [
        Field::RollNo,
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Course,
    ];

    /// Serialized key, matching the stored JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Field::RollNo => "rollNo",
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Course => "course",
            Field::Address => "address",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::RollNo => "Roll Number",
            Field::Name => "Full Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Course => "Course",
            Field::Address => "Address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One admitted student, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: i64,
    pub roll_no: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    #[serde(default)]
    pub address: String,
}

impl StudentRecord {
    /// Builds a record from a validated draft. Roll numbers are stored uppercase.
    pub fn from_valid(id: i64, valid: ValidDraft) -> Self {
        let draft = valid.into_inner();
        Self {
            id,
            roll_no: draft.roll_no.to_uppercase(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            course: draft.course,
            address: draft.address,
        }
    }

    /// Replaces every field except `id`.
    pub fn apply(&mut self, valid: ValidDraft) {
        let id = self.id;
        *self = Self::from_valid(id, valid);
    }
}

/// Raw, not-yet-validated input for a student record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentDraft {
    pub roll_no: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub address: String,
}

impl StudentDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::RollNo => &self.roll_no,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Course => &self.course,
            Field::Address => &self.address,
        }
    }
}

impl From<&StudentRecord> for StudentDraft {
    fn from(record: &StudentRecord) -> Self {
        Self {
            roll_no: record.roll_no.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            course: record.course.clone(),
            address: record.address.clone(),
        }
    }
}

/// A draft that passed every field validator.
///
/// Only [`crate::validate::validate_draft`] can construct one, so a
/// `StudentRecord` can never be built from unchecked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft(StudentDraft);

impl ValidDraft {
    pub(crate) fn new(draft: StudentDraft) -> Self {
        Self(draft)
    }

    pub fn as_draft(&self) -> &StudentDraft {
        &self.0
    }

    pub fn into_inner(self) -> StudentDraft {
        self.0
    }
}

/// Per-field validation messages. An empty string means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub roll_no: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::RollNo => &self.roll_no,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Course => &self.course,
            Field::Address => "",
        }
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        match field {
            Field::RollNo => self.roll_no = message,
            Field::Name => self.name = message,
            Field::Email => self.email = message,
            Field::Phone => self.phone = message,
            Field::Course => self.course = message,
            Field::Address => {}
        }
    }

    pub fn has_errors(&self) -> bool {
        Field::VALIDATED.iter().any(|f| !self.get(*f).is_empty())
    }

    /// Fields with a non-empty message, in form order.
    pub fn failing(&self) -> Vec<(Field, &str)> {
        Field::VALIDATED
            .iter()
            .map(|f| (*f, self.get(*f)))
            .filter(|(_, msg)| !msg.is_empty())
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .failing()
            .into_iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        f.write_str(&parts.join("; "))
    }
}
