use std::{borrow::Cow, collections::BTreeMap, str::FromStr};

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::student::{Branch, StudentProfile, Year};

/// Form field names in display order. These are also the JSON/form keys.
pub const FORM_FIELDS: [&str; 8] = [
    "name",
    "email",
    "branch",
    "year",
    "phoneNumber",
    "universityRollNo",
    "rollNumber",
    "cgpa",
];

const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;
const MAX_CGPA: f32 = 10.0;

/// Registration input as submitted by the form or the JSON API.
///
/// Missing fields deserialize as empty strings so they surface as field-level
/// validation messages rather than as a rejected request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationPayload {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(custom(function = "validate_branch"))]
    pub branch: String,
    #[validate(custom(function = "validate_year"))]
    pub year: String,
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,
    #[validate(length(
        min = 2,
        message = "University roll number must be at least 2 characters"
    ))]
    pub university_roll_no: String,
    #[validate(length(min = 3, message = "Roll number must be at least 3 characters"))]
    pub roll_number: String,
    #[validate(custom(function = "validate_cgpa"))]
    pub cgpa: String,
    /// Event to attach. The HTML form leaves this empty and the server fills in
    /// the configured default event.
    pub event_name: Option<String>,
    /// Optional profile answers, accepted as top-level keys.
    #[serde(flatten)]
    pub profile: StudentProfile,
}

impl RegistrationPayload {
    /// Trims every field and lower-cases the email, mirroring what the store keeps.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            branch: self.branch.trim().to_string(),
            year: self.year.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            university_roll_no: self.university_roll_no.trim().to_string(),
            roll_number: self.roll_number.trim().to_string(),
            cgpa: self.cgpa.trim().to_string(),
            event_name: self
                .event_name
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
            profile: self.profile.normalized(),
        }
    }

    /// Value of a form field by its form key, used to repopulate the form.
    pub fn field_value(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "email" => &self.email,
            "branch" => &self.branch,
            "year" => &self.year,
            "phoneNumber" => &self.phone_number,
            "universityRollNo" => &self.university_roll_no,
            "rollNumber" => &self.roll_number,
            "cgpa" => &self.cgpa,
            _ => "",
        }
    }
}

/// Field-level validation messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message in form order.
    pub fn summary(&self) -> String {
        FORM_FIELDS
            .iter()
            .find_map(|f| self.get(f))
            .unwrap_or("Invalid input")
            .to_string()
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let Some(key) = form_key(&field) else {
                continue;
            };
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {key}"));
            out.insert(key, message);
        }
        FieldErrors(out)
    }
}

/// Normalises the payload and runs the field rules.
pub fn validate_registration(
    payload: RegistrationPayload,
) -> Result<RegistrationPayload, FieldErrors> {
    let payload = payload.normalized();
    match payload.validate() {
        Ok(()) => Ok(payload),
        Err(errors) => Err(FieldErrors::from(&errors)),
    }
}

// Error keys may come back as either `phone_number` or `phoneNumber`.
fn form_key(field: &str) -> Option<&'static str> {
    let wanted = squash(field);
    FORM_FIELDS.into_iter().find(|f| squash(f) == wanted)
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_branch(branch: &str) -> Result<(), ValidationError> {
    Branch::from_str(branch)
        .map(|_| ())
        .map_err(|_| invalid("branch", "Please select a valid branch"))
}

fn validate_year(year: &str) -> Result<(), ValidationError> {
    Year::from_str(year)
        .map(|_| ())
        .map_err(|_| invalid("year", "Please select a valid year"))
}

fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("phone", "Phone number may only contain digits"));
    }
    if phone.len() < MIN_PHONE_DIGITS {
        return Err(invalid("phone", "Phone number must be at least 10 digits"));
    }
    if phone.len() > MAX_PHONE_DIGITS {
        return Err(invalid("phone", "Phone number must be at most 15 digits"));
    }
    Ok(())
}

fn validate_cgpa(cgpa: &str) -> Result<(), ValidationError> {
    if cgpa.is_empty() {
        return Err(invalid("cgpa", "CGPA is required"));
    }
    match cgpa.parse::<f32>() {
        Ok(value) if (0.0..=MAX_CGPA).contains(&value) => Ok(()),
        _ => Err(invalid("cgpa", "CGPA must be a number between 0 and 10")),
    }
}
