//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    application::validators::RegistrationPayload, domain::entities::student::Student,
};

/// Create a registration payload that passes every field rule.
pub fn create_test_payload(
    overrides: impl FnOnce(&mut RegistrationPayload),
) -> RegistrationPayload {
    let mut payload = RegistrationPayload {
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        branch: "CSE".to_string(),
        year: "2".to_string(),
        phone_number: "9876543210".to_string(),
        university_roll_no: "22EUCCS001".to_string(),
        roll_number: "22/201".to_string(),
        cgpa: "9.4".to_string(),
        event_name: None,
        profile: Default::default(),
    };
    overrides(&mut payload);
    payload
}

/// Create a stored student with sensible defaults.
pub fn create_test_student(overrides: impl FnOnce(&mut Student)) -> Student {
    let mut student = Student {
        id: Uuid::new_v4(),
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        roll_number: "22/201".to_string(),
        university_roll_no: "22EUCCS001".to_string(),
        event_name: vec![],
        branch: "CSE".to_string(),
        year: "2".to_string(),
        phone_number: "9876543210".to_string(),
        cgpa: "9.4".to_string(),
        profile: Default::default(),
        qr_code: format!("qr_{}", Uuid::new_v4().simple()),
        attendance: vec![],
        review: None,
        comment: String::new(),
        round_one_attendance: false,
        round_two_attendance: false,
        round_one_qualified: false,
        round_two_qualified: false,
        created_at: Some(test_datetime()),
        updated_at: Some(test_datetime()),
    };
    overrides(&mut student);
    student
}

/// Fixed timestamp for reproducible fixtures.
pub fn test_datetime() -> NaiveDateTime {
    chrono::DateTime::from_timestamp(1_744_756_604, 0)
        .expect("valid timestamp")
        .naive_utc()
}
