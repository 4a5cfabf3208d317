//! In-memory mock implementations for the registration ports.

use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::registration::{EmailSender, StudentRepo},
    domain::entities::student::{NewStudent, Student},
};

/// In-memory implementation of StudentRepo for testing.
///
/// Mirrors the unique indexes on email and qr_code.
#[derive(Default)]
pub struct InMemoryStudentRepo {
    pub students: Mutex<Vec<Student>>,
}

impl InMemoryStudentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial students for testing.
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: Mutex::new(students),
        }
    }

    /// Get all students in insertion order (for test assertions).
    pub fn get_all(&self) -> Vec<Student> {
        self.students.lock().unwrap().clone()
    }
}

#[async_trait]
impl StudentRepo for InMemoryStudentRepo {
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Student>> {
        Ok(self
            .students
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        let email = email.trim().to_lowercase();
        Ok(self
            .students
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.email == email)
            .cloned())
    }

    async fn insert(&self, student: NewStudent) -> AppResult<Student> {
        let mut students = self.students.lock().unwrap();

        if students
            .iter()
            .any(|s| s.email == student.email || s.qr_code == student.qr_code)
        {
            return Err(AppError::AlreadyRegistered);
        }

        let now = chrono::Utc::now().naive_utc();
        let stored = Student {
            id: student.id,
            name: student.name,
            email: student.email,
            roll_number: student.roll_number,
            university_roll_no: student.university_roll_no,
            event_name: student.event_name,
            branch: student.branch,
            year: student.year,
            phone_number: student.phone_number,
            cgpa: student.cgpa,
            profile: student.profile,
            qr_code: student.qr_code,
            attendance: vec![],
            review: None,
            comment: String::new(),
            round_one_attendance: false,
            round_two_attendance: false,
            round_one_qualified: false,
            round_two_qualified: false,
            created_at: Some(now),
            updated_at: Some(now),
        };
        students.push(stored.clone());
        Ok(stored)
    }

    async fn add_event(&self, id: Uuid, event: &str) -> AppResult<Student> {
        let mut students = self.students.lock().unwrap();
        let student = students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(AppError::NotFound)?;

        if student.has_event(event) {
            return Err(AppError::AlreadyRegistered);
        }
        student.event_name.push(event.to_string());
        student.updated_at = Some(chrono::Utc::now().naive_utc());

        Ok(student.clone())
    }
}

/// Student repo whose every call fails like a lost database connection.
#[derive(Default)]
pub struct FailingStudentRepo;

#[async_trait]
impl StudentRepo for FailingStudentRepo {
    async fn get_by_id(&self, _id: Uuid) -> AppResult<Option<Student>> {
        Err(AppError::Database("connection reset".into()))
    }

    async fn get_by_email(&self, _email: &str) -> AppResult<Option<Student>> {
        Err(AppError::Database("connection reset".into()))
    }

    async fn insert(&self, _student: NewStudent) -> AppResult<Student> {
        Err(AppError::Database("connection reset".into()))
    }

    async fn add_event(&self, _id: Uuid, _event: &str) -> AppResult<Student> {
        Err(AppError::Database("connection reset".into()))
    }
}

#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Email sender that records messages instead of sending them.
#[derive(Default)]
pub struct InMemoryEmailSender {
    emails: Mutex<Vec<CapturedEmail>>,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn captured_emails(&self) -> Vec<CapturedEmail> {
        self.emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for InMemoryEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        self.emails.lock().unwrap().push(CapturedEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}

/// Email sender that always fails, for delivery-error paths.
#[derive(Default)]
pub struct FailingEmailSender;

#[async_trait]
impl EmailSender for FailingEmailSender {
    async fn send(&self, _to: &str, _subject: &str, _html: &str) -> AppResult<()> {
        Err(AppError::Email("Email API error: 503".into()))
    }
}
