use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::{
        email_templates::{registration_email, registration_email_with_link},
        validators::{RegistrationPayload, validate_registration},
    },
    domain::entities::student::{NewStudent, Student},
};

#[async_trait]
pub trait StudentRepo: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Student>>;
    async fn get_by_email(&self, email: &str) -> AppResult<Option<Student>>;
    /// Fails with `AlreadyRegistered` when the email or token is taken.
    async fn insert(&self, student: NewStudent) -> AppResult<Student>;
    /// Appends `event` to the student's events. Fails with `AlreadyRegistered`
    /// when the event is already there, including when a concurrent request
    /// appended it first.
    async fn add_event(&self, id: Uuid, event: &str) -> AppResult<Student>;
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()>;
}

/// Wire result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RegistrationResult {
    pub fn ok(user_id: Uuid) -> Self {
        Self {
            success: true,
            user_id: Some(user_id.to_string()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            user_id: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Registration {
    /// A new student record was inserted.
    Created(Student),
    /// An existing student was attached to another event.
    EventAdded(Student),
}

impl Registration {
    pub fn student(&self) -> &Student {
        match self {
            Registration::Created(s) | Registration::EventAdded(s) => s,
        }
    }
}

#[derive(Clone)]
pub struct RegistrationUseCases {
    repo: Arc<dyn StudentRepo>,
    email: Arc<dyn EmailSender>,
    app_origin: String,
    default_event: Option<String>,
    community_link: Option<String>,
}

impl RegistrationUseCases {
    pub fn new(
        repo: Arc<dyn StudentRepo>,
        email: Arc<dyn EmailSender>,
        app_origin: String,
        default_event: Option<String>,
        community_link: Option<String>,
    ) -> Self {
        Self {
            repo,
            email,
            app_origin,
            default_event,
            community_link,
        }
    }

    /// Validates the payload, then creates the student or attaches the event to
    /// the existing record with the same email.
    #[instrument(skip(self, payload))]
    pub async fn register(&self, payload: RegistrationPayload) -> AppResult<Registration> {
        let payload = validate_registration(payload)
            .map_err(|errors| AppError::InvalidInput(errors.summary()))?;
        let event = payload
            .event_name
            .clone()
            .or_else(|| self.default_event.clone());

        let registration = match self.repo.get_by_email(&payload.email).await? {
            Some(existing) => match event {
                Some(event) if !existing.has_event(&event) => {
                    let student = self.repo.add_event(existing.id, &event).await?;
                    tracing::info!(student_id = %student.id, event = %event, "Event added to existing student");
                    Registration::EventAdded(student)
                }
                _ => return Err(AppError::AlreadyRegistered),
            },
            None => {
                let student = self
                    .repo
                    .insert(NewStudent {
                        id: Uuid::new_v4(),
                        name: payload.name,
                        email: payload.email,
                        roll_number: payload.roll_number,
                        university_roll_no: payload.university_roll_no,
                        event_name: event.into_iter().collect(),
                        branch: payload.branch,
                        year: payload.year,
                        phone_number: payload.phone_number,
                        cgpa: payload.cgpa,
                        profile: payload.profile,
                        qr_code: generate_check_in_token(),
                    })
                    .await?;
                tracing::info!(student_id = %student.id, "Student registered");
                Registration::Created(student)
            }
        };

        self.send_confirmation(registration.student()).await;
        Ok(registration)
    }

    #[instrument(skip(self))]
    pub async fn get_student(&self, id: Uuid) -> AppResult<Student> {
        self.repo.get_by_id(id).await?.ok_or(AppError::NotFound)
    }

    /// URL encoded into the QR code and scanned at check-in.
    pub fn check_in_url(&self, qr_code: &str) -> String {
        format!("{}/check-in/{}", self.app_origin.trim_end_matches('/'), qr_code)
    }

    // Mail delivery is best effort: the record is already stored.
    async fn send_confirmation(&self, student: &Student) {
        let payload_url = self.check_in_url(&student.qr_code);
        let (subject, html) = match &self.community_link {
            Some(link) => registration_email_with_link(
                &student.name,
                &student.roll_number,
                &payload_url,
                link,
                "Join the community group",
            ),
            None => registration_email(&student.name, &student.roll_number, &payload_url),
        };

        if let Err(err) = self.email.send(&student.email, &subject, &html).await {
            tracing::warn!(student_id = %student.id, error = %err, "Failed to send registration email");
        }
    }
}

fn generate_check_in_token() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
