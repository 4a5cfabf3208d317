//! Test app state builder for HTTP-level integration testing.
//!
//! `TestAppStateBuilder` creates a minimal `AppState` backed by in-memory mocks.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;
use url::Url;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::registration::{EmailSender, RegistrationUseCases, StudentRepo},
    domain::entities::student::Student,
    infra::config::AppConfig,
    test_utils::{InMemoryEmailSender, InMemoryStudentRepo},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let student = create_test_student(|s| s.event_name = vec!["hackathon".into()]);
///
/// let (app_state, repo, emails) = TestAppStateBuilder::new()
///     .with_student(student)
///     .with_default_event("hackathon")
///     .build_with_mocks();
/// ```
pub struct TestAppStateBuilder {
    students: Vec<Student>,
    default_event: Option<String>,
    student_repo: Option<Arc<dyn StudentRepo>>,
    email_sender: Option<Arc<dyn EmailSender>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            students: vec![],
            default_event: None,
            student_repo: None,
            email_sender: None,
        }
    }

    /// Seed a student into the in-memory repo.
    pub fn with_student(mut self, student: Student) -> Self {
        self.students.push(student);
        self
    }

    pub fn with_default_event(mut self, event: &str) -> Self {
        self.default_event = Some(event.to_string());
        self
    }

    /// Replace the repo entirely (e.g. with a failing one). Seeded students are ignored.
    pub fn with_student_repo(mut self, repo: Arc<dyn StudentRepo>) -> Self {
        self.student_repo = Some(repo);
        self
    }

    pub fn with_email_sender(mut self, sender: Arc<dyn EmailSender>) -> Self {
        self.email_sender = Some(sender);
        self
    }

    /// Build with an in-memory repo and email sender, returned for assertions.
    pub fn build_with_mocks(
        self,
    ) -> (AppState, Arc<InMemoryStudentRepo>, Arc<InMemoryEmailSender>) {
        let repo = Arc::new(InMemoryStudentRepo::with_students(self.students.clone()));
        let email_sender = Arc::new(InMemoryEmailSender::new());

        let app_state = self
            .with_student_repo(repo.clone())
            .with_email_sender(email_sender.clone())
            .build();

        (app_state, repo, email_sender)
    }

    pub fn build(self) -> AppState {
        let config = test_config(self.default_event.clone());

        let repo: Arc<dyn StudentRepo> = self
            .student_repo
            .unwrap_or_else(|| Arc::new(InMemoryStudentRepo::with_students(self.students)));
        let email_sender: Arc<dyn EmailSender> = self
            .email_sender
            .unwrap_or_else(|| Arc::new(InMemoryEmailSender::new()));

        let registration_use_cases = RegistrationUseCases::new(
            repo,
            email_sender,
            config.origin(),
            config.default_event.clone(),
            None,
        );

        AppState {
            config: Arc::new(config),
            registration_use_cases: Arc::new(registration_use_cases),
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn test_config(default_event: Option<String>) -> AppConfig {
    AppConfig {
        database_url: String::new(),
        app_origin: Url::parse("http://localhost:3000").unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
        resend_api_key: SecretString::new("test_resend_key".into()),
        email_from: "events@example.test".to_string(),
        default_event,
        community_link: None,
    }
}
