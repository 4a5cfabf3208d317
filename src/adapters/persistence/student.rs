use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    adapters::persistence::{PostgresPersistence, parse_json_with_fallback},
    app_error::{AppError, AppResult},
    domain::entities::student::{NewStudent, Student, StudentProfile},
    use_cases::registration::StudentRepo,
};

const STUDENT_COLUMNS: &str = r#"
    id, name, email, roll_number, university_roll_no, event_name, branch, year,
    phone_number, cgpa, back, summary, clubs, aim, believe, expect, domain,
    qr_code, attendance, review, comment,
    round_one_attendance, round_two_attendance, round_one_qualified, round_two_qualified,
    created_at, updated_at
"#;

// Student struct as stored in the db.
#[derive(sqlx::FromRow, Debug)]
pub struct StudentDb {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub roll_number: String,
    pub university_roll_no: String,
    pub event_name: Vec<String>,
    pub branch: String,
    pub year: String,
    pub phone_number: String,
    pub cgpa: String,
    pub back: Option<String>,
    pub summary: Option<String>,
    pub clubs: Option<String>,
    pub aim: Option<String>,
    pub believe: Option<String>,
    pub expect: Option<String>,
    pub domain: Vec<String>,
    pub qr_code: String,
    pub attendance: serde_json::Value,
    pub review: Option<f64>,
    pub comment: String,
    pub round_one_attendance: bool,
    pub round_two_attendance: bool,
    pub round_one_qualified: bool,
    pub round_two_qualified: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<StudentDb> for Student {
    fn from(row: StudentDb) -> Self {
        let attendance =
            parse_json_with_fallback(&row.attendance, "attendance", "student", &row.id.to_string());
        Student {
            id: row.id,
            name: row.name,
            email: row.email,
            roll_number: row.roll_number,
            university_roll_no: row.university_roll_no,
            event_name: row.event_name,
            branch: row.branch,
            year: row.year,
            phone_number: row.phone_number,
            cgpa: row.cgpa,
            profile: StudentProfile {
                back: row.back,
                summary: row.summary,
                clubs: row.clubs,
                aim: row.aim,
                believe: row.believe,
                expect: row.expect,
                domain: row.domain,
            },
            qr_code: row.qr_code,
            attendance,
            review: row.review,
            comment: row.comment,
            round_one_attendance: row.round_one_attendance,
            round_two_attendance: row.round_two_attendance,
            round_one_qualified: row.round_one_qualified,
            round_two_qualified: row.round_two_qualified,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl StudentRepo for PostgresPersistence {
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Student>> {
        let sql = format!("SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1");
        let rec = sqlx::query_as::<_, StudentDb>(&sql)
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(AppError::from)?;
        Ok(rec.map(Student::from))
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        let sql = format!("SELECT {STUDENT_COLUMNS} FROM students WHERE email = $1");
        let rec = sqlx::query_as::<_, StudentDb>(&sql)
            .bind(email.trim().to_lowercase())
            .fetch_optional(self.pool())
            .await
            .map_err(AppError::from)?;
        Ok(rec.map(Student::from))
    }

    async fn insert(&self, student: NewStudent) -> AppResult<Student> {
        let sql = format!(
            r#"
                INSERT INTO students (
                    id, name, email, roll_number, university_roll_no, event_name,
                    branch, year, phone_number, cgpa, back, summary, clubs,
                    aim, believe, expect, domain, qr_code
                )
                VALUES (
                    $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18
                )
                RETURNING {STUDENT_COLUMNS}
            "#
        );
        let rec = sqlx::query_as::<_, StudentDb>(&sql)
            .bind(student.id)
            .bind(student.name)
            .bind(student.email)
            .bind(student.roll_number)
            .bind(student.university_roll_no)
            .bind(student.event_name)
            .bind(student.branch)
            .bind(student.year)
            .bind(student.phone_number)
            .bind(student.cgpa)
            .bind(student.profile.back)
            .bind(student.profile.summary)
            .bind(student.profile.clubs)
            .bind(student.profile.aim)
            .bind(student.profile.believe)
            .bind(student.profile.expect)
            .bind(student.profile.domain)
            .bind(student.qr_code)
            .fetch_one(self.pool())
            .await
            .map_err(AppError::from)?;
        Ok(rec.into())
    }

    async fn add_event(&self, id: Uuid, event: &str) -> AppResult<Student> {
        // Only one of several concurrent appends of the same event matches.
        let sql = format!(
            r#"
                UPDATE students
                SET event_name = array_append(event_name, $2),
                    updated_at = now()
                WHERE id = $1 AND NOT ($2 = ANY(event_name))
                RETURNING {STUDENT_COLUMNS}
            "#
        );
        let rec = sqlx::query_as::<_, StudentDb>(&sql)
            .bind(id)
            .bind(event)
            .fetch_optional(self.pool())
            .await
            .map_err(AppError::from)?
            .ok_or(AppError::AlreadyRegistered)?;
        Ok(rec.into())
    }
}
