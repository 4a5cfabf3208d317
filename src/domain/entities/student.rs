use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use uuid::Uuid;

/// Institutional branch codes offered on the registration form.
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter,
)]
pub enum Branch {
    CSE,
    ECE,
    ME,
    CE,
    EE,
    IT,
    PCE,
    PE,
    AE,
    EIC,
    CHE,
    #[strum(serialize = "P&I")]
    PAndI,
    Other,
}

/// Year of study. Stored as the bare digit, shown as an ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Year {
    First,
    Second,
    Third,
    Fourth,
}

impl Year {
    pub const ALL: [Year; 4] = [Year::First, Year::Second, Year::Third, Year::Fourth];

    pub fn as_str(&self) -> &'static str {
        match self {
            Year::First => "1",
            Year::Second => "2",
            Year::Third => "3",
            Year::Fourth => "4",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Year::First => "1st",
            Year::Second => "2nd",
            Year::Third => "3rd",
            Year::Fourth => "4th",
        }
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Year {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Year::ALL
            .into_iter()
            .find(|y| y.as_str() == s)
            .ok_or_else(|| format!("Invalid year: {}. Must be 1, 2, 3 or 4", s))
    }
}

/// One attendance mark. Entries are only ever appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub date: DateTime<Utc>,
    #[serde(default = "default_present")]
    pub present: bool,
}

fn default_present() -> bool {
    true
}

/// Optional self-description a student may give when registering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentProfile {
    /// Backlog count as entered.
    pub back: Option<String>,
    pub summary: Option<String>,
    pub clubs: Option<String>,
    pub aim: Option<String>,
    pub believe: Option<String>,
    pub expect: Option<String>,
    /// Areas of interest.
    pub domain: Vec<String>,
}

impl StudentProfile {
    /// Trims every value. Blank answers become absent.
    pub fn normalized(self) -> Self {
        fn text(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        Self {
            back: text(self.back),
            summary: text(self.summary),
            clubs: text(self.clubs),
            aim: text(self.aim),
            believe: text(self.believe),
            expect: text(self.expect),
            domain: self
                .domain
                .into_iter()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }
}

/// A registered student and their per-event check-in/review state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
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
    #[serde(flatten)]
    pub profile: StudentProfile,
    pub qr_code: String,
    pub attendance: Vec<AttendanceEntry>,
    pub review: Option<f64>,
    pub comment: String,
    pub round_one_attendance: bool,
    pub round_two_attendance: bool,
    pub round_one_qualified: bool,
    pub round_two_qualified: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Student {
    pub fn has_event(&self, event: &str) -> bool {
        self.event_name.iter().any(|e| e == event)
    }
}

/// Identity fields for a student that is about to be inserted.
///
/// Per-event state starts at its defaults and timestamps are filled in by the
/// store, so neither appears here.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
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
    pub profile: StudentProfile,
    pub qr_code: String,
}
