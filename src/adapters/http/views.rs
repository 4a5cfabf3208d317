//! Server-rendered pages: the registration form and the student dashboard.

use strum::IntoEnumIterator;

use crate::{
    application::{
        email_templates::{escape_html, qr_image_url},
        validators::{FieldErrors, RegistrationPayload},
    },
    domain::entities::student::{Branch, Student, Year},
};

const SITE_TITLE: &str = "Event Management System";

/// Banner shown above the form, the server-side stand-in for a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

impl Notification {
    pub fn registration_failed(description: impl Into<String>) -> Self {
        Self {
            title: "Registration failed".to_string(),
            description: description.into(),
            destructive: true,
        }
    }

    fn render(&self) -> String {
        let (bg, fg) = if self.destructive {
            ("#fee2e2", "#991b1b")
        } else {
            ("#dcfce7", "#166534")
        };
        format!(
            r#"<div role="alert" class="notification" style="background:{bg};color:{fg};padding:12px 16px;border-radius:8px;margin-bottom:16px;"><strong>{title}</strong><p style="margin:4px 0 0;">{description}</p></div>"#,
            title = escape_html(&self.title),
            description = escape_html(&self.description),
        )
    }
}

struct TextField {
    key: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
}

const NAME: TextField = TextField {
    key: "name",
    label: "Full Name",
    input_type: "text",
    placeholder: "Enter your full name",
};
const EMAIL: TextField = TextField {
    key: "email",
    label: "Email",
    input_type: "email",
    placeholder: "your.email@gmail.com",
};
const PHONE: TextField = TextField {
    key: "phoneNumber",
    label: "Phone Number",
    input_type: "tel",
    placeholder: "9876543210",
};
const UNIVERSITY_ROLL: TextField = TextField {
    key: "universityRollNo",
    label: "University Roll Number",
    input_type: "text",
    placeholder: "22EUCCS0XX",
};
const COLLEGE_ROLL: TextField = TextField {
    key: "rollNumber",
    label: "College Roll Number",
    input_type: "text",
    placeholder: "22/2XX",
};
const CGPA: TextField = TextField {
    key: "cgpa",
    label: "CGPA",
    input_type: "text",
    placeholder: "9.4",
};

fn field_error(errors: &FieldErrors, key: &str) -> String {
    errors
        .get(key)
        .map(|msg| {
            format!(
                r#"<p class="field-error" data-field="{key}" style="color:#b91c1c;font-size:13px;margin:4px 0 0;">{}</p>"#,
                escape_html(msg)
            )
        })
        .unwrap_or_default()
}

fn text_input(field: &TextField, values: &RegistrationPayload, errors: &FieldErrors) -> String {
    format!(
        r#"<div class="field"><label for="{key}">{label}</label><input id="{key}" name="{key}" type="{input_type}" placeholder="{placeholder}" value="{value}" />{error}</div>"#,
        key = field.key,
        label = field.label,
        input_type = field.input_type,
        placeholder = field.placeholder,
        value = escape_html(values.field_value(field.key)),
        error = field_error(errors, field.key),
    )
}

fn select_input(
    key: &str,
    label: &str,
    prompt: &str,
    options: &[(String, String)],
    selected: &str,
    errors: &FieldErrors,
) -> String {
    let mut opts = format!(r#"<option value="">{prompt}</option>"#);
    for (value, text) in options {
        let sel = if value == selected { " selected" } else { "" };
        opts.push_str(&format!(
            r#"<option value="{value}"{sel}>{text}</option>"#,
            value = escape_html(value),
            text = escape_html(text),
        ));
    }
    format!(
        r#"<div class="field"><label for="{key}">{label}</label><select id="{key}" name="{key}">{opts}</select>{error}</div>"#,
        error = field_error(errors, key),
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title} | {site}</title>
  </head>
  <body style="margin:0;font-family:Arial,Helvetica,sans-serif;background:#f8fafc;">
    <header style="border-bottom:1px solid #e5e7eb;padding:16px;background:#fff;"><strong>{site}</strong></header>
    <main style="max-width:480px;margin:32px auto;background:#fff;border:1px solid #e5e7eb;border-radius:12px;padding:24px;">
{body}
    </main>
  </body>
</html>
"#,
        title = escape_html(title),
        site = SITE_TITLE,
        body = body,
    )
}

/// Registration form, repopulated with `values` and annotated with `errors`.
pub fn register_page(
    values: &RegistrationPayload,
    errors: &FieldErrors,
    notification: Option<&Notification>,
) -> String {
    let branches: Vec<(String, String)> = Branch::iter()
        .map(|b| (b.to_string(), b.to_string()))
        .collect();
    let years: Vec<(String, String)> = Year::ALL
        .iter()
        .map(|y| (y.as_str().to_string(), y.label().to_string()))
        .collect();

    let fields = [
        text_input(&NAME, values, errors),
        text_input(&EMAIL, values, errors),
        select_input("branch", "Branch", "Select Branch", &branches, &values.branch, errors),
        select_input("year", "Year", "Select Year", &years, &values.year, errors),
        text_input(&PHONE, values, errors),
        text_input(&UNIVERSITY_ROLL, values, errors),
        text_input(&COLLEGE_ROLL, values, errors),
        text_input(&CGPA, values, errors),
    ]
    .concat();

    let body = format!(
        r#"<h1 style="margin:0 0 4px;">Student Registration</h1>
<p style="margin:0 0 16px;color:#6b7280;">Register yourself to get your QR code</p>
{notification}
<form method="post" action="/register">
{fields}
<button type="submit" style="width:100%;margin-top:16px;padding:10px;">Register</button>
</form>
<p style="text-align:center;font-size:14px;">Already registered? <a href="/student-dashboard">Go to Dashboard</a></p>"#,
        notification = notification.map(Notification::render).unwrap_or_default(),
        fields = fields,
    );
    layout("Student Registration", &body)
}

/// Dashboard for a registered student with the check-in QR code.
pub fn dashboard_page(student: &Student, check_in_url: &str) -> String {
    let events = if student.event_name.is_empty() {
        "<li>No events yet</li>".to_string()
    } else {
        student
            .event_name
            .iter()
            .map(|e| format!("<li>{}</li>", escape_html(e)))
            .collect::<String>()
    };

    let body = format!(
        r#"<h1 style="margin:0 0 16px;">Hello, {name}</h1>
<p><strong>Roll No:</strong> {roll_number}</p>
<p><strong>Branch:</strong> {branch} &middot; <strong>Year:</strong> {year}</p>
<h2 style="font-size:16px;">Your events</h2>
<ul>{events}</ul>
<p>Present this QR code at event check-in:</p>
<img src="{qr_src}" alt="QR Code" style="width:200px;height:200px;border:1px solid #ddd;border-radius:8px;" />"#,
        name = escape_html(&student.name),
        roll_number = escape_html(&student.roll_number),
        branch = escape_html(&student.branch),
        year = escape_html(&student.year),
        events = events,
        qr_src = escape_html(&qr_image_url(check_in_url)),
    );
    layout("Dashboard", &body)
}

pub fn not_found_page(message: &str) -> String {
    let body = format!(
        r#"<h1 style="margin:0 0 8px;">Not found</h1><p>{}</p><p><a href="/register">Register</a></p>"#,
        escape_html(message)
    );
    layout("Not found", &body)
}
