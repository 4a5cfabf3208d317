use url::Url;

const BRAND_NAME: &str = "Event Management System";
const ORGANISER: &str = "Team Event Management System, RTU Kota";
const LOGO_URL: &str =
    "https://res.cloudinary.com/dzk5x7rjz/image/upload/v1744756604/RTU_logo_me4bn1.png";
const QR_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";
const QR_SIZE: &str = "200x200";

/// URL of a remotely rendered QR image that encodes `payload`.
pub fn qr_image_url(payload: &str) -> String {
    match Url::parse_with_params(QR_SERVICE_URL, &[("data", payload), ("size", QR_SIZE)]) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{QR_SERVICE_URL}?size={QR_SIZE}"),
    }
}

/// Minimal escaping for text and attribute values placed into HTML.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn primary_button(url: &str, label: &str) -> String {
    format!(
        r#"<a href="{url}" target="_blank" style="display:inline-block;padding:12px 20px;background-color:#25D366;color:#ffffff;text-decoration:none;border-radius:6px;font-size:14px;font-weight:bold;">{label}</a>"#,
        url = escape_html(url),
        label = escape_html(label),
    )
}

/// Confirmation email sent after a successful registration.
///
/// The call-to-action points at the check-in payload itself.
pub fn registration_email(name: &str, roll_number: &str, qr_payload_url: &str) -> (String, String) {
    registration_email_with_link(
        name,
        roll_number,
        qr_payload_url,
        qr_payload_url,
        "Open check-in pass",
    )
}

/// Same as [`registration_email`] with an explicit call-to-action link,
/// e.g. an event community group.
pub fn registration_email_with_link(
    name: &str,
    roll_number: &str,
    qr_payload_url: &str,
    cta_url: &str,
    cta_label: &str,
) -> (String, String) {
    let subject = format!("{BRAND_NAME}: registration successful");
    let qr_src = escape_html(&qr_image_url(qr_payload_url));
    let button = primary_button(cta_url, cta_label);

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <body style="margin:0;padding:24px;font-family:Arial,Helvetica,sans-serif;background-color:#f6f9fc;text-align:center;">
    <div style="background:#ffffff;border-radius:10px;max-width:500px;margin:auto;padding:20px;box-shadow:0 4px 12px rgba(0,0,0,0.1);">
      <img src="{logo}" alt="Logo" style="width:100px;margin-bottom:15px;" />
      <h2 style="color:#2c3e50;margin-bottom:5px;">Registration Successful</h2>
      <p style="color:#7f8c8d;margin-bottom:20px;">{organiser}</p>
      <p style="font-size:16px;color:#2c3e50;">Hello <strong>{name}</strong>,</p>
      <p style="font-size:14px;color:#555;"><strong>Roll No:</strong> {roll_number}</p>
      <p style="font-size:14px;color:#2c3e50;margin-top:20px;">Please present the QR code below at event check-in:</p>
      <div style="margin:20px 0;">
        <img src="{qr_src}" alt="QR Code" style="width:180px;height:180px;border:1px solid #ddd;border-radius:8px;" />
      </div>
      <div style="margin:20px 0;">{button}</div>
      <hr style="margin:30px 0;border:none;border-top:1px solid #eee;" />
      <p style="font-size:13px;color:#888;">Thank you for registering!</p>
      <p style="font-size:13px;font-weight:bold;color:#2c3e50;">{organiser}</p>
    </div>
  </body>
</html>
"#,
        logo = LOGO_URL,
        organiser = ORGANISER,
        name = escape_html(name),
        roll_number = escape_html(roll_number),
        qr_src = qr_src,
        button = button,
    );
    (subject, html)
}
