use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use tera::Tera;

use super::{MailAttachment, OutboundEmail};
use crate::wizard::AnswerRecord;

const BODY_TEMPLATE: &str = r"
<h1>You've got an answer!</h1>
<p>Date: {{ date | safe }}</p>
<p>Time: {{ time }}</p>
<p>Food: {{ food }}</p>
<p>Movie: {{ movie }}</p>
<p>Excitement: {{ excitement }}/100</p>
";

pub fn attachment_filename(now: DateTime<Utc>) -> String {
    format!(
        "date-response-{}.json",
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Renders the HTML summary. User-supplied text is escaped.
pub fn render_body(record: &AnswerRecord) -> Result<String> {
    let mut ctx = tera::Context::new();
    ctx.insert(
        "date",
        &record
            .date
            .map(|d| d.format("%-m/%-d/%Y").to_string())
            .unwrap_or_default(),
    );
    ctx.insert(
        "time",
        &record.time.map(|t| t.label()).unwrap_or_default(),
    );
    ctx.insert("food", &record.food_labels().join(", "));
    ctx.insert("movie", &record.movie);
    ctx.insert("excitement", &record.excitement.value());

    Tera::one_off(BODY_TEMPLATE, &ctx, true).context("render response email body")
}

/// Builds the notification for one response. `raw_payload` is attached
/// pretty-printed, keeping the key order it arrived in.
pub fn compose_response_email(
    record: &AnswerRecord,
    raw_payload: &serde_json::Value,
    sender: &str,
    subject: &str,
    now: DateTime<Utc>,
) -> Result<OutboundEmail> {
    let body = serde_json::to_string_pretty(raw_payload).context("serialize attachment")?;
    Ok(OutboundEmail {
        from: sender.to_string(),
        to: sender.to_string(),
        subject: subject.to_string(),
        html: render_body(record)?,
        attachment: MailAttachment {
            filename: attachment_filename(now),
            content_type: "application/json",
            body,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample() -> (AnswerRecord, serde_json::Value) {
        let raw = json!({
            "date": "2024-06-01",
            "time": "18:00",
            "food": ["Lasagna", "Chicken Pie"],
            "movie": "Titanic",
            "excitement": 75
        });
        (serde_json::from_value(raw.clone()).unwrap(), raw)
    }

    #[test]
    fn body_lists_every_field() {
        let (record, _) = sample();
        let html = render_body(&record).unwrap();

        assert!(html.contains("Date: 6/1/2024"));
        assert!(html.contains("Time: 18:00"));
        assert!(html.contains("Food: Lasagna, Chicken Pie"));
        assert!(html.contains("Movie: Titanic"));
        assert!(html.contains("Excitement: 75/100"));
    }

    #[test]
    fn body_escapes_free_text_movie() {
        let (mut record, _) = sample();
        record.movie = "<script>alert(1)</script>".into();
        let html = render_body(&record).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn attachment_is_timestamped_pretty_json() {
        let (record, raw) = sample();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();
        let email =
            compose_response_email(&record, &raw, "me@example.com", "subject", now).unwrap();

        assert_eq!(email.from, "me@example.com");
        assert_eq!(email.to, "me@example.com");
        assert_eq!(
            email.attachment.filename,
            "date-response-2024-06-01T12:30:00.000Z.json"
        );
        assert_eq!(email.attachment.content_type, "application/json");
        assert!(email.attachment.body.contains("\n  \"movie\": \"Titanic\""));
        let parsed: serde_json::Value = serde_json::from_str(&email.attachment.body).unwrap();
        assert_eq!(parsed, raw);
    }
}
