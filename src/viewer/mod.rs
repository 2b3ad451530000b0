//! Read-only admin view over a response JSON file.
//!
//! Loading never fails loudly: unreadable or invalid input is logged and the
//! current list is kept as it was.

use chrono::{DateTime, Local, Utc};
use std::fmt::Write as _;
use std::path::Path;

use crate::wizard::AnswerRecord;

pub const EMPTY_MESSAGE: &str = "Upload a response JSON file to view it!";
const NOT_SELECTED: &str = "Not selected";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredResponse {
    pub timestamp: DateTime<Utc>,
    pub data: AnswerRecord,
}

#[derive(Debug, Default)]
pub struct ResponseViewer {
    responses: Vec<StoredResponse>,
}

impl ResponseViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responses(&self) -> &[StoredResponse] {
        &self.responses
    }

    /// Replaces the list with one record, stamped with the load time.
    pub fn load_record(&mut self, data: AnswerRecord) {
        self.responses = vec![StoredResponse {
            timestamp: Utc::now(),
            data,
        }];
    }

    pub fn load_json(&mut self, contents: &str) {
        match serde_json::from_str::<AnswerRecord>(contents) {
            Ok(data) => self.load_record(data),
            Err(e) => tracing::error!(error = %e, "Error parsing JSON"),
        }
    }

    pub fn load_file(&mut self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(contents) => self.load_json(&contents),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Error reading response file");
            }
        }
    }

    pub fn render(&self) -> String {
        if self.responses.is_empty() {
            return format!("{EMPTY_MESSAGE}\n");
        }

        let mut out = String::from("Date Proposal Responses\n");
        for response in &self.responses {
            let _ = writeln!(out);
            let _ = write!(out, "{}", render_response(response));
        }
        out
    }
}

fn or_not_selected(value: &str) -> &str {
    if value.is_empty() { NOT_SELECTED } else { value }
}

fn render_response(response: &StoredResponse) -> String {
    let data = &response.data;
    let local = response.timestamp.with_timezone(&Local);
    let date = data
        .date
        .map_or_else(|| NOT_SELECTED.to_string(), |d| d.format("%-m/%-d/%Y").to_string());
    let time = data.time.map(|t| t.label()).unwrap_or_default();
    let food = data.food_labels().join(", ");

    let mut out = String::new();
    let _ = writeln!(out, "Response Time: {}", local.format("%-m/%-d/%Y, %-I:%M:%S %p"));
    let _ = writeln!(out, "  Date: {date}");
    let _ = writeln!(out, "  Time: {}", or_not_selected(&time));
    let _ = writeln!(out, "  Food Choices: {}", or_not_selected(&food));
    let _ = writeln!(out, "  Movie: {}", or_not_selected(&data.movie));
    let _ = writeln!(out, "  Excitement Level: {}/100", data.excitement);
    out
}
