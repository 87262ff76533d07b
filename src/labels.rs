// src/labels.rs
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown report language '{0}' (expected 'en' or 'de')")]
    UnknownLanguage(String),
}

// All user-facing strings of the rendered report. Selected once at
// startup and passed by reference to the renderer; never mutated after
// load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub week: String,
    pub sick_note: String,
    pub flexitime_note: String,
    pub holiday_note: String,
    pub date: String,
    pub working_hours: String,
    pub activities: String,
    // Trailer templates; `{}` placeholders are filled positionally with
    // the per-week count and the running balance.
    pub mandatory_weeks_info: String,
    pub extra_weeks_info: String,
}

impl Labels {
    pub fn english() -> Self {
        Self {
            week: "Week".into(),
            sick_note: "Illness".into(),
            flexitime_note: "Flexitime".into(),
            holiday_note: "Holiday".into(),
            date: "Date".into(),
            working_hours: "Working hours".into(),
            activities: "Activities".into(),
            mandatory_weeks_info: "Missed days: {} ({} total)".into(),
            extra_weeks_info: "Extra days: {} ({} more to take)".into(),
        }
    }

    pub fn german() -> Self {
        Self {
            week: "Woche".into(),
            sick_note: "Krankheitsbedingte Abwesenheit".into(),
            flexitime_note: "Gleitzeitabbau".into(),
            holiday_note: "Gesetzlicher Feiertag".into(),
            date: "Datum".into(),
            working_hours: "Arbeitszeit (h)".into(),
            activities: "Tätigkeiten".into(),
            mandatory_weeks_info: "Nachzuholende Tage: {} ({} insgesamt)".into(),
            extra_weeks_info: "Nachgeholte Tage: {} ({} noch nachzuholen)".into(),
        }
    }

    pub fn for_language(language: &str) -> Result<Self, LabelsError> {
        match language.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::english()),
            "de" | "german" => Ok(Self::german()),
            other => Err(LabelsError::UnknownLanguage(other.to_string())),
        }
    }

    // A labels file replaces the whole set, not individual entries.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LabelsError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}

// Fills the next `{}` placeholder for each argument, left to right.
pub fn fill_template(template: &str, args: &[&str]) -> String {
    let mut out = template.to_string();
    for arg in args {
        out = out.replacen("{}", arg, 1);
    }
    out
}
