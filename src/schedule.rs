// src/schedule.rs
use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::model::{Day, DayState, Week};

// Error type for schedule file parsing. Every variant aborts the run;
// line numbers are 1-based.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing field {field} in schedule row (line {line})")]
    MissingField { line: usize, field: usize },

    #[error("Invalid working hours '{value}' in schedule row (line {line})")]
    InvalidHours { line: usize, value: String },
}

// Reads the whole schedule file into weeks. Blank rows separate weeks;
// the trailing group after the last blank row forms the final week even
// when it is empty, so weeks parsed = blank separators + 1.
pub fn parse_schedule(path: impl AsRef<Path>) -> Result<Vec<Week>, ScheduleError> {
    let content = fs::read_to_string(path)?;
    parse_schedule_str(&content)
}

pub fn parse_schedule_str(content: &str) -> Result<Vec<Week>, ScheduleError> {
    let mut weeks: Vec<Week> = Vec::new();
    let mut current_week_days: Vec<Day> = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.is_empty() {
            let week_idx = weeks.len();
            weeks.push(Week::new(week_idx, std::mem::take(&mut current_week_days)));
        } else {
            current_week_days.push(parse_day_line(line, idx + 1)?);
        }
    }
    let week_idx = weeks.len();
    weeks.push(Week::new(week_idx, current_week_days));
    Ok(weeks)
}

// Rows are fed to the csv reader one line at a time: blank lines are week
// separators here, while the csv crate would silently skip them.
fn parse_day_line(line: &str, line_no: usize) -> Result<Day, ScheduleError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .quote(b'"')
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let record = match reader.records().next() {
        Some(record) => record?,
        None => {
            return Err(ScheduleError::MissingField {
                line: line_no,
                field: 1,
            })
        }
    };
    parse_day_row(&record, line_no)
}

// Field 0 = date, field 1 = state tag. Field 2 is the working hours for
// WORK rows and the note text for HOLIDAY rows; any other state ignores
// it. State tags are not validated here.
fn parse_day_row(record: &csv::StringRecord, line_no: usize) -> Result<Day, ScheduleError> {
    let date = record.get(0).ok_or(ScheduleError::MissingField {
        line: line_no,
        field: 1,
    })?;
    let state_tag = record.get(1).ok_or(ScheduleError::MissingField {
        line: line_no,
        field: 2,
    })?;
    let state = DayState::from_tag(state_tag);

    let working_hours = if state == DayState::Work {
        let raw = record.get(2).ok_or(ScheduleError::MissingField {
            line: line_no,
            field: 3,
        })?;
        raw.trim()
            .parse::<Decimal>()
            .map_err(|_| ScheduleError::InvalidHours {
                line: line_no,
                value: raw.to_string(),
            })?
    } else {
        Decimal::ZERO
    };

    let note = if state == DayState::Holiday {
        record
            .get(2)
            .ok_or(ScheduleError::MissingField {
                line: line_no,
                field: 3,
            })?
            .to_string()
    } else {
        String::new()
    };

    Ok(Day::new(date.to_string(), state, working_hours, note))
}
