// src/activity_log.rs
use std::fmt;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::model::{Activity, Period};

// Literal keywords of the log grammar. The rendered week label localizes,
// the input marker does not.
const WEEK_MARKER: &str = "Week";
const ACTIVITY_PREFIX: &str = "- ";

// Error type for activity log parsing. Every variant aborts the run;
// line numbers are 1-based.
#[derive(Error, Debug)]
pub enum ActivityLogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid week marker (line {line}): expected 'Week {expected}'")]
    InvalidWeekMarker { line: usize, expected: usize },

    #[error("Week {week} has no matching schedule week (line {line})")]
    UnknownWeek { line: usize, week: usize },

    #[error("Activity listed before any week marker (line {line})")]
    ActivityBeforeWeek { line: usize },

    #[error("Too many activities for week {week} (line {line})")]
    TooManyActivities { line: usize, week: usize },

    #[error("Parsing failed (line {line})")]
    UnrecognizedLine { line: usize },
}

pub fn read_activities(
    period: &mut Period,
    path: impl AsRef<Path>,
) -> Result<(), ActivityLogError> {
    let content = fs::read_to_string(path)?;
    attach_activities(period, &content)
}

// Second pass of the pipeline and the only writer of `Day::activities`.
// Week markers must appear as `Week 1`, `Week 2`, ... in gap-free order.
// Within a week a cursor walks the working-day subsequence: `- ` lines
// attach to the day under the cursor, blank lines advance it. Attachment
// is purely positional.
pub fn attach_activities(period: &mut Period, content: &str) -> Result<(), ActivityLogError> {
    let mut week_idx: Option<usize> = None;
    let mut working_day_idx = 0usize;

    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();

        if line.starts_with(WEEK_MARKER) {
            let next_week = match week_idx {
                Some(current) => current + 1,
                None => 0,
            };
            let expected = format!("{} {}", WEEK_MARKER, next_week + 1);
            if line != expected {
                return Err(ActivityLogError::InvalidWeekMarker {
                    line: line_no,
                    expected: next_week + 1,
                });
            }
            if next_week >= period.weeks.len() {
                return Err(ActivityLogError::UnknownWeek {
                    line: line_no,
                    week: next_week + 1,
                });
            }
            week_idx = Some(next_week);
            working_day_idx = 0;
        } else if let Some(text) = line.strip_prefix(ACTIVITY_PREFIX) {
            let current = match week_idx {
                Some(current) => current,
                None => return Err(ActivityLogError::ActivityBeforeWeek { line: line_no }),
            };
            let week = &mut period.weeks[current];
            match week.working_days_mut().into_iter().nth(working_day_idx) {
                Some(day) => day.activities.push(Activity::new(text)),
                None => {
                    return Err(ActivityLogError::TooManyActivities {
                        line: line_no,
                        week: current + 1,
                    })
                }
            }
        } else if line.is_empty() {
            working_day_idx += 1;
        } else {
            return Err(ActivityLogError::UnrecognizedLine { line: line_no });
        }
    }

    Ok(())
}

// A working day that never received an activity line. Positions are
// 1-based for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyDayWarning {
    pub week: usize,
    pub day: usize,
}

impl fmt::Display for EmptyDayWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} in week {} has no activities", self.day, self.week)
    }
}

// Advisory only: an empty working day is suspicious but never fatal.
pub fn check_empty_days(period: &Period) -> Vec<EmptyDayWarning> {
    let mut warnings = Vec::new();
    for week in &period.weeks {
        for (idx, day) in week.days.iter().enumerate() {
            if day.is_working_day() && day.activities.is_empty() {
                warnings.push(EmptyDayWarning {
                    week: week.idx + 1,
                    day: idx + 1,
                });
            }
        }
    }
    warnings
}
