// src/model.rs
use rust_decimal::Decimal;

// --- Core Data Structures ---

// A single free-text activity line, owned by the working day it was
// reported for. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub text: String,
}

impl Activity {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

// Day states as they appear in the schedule file. Unrecognized tags are
// carried verbatim and only rejected when the report is rendered; until
// then they count as neither working nor missed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayState {
    Work,
    Sick,
    Flexitime,
    Holiday,
    Unknown(String),
}

impl DayState {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "WORK" => Self::Work,
            "SICK" => Self::Sick,
            "FLEXITIME" => Self::Flexitime,
            "HOLIDAY" => Self::Holiday,
            other => Self::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    pub date: String,
    pub state: DayState,
    pub working_hours: Decimal,
    pub note: String,
    pub activities: Vec<Activity>,
}

impl Day {
    pub fn new(date: String, state: DayState, working_hours: Decimal, note: String) -> Self {
        Self {
            date,
            state,
            working_hours,
            note,
            activities: Vec::new(),
        }
    }

    pub fn is_working_day(&self) -> bool {
        self.state == DayState::Work
    }

    pub fn is_missed_day(&self) -> bool {
        matches!(self.state, DayState::Sick | DayState::Flexitime)
    }
}

// One block of the schedule file. `idx` is zero-based and purely
// positional: it reflects the block's position between blank-row
// separators, nothing in the file carries it.
#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub idx: usize,
    pub days: Vec<Day>,
}

impl Week {
    pub fn new(idx: usize, days: Vec<Day>) -> Self {
        Self { idx, days }
    }

    pub fn working_days(&self) -> Vec<&Day> {
        self.days.iter().filter(|day| day.is_working_day()).collect()
    }

    // Only the activity log parser needs write access to working days.
    pub fn working_days_mut(&mut self) -> Vec<&mut Day> {
        self.days
            .iter_mut()
            .filter(|day| day.is_working_day())
            .collect()
    }

    pub fn missed_days(&self) -> Vec<&Day> {
        self.days.iter().filter(|day| day.is_missed_day()).collect()
    }
}

// The whole reporting span. Owns every week; the leading `mandatory_weeks`
// weeks are subject to mandatory-attendance accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    pub weeks: Vec<Week>,
    pub mandatory_weeks: usize,
}

impl Period {
    pub fn new(weeks: Vec<Week>, mandatory_weeks: usize) -> Self {
        Self {
            weeks,
            mandatory_weeks,
        }
    }

    // Signed balance at the end of `week_idx`, accumulated in index order
    // from week 0: missed days add inside the mandatory period, worked
    // days subtract outside it. Callers interpret the sign per period
    // type, see the trailer rendering.
    pub fn missed_days_at_end_of_week(&self, week_idx: usize) -> i64 {
        let mut total_missed_days = 0i64;
        for week in &self.weeks {
            if self.week_is_in_mandatory_period(week.idx) {
                total_missed_days += week.missed_days().len() as i64;
            } else {
                total_missed_days -= week.working_days().len() as i64;
            }
            if week.idx == week_idx {
                break;
            }
        }
        total_missed_days
    }

    pub fn week_is_in_mandatory_period(&self, week_idx: usize) -> bool {
        week_idx < self.mandatory_weeks
    }
}
