// src/latex.rs
use thiserror::Error;

use crate::labels::{fill_template, Labels};
use crate::model::{Day, DayState, Period, Week};

// Rendering is the single place where state-tag validity is enforced: a
// tag the schedule parser accepted silently fails here.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid day state '{state}' for day {date}")]
    InvalidDayState { date: String, state: String },
}

// One table row per day. Working days carry a continuation marker and an
// itemized activity list; everything else collapses to a single row with
// an italic status label and zero hours.
fn render_day(day: &Day, labels: &Labels) -> Result<String, RenderError> {
    match &day.state {
        DayState::Work => {
            let mut src = format!("{} & {} & $\\dlsh$ \\\\ \n", day.date, day.working_hours);
            src.push_str("\\multicolumn{3}{l}{\\parbox{135mm}{% \n");
            src.push_str("\\begin{itemize} \n");
            for activity in &day.activities {
                src.push_str("\\item ");
                src.push_str(&activity.text);
                src.push('\n');
            }
            src.push_str("\\end{itemize}}} \\\\ \n");
            Ok(src)
        }
        DayState::Sick => Ok(status_row(day, &labels.sick_note)),
        DayState::Flexitime => Ok(status_row(day, &labels.flexitime_note)),
        DayState::Holiday => {
            if day.note.is_empty() {
                Ok(status_row(day, &labels.holiday_note))
            } else {
                Ok(status_row(day, &day.note))
            }
        }
        DayState::Unknown(tag) => Err(RenderError::InvalidDayState {
            date: day.date.clone(),
            state: tag.clone(),
        }),
    }
}

// Non-working rows always show zero hours, whatever the source row said.
fn status_row(day: &Day, text: &str) -> String {
    format!("{} & 0 & \\textit{{{}}} \\\\ \n", day.date, text)
}

pub fn render_week(period: &Period, week: &Week, labels: &Labels) -> Result<String, RenderError> {
    let mut src = String::from("\\begin{table}[!ht]\n");
    src.push_str(&format!("{} {}\n", labels.week, week.idx + 1));
    src.push_str("\\begin{center}\n");
    src.push_str("\\begin{tabular}{llp{6cm}}\n");
    src.push_str("\\toprule\n");
    src.push_str(&format!(
        "{} & {} & {}\\\\ \n",
        labels.date, labels.working_hours, labels.activities
    ));
    src.push_str("\\midrule \n");

    for day in &week.days {
        src.push_str(&render_day(day, labels)?);
    }

    let total_missed_days = period.missed_days_at_end_of_week(week.idx);
    let supplementary_status = if period.week_is_in_mandatory_period(week.idx) {
        let missed_days = week.missed_days().len().to_string();
        fill_template(
            &labels.mandatory_weeks_info,
            &[&missed_days, &total_missed_days.to_string()],
        )
    } else {
        let extra_days = week.working_days().len().to_string();
        fill_template(
            &labels.extra_weeks_info,
            &[&extra_days, &total_missed_days.to_string()],
        )
    };

    src.push_str("\\midrule \n");
    src.push_str(&format!(
        "\\multicolumn{{3}}{{l}}{{{}}} \\\\ \n",
        supplementary_status
    ));
    src.push_str("\\bottomrule \n");
    src.push_str("\\end{tabular} \n");
    src.push_str("\\end{center} \n");
    src.push_str("\\end{table} \n");
    Ok(src)
}

// The whole document is assembled in memory; nothing reaches disk until
// every week has rendered.
pub fn render_period(period: &Period, labels: &Labels) -> Result<String, RenderError> {
    let mut document = String::new();
    for week in &period.weeks {
        document.push_str(&render_week(period, week, labels)?);
        document.push_str("\n\n\n");
    }
    Ok(document)
}
