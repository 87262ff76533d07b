// src/activity_log_tests.rs

#[cfg(test)]
mod tests {
    use crate::activity_log::{
        attach_activities, check_empty_days, ActivityLogError, EmptyDayWarning,
    };
    use crate::model::Period;
    use crate::schedule::parse_schedule_str;

    // Week 1: working days at positions 1 and 3 (position 2 is sick).
    // Week 2: a single working day.
    const SCHEDULE: &str = "\
01;WORK;8
02;SICK
03;WORK;8

04;WORK;8
";

    fn test_period() -> Period {
        Period::new(parse_schedule_str(SCHEDULE).unwrap(), 2)
    }

    #[test]
    fn activities_attach_to_the_working_day_subsequence() {
        let mut period = test_period();
        let log = "\
Week 1
- wrote the parser

- reviewed documentation
Week 2
- planning meeting
";
        attach_activities(&mut period, log).unwrap();

        assert_eq!(period.weeks[0].days[0].activities[0].text, "wrote the parser");
        // the sick day at position 2 is not addressable by the cursor
        assert!(period.weeks[0].days[1].activities.is_empty());
        assert_eq!(
            period.weeks[0].days[2].activities[0].text,
            "reviewed documentation"
        );
        assert_eq!(period.weeks[1].days[0].activities[0].text, "planning meeting");
    }

    #[test]
    fn consecutive_activity_lines_attach_to_the_same_day_in_order() {
        let mut period = test_period();
        attach_activities(&mut period, "Week 1\n- first\n- second\n").unwrap();
        let day = &period.weeks[0].days[0];
        assert_eq!(day.activities.len(), 2);
        assert_eq!(day.activities[0].text, "first");
        assert_eq!(day.activities[1].text, "second");
    }

    #[test]
    fn blank_line_advances_the_cursor_without_attaching() {
        let mut period = test_period();
        attach_activities(&mut period, "Week 1\n\n- second day only\n").unwrap();
        assert!(period.weeks[0].days[0].activities.is_empty());
        assert_eq!(period.weeks[0].days[2].activities[0].text, "second day only");
    }

    #[test]
    fn week_marker_resets_the_cursor() {
        // The cursor runs past the end of week 1, which is harmless as
        // long as no activity line arrives; the next marker resets it.
        let mut period = test_period();
        attach_activities(&mut period, "Week 1\n\n\n\nWeek 2\n- back at the start\n")
            .unwrap();
        assert_eq!(
            period.weeks[1].days[0].activities[0].text,
            "back at the start"
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let mut period = test_period();
        attach_activities(&mut period, "  Week 1\n  - padded entry  \n").unwrap();
        assert_eq!(period.weeks[0].days[0].activities[0].text, "padded entry");
    }

    #[test]
    fn first_marker_must_declare_week_one() {
        let err = attach_activities(&mut test_period(), "Week 2\n- too early\n").unwrap_err();
        match err {
            ActivityLogError::InvalidWeekMarker { line, expected } => {
                assert_eq!(line, 1);
                assert_eq!(expected, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn skipping_a_week_number_is_fatal() {
        let err = attach_activities(&mut test_period(), "Week 1\nWeek 3\n").unwrap_err();
        match err {
            ActivityLogError::InvalidWeekMarker { line, expected } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn marker_past_the_schedule_end_is_fatal() {
        let err = attach_activities(&mut test_period(), "Week 1\nWeek 2\nWeek 3\n").unwrap_err();
        match err {
            ActivityLogError::UnknownWeek { line, week } => {
                assert_eq!(line, 3);
                assert_eq!(week, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn activity_before_any_marker_is_fatal() {
        let err = attach_activities(&mut test_period(), "- free-floating\n").unwrap_err();
        match err {
            ActivityLogError::ActivityBeforeWeek { line } => assert_eq!(line, 1),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn activity_past_the_last_working_day_is_fatal() {
        // week 2 has exactly one working day
        let log = "Week 1\nWeek 2\n- fine\n\n- one too many\n";
        let err = attach_activities(&mut test_period(), log).unwrap_err();
        match err {
            ActivityLogError::TooManyActivities { line, week } => {
                assert_eq!(line, 5);
                assert_eq!(week, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn unrecognized_line_shape_is_fatal() {
        let err = attach_activities(&mut test_period(), "Week 1\nlunch break\n").unwrap_err();
        match err {
            ActivityLogError::UnrecognizedLine { line } => assert_eq!(line, 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn failed_parse_leaves_earlier_attachments_in_place() {
        // In-place mutation is observable: the caller aborts the run, so
        // partially attached activities are never rendered.
        let mut period = test_period();
        let err = attach_activities(&mut period, "Week 1\n- kept\nWeek 3\n");
        assert!(err.is_err());
        assert_eq!(period.weeks[0].days[0].activities[0].text, "kept");
    }

    // --- Consistency checker ---

    #[test]
    fn check_empty_days_flags_unlogged_working_days() {
        let period = test_period();
        let warnings = check_empty_days(&period);
        assert_eq!(
            warnings,
            vec![
                EmptyDayWarning { week: 1, day: 1 },
                EmptyDayWarning { week: 1, day: 3 },
                EmptyDayWarning { week: 2, day: 1 },
            ]
        );
        assert_eq!(
            warnings[1].to_string(),
            "day 3 in week 1 has no activities"
        );
    }

    #[test]
    fn check_empty_days_is_silent_when_every_working_day_is_logged() {
        let mut period = test_period();
        attach_activities(&mut period, "Week 1\n- a\n\n- b\nWeek 2\n- c\n").unwrap();
        assert!(check_empty_days(&period).is_empty());
    }

    #[test]
    fn check_empty_days_ignores_non_working_days() {
        let period = Period::new(parse_schedule_str("01;SICK\n02;HOLIDAY;\n").unwrap(), 2);
        assert!(check_empty_days(&period).is_empty());
    }
}
