#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use lextrack::db::cases::Cases;
    use lextrack::db::time_logs::TimeLogs;
    use lextrack::libs::case::{Case, CaseStatus};
    use lextrack::libs::time_log::{ActivityType, TimeLog};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TimeLogTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TimeLogTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TimeLogTestContext { _temp_dir: temp_dir }
        }
    }

    fn create_case(title: &str) -> i64 {
        Cases::new().unwrap().insert(&Case::new(title, "Client", None, CaseStatus::Active)).unwrap()
    }

    fn interval(day: u32, start: (u32, u32), end: (u32, u32)) -> (chrono::NaiveDateTime, chrono::NaiveDateTime) {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        (
            date.and_hms_opt(start.0, start.1, 0).unwrap(),
            date.and_hms_opt(end.0, end.1, 0).unwrap(),
        )
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_time_log_insert_and_get(_ctx: &mut TimeLogTestContext) {
        let case_id = create_case("Smith v. Jones");
        let mut logs = TimeLogs::new().unwrap();

        let (start, end) = interval(15, (9, 0), (10, 30));
        let log = TimeLog::new(case_id, start, end, ActivityType::CourtTime, Some("Hearing".to_string()), None);
        let id = logs.insert(&log).unwrap();

        let stored = logs.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.case_id, case_id);
        assert_eq!(stored.start_time, start);
        assert_eq!(stored.end_time, end);
        assert_eq!(stored.activity_type, ActivityType::CourtTime);
        assert_eq!(stored.description.as_deref(), Some("Hearing"));
        assert!(stored.notes.is_none());
        assert_eq!(stored.hours(), 1.5);
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_time_log_rejects_end_before_start(_ctx: &mut TimeLogTestContext) {
        let case_id = create_case("Smith v. Jones");
        let mut logs = TimeLogs::new().unwrap();

        let (start, end) = interval(15, (10, 0), (9, 0));
        let reversed = TimeLog::new(case_id, start, end, ActivityType::Research, None, None);
        assert!(logs.insert(&reversed).is_err());

        // Zero-length intervals are rejected too
        let (start, _) = interval(15, (10, 0), (10, 0));
        let empty = TimeLog::new(case_id, start, start, ActivityType::Research, None, None);
        assert!(logs.insert(&empty).is_err());

        // Nothing reached the table
        assert!(logs.list().unwrap().is_empty());
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_time_log_list_chronological(_ctx: &mut TimeLogTestContext) {
        let case_id = create_case("Smith v. Jones");
        let mut logs = TimeLogs::new().unwrap();

        let (start, end) = interval(16, (9, 0), (10, 0));
        logs.insert(&TimeLog::new(case_id, start, end, ActivityType::Research, None, None)).unwrap();
        let (start, end) = interval(14, (9, 0), (10, 0));
        logs.insert(&TimeLog::new(case_id, start, end, ActivityType::Research, None, None)).unwrap();
        let (start, end) = interval(15, (9, 0), (10, 0));
        logs.insert(&TimeLog::new(case_id, start, end, ActivityType::Research, None, None)).unwrap();

        let listed = logs.list().unwrap();
        let days: Vec<u32> = listed.iter().map(|log| chrono::Datelike::day(&log.start_time.date())).collect();
        assert_eq!(days, vec![14, 15, 16]);
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_time_log_list_by_case_newest_first(_ctx: &mut TimeLogTestContext) {
        let first_case = create_case("First matter");
        let second_case = create_case("Second matter");
        let mut logs = TimeLogs::new().unwrap();

        let (start, end) = interval(14, (9, 0), (10, 0));
        logs.insert(&TimeLog::new(first_case, start, end, ActivityType::Research, None, None)).unwrap();
        let (start, end) = interval(15, (9, 0), (10, 0));
        logs.insert(&TimeLog::new(first_case, start, end, ActivityType::Drafting, None, None)).unwrap();
        let (start, end) = interval(16, (9, 0), (10, 0));
        logs.insert(&TimeLog::new(second_case, start, end, ActivityType::Research, None, None)).unwrap();

        let scoped = logs.list_by_case(first_case).unwrap();
        assert_eq!(scoped.len(), 2);
        assert!(scoped[0].start_time > scoped[1].start_time);
        assert!(scoped.iter().all(|log| log.case_id == first_case));
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_time_log_delete(_ctx: &mut TimeLogTestContext) {
        let case_id = create_case("Smith v. Jones");
        let mut logs = TimeLogs::new().unwrap();

        let (start, end) = interval(15, (9, 0), (10, 0));
        let id = logs.insert(&TimeLog::new(case_id, start, end, ActivityType::Research, None, None)).unwrap();

        logs.delete(id).unwrap();
        assert!(logs.get_by_id(id).unwrap().is_none());
        assert!(logs.delete(id).is_err());
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_deleting_case_cascades_to_logs(_ctx: &mut TimeLogTestContext) {
        let case_id = create_case("Doomed matter");
        let mut logs = TimeLogs::new().unwrap();

        let (start, end) = interval(15, (9, 0), (10, 0));
        logs.insert(&TimeLog::new(case_id, start, end, ActivityType::Research, None, None)).unwrap();

        Cases::new().unwrap().delete(case_id).unwrap();
        assert!(logs.list().unwrap().is_empty());
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_activity_type_round_trips_through_storage(_ctx: &mut TimeLogTestContext) {
        let case_id = create_case("Smith v. Jones");
        let mut logs = TimeLogs::new().unwrap();

        let activities = [
            ActivityType::Consultation,
            ActivityType::Research,
            ActivityType::CourtTime,
            ActivityType::Drafting,
            ActivityType::Administrative,
            ActivityType::Other,
        ];

        for (offset, activity) in activities.iter().enumerate() {
            let (start, end) = interval(1 + offset as u32, (9, 0), (10, 0));
            logs.insert(&TimeLog::new(case_id, start, end, *activity, None, None)).unwrap();
        }

        let stored = logs.list().unwrap();
        let read: Vec<ActivityType> = stored.iter().map(|log| log.activity_type).collect();
        assert_eq!(read, activities);
    }
}
