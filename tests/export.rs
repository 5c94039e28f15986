#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use lextrack::libs::aggregate::TimeReport;
    use lextrack::libs::case::{Case, CaseStatus};
    use lextrack::libs::export::{ExportDocument, ExportFormat, Exporter};
    use lextrack::libs::filter::PeriodFilter;
    use lextrack::libs::time_log::{ActivityType, TimeLog};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext { temp_dir }
        }
    }

    fn case_with_id(id: i64, title: &str, client: &str) -> Case {
        let mut case = Case::new(title, client, Some("Test description".to_string()), CaseStatus::Active);
        case.id = Some(id);
        case.created_at = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap().and_hms_opt(9, 0, 0);
        case
    }

    fn log(case_id: i64, day: u32, start: (u32, u32), end: (u32, u32)) -> TimeLog {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        TimeLog::new(
            case_id,
            date.and_hms_opt(start.0, start.1, 0).unwrap(),
            date.and_hms_opt(end.0, end.1, 0).unwrap(),
            ActivityType::Research,
            Some("Reviewed filings".to_string()),
            None,
        )
    }

    fn january() -> PeriodFilter {
        PeriodFilter::range(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv_sections_and_content(ctx: &mut ExportTestContext) {
        let cases = vec![case_with_id(1, "Smith v. Jones", "Acme Insurance")];
        let logs = vec![log(1, 15, (9, 0), (10, 30)), log(1, 15, (13, 0), (13, 45))];
        let report = TimeReport::build(&cases, &logs, &january(), None);

        let output = ctx.temp_dir.path().join("report.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output.clone()), None);
        exporter.export_report(&report).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("Legal Time Tracking - Complete Export"));
        assert!(content.contains("SUMMARY"));
        assert!(content.contains("CASES SUMMARY"));
        assert!(content.contains("TIME LOGS DETAIL"));
        assert!(content.contains("Smith v. Jones"));
        assert!(content.contains("2h 15m"));
        assert!(content.contains("Attorney: All Attorneys"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv_escapes_delimiter_fields(ctx: &mut ExportTestContext) {
        // Title and client both carry commas and must survive a round trip
        let cases = vec![case_with_id(1, "Smith, Jones & Partners v. Acme", "Acme, Inc.")];
        let logs = vec![log(1, 15, (9, 0), (10, 0))];
        let report = TimeReport::build(&cases, &logs, &PeriodFilter::All, None);

        let output = ctx.temp_dir.path().join("escaped.csv");
        Exporter::new(ExportFormat::Csv, Some(output.clone()), None).export_report(&report).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(&output)
            .unwrap();

        let mut case_rows = 0;
        for record in reader.records() {
            let record = record.unwrap();
            if record.get(1) == Some("Smith, Jones & Partners v. Acme") {
                // Field count and values are intact despite embedded commas
                assert_eq!(record.len(), 7);
                assert_eq!(record.get(2), Some("Acme, Inc."));
                case_rows += 1;
            }
        }
        assert_eq!(case_rows, 1);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excludes_zero_hour_cases(ctx: &mut ExportTestContext) {
        let cases = vec![case_with_id(1, "Billable matter", "Client"), case_with_id(2, "Idle matter", "Client")];
        let logs = vec![log(1, 15, (9, 0), (10, 0))];
        let report = TimeReport::build(&cases, &logs, &PeriodFilter::All, None);

        let output = ctx.temp_dir.path().join("report.json");
        Exporter::new(ExportFormat::Json, Some(output.clone()), None).export_report(&report).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let document: ExportDocument = serde_json::from_str(&content).unwrap();

        assert_eq!(document.cases.len(), 1);
        assert_eq!(document.cases[0].title, "Billable matter");
        assert_eq!(document.total_cases, 1);
        assert_eq!(document.total_hours, "1h 0m");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json_resolves_unknown_case_titles(ctx: &mut ExportTestContext) {
        // A log whose case is not in the snapshot still exports
        let cases = vec![case_with_id(1, "Known matter", "Client")];
        let logs = vec![log(1, 15, (9, 0), (10, 0)), log(99, 16, (9, 0), (10, 0))];
        let report = TimeReport::build(&cases, &logs, &PeriodFilter::All, None);

        let output = ctx.temp_dir.path().join("report.json");
        Exporter::new(ExportFormat::Json, Some(output.clone()), None).export_report(&report).unwrap();

        let document: ExportDocument = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(document.time_logs.len(), 2);
        assert_eq!(document.time_logs[0].case_title, "Known matter");
        assert_eq!(document.time_logs[1].case_title, "Unknown Case");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel_writes_workbook(ctx: &mut ExportTestContext) {
        let cases = vec![case_with_id(1, "Smith v. Jones", "Acme Insurance")];
        let logs = vec![log(1, 15, (9, 0), (10, 0))];
        let report = TimeReport::build(&cases, &logs, &january(), None);

        let output = ctx.temp_dir.path().join("report.xlsx");
        Exporter::new(ExportFormat::Excel, Some(output.clone()), None).export_report(&report).unwrap();

        assert!(output.exists());
        assert!(std::fs::metadata(&output).unwrap().len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_default_filename_with_attorney_and_range(ctx: &mut ExportTestContext) {
        let cases = vec![case_with_id(1, "Smith v. Jones", "Acme Insurance")];
        let logs = vec![log(1, 15, (9, 0), (10, 0))];
        let report = TimeReport::build(&cases, &logs, &january(), Some("Jane Doe".to_string()));

        let directory = ctx.temp_dir.path().to_path_buf();
        Exporter::new(ExportFormat::Csv, None, Some(directory.clone())).export_report(&report).unwrap();

        let expected = directory.join("legal-time-tracking-jane-doe-2024-01-01-to-2024-01-31-export.csv");
        assert!(expected.exists());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_default_filename_without_attorney(ctx: &mut ExportTestContext) {
        let report = TimeReport::build(&[], &[], &PeriodFilter::All, None);

        let directory = ctx.temp_dir.path().to_path_buf();
        Exporter::new(ExportFormat::Json, None, Some(directory.clone())).export_report(&report).unwrap();

        assert!(directory.join("legal-time-tracking-all-time-export.json").exists());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_default_filename_for_month_period(ctx: &mut ExportTestContext) {
        let report = TimeReport::build(&[], &[], &PeriodFilter::month(2024, 1).unwrap(), None);

        let directory = ctx.temp_dir.path().to_path_buf();
        Exporter::new(ExportFormat::Csv, None, Some(directory.clone())).export_report(&report).unwrap();

        assert!(directory.join("legal-time-tracking-2024-01-export.csv").exists());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_per_case_export(ctx: &mut ExportTestContext) {
        let case = case_with_id(1, "Smith v. Jones", "Acme Insurance");
        let logs = vec![log(1, 15, (9, 0), (10, 30))];

        let directory = ctx.temp_dir.path().to_path_buf();
        Exporter::new(ExportFormat::Csv, None, Some(directory.clone())).export_case_logs(&case, &logs).unwrap();

        let expected = directory.join("smith-v.-jones-time-logs.csv");
        assert!(expected.exists());

        let content = std::fs::read_to_string(&expected).unwrap();
        assert!(content.contains("Time Logs for Smith v. Jones"));
        assert!(content.contains("1h 30m"));
        // The per-case table drops the case-title column
        assert!(content.contains("Date,Start Time,End Time,Duration"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_empty_report_still_exports(ctx: &mut ExportTestContext) {
        let report = TimeReport::build(&[], &[], &PeriodFilter::All, None);

        let output = ctx.temp_dir.path().join("empty.csv");
        Exporter::new(ExportFormat::Csv, Some(output.clone()), None).export_report(&report).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("Total Cases:,0"));
        assert!(content.contains("Total Hours:,0h 0m"));
    }
}
