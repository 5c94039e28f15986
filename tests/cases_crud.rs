#[cfg(test)]
mod tests {
    use lextrack::db::attorneys::{Attorney, Attorneys};
    use lextrack::db::cases::Cases;
    use lextrack::libs::case::{Case, CaseStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CaseTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for CaseTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CaseTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(CaseTestContext)]
    #[test]
    fn test_case_insert_and_get(_ctx: &mut CaseTestContext) {
        let mut cases = Cases::new().unwrap();

        let case = Case::new("Smith v. Jones", "Acme Insurance", Some("Coverage dispute".to_string()), CaseStatus::Active);
        let id = cases.insert(&case).unwrap();

        let stored = cases.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.title, "Smith v. Jones");
        assert_eq!(stored.client_name, "Acme Insurance");
        assert_eq!(stored.description.as_deref(), Some("Coverage dispute"));
        assert_eq!(stored.status, CaseStatus::Active);
        assert!(stored.attorney_id.is_none());
        assert!(stored.created_at.is_some());
        assert!(stored.updated_at.is_some());
    }

    #[test_context(CaseTestContext)]
    #[test]
    fn test_case_get_missing_returns_none(_ctx: &mut CaseTestContext) {
        let mut cases = Cases::new().unwrap();
        assert!(cases.get_by_id(42).unwrap().is_none());
    }

    #[test_context(CaseTestContext)]
    #[test]
    fn test_case_list_empty_is_not_an_error(_ctx: &mut CaseTestContext) {
        let mut cases = Cases::new().unwrap();
        assert!(cases.list().unwrap().is_empty());
    }

    #[test_context(CaseTestContext)]
    #[test]
    fn test_case_update(_ctx: &mut CaseTestContext) {
        let mut cases = Cases::new().unwrap();

        let case = Case::new("Original title", "Original client", None, CaseStatus::Pending);
        let id = cases.insert(&case).unwrap();

        let updated = Case::new("Amended title", "Original client", Some("Now with details".to_string()), CaseStatus::Closed);
        cases.update(id, &updated).unwrap();

        let stored = cases.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.title, "Amended title");
        assert_eq!(stored.status, CaseStatus::Closed);
        assert_eq!(stored.description.as_deref(), Some("Now with details"));
    }

    #[test_context(CaseTestContext)]
    #[test]
    fn test_case_update_missing_fails(_ctx: &mut CaseTestContext) {
        let mut cases = Cases::new().unwrap();
        let ghost = Case::new("Ghost", "Nobody", None, CaseStatus::Active);
        assert!(cases.update(42, &ghost).is_err());
    }

    #[test_context(CaseTestContext)]
    #[test]
    fn test_case_delete(_ctx: &mut CaseTestContext) {
        let mut cases = Cases::new().unwrap();

        let id = cases.insert(&Case::new("Short-lived", "Client", None, CaseStatus::Active)).unwrap();
        cases.delete(id).unwrap();

        assert!(cases.get_by_id(id).unwrap().is_none());
        assert!(cases.delete(id).is_err());
    }

    #[test_context(CaseTestContext)]
    #[test]
    fn test_case_list_newest_first(_ctx: &mut CaseTestContext) {
        let mut cases = Cases::new().unwrap();

        for title in ["First", "Second", "Third"] {
            cases.insert(&Case::new(title, "Client", None, CaseStatus::Active)).unwrap();
        }

        // Same-second inserts fall back to id ordering
        let listed = cases.list().unwrap();
        let titles: Vec<&str> = listed.iter().map(|case| case.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);
    }

    #[test_context(CaseTestContext)]
    #[test]
    fn test_case_list_by_attorney(_ctx: &mut CaseTestContext) {
        let mut attorneys = Attorneys::new().unwrap();
        let attorney_id = attorneys.insert(&Attorney::new("Jane Doe", "jane@firm.example", None)).unwrap();

        let mut cases = Cases::new().unwrap();
        let assigned = Case::new("Assigned matter", "Client", None, CaseStatus::Active).with_attorney(Some(attorney_id));
        cases.insert(&assigned).unwrap();
        cases.insert(&Case::new("Unassigned matter", "Client", None, CaseStatus::Active)).unwrap();

        let scoped = cases.list_by_attorney(attorney_id).unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].title, "Assigned matter");
        assert_eq!(scoped[0].attorney_id, Some(attorney_id));
    }
}
