#[cfg(test)]
mod tests {
    use lextrack::db::attorneys::{Attorney, Attorneys};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct AttorneyTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for AttorneyTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            AttorneyTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(AttorneyTestContext)]
    #[test]
    fn test_attorney_insert_and_get(_ctx: &mut AttorneyTestContext) {
        let mut attorneys = Attorneys::new().unwrap();

        let attorney = Attorney::new("Jane Doe", "jane@firm.example", Some("Partner".to_string()));
        let id = attorneys.insert(&attorney).unwrap();

        let stored = attorneys.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.name, "Jane Doe");
        assert_eq!(stored.email, "jane@firm.example");
        assert_eq!(stored.title.as_deref(), Some("Partner"));
        assert!(stored.is_active);
        assert!(stored.created_at.is_some());
    }

    #[test_context(AttorneyTestContext)]
    #[test]
    fn test_attorney_lookup_by_name_and_email(_ctx: &mut AttorneyTestContext) {
        let mut attorneys = Attorneys::new().unwrap();
        attorneys.insert(&Attorney::new("Jane Doe", "jane@firm.example", None)).unwrap();

        assert!(attorneys.get_by_name("Jane Doe").unwrap().is_some());
        assert!(attorneys.get_by_name("John Roe").unwrap().is_none());
        assert!(attorneys.get_by_email("jane@firm.example").unwrap().is_some());
        assert!(attorneys.get_by_email("john@firm.example").unwrap().is_none());
    }

    #[test_context(AttorneyTestContext)]
    #[test]
    fn test_attorney_email_is_unique(_ctx: &mut AttorneyTestContext) {
        let mut attorneys = Attorneys::new().unwrap();
        attorneys.insert(&Attorney::new("Jane Doe", "shared@firm.example", None)).unwrap();

        let duplicate = Attorney::new("John Roe", "shared@firm.example", None);
        assert!(attorneys.insert(&duplicate).is_err());
    }

    #[test_context(AttorneyTestContext)]
    #[test]
    fn test_attorney_update_and_deactivate(_ctx: &mut AttorneyTestContext) {
        let mut attorneys = Attorneys::new().unwrap();
        let id = attorneys.insert(&Attorney::new("Jane Doe", "jane@firm.example", None)).unwrap();

        let mut updated = Attorney::new("Jane Q. Doe", "jane@firm.example", Some("Senior Partner".to_string()));
        updated.is_active = false;
        attorneys.update(id, &updated).unwrap();

        let stored = attorneys.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.name, "Jane Q. Doe");
        assert_eq!(stored.title.as_deref(), Some("Senior Partner"));
        assert!(!stored.is_active);
    }

    #[test_context(AttorneyTestContext)]
    #[test]
    fn test_attorney_delete(_ctx: &mut AttorneyTestContext) {
        let mut attorneys = Attorneys::new().unwrap();
        let id = attorneys.insert(&Attorney::new("Jane Doe", "jane@firm.example", None)).unwrap();

        attorneys.delete(id).unwrap();
        assert!(attorneys.get_by_id(id).unwrap().is_none());
        assert!(attorneys.delete(id).is_err());
        assert!(attorneys.update(id, &Attorney::new("Ghost", "ghost@firm.example", None)).is_err());
    }

    #[test_context(AttorneyTestContext)]
    #[test]
    fn test_attorney_list_ordered_by_name(_ctx: &mut AttorneyTestContext) {
        let mut attorneys = Attorneys::new().unwrap();
        attorneys.insert(&Attorney::new("Charlie Chaplin", "charlie@firm.example", None)).unwrap();
        attorneys.insert(&Attorney::new("Alice Adams", "alice@firm.example", None)).unwrap();
        attorneys.insert(&Attorney::new("Bob Brown", "bob@firm.example", None)).unwrap();

        let names: Vec<String> = attorneys.list().unwrap().into_iter().map(|attorney| attorney.name).collect();
        assert_eq!(names, vec!["Alice Adams", "Bob Brown", "Charlie Chaplin"]);
    }

    #[test_context(AttorneyTestContext)]
    #[test]
    fn test_attorney_blank_title_collapses_to_none(_ctx: &mut AttorneyTestContext) {
        let attorney = Attorney::new("Jane Doe", "jane@firm.example", Some("   ".to_string()));
        assert!(attorney.title.is_none());
    }
}
