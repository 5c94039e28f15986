#[cfg(test)]
mod tests {
    use lextrack::libs::config::{Config, ExportConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_config_yields_default(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.attorney.is_none());
        assert!(config.export.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.attorney = Some("Jane Doe".to_string());
        config.export = Some(ExportConfig {
            directory: "/tmp/exports".to_string(),
        });
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.attorney.as_deref(), Some("Jane Doe"));
        assert_eq!(
            loaded.export,
            Some(ExportConfig {
                directory: "/tmp/exports".to_string()
            })
        );
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_groups_stay_out_of_the_file(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        config.save().unwrap();

        let path = lextrack::libs::data_storage::DataStorage::new()
            .get_path(lextrack::libs::config::CONFIG_FILE_NAME)
            .unwrap();
        let raw = std::fs::read_to_string(path).unwrap();
        assert!(!raw.contains("attorney"));
        assert!(!raw.contains("export"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_delete(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.attorney = Some("Jane Doe".to_string());
        config.save().unwrap();

        Config::delete().unwrap();
        assert!(Config::read().unwrap().attorney.is_none());

        // Deleting a missing file is not an error
        Config::delete().unwrap();
    }
}
