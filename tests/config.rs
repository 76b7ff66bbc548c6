#[cfg(test)]
mod tests {
    use hrdash::api::ApiConfig;
    use hrdash::libs::config::{Config, PushConfig, CONFIG_FILE_NAME};
    use hrdash::libs::data_storage::DataStorage;
    use hrdash::libs::notification::{Category, Topics};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
        api_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path().join("hrdash"));
            ConfigTestContext {
                _temp_dir: temp_dir,
                storage,
                api_url: "https://hr.example.com/api".to_string(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_reads_default(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.api.is_none());
        assert!(config.push.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            api: Some(ApiConfig {
                api_url: ctx.api_url.clone(),
                login: "admin@example.com".to_string(),
            }),
            push: Some(PushConfig {
                user_id: 7,
                ..PushConfig::default()
            }),
        };
        config.save_to(&ctx.storage).unwrap();

        assert_eq!(Config::read_from(&ctx.storage).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unconfigured_modules_omitted(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.storage).unwrap();
        let content = std::fs::read_to_string(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap()).unwrap();
        assert_eq!(content.trim(), "{}");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.storage).unwrap();
        Config::delete_from(&ctx.storage).unwrap();
        assert!(!ctx.storage.get_path(CONFIG_FILE_NAME).unwrap().exists());

        // Deleting twice is fine
        Config::delete_from(&ctx.storage).unwrap();
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_api_login_is_optional_in_file(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, format!(r#"{{"api": {{"api_url": "{}"}}}}"#, ctx.api_url)).unwrap();

        let api = Config::read_from(&ctx.storage).unwrap().api.unwrap();
        assert_eq!(api.api_url, ctx.api_url);
        assert!(api.login.is_empty());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_resolve_api_override(ctx: &mut ConfigTestContext) {
        let config = Config {
            api: Some(ApiConfig {
                api_url: ctx.api_url.clone(),
                login: "admin".to_string(),
            }),
            push: None,
        };

        let resolved = config.resolve_api(Some("http://localhost:3000".to_string())).unwrap();
        assert_eq!(resolved.api_url, "http://localhost:3000");
        assert_eq!(resolved.login, "admin");

        assert_eq!(config.resolve_api(None).unwrap().api_url, ctx.api_url);
        assert!(Config::default().resolve_api(None).is_none());

        let only_override = Config::default().resolve_api(Some(ctx.api_url.clone())).unwrap();
        assert!(only_override.login.is_empty());
    }

    #[test]
    fn test_push_config_required() {
        assert!(Config::default().push_config().is_err());
    }

    #[test]
    fn test_push_defaults_and_topics() {
        let push = PushConfig {
            user_id: 5,
            ..PushConfig::default()
        };
        let topics = Topics::from_config(&push);

        let announcements = topics.get(Category::Announcement);
        assert_eq!(announcements.channel, "announcements");
        assert_eq!(announcements.event, "announcement");

        let leave_status = topics.get(Category::LeaveStatus);
        assert_eq!(leave_status.channel, "leave-status.5");
        assert_eq!(leave_status.event, "leave-status-updated");
    }
}
