/// Tests for configuration resolution
///
/// Covers precedence between CLI arguments, the TOML config file and
/// defaults, plus config file discovery.

#[cfg(test)]
mod tests {
    use crate::cli::CliArgs;
    use crate::config::*;
    use crate::error::ReportError;
    use crate::input::InputSource;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args_with_input(input: Option<&str>) -> CliArgs {
        CliArgs {
            input: input.map(str::to_string),
            output: None,
            json_blocks: None,
            title: None,
            config: None,
            summary: false,
            quiet: false,
        }
    }

    #[test]
    fn test_defaults_without_config_file() {
        let work = TempDir::new().unwrap();
        let plan = build_report_plan_in(&args_with_input(Some("whatif.json")), work.path(), None).unwrap();

        assert_eq!(plan.input, InputSource::File(PathBuf::from("whatif.json")));
        assert_eq!(plan.output, None);
        assert_eq!(plan.json_blocks, None);
        assert_eq!(plan.title, "Bicep What-If Report");
        assert!(!plan.summary);
    }

    #[test]
    fn test_dash_input_is_stdin() {
        let work = TempDir::new().unwrap();
        let plan = build_report_plan_in(&args_with_input(Some("-")), work.path(), None).unwrap();
        assert_eq!(plan.input, InputSource::Stdin);
    }

    #[test]
    fn test_missing_input_is_config_error() {
        let work = TempDir::new().unwrap();
        let err = build_report_plan_in(&args_with_input(None), work.path(), None).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[test]
    fn test_local_config_file_fills_gaps() {
        let work = TempDir::new().unwrap();
        std::fs::write(
            work.path().join(LOCAL_CONFIG_FILE),
            "title = \"Nightly What-If\"\ninput = \"out/whatif.json\"\noutput = \"out/report.md\"\nsummary = true\n",
        )
        .unwrap();

        let plan = build_report_plan_in(&args_with_input(None), work.path(), None).unwrap();

        assert_eq!(plan.title, "Nightly What-If");
        assert_eq!(plan.input, InputSource::File(work.path().join("out/whatif.json")));
        assert_eq!(plan.output, Some(work.path().join("out/report.md")));
        assert!(plan.summary);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let work = TempDir::new().unwrap();
        std::fs::write(work.path().join(LOCAL_CONFIG_FILE), "title = \"From File\"\noutput = \"file.md\"\n").unwrap();

        let mut args = args_with_input(Some("cli.json"));
        args.title = Some("From CLI".to_string());
        args.output = Some(PathBuf::from("cli.md"));

        let plan = build_report_plan_in(&args, work.path(), None).unwrap();
        assert_eq!(plan.title, "From CLI");
        assert_eq!(plan.output, Some(PathBuf::from("cli.md")));
        assert_eq!(plan.input, InputSource::File(PathBuf::from("cli.json")));
    }

    #[test]
    fn test_user_config_used_when_no_local_file() {
        let work = TempDir::new().unwrap();
        let user_dir = TempDir::new().unwrap();
        let user_config = user_dir.path().join("config.toml");
        std::fs::write(&user_config, "title = \"User Default\"\n").unwrap();

        let plan = build_report_plan_in(&args_with_input(Some("a.json")), work.path(), Some(user_config)).unwrap();
        assert_eq!(plan.title, "User Default");
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let work = TempDir::new().unwrap();
        let mut args = args_with_input(Some("a.json"));
        args.config = Some(work.path().join("missing.toml"));

        let err = build_report_plan_in(&args, work.path(), None).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_blank_title_in_file_falls_back_to_default() {
        let work = TempDir::new().unwrap();
        std::fs::write(work.path().join(LOCAL_CONFIG_FILE), "title = \"   \"\n").unwrap();

        let plan = build_report_plan_in(&args_with_input(Some("a.json")), work.path(), None).unwrap();
        assert_eq!(plan.title, "Bicep What-If Report");
    }

    #[test]
    fn test_parse_file_config_ignores_unknown_keys() {
        let config = parse_file_config("title = \"T\"\ncolor = \"blue\"\n").unwrap();
        assert_eq!(config.title.as_deref(), Some("T"));
        assert_eq!(config.input, None);
    }

    #[test]
    fn test_parse_file_config_rejects_bad_types() {
        assert!(parse_file_config("summary = \"yes\"\n").is_err());
        assert!(parse_file_config("title = ").is_err());
    }
}
