//! Tests for logging configuration.

use std::path::PathBuf;

use carprep_cli::logging::{LogConfig, LogFormat};
use tracing::level_filters::LevelFilter;

#[test]
fn test_default_config_is_quiet() {
    let config = LogConfig::default();
    assert_eq!(config.level_filter, LevelFilter::WARN);
    assert!(config.use_env_filter);
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(config.log_file.is_none());
}

#[test]
fn test_builder_methods() {
    let config = LogConfig::default()
        .with_level_filter(LevelFilter::DEBUG)
        .with_env_filter(false)
        .with_timestamps(true)
        .with_target(true)
        .with_ansi(false)
        .with_format(LogFormat::Json)
        .with_log_file(Some(PathBuf::from("carprep.log")));
    assert_eq!(config.level_filter, LevelFilter::DEBUG);
    assert!(!config.use_env_filter);
    assert!(config.with_timestamps);
    assert!(config.with_target);
    assert!(!config.with_ansi);
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.log_file, Some(PathBuf::from("carprep.log")));
}

#[test]
fn test_filter_directives_keep_dependencies_at_warn() {
    let config = LogConfig::default().with_level_filter(LevelFilter::DEBUG);
    assert_eq!(
        config.filter_directives(),
        "warn,carprep_cli=debug,carprep_core=debug,carprep_ingest=debug"
    );
}

#[test]
fn test_filter_directives_off() {
    let config = LogConfig::default().with_level_filter(LevelFilter::OFF);
    assert!(config.filter_directives().ends_with("carprep_ingest=off"));
}
