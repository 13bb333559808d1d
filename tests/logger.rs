use datekit::config::LoggingConfig;
use datekit::logger;
use log::LevelFilter;
use std::fs;

#[test]
fn test_level_filter_parsing() {
    assert_eq!(logger::level_filter("debug").unwrap(), LevelFilter::Debug);
    assert_eq!(logger::level_filter("WARN").unwrap(), LevelFilter::Warn);
    assert_eq!(logger::level_filter(" off ").unwrap(), LevelFilter::Off);
    assert!(logger::level_filter("loud").is_err());
}

#[test]
fn test_config_based_logging_disabled() {
    let config = LoggingConfig::default();
    assert!(!logger::init(&config).unwrap());
}

#[test]
fn test_config_based_logging_enabled() {
    // Only this test installs the global logger
    let log_path = std::env::temp_dir().join("datekit_test_logger.log");
    let _ = fs::remove_file(&log_path);

    let config = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
        file: Some(log_path.clone()),
    };
    assert!(logger::init(&config).unwrap());

    log::info!("Test message with file");
    let _ = datekit::parse_iso8601("not a date");
    log::logger().flush();

    let file_content = fs::read_to_string(&log_path).unwrap();
    assert!(file_content.contains("Test message with file"));
    assert!(file_content.contains("INFO"));
    // Layout misses from the parser are logged at debug level
    assert!(file_content.contains("Failed to parse 'not a date'"));

    // A second global logger is refused
    assert!(logger::init(&config).is_err());

    let _ = fs::remove_file(&log_path);
}
