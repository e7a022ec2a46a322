use roster_domain::config::LoggerSettings;
use roster_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn settings_with_path_write_json_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let settings = LoggerSettings {
        name: "roster-file-logging".to_owned(),
        console: false,
        path: Some(log_dir.clone()),
        json: true,
        ..LoggerSettings::default()
    };
    let logger = Logger::from_settings(&settings)?;
    assert!(logger.guard().is_some());

    tracing::info!(flight = "AB123", "passenger booked");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("\"flight\":\"AB123\""), "json line expected, got: {contents}");

    Ok(())
}
