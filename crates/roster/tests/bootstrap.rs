use roster::domain::config::TransferMode;
use roster::flights::{Flight, FlightError, Passenger};
use std::fs;

#[test]
fn configured_manifest_uses_sequential_transfers() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("roster.toml");
    fs::write(&path, "transfer = \"sequential\"\n[logger]\nconsole = false\n")?;

    let config = roster::load(Some(&path))?;
    let mut manifest = roster::manifest(&config);
    assert_eq!(manifest.transfer_mode(), TransferMode::Sequential);

    let ab = manifest.register_flight(Flight::new("AB123", 1)?);
    let full = manifest.register_flight(Flight::new("CD456", 0)?);
    let p = manifest.register_passenger(Passenger::new("P001", "Maria Diaz", "US")?);
    manifest.join_flight(p, Some(ab))?;

    let err = manifest.join_flight(p, Some(full)).unwrap_err();
    assert!(matches!(err, FlightError::CapacityExceeded { .. }));
    assert_eq!(manifest.passenger(p)?.flight(), Some(full));
    Ok(())
}

#[test]
fn default_config_builds_atomic_manifest() {
    let manifest = roster::manifest(&roster::domain::config::RosterConfig::default());
    assert_eq!(manifest.transfer_mode(), TransferMode::Atomic);
    assert_eq!(manifest.flights().count(), 0);
}

#[test]
fn logger_settings_without_outputs_are_rejected() {
    let mut config = roster::domain::config::RosterConfig::default();
    config.logger.console = false;
    let err = roster::init_logger(&config).expect_err("no layers");
    assert!(matches!(err, roster::logger::LoggerError::InvalidConfiguration { .. }));
}
