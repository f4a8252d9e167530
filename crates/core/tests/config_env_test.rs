//! Environment-driven configuration. Kept in its own test binary because it
//! mutates process-wide environment variables.

use campaign_core::config::{AppConfig, ValueRange};
use std::path::Path;

#[test]
fn test_environment_overrides_nested_and_list_keys() {
    std::env::set_var("CAMPAIGN_ANALYZER__SEED", "7");
    std::env::set_var("CAMPAIGN_ANALYZER__GENERATOR__COST__MIN", "12345");
    std::env::set_var("CAMPAIGN_ANALYZER__GENERATOR__CHANNELS", "A,B");

    let loaded = AppConfig::load();

    std::env::remove_var("CAMPAIGN_ANALYZER__SEED");
    std::env::remove_var("CAMPAIGN_ANALYZER__GENERATOR__COST__MIN");
    std::env::remove_var("CAMPAIGN_ANALYZER__GENERATOR__CHANNELS");

    let config = loaded.unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.generator.cost, ValueRange::new(12_345, 50_000));
    assert_eq!(config.generator.channels, vec!["A", "B"]);
    assert_eq!(config.generator.revenue, ValueRange::new(20_000, 100_000));
    assert!(config.generator.validate().is_ok());
}

#[test]
fn test_missing_explicit_config_file_fails() {
    assert!(AppConfig::load_from(Some(Path::new("/nonexistent.toml"))).is_err());
}
