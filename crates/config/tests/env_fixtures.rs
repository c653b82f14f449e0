//! Integration tests for env parsing and env-to-config merging.

use destination_guard_config::{
    ENV_LOG_REJECTIONS, EnvParseError, GuardConfig, GuardEnv, LogLevelName, apply_env_overrides,
};
use destination_guard_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::Path;

fn read_env_map(relative: &str) -> Result<BTreeMap<String, String>, Box<dyn Error>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(relative);
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[test]
fn env_fixtures_merge_into_effective_config() -> Result<(), Box<dyn Error>> {
    let env_map = read_env_map("env/guard-env.valid.json")?;
    let env = GuardEnv::from_map(&env_map)?;

    let config = apply_env_overrides(GuardConfig::default(), &env)?;

    assert_eq!(config.logging.level, LogLevelName::Warn);
    assert_eq!(config.logging.service_name, "destinations-worker");
    assert!(!config.validation.log_rejections);
    Ok(())
}

#[test]
fn invalid_bool_fixture_maps_to_config_error() -> Result<(), Box<dyn Error>> {
    let env_map = read_env_map("env/guard-env.invalid-bool.json")?;
    let Err(error) = GuardEnv::from_map(&env_map) else {
        return Err("expected invalid bool error".into());
    };

    assert!(matches!(
        error,
        EnvParseError::InvalidBool { var, .. } if var == ENV_LOG_REJECTIONS
    ));

    let envelope = ErrorEnvelope::from(error);
    assert_eq!(envelope.code, ErrorCode::new("config", "invalid_env_bool"));
    assert_eq!(
        envelope.metadata.get("env_var").map(String::as_str),
        Some(ENV_LOG_REJECTIONS)
    );
    Ok(())
}
