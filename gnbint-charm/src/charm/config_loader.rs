//! Configuration and Snapshot Loading
//!
//! Loads the integrator configuration (`IntegratorConfig`) and host model
//! snapshots (`ModelState`) from YAML, with validation.
//!
//! # Example
//!
//! ```rust,ignore
//! use gnbint_charm::charm::{load_and_validate_integrator_config, load_model_state};
//!
//! let config = load_and_validate_integrator_config("config/integrator.yaml")?;
//! let state = load_model_state("state.yaml")?;
//! ```

use std::collections::HashSet;
use std::path::Path;

use gnbint_common::IntegratorConfig;
use thiserror::Error;

use crate::model::{CharmHost, ModelState, RelationId};

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ConfigValidationError),
}

/// Errors that can occur during configuration validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Invalid relation name
    #[error("Invalid relation name: {0}")]
    InvalidRelationName(String),

    /// Invalid model snapshot
    #[error("Invalid model state: {0}")]
    InvalidModelState(String),
}

/// Loads an integrator configuration from a YAML file.
pub fn load_integrator_config<P: AsRef<Path>>(path: P) -> Result<IntegratorConfig, ConfigError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    load_integrator_config_from_str(&contents)
}

/// Loads an integrator configuration from a YAML string.
pub fn load_integrator_config_from_str(yaml: &str) -> Result<IntegratorConfig, ConfigError> {
    serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Validates an integrator configuration.
///
/// # Validation Rules
///
/// - The relation name must be non-empty and contain no whitespace
///
/// The 24-bit TAC bound is already enforced while parsing.
pub fn validate_integrator_config(config: &IntegratorConfig) -> Result<(), ConfigValidationError> {
    let relation_name = config.relation_name();
    if relation_name.is_empty() {
        return Err(ConfigValidationError::InvalidRelationName(
            "relation name cannot be empty".to_string(),
        ));
    }
    if relation_name.chars().any(char::is_whitespace) {
        return Err(ConfigValidationError::InvalidRelationName(format!(
            "relation name {relation_name:?} cannot contain whitespace"
        )));
    }

    Ok(())
}

/// Loads and validates an integrator configuration in one step.
pub fn load_and_validate_integrator_config<P: AsRef<Path>>(
    path: P,
) -> Result<IntegratorConfig, ConfigError> {
    let config = load_integrator_config(path)?;
    validate_integrator_config(&config)?;
    Ok(config)
}

/// Loads a host model snapshot from a YAML file.
pub fn load_model_state<P: AsRef<Path>>(path: P) -> Result<ModelState, ConfigError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    load_model_state_from_str(&contents)
}

/// Loads a host model snapshot from a YAML string.
///
/// Relation ids must be unique and the model and application names
/// non-empty.
pub fn load_model_state_from_str(yaml: &str) -> Result<ModelState, ConfigError> {
    let state: ModelState =
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    if state.model_name().is_empty() || state.app_name().is_empty() {
        return Err(ConfigValidationError::InvalidModelState(
            "model_name and app_name cannot be empty".to_string(),
        )
        .into());
    }

    let mut seen: HashSet<RelationId> = HashSet::new();
    for relation in state.all_relations() {
        if !seen.insert(relation.id()) {
            return Err(ConfigValidationError::InvalidModelState(format!(
                "duplicate relation id {}",
                relation.id()
            ))
            .into());
        }
    }

    Ok(state)
}
