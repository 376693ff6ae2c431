//! Policy loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the roster
//! policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{FormatsConfig, PolicyConfig, ProfilesConfig, SplitShiftPolicy};

/// Loads and provides access to the roster policy.
///
/// # Directory Structure
///
/// ```text
/// config/retail/
/// ├── profiles.yaml      # Hour profile per employee category
/// ├── split_shift.yaml   # Split-shift structure parameters
/// └── formats.yaml       # Branch formats and role lists (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
/// use roster_engine::models::EmployeeCategory;
///
/// let loader = ConfigLoader::load("./config/retail")?;
/// let profile = loader.policy().profile(EmployeeCategory::FullTime)?;
/// println!("Full-time target: {}h", profile.weekly_hour_target);
/// # Ok::<(), roster_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PolicyConfig,
}

impl ConfigLoader {
    /// Loads the policy from the specified directory.
    ///
    /// Returns an error if `profiles.yaml` or `split_shift.yaml` is missing,
    /// or if any present file contains invalid YAML. A missing
    /// `formats.yaml` means no branch formats are enforced.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let profiles = Self::load_yaml::<ProfilesConfig>(&path.join("profiles.yaml"))?;
        let split_shift = Self::load_yaml::<SplitShiftPolicy>(&path.join("split_shift.yaml"))?;

        let formats_path = path.join("formats.yaml");
        let formats = if formats_path.exists() {
            Self::load_yaml::<FormatsConfig>(&formats_path)?
        } else {
            FormatsConfig::default()
        };

        debug!(
            path = %path.display(),
            profiles = profiles.profiles.len(),
            formats = formats.formats.len(),
            "Loaded roster policy"
        );

        Ok(Self {
            policy: PolicyConfig::new(profiles.profiles, split_shift, formats),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Consumes the loader, returning the policy.
    pub fn into_policy(self) -> PolicyConfig {
        self.policy
    }
}
