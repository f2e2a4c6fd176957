use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Where the artifact lives unless told otherwise, relative to the working directory.
pub const DEFAULT_ARTIFACT_PATH: &str = "model/insurancemodel.json";

/// Environment variable overriding [`DEFAULT_ARTIFACT_PATH`].
pub const ARTIFACT_PATH_VAR: &str = "MEDICOST_MODEL_PATH";

/// Immutable settings for a [`ModelStore`](crate::ModelStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    artifact_path: PathBuf,
}

impl StoreConfig {
    /// Creates a new store configuration.
    ///
    /// # Args
    /// * `artifact_path` - The location of the serialized model.
    ///
    /// # Returns
    /// A `StoreConfig` instance.
    pub fn new<P: Into<PathBuf>>(artifact_path: P) -> Self {
        Self {
            artifact_path: artifact_path.into(),
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_var(env::var_os(ARTIFACT_PATH_VAR))
    }

    fn from_var(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }

    /// Returns the location of the serialized model.
    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_the_fixed_location() {
        assert_eq!(
            StoreConfig::from_var(None).artifact_path(),
            Path::new("model/insurancemodel.json")
        );
        assert_eq!(StoreConfig::from_var(Some(OsString::new())), StoreConfig::default());
    }

    #[test]
    fn variable_overrides_the_location() {
        let cfg = StoreConfig::from_var(Some("/srv/models/premium.json".into()));
        assert_eq!(cfg.artifact_path(), Path::new("/srv/models/premium.json"));
    }
}
