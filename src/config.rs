//! Configuration file loading.
//!
//! Every configurable type (`AnalyzerConfig`, `ResolveConfig`,
//! `MetaProfile`) derives `Deserialize` with `#[serde(default)]`, so a
//! JSON file only needs the fields it overrides.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// Errors from loading configuration or data files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Loaded configuration from {}", path.display());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ResolveConfig;
    use std::io::Write;

    #[test]
    fn test_load_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "timeout_ms": 1200 }}"#).unwrap();

        let config: ResolveConfig = load_json(file.path()).unwrap();
        assert_eq!(config.timeout_ms, 1200);
        assert_eq!(config.max_concurrency, ResolveConfig::default().max_concurrency);
    }

    #[test]
    fn test_missing_file() {
        let err = load_json::<ResolveConfig>(Path::new("/nonexistent/ygo.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_json::<ResolveConfig>(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("Invalid JSON"));
    }
}
