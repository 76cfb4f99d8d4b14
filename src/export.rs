//! Serializing the composed record for the build tool.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::compose::ComposedConfig;

/// Error returned when exporting the composed record.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Serialization to JSON failed.
    #[error("failed to serialize composed config: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the serialized record to disk failed.
    #[error("failed to write composed config to \"{path}\": {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ComposedConfig {
    /// Serializes the record as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the record as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the pretty-printed record to `path`, where the build tool
    /// picks it up.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::compose::compose;

    #[test]
    fn test_to_json_uses_build_tool_schema_keys() {
        let json = compose().to_json().unwrap();
        for key in [
            "\"content\"",
            "\"safelist\"",
            "\"fontFamily\"",
            "\"fontSize\"",
            "\"borderRadius\"",
            "\"borderWidth\"",
            "\"boxShadow\"",
            "\"corePlugins\"",
            "\"plugins\"",
        ] {
            assert!(json.contains(key), "missing {key} in {json}");
        }
    }

    #[test]
    fn test_write_to_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("underlay.config.json");

        compose().write_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, compose().to_json_pretty().unwrap());
    }

    #[test]
    fn test_write_to_missing_dir_reports_path() {
        let err = compose()
            .write_to("/nonexistent-underlay-dir/config.json")
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("/nonexistent-underlay-dir/config.json"));
    }
}
