// src/storage/mod.rs
use std::path::{Path, PathBuf};
use crate::config::RunConfig;
use crate::extractors::section::SectionMap;
use crate::utils::error::StorageError;

pub struct StorageManager {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl StorageManager {
    /// Creates a StorageManager bound to the run's input and output files
    pub fn new(config: &RunConfig) -> Self {
        Self {
            input_path: config.input_path.clone(),
            output_path: config.output_path.clone(),
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Reads the whole markdown input as UTF-8 text
    pub async fn read_markdown(&self) -> Result<String, StorageError> {
        let content = tokio::fs::read_to_string(&self.input_path)
            .await
            .map_err(|source| StorageError::Read { path: self.input_path.clone(), source })?;

        tracing::info!("Read {} bytes from {}", content.len(), self.input_path.display());
        Ok(content)
    }

    /// Writes the sections as 2-space indented JSON. The parent directory
    /// must already exist.
    pub async fn write_sections(&self, sections: &SectionMap) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(sections)?;

        tokio::fs::write(&self.output_path, json)
            .await
            .map_err(|source| StorageError::Write { path: self.output_path.clone(), source })?;

        tracing::info!("Saved {} section(s) to {}", sections.len(), self.output_path.display());
        Ok(())
    }
}
