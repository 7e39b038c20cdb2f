//! File-backed snapshot source for offline runs and tests: reads
//! `screener.json`, `monitor.json`, and `metadata.json` from a directory,
//! each in the same shape the HTTP backend returns.

use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::domain::error::DomainError;
use crate::domain::ports::snapshot_source::{
    MonitorSnapshot, ScreenMetadata, ScreenerSnapshot, SnapshotSource,
};

pub struct FileSnapshotSource {
    dir: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<T, DomainError> {
        let path = self.dir.join(file);
        let text = std::fs::read_to_string(&path)
            .map_err(|e| DomainError::NotFound(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| DomainError::Parse(format!("{}: {e}", path.display())))
    }
}

#[async_trait::async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn screener(&self) -> Result<ScreenerSnapshot, DomainError> {
        self.read("screener.json")
    }

    async fn monitor(&self) -> Result<MonitorSnapshot, DomainError> {
        self.read("monitor.json")
    }

    async fn metadata(&self) -> Result<ScreenMetadata, DomainError> {
        self.read("metadata.json")
    }
}
