use std::sync::Arc;

use crate::domain::error::DomainError;
use crate::domain::ports::snapshot_source::{MonitorSnapshot, SnapshotSource};

pub struct MonitorUseCase {
    source: Arc<dyn SnapshotSource>,
}

impl MonitorUseCase {
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self { source }
    }

    pub async fn execute(&self) -> Result<MonitorSnapshot, DomainError> {
        self.source.monitor().await
    }

    /// Symbols of currently held positions, for exclusion filtering.
    pub async fn held_symbols(&self) -> Result<Vec<String>, DomainError> {
        let snapshot = self.source.monitor().await?;
        Ok(snapshot.positions.into_iter().map(|p| p.symbol).collect())
    }
}
