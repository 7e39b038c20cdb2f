//! Snapshot source port: where screener and monitor data comes from.
//!
//! The engine never fetches; it consumes materialized snapshots. Adapters
//! implement this against the spreadsheet-backed HTTP API or against local
//! JSON files for offline runs and tests.

use serde::{Deserialize, Serialize};

use crate::domain::entities::monitor_position::MonitorPosition;
use crate::domain::entities::screener_row::ScreenerRow;
use crate::domain::error::DomainError;

/// The screener payload as fetched: rows plus the backend's refresh stamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerSnapshot {
    pub last_updated: Option<String>,
    #[serde(default)]
    pub count: usize,
    #[serde(rename = "data")]
    pub rows: Vec<ScreenerRow>,
}

/// The monitor payload: currently held positions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSnapshot {
    pub last_updated: Option<String>,
    #[serde(default)]
    pub count: usize,
    pub positions: Vec<MonitorPosition>,
}

/// Backend-side screening parameters, read-only here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenMetadata {
    pub expiry: Option<String>,
    pub ror: f64,
    pub min_oi: f64,
    pub last_updated: Option<String>,
}

#[async_trait::async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn screener(&self) -> Result<ScreenerSnapshot, DomainError>;
    async fn monitor(&self) -> Result<MonitorSnapshot, DomainError>;
    async fn metadata(&self) -> Result<ScreenMetadata, DomainError>;
}
