//! Shared test helpers.

use proverbs::domain::entities::monitor_position::MonitorPosition;
use proverbs::domain::entities::screener_row::ScreenerRow;
use proverbs::domain::error::DomainError;
use proverbs::domain::ports::snapshot_source::{
    MonitorSnapshot, ScreenMetadata, ScreenerSnapshot, SnapshotSource,
};

/// A row that passes the default criteria before any overrides.
pub fn make_row(symbol: &str) -> ScreenerRow {
    ScreenerRow {
        symbol: symbol.to_string(),
        sector: "Tech".into(),
        industry: "Software".into(),
        description: format!("{symbol} Inc"),
        price: 100.0,
        rsi: 40.0,
        bb_percent: 0.30,
        ror: Some(0.02),
        options_score: 3.0,
        fundamentals_score: 3.0,
        technicals_score: 3.0,
        liquidity_score: 3.0,
        ..ScreenerRow::default()
    }
}

pub fn make_position(symbol: &str) -> MonitorPosition {
    MonitorPosition {
        symbol: symbol.to_string(),
        position_type: "P".into(),
        contracts: 1.0,
        strike: 95.0,
        current_price: 100.0,
        ..MonitorPosition::default()
    }
}

/// Canned snapshot source for exercising the use cases without I/O.
pub struct StubSource {
    pub screener: ScreenerSnapshot,
    pub monitor: MonitorSnapshot,
    pub metadata: ScreenMetadata,
}

impl StubSource {
    pub fn new(rows: Vec<ScreenerRow>, positions: Vec<MonitorPosition>) -> Self {
        Self {
            screener: ScreenerSnapshot {
                last_updated: Some("2024-05-01T12:00:00Z".into()),
                count: rows.len(),
                rows,
            },
            monitor: MonitorSnapshot {
                last_updated: Some("2024-05-01T12:00:00Z".into()),
                count: positions.len(),
                positions,
            },
            metadata: ScreenMetadata {
                expiry: Some("2024-05-17".into()),
                ror: 0.01,
                min_oi: 50.0,
                last_updated: Some("2024-05-01T12:00:00Z".into()),
            },
        }
    }
}

#[async_trait::async_trait]
impl SnapshotSource for StubSource {
    async fn screener(&self) -> Result<ScreenerSnapshot, DomainError> {
        Ok(self.screener.clone())
    }

    async fn monitor(&self) -> Result<MonitorSnapshot, DomainError> {
        Ok(self.monitor.clone())
    }

    async fn metadata(&self) -> Result<ScreenMetadata, DomainError> {
        Ok(self.metadata.clone())
    }
}
