//! Screen use case — fetches the latest screener snapshot, refreshes the
//! exclusion set from held positions when asked, and runs the pipeline.

use std::sync::Arc;

use serde::Serialize;

use crate::application::pipeline;
use crate::domain::entities::screener_row::ScoredRow;
use crate::domain::error::DomainError;
use crate::domain::ports::snapshot_source::SnapshotSource;
use crate::domain::values::profile::ScreenProfile;

/// Result of one screen run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenResult {
    pub last_updated: Option<String>,
    pub total: usize,
    pub shown: usize,
    pub rows: Vec<ScoredRow>,
}

pub struct ScreenUseCase {
    source: Arc<dyn SnapshotSource>,
}

impl ScreenUseCase {
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self { source }
    }

    /// Fetch, score, filter, and sort.
    ///
    /// When the profile excludes held symbols, the monitor snapshot is
    /// fetched first and its symbols replace whatever exclusion set the
    /// profile carried; otherwise the set is left alone and ignored by the
    /// filter. `limit` truncates the ordered result for display.
    pub async fn execute(
        &self,
        profile: &ScreenProfile,
        limit: Option<usize>,
    ) -> Result<ScreenResult, DomainError> {
        let snapshot = self.source.screener().await?;
        let total = snapshot.rows.len();

        let mut criteria = profile.criteria.clone();
        if criteria.exclude_held {
            let monitor = self.source.monitor().await?;
            criteria.exclude_symbols = monitor
                .positions
                .into_iter()
                .map(|p| p.symbol)
                .collect();
        }

        let mut rows = pipeline::run(snapshot.rows, &profile.weights, &criteria, &profile.sort);

        if let Some(max) = limit {
            rows.truncate(max);
        }

        Ok(ScreenResult {
            last_updated: snapshot.last_updated,
            total,
            shown: rows.len(),
            rows,
        })
    }
}
