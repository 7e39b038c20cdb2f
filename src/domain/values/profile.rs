//! A saved screener configuration: the full set of knobs a user tunes,
//! serialized as one value. The engine never holds this as mutable state;
//! callers pass a profile (or its pieces) into every pipeline run, and
//! persistence is a repository concern.

use serde::{Deserialize, Serialize};

use crate::domain::values::criteria::FilterCriteria;
use crate::domain::values::sort_spec::SortSpec;
use crate::domain::values::weights::ScoreWeights;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenProfile {
    pub weights: ScoreWeights,
    pub criteria: FilterCriteria,
    pub sort: SortSpec,
    /// Cash available for new positions, in thousands of dollars.
    pub cash_amount: f64,
    /// Highlight window for upcoming earnings, in weeks.
    pub earnings_week_threshold: u32,
}

impl Default for ScreenProfile {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
            cash_amount: 30.0,
            earnings_week_threshold: 1,
        }
    }
}
