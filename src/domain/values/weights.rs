//! Composite score weighting.
//!
//! Blends the three category sub-scores into one summary number:
//! `(fundamentals·wF + technicals·wT + liquidity·wL) / (wF + wT + wL)`.
//! Weights need not sum to 100; the divisor normalizes whatever is given.

use serde::{Deserialize, Serialize};

use crate::domain::entities::screener_row::ScreenerRow;

/// Weights for the three sub-score categories. Percent-style values by
/// convention (defaults sum to 100) but any non-negative magnitudes work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub fundamentals: f64,
    pub technicals: f64,
    pub liquidity: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            fundamentals: 25.0,
            technicals: 25.0,
            liquidity: 50.0,
        }
    }
}

impl ScoreWeights {
    pub fn new(fundamentals: f64, technicals: f64, liquidity: f64) -> Self {
        Self {
            fundamentals,
            technicals,
            liquidity,
        }
    }

    /// Weighted composite score for one row.
    ///
    /// When all three weights are zero there is nothing to normalize by;
    /// the row's upstream-computed options score stands in rather than
    /// dividing by zero. Output is unrounded; rounding is a display concern.
    pub fn weighted_score(&self, row: &ScreenerRow) -> f64 {
        let total = self.fundamentals + self.technicals + self.liquidity;
        if total == 0.0 {
            return row.options_score;
        }

        (row.fundamentals_score * self.fundamentals
            + row.technicals_score * self.technicals
            + row.liquidity_score * self.liquidity)
            / total
    }
}
