//! Screener filter criteria: a conjunction of independent predicates.
//! A row survives iff it satisfies every one; absent bounds are the
//! sentinel extremes, so the default criteria pass nearly everything.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::entities::screener_row::ScreenerRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Inclusive share-price range.
    pub price_min: f64,
    pub price_max: f64,
    /// Inclusive RSI ceiling.
    pub rsi_max: f64,
    /// BB% ceiling on the UI's 0–100 scale. Row data is a 0–1 ratio; the
    /// conversion happens exactly once, inside [`FilterCriteria::matches`].
    pub bb_percent_max: f64,
    /// Return-on-risk floor. A row with no ROR at all fails this predicate:
    /// unknown opportunities are excluded, not waved through.
    pub ror_min: f64,
    /// When set, rows whose symbol appears in `exclude_symbols` are dropped.
    /// When unset, the symbol set is ignored entirely.
    pub exclude_held: bool,
    #[serde(skip)]
    pub exclude_symbols: HashSet<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price_min: 0.0,
            price_max: 999_999.0,
            rsi_max: 94.0,
            bb_percent_max: 50.0,
            ror_min: 0.01,
            exclude_held: false,
            exclude_symbols: HashSet::new(),
        }
    }
}

impl FilterCriteria {
    /// Evaluate the full conjunction against one row.
    pub fn matches(&self, row: &ScreenerRow) -> bool {
        if row.price < self.price_min || row.price > self.price_max {
            return false;
        }

        if row.rsi > self.rsi_max {
            return false;
        }

        // UI scale 0–100 vs stored ratio 0–1
        if row.bb_percent > self.bb_percent_max / 100.0 {
            return false;
        }

        match row.ror {
            Some(ror) if ror >= self.ror_min => {}
            _ => return false,
        }

        if self.exclude_held && self.exclude_symbols.contains(&row.symbol) {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing_row() -> ScreenerRow {
        ScreenerRow {
            symbol: "AAPL".into(),
            price: 100.0,
            rsi: 40.0,
            bb_percent: 0.3,
            ror: Some(0.02),
            ..ScreenerRow::default()
        }
    }

    #[test]
    fn test_default_criteria_pass_a_sane_row() {
        assert!(FilterCriteria::default().matches(&passing_row()));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let criteria = FilterCriteria {
            price_min: 100.0,
            price_max: 100.0,
            ..FilterCriteria::default()
        };
        assert!(criteria.matches(&passing_row()));

        let mut row = passing_row();
        row.price = 100.01;
        assert!(!criteria.matches(&row));
        row.price = 99.99;
        assert!(!criteria.matches(&row));
    }

    #[test]
    fn test_rsi_ceiling_is_inclusive() {
        let criteria = FilterCriteria {
            rsi_max: 40.0,
            ..FilterCriteria::default()
        };
        assert!(criteria.matches(&passing_row()));

        let mut row = passing_row();
        row.rsi = 40.1;
        assert!(!criteria.matches(&row));
    }

    #[test]
    fn test_bb_ceiling_converts_ui_scale_once() {
        // Ceiling 50 on the UI scale means a 0.50 ratio on the data scale
        let criteria = FilterCriteria {
            bb_percent_max: 50.0,
            ..FilterCriteria::default()
        };
        let mut row = passing_row();
        row.bb_percent = 0.50;
        assert!(criteria.matches(&row));
        row.bb_percent = 0.51;
        assert!(!criteria.matches(&row));
    }

    #[test]
    fn test_missing_ror_fails_the_floor() {
        let criteria = FilterCriteria::default();

        let mut row = passing_row();
        row.ror = None;
        assert!(!criteria.matches(&row));

        row.ror = Some(0.005);
        assert!(!criteria.matches(&row));

        row.ror = Some(0.01);
        assert!(criteria.matches(&row));
    }

    #[test]
    fn test_exclusion_only_applies_when_toggled() {
        let mut criteria = FilterCriteria::default();
        criteria.exclude_symbols.insert("AAPL".into());

        // Toggle off: set contents are irrelevant
        assert!(criteria.matches(&passing_row()));

        criteria.exclude_held = true;
        assert!(!criteria.matches(&passing_row()));

        let mut other = passing_row();
        other.symbol = "MSFT".into();
        assert!(criteria.matches(&other));
    }
}
