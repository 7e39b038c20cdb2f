//! The screener pipeline: score, filter, sort.
//!
//! A pure transform from a raw snapshot plus configuration to an ordered
//! result. Scoring runs first so filter predicates could reference the
//! derived score; filtering preserves input order; the sort is stable, so
//! equal keys keep their upstream order. Identical inputs always produce
//! identical output — callers may memoize on the input tuple if they wish.

use std::cmp::Ordering;

use crate::domain::entities::screener_row::{ScoredRow, ScreenerRow};
use crate::domain::values::criteria::FilterCriteria;
use crate::domain::values::sort_spec::{Direction, KeyValue, SortSpec};
use crate::domain::values::weights::ScoreWeights;

/// Attach the weighted composite score to every row, preserving order.
pub fn score_rows(rows: Vec<ScreenerRow>, weights: &ScoreWeights) -> Vec<ScoredRow> {
    rows.into_iter()
        .map(|row| {
            let weighted_score = weights.weighted_score(&row);
            ScoredRow {
                row,
                weighted_score,
            }
        })
        .collect()
}

/// Drop rows failing any criterion. Never reorders.
pub fn filter_rows(rows: &mut Vec<ScoredRow>, criteria: &FilterCriteria) {
    rows.retain(|scored| criteria.matches(&scored.row));
}

/// Stable sort by the spec's key. Rows whose key resolves to nothing
/// (null, NaN, empty string, unparseable date) order last in both
/// directions; the direction multiplier only applies between two defined
/// values.
pub fn sort_rows(rows: &mut [ScoredRow], spec: &SortSpec) {
    rows.sort_by(|a, b| compare(a, b, spec));
}

fn compare(a: &ScoredRow, b: &ScoredRow, spec: &SortSpec) -> Ordering {
    let ordering = match (spec.key.value_of(a), spec.key.value_of(b)) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(a), Some(b)) => compare_values(&a, &b),
    };
    match spec.direction {
        Direction::Asc => ordering,
        Direction::Desc => ordering.reverse(),
    }
}

fn compare_values(a: &KeyValue, b: &KeyValue) -> Ordering {
    match (a, b) {
        (KeyValue::Date(a), KeyValue::Date(b)) => a.cmp(b),
        (KeyValue::Text(a), KeyValue::Text(b)) => a.cmp(b),
        (KeyValue::Number(a), KeyValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        // Keys are typed, so mixed pairs cannot arise from the same key;
        // treat them as equal rather than inventing an order.
        _ => Ordering::Equal,
    }
}

/// Full pipeline: score every row, filter, sort.
pub fn run(
    rows: Vec<ScreenerRow>,
    weights: &ScoreWeights,
    criteria: &FilterCriteria,
    spec: &SortSpec,
) -> Vec<ScoredRow> {
    let mut scored = score_rows(rows, weights);
    filter_rows(&mut scored, criteria);
    sort_rows(&mut scored, spec);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::sort_spec::SortKey;

    fn row(symbol: &str, price: f64) -> ScreenerRow {
        ScreenerRow {
            symbol: symbol.into(),
            price,
            ror: Some(0.02),
            rsi: 40.0,
            bb_percent: 0.3,
            ..ScreenerRow::default()
        }
    }

    fn spec(key: SortKey, direction: Direction) -> SortSpec {
        SortSpec { key, direction }
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        let out = run(
            vec![],
            &ScoreWeights::default(),
            &FilterCriteria::default(),
            &SortSpec::default(),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let rows = vec![row("C", 30.0), row("A", 10.0), row("B", 20.0)];
        let mut scored = score_rows(rows, &ScoreWeights::default());
        filter_rows(&mut scored, &FilterCriteria::default());
        let symbols: Vec<_> = scored.iter().map(|s| s.row.symbol.as_str()).collect();
        assert_eq!(symbols, ["C", "A", "B"]);
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let rows = vec![row("C", 30.0), row("A", 10.0), row("B", 20.0)];
        let mut scored = score_rows(rows, &ScoreWeights::default());

        sort_rows(&mut scored, &spec(SortKey::Price, Direction::Asc));
        let asc: Vec<_> = scored.iter().map(|s| s.row.price as i64).collect();
        assert_eq!(asc, [10, 20, 30]);

        sort_rows(&mut scored, &spec(SortKey::Price, Direction::Desc));
        let desc: Vec<_> = scored.iter().map(|s| s.row.price as i64).collect();
        assert_eq!(desc, [30, 20, 10]);
    }

    #[test]
    fn test_nulls_sort_last_in_both_directions() {
        let mut a = row("A", 10.0);
        a.ror = Some(0.02);
        let mut b = row("B", 20.0);
        b.ror = None;
        let mut c = row("C", 30.0);
        c.ror = Some(0.01);

        for direction in [Direction::Asc, Direction::Desc] {
            let mut scored = score_rows(
                vec![a.clone(), b.clone(), c.clone()],
                &ScoreWeights::default(),
            );
            sort_rows(&mut scored, &spec(SortKey::Ror, direction));
            assert_eq!(
                scored.last().unwrap().row.symbol,
                "B",
                "null ror must sort last when {direction:?}"
            );
        }
    }

    #[test]
    fn test_date_sort_by_timestamp_not_lexicographically() {
        let mut early = row("E", 10.0);
        early.next_earnings = Some("2024-01-09".into());
        let mut late = row("L", 10.0);
        late.next_earnings = Some("confirmed soon".into());
        let mut mid = row("M", 10.0);
        mid.next_earnings = Some("2024-05-01".into());

        let mut scored = score_rows(vec![mid, late, early], &ScoreWeights::default());
        sort_rows(&mut scored, &spec(SortKey::NextEarnings, Direction::Asc));
        let symbols: Vec<_> = scored.iter().map(|s| s.row.symbol.as_str()).collect();
        // Unparseable date is treated as missing and lands last
        assert_eq!(symbols, ["E", "M", "L"]);
    }

    #[test]
    fn test_string_sort_on_symbol() {
        let rows = vec![row("MSFT", 1.0), row("AAPL", 2.0), row("GOOG", 3.0)];
        let mut scored = score_rows(rows, &ScoreWeights::default());
        sort_rows(&mut scored, &spec(SortKey::Symbol, Direction::Asc));
        let symbols: Vec<_> = scored.iter().map(|s| s.row.symbol.as_str()).collect();
        assert_eq!(symbols, ["AAPL", "GOOG", "MSFT"]);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let rows = vec![row("first", 10.0), row("second", 10.0), row("third", 10.0)];
        let mut scored = score_rows(rows, &ScoreWeights::default());
        sort_rows(&mut scored, &spec(SortKey::Price, Direction::Desc));
        let symbols: Vec<_> = scored.iter().map(|s| s.row.symbol.as_str()).collect();
        assert_eq!(symbols, ["first", "second", "third"]);
    }

    #[test]
    fn test_default_sort_uses_derived_score() {
        let mut strong = row("STRONG", 10.0);
        strong.fundamentals_score = 5.0;
        strong.technicals_score = 5.0;
        strong.liquidity_score = 5.0;
        let mut weak = row("WEAK", 10.0);
        weak.fundamentals_score = 1.0;
        weak.technicals_score = 1.0;
        weak.liquidity_score = 1.0;
        // Upstream options_score says the opposite; the alias must win
        strong.options_score = 1.0;
        weak.options_score = 5.0;

        let out = run(
            vec![weak, strong],
            &ScoreWeights::default(),
            &FilterCriteria::default(),
            &SortSpec::default(),
        );
        assert_eq!(out[0].row.symbol, "STRONG");
    }
}
