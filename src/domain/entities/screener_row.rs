//! Screener rows: one tradable option opportunity per symbol, as produced
//! by the spreadsheet backend. Field names mirror the upstream JSON
//! (camelCase) exactly; everything here is already-computed input that the
//! engine consumes without re-validating.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One screenable opportunity. Ordinal sub-scores live on a 1–5 scale
/// (out-of-range values are accepted; classification degrades rather than
/// clamping), `bb_percent` and `ror` are ratios, `next_earnings` and
/// `expiration` are date strings or null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerRow {
    pub symbol: String,
    pub sector: String,
    pub industry: String,
    pub description: String,
    pub price: f64,
    pub next_earnings: Option<String>,

    // Options
    pub expiration: Option<String>,
    pub strike: f64,
    pub bid: f64,
    pub ror: Option<f64>,
    pub oi: f64,
    pub avg_oi: f64,
    pub median_oi: f64,
    pub depth: f64,
    pub range: f64,

    // Fundamentals
    pub roic: f64,
    pub piotroski_f_score: f64,

    // Scores (1–5 scale)
    pub options_score: f64,
    pub fundamentals_score: f64,
    pub technicals_score: f64,
    pub liquidity_score: f64,

    // Technicals
    pub rsi: f64,
    pub bb_percent: f64,
    pub altman_z_score: f64,
    pub sma_trend: f64,
    pub momentum: f64,
    pub sma50: f64,
    pub sma100: f64,
    pub sma200: f64,
    pub peg_ratio: Option<f64>,
    pub analyst_upside: Option<f64>,

    // Sparkline data
    #[serde(default)]
    pub price_history: Vec<f64>,
}

impl ScreenerRow {
    /// Median open interest as a fraction of the average, the liquidity
    /// skew input to classification. `None` when the average is zero.
    pub fn median_oi_ratio(&self) -> Option<f64> {
        if self.avg_oi == 0.0 {
            None
        } else {
            Some(self.median_oi / self.avg_oi)
        }
    }

    /// Whole days from `today` until the next earnings date. Negative when
    /// earnings already passed; `None` when the date is missing or
    /// unparseable.
    pub fn days_until_earnings(&self, today: NaiveDate) -> Option<i64> {
        let date = parse_date(self.next_earnings.as_deref()?)?;
        Some((date.date_naive() - today).num_days())
    }

    /// Whether earnings land within the next `threshold_weeks` weeks.
    /// Past earnings dates never count as near.
    pub fn earnings_within_weeks(&self, today: NaiveDate, threshold_weeks: u32) -> bool {
        match self.days_until_earnings(today) {
            Some(days) => days >= 0 && days <= i64::from(threshold_weeks) * 7,
            None => false,
        }
    }
}

/// A screener row with its derived composite score attached. This is the
/// pipeline's output unit; the derived field flattens back into the row's
/// JSON object for downstream rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRow {
    #[serde(flatten)]
    pub row: ScreenerRow,
    pub weighted_score: f64,
}

/// Lenient date parsing for upstream date strings: RFC 3339 first, then a
/// bare `YYYY-MM-DD` taken as midnight UTC.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
}
