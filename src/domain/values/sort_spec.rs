//! Sort specification: a closed set of sortable columns plus a direction.
//!
//! Keys resolve to typed accessors at compile time rather than by runtime
//! field lookup; `options_score` is the one alias, standing in for the
//! derived weighted score.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::entities::screener_row::{parse_date, ScoredRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Symbol,
    Price,
    Ror,
    Rsi,
    BbPercent,
    AltmanZScore,
    SmaTrend,
    Strike,
    Bid,
    Oi,
    NextEarnings,
    /// Aliases the derived weighted score, not the raw upstream column.
    OptionsScore,
    FundamentalsScore,
    TechnicalsScore,
    LiquidityScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: Direction,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::OptionsScore,
            direction: Direction::Desc,
        }
    }
}

/// A resolved sort-key value. Missing, NaN, empty-string and unparseable
/// date values resolve to `None` upstream of this enum and always order
/// after every defined value.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyValue<'a> {
    Number(f64),
    Text(&'a str),
    Date(DateTime<Utc>),
}

impl SortKey {
    /// Typed accessor for this key on a scored row.
    pub fn value_of<'a>(&self, scored: &'a ScoredRow) -> Option<KeyValue<'a>> {
        let row = &scored.row;
        match self {
            SortKey::Symbol => non_empty(&row.symbol),
            SortKey::Price => finite(row.price),
            SortKey::Ror => row.ror.and_then(finite),
            SortKey::Rsi => finite(row.rsi),
            SortKey::BbPercent => finite(row.bb_percent),
            SortKey::AltmanZScore => finite(row.altman_z_score),
            SortKey::SmaTrend => finite(row.sma_trend),
            SortKey::Strike => finite(row.strike),
            SortKey::Bid => finite(row.bid),
            SortKey::Oi => finite(row.oi),
            SortKey::NextEarnings => row
                .next_earnings
                .as_deref()
                .and_then(parse_date)
                .map(KeyValue::Date),
            SortKey::OptionsScore => finite(scored.weighted_score),
            SortKey::FundamentalsScore => finite(row.fundamentals_score),
            SortKey::TechnicalsScore => finite(row.technicals_score),
            SortKey::LiquidityScore => finite(row.liquidity_score),
        }
    }

    /// Column header label for display layers.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Symbol => "Symbol",
            SortKey::Price => "Price",
            SortKey::Ror => "ROR %",
            SortKey::Rsi => "RSI",
            SortKey::BbPercent => "BB %",
            SortKey::AltmanZScore => "Altman Z",
            SortKey::SmaTrend => "SMA Trend",
            SortKey::Strike => "Strike",
            SortKey::Bid => "Bid",
            SortKey::Oi => "Open Interest",
            SortKey::NextEarnings => "Earnings",
            SortKey::OptionsScore => "Options Score",
            SortKey::FundamentalsScore => "Fundamentals",
            SortKey::TechnicalsScore => "Technicals",
            SortKey::LiquidityScore => "Liquidity",
        }
    }
}

fn finite(v: f64) -> Option<KeyValue<'static>> {
    v.is_finite().then_some(KeyValue::Number(v))
}

fn non_empty(s: &str) -> Option<KeyValue<'_>> {
    (!s.is_empty()).then_some(KeyValue::Text(s))
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Symbol => "symbol",
            SortKey::Price => "price",
            SortKey::Ror => "ror",
            SortKey::Rsi => "rsi",
            SortKey::BbPercent => "bbPercent",
            SortKey::AltmanZScore => "altmanZScore",
            SortKey::SmaTrend => "smaTrend",
            SortKey::Strike => "strike",
            SortKey::Bid => "bid",
            SortKey::Oi => "oi",
            SortKey::NextEarnings => "nextEarnings",
            SortKey::OptionsScore => "optionsScore",
            SortKey::FundamentalsScore => "fundamentalsScore",
            SortKey::TechnicalsScore => "technicalsScore",
            SortKey::LiquidityScore => "liquidityScore",
        };
        write!(f, "{s}")
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "symbol" => Ok(SortKey::Symbol),
            "price" => Ok(SortKey::Price),
            "ror" => Ok(SortKey::Ror),
            "rsi" => Ok(SortKey::Rsi),
            "bbpercent" | "bb_percent" => Ok(SortKey::BbPercent),
            "altmanzscore" | "altman_z_score" => Ok(SortKey::AltmanZScore),
            "smatrend" | "sma_trend" => Ok(SortKey::SmaTrend),
            "strike" => Ok(SortKey::Strike),
            "bid" => Ok(SortKey::Bid),
            "oi" => Ok(SortKey::Oi),
            "nextearnings" | "next_earnings" => Ok(SortKey::NextEarnings),
            "optionsscore" | "options_score" => Ok(SortKey::OptionsScore),
            "fundamentalsscore" | "fundamentals_score" => Ok(SortKey::FundamentalsScore),
            "technicalsscore" | "technicals_score" => Ok(SortKey::TechnicalsScore),
            "liquidityscore" | "liquidity_score" => Ok(SortKey::LiquidityScore),
            _ => Err(format!("Unknown sort key: {s}")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "asc"),
            Direction::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Asc),
            "desc" | "descending" => Ok(Direction::Desc),
            _ => Err(format!("Unknown sort direction: {s}")),
        }
    }
}
