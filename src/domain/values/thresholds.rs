//! Threshold classification for screener and monitor metrics.
//!
//! Each metric carries its own monotonic cutoff table, and the direction of
//! favorability varies per metric: a low RSI is favorable (oversold entry),
//! a high Altman Z is favorable (solvent), momentum favors a middle band.
//! Classification is a pure lookup; a missing or NaN value is always
//! [`Tier::Indeterminate`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::values::tier::Tier;

/// The metrics the dashboard colors. Closed set; each maps to one cutoff
/// table in [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Composite or 1–5 sub-score (options, fundamentals, technicals, liquidity).
    Score,
    /// Return on invested capital, as a ratio.
    Roic,
    /// Piotroski F-score (0–9).
    Piotroski,
    /// RSI oscillator percentile (0–100). Lower is favorable.
    Rsi,
    /// Bollinger band percent (0–1). Lower is favorable.
    BbPercent,
    /// Altman Z solvency index.
    AltmanZ,
    /// SMA trend ordinal (1–3).
    SmaTrend,
    /// Price momentum ratio. Ideal band 5–15%.
    Momentum,
    /// Return on risk ratio.
    Ror,
    /// In/out-of-the-money spread. Positive = OTM.
    ItmOtm,
    /// Day-over-day price change. Sign-based, no warning tier.
    TodayChange,
    /// Average open interest across the chain.
    AvgOi,
    /// Median/average open interest ratio (0–1).
    MedianOiRatio,
    /// Market depth count.
    Depth,
    /// Strikes-in-trading-range count.
    Range,
}

/// Classify a metric value into a confidence tier.
///
/// Total over all inputs: `None` and NaN yield [`Tier::Indeterminate`], any
/// finite value falls into one of the table rows (degrading to
/// [`Tier::Unfavorable`] below the lowest cutoff). The single exception is
/// [`Metric::TodayChange`] at exactly zero, which renders neutral: a flat
/// day carries no signal in either direction.
pub fn classify(metric: Metric, value: Option<f64>) -> Tier {
    let v = match value {
        Some(v) if v.is_finite() => v,
        _ => return Tier::Indeterminate,
    };

    match metric {
        Metric::Score => {
            if v >= 3.5 {
                Tier::Favorable
            } else if v >= 2.5 {
                Tier::Warning
            } else {
                Tier::Unfavorable
            }
        }
        Metric::Roic => {
            if v >= 0.05 {
                Tier::Favorable
            } else if v >= -0.05 {
                Tier::Warning
            } else {
                Tier::Unfavorable
            }
        }
        Metric::Piotroski => {
            if v >= 6.0 {
                Tier::Favorable
            } else if v >= 5.0 {
                Tier::Warning
            } else {
                Tier::Unfavorable
            }
        }
        // Lower RSI is favorable: oversold names are the buying opportunity.
        Metric::Rsi => {
            if v <= 30.0 {
                Tier::Favorable
            } else if v <= 50.0 {
                Tier::Warning
            } else {
                Tier::Unfavorable
            }
        }
        // Lower BB% is favorable: price near the lower band.
        Metric::BbPercent => {
            if v <= 0.35 {
                Tier::Favorable
            } else if v <= 0.50 {
                Tier::Warning
            } else {
                Tier::Unfavorable
            }
        }
        Metric::AltmanZ => {
            if v >= 3.0 {
                Tier::Favorable
            } else if v >= 1.8 {
                Tier::Warning
            } else {
                Tier::Unfavorable
            }
        }
        // Ordinal 1–3; only the exact top two values rate a color.
        Metric::SmaTrend => {
            if v == 3.0 {
                Tier::Favorable
            } else if v == 2.0 {
                Tier::Warning
            } else {
                Tier::Unfavorable
            }
        }
        // Asymmetric band: 5–15% is the ideal pullback-with-strength zone,
        // anything from a mild dip (≥ −5%) up through an overheated run is
        // a warning, a deeper drawdown is unfavorable.
        Metric::Momentum => {
            if (0.05..=0.15).contains(&v) {
                Tier::Favorable
            } else if v >= -0.05 {
                Tier::Warning
            } else {
                Tier::Unfavorable
            }
        }
        Metric::Ror => {
            if v >= 0.015 {
                Tier::Favorable
            } else if v >= 0.01 {
                Tier::Warning
            } else {
                Tier::Unfavorable
            }
        }
        Metric::ItmOtm => {
            if v > 0.0 {
                Tier::Favorable
            } else if v >= -0.05 {
                Tier::Warning
            } else {
                Tier::Unfavorable
            }
        }
        Metric::TodayChange => {
            if v > 0.0 {
                Tier::Favorable
            } else if v < 0.0 {
                Tier::Unfavorable
            } else {
                Tier::Indeterminate
            }
        }
        Metric::AvgOi => {
            if v >= 250.0 {
                Tier::Favorable
            } else if v >= 50.0 {
                Tier::Warning
            } else {
                Tier::Unfavorable
            }
        }
        Metric::MedianOiRatio => {
            if v >= 0.50 {
                Tier::Favorable
            } else if v >= 0.20 {
                Tier::Warning
            } else {
                Tier::Unfavorable
            }
        }
        Metric::Depth => {
            if v >= 3.0 {
                Tier::Favorable
            } else if v >= 2.0 {
                Tier::Warning
            } else {
                Tier::Unfavorable
            }
        }
        Metric::Range => {
            if v >= 5.0 {
                Tier::Favorable
            } else if v >= 3.0 {
                Tier::Warning
            } else {
                Tier::Unfavorable
            }
        }
    }
}

impl Metric {
    pub const ALL: [Metric; 15] = [
        Metric::Score,
        Metric::Roic,
        Metric::Piotroski,
        Metric::Rsi,
        Metric::BbPercent,
        Metric::AltmanZ,
        Metric::SmaTrend,
        Metric::Momentum,
        Metric::Ror,
        Metric::ItmOtm,
        Metric::TodayChange,
        Metric::AvgOi,
        Metric::MedianOiRatio,
        Metric::Depth,
        Metric::Range,
    ];
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Metric::Score => "score",
            Metric::Roic => "roic",
            Metric::Piotroski => "piotroski",
            Metric::Rsi => "rsi",
            Metric::BbPercent => "bb_percent",
            Metric::AltmanZ => "altman_z",
            Metric::SmaTrend => "sma_trend",
            Metric::Momentum => "momentum",
            Metric::Ror => "ror",
            Metric::ItmOtm => "itm_otm",
            Metric::TodayChange => "today_change",
            Metric::AvgOi => "avg_oi",
            Metric::MedianOiRatio => "median_oi_ratio",
            Metric::Depth => "depth",
            Metric::Range => "range",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "score" => Ok(Metric::Score),
            "roic" => Ok(Metric::Roic),
            "piotroski" => Ok(Metric::Piotroski),
            "rsi" => Ok(Metric::Rsi),
            "bb_percent" | "bbpercent" => Ok(Metric::BbPercent),
            "altman_z" | "altmanz" => Ok(Metric::AltmanZ),
            "sma_trend" | "smatrend" => Ok(Metric::SmaTrend),
            "momentum" => Ok(Metric::Momentum),
            "ror" => Ok(Metric::Ror),
            "itm_otm" | "itmotm" => Ok(Metric::ItmOtm),
            "today_change" | "todaychange" => Ok(Metric::TodayChange),
            "avg_oi" | "avgoi" => Ok(Metric::AvgOi),
            "median_oi_ratio" | "medianoiratio" => Ok(Metric::MedianOiRatio),
            "depth" => Ok(Metric::Depth),
            "range" => Ok(Metric::Range),
            _ => Err(format!("Unknown metric: {s}")),
        }
    }
}
