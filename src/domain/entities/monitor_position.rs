//! Held positions from the monitor sheet. These never enter the screener
//! pipeline; they feed the exclusion set and the monitor display list.

use serde::{Deserialize, Serialize};

/// Weeks-to-expiry cell: the sheet reports either a number or a label such
/// as "EXP" for the expiration week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeeksOut {
    Number(f64),
    Label(String),
}

impl Default for WeeksOut {
    fn default() -> Self {
        WeeksOut::Number(0.0)
    }
}

/// One held position (cash-secured put, covered call, or stock).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorPosition {
    pub date: Option<String>,
    pub weeks_out: WeeksOut,
    pub expiry: Option<String>,
    pub symbol: String,
    /// "P", "C", or "STOCK".
    #[serde(rename = "type")]
    pub position_type: String,
    pub contracts: f64,
    pub strike: f64,
    pub current_price: f64,
    pub today_change: f64,
    pub itm_otm: f64,
    pub roll: String,
    pub comments: String,
    pub assigned_price: Option<f64>,
    pub quality_score: f64,
    pub fundamentals_score: f64,
    pub technicals_score: f64,
}
