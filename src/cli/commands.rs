use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "proverbs", about = "Options screener: weighted scoring, filtering, classification")]
pub struct Cli {
    /// Read snapshots from a directory of JSON files instead of the HTTP API
    #[arg(long, global = true)]
    pub snapshot_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// The screener knobs, shared between `screen` and `profile-save`.
/// Unset flags fall back to the loaded profile (or the defaults).
#[derive(Args, Debug, Clone, Default)]
pub struct ScreenArgs {
    /// Start from a saved profile
    #[arg(long)]
    pub profile: Option<String>,
    /// Sort column (symbol, price, ror, rsi, bbPercent, altmanZScore,
    /// smaTrend, strike, bid, oi, nextEarnings, optionsScore,
    /// fundamentalsScore, technicalsScore, liquidityScore)
    #[arg(long)]
    pub sort: Option<String>,
    /// Sort direction (asc, desc)
    #[arg(long)]
    pub direction: Option<String>,
    #[arg(long)]
    pub price_min: Option<f64>,
    #[arg(long)]
    pub price_max: Option<f64>,
    #[arg(long)]
    pub rsi_max: Option<f64>,
    /// BB% ceiling on the 0-100 scale
    #[arg(long)]
    pub bb_max: Option<f64>,
    /// Return-on-risk floor (ratio, e.g. 0.01)
    #[arg(long)]
    pub ror_min: Option<f64>,
    /// Drop symbols already held in the monitor
    #[arg(long)]
    pub exclude_held: bool,
    /// Weights as fundamentals,technicals,liquidity (e.g. 25,25,50)
    #[arg(long)]
    pub weights: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the screener pipeline and print ranked rows
    Screen {
        #[command(flatten)]
        args: ScreenArgs,
        /// Cap how many rows to print
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show currently held positions
    Monitor,
    /// Show backend screening parameters
    Metadata,
    /// Classify a metric value into a confidence tier
    Classify {
        /// Metric kind (score, roic, piotroski, rsi, bb_percent, altman_z,
        /// sma_trend, momentum, ror, itm_otm, today_change, avg_oi,
        /// median_oi_ratio, depth, range)
        metric: String,
        value: f64,
    },
    /// Save screener settings as a named profile
    ProfileSave {
        name: String,
        #[command(flatten)]
        args: ScreenArgs,
    },
    /// List saved profiles
    Profiles,
    /// Delete a saved profile
    ProfileDelete { name: String },
}
