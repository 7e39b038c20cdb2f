use clap::Parser;
use proverbs::cli::commands::{Cli, Commands, ScreenArgs};
use proverbs::domain::values::profile::ScreenProfile;
use proverbs::domain::values::thresholds::Metric;
use proverbs::domain::values::weights::ScoreWeights;
use proverbs::Proverbs;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let db_path = std::env::var("PROVERBS_DB").unwrap_or_else(|_| "./proverbs.db".into());
    let snapshot_dir = cli
        .snapshot_dir
        .clone()
        .or_else(|| std::env::var("PROVERBS_SNAPSHOT_DIR").ok());

    let pv = match build(snapshot_dir, &db_path) {
        Ok(pv) => pv,
        Err(e) => {
            eprintln!("Error initializing proverbs: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(pv, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn build(
    snapshot_dir: Option<String>,
    db_path: &str,
) -> Result<Proverbs, Box<dyn std::error::Error>> {
    match snapshot_dir {
        Some(dir) => Ok(Proverbs::with_snapshot_dir(&dir, db_path)?),
        None => {
            let api_url = std::env::var("PROVERBS_API_URL")
                .map_err(|_| "PROVERBS_API_URL is not set (or pass --snapshot-dir)")?;
            let password = std::env::var("PROVERBS_API_PASSWORD").ok();
            Ok(Proverbs::new(&api_url, password, db_path)?)
        }
    }
}

async fn run_command(pv: Proverbs, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Screen { args, limit } => {
            let profile = resolve_profile(&pv, &args)?;
            let result = pv.screen(&profile, limit).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Monitor => {
            let snapshot = pv.monitor().await?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Commands::Metadata => {
            let metadata = pv.metadata().await?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        Commands::Classify { metric, value } => {
            let metric: Metric = metric.parse().map_err(|e: String| e)?;
            let tier = pv.classify(metric, Some(value));
            println!("{tier}");
        }
        Commands::ProfileSave { name, args } => {
            let profile = resolve_profile(&pv, &args)?;
            pv.profile_save(&name, &profile)?;
            println!("Saved profile '{name}'");
        }
        Commands::Profiles => {
            let entries = pv.profile_list()?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Commands::ProfileDelete { name } => {
            if pv.profile_delete(&name)? {
                println!("Deleted profile '{name}'");
            } else {
                println!("No profile named '{name}'");
            }
        }
    }
    Ok(())
}

/// Start from the named profile (or the defaults) and lay the flags that
/// were actually given on top.
fn resolve_profile(pv: &Proverbs, args: &ScreenArgs) -> Result<ScreenProfile, String> {
    let mut profile = match &args.profile {
        Some(name) => pv.profile_load(name).map_err(|e| e.to_string())?,
        None => ScreenProfile::default(),
    };

    if let Some(sort) = &args.sort {
        profile.sort.key = sort.parse()?;
    }
    if let Some(direction) = &args.direction {
        profile.sort.direction = direction.parse()?;
    }
    if let Some(min) = args.price_min {
        profile.criteria.price_min = min;
    }
    if let Some(max) = args.price_max {
        profile.criteria.price_max = max;
    }
    if let Some(max) = args.rsi_max {
        profile.criteria.rsi_max = max;
    }
    if let Some(max) = args.bb_max {
        profile.criteria.bb_percent_max = max;
    }
    if let Some(min) = args.ror_min {
        profile.criteria.ror_min = min;
    }
    if args.exclude_held {
        profile.criteria.exclude_held = true;
    }
    if let Some(weights) = &args.weights {
        profile.weights = parse_weights(weights)?;
    }

    Ok(profile)
}

fn parse_weights(s: &str) -> Result<ScoreWeights, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("Invalid weights '{s}': {e}"))?;
    match parts.as_slice() {
        [f, t, l] if *f >= 0.0 && *t >= 0.0 && *l >= 0.0 => Ok(ScoreWeights::new(*f, *t, *l)),
        [_, _, _] => Err(format!("Weights must be non-negative: {s}")),
        _ => Err(format!(
            "Expected weights as fundamentals,technicals,liquidity: {s}"
        )),
    }
}
