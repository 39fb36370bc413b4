use apriori::{generate_rules, mine, read_transactions_path, render_itemsets, render_rules, MiningConfig};

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "apriori",
    about = "Mine frequent itemsets and association rules from a transaction table",
    version
)]
struct Args {
    /// CSV transaction table with a header row
    #[arg(long)]
    input: PathBuf,
    /// TOML file with mining parameters
    #[arg(long)]
    config: Option<PathBuf>,
    /// Minimum support as an absolute basket count
    #[arg(long)]
    min_support: Option<usize>,
    /// Minimum confidence in percent (0-100)
    #[arg(long)]
    min_confidence: Option<f64>,
    /// Leading share of the baskets to mine, in percent (0-100)
    #[arg(long)]
    data_percentage: Option<f64>,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn resolve_config(args: &Args) -> Result<MiningConfig> {
    let mut config = match &args.config {
        Some(path) => MiningConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => MiningConfig::default(),
    };

    if let Some(min_support) = args.min_support {
        config.min_support = min_support;
    }
    if let Some(percent) = args.min_confidence {
        config.min_confidence = percent / 100.0;
    }
    if let Some(percent) = args.data_percentage {
        config.data_percentage = percent / 100.0;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = resolve_config(&args)?;
    info!(?config, "starting mining run");

    let mut transactions = read_transactions_path(&args.input, &config.ingest)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    transactions.truncate(config.data_percentage);

    let table = mine(&transactions.baskets, config.min_support);
    let rules = generate_rules(&table, config.min_confidence);

    println!("Frequent Item Sets:");
    print!("{}", render_itemsets(&table, Some(&transactions.catalog)));
    println!();
    println!("Association Rules:");
    print!("{}", render_rules(&rules, Some(&transactions.catalog)));

    Ok(())
}
