//! Algorand Transparency Dashboard CLI
//!
//! Browses the bundled Foundation and Technologies disclosures, prepares chart
//! tables and pie aggregates, and gates exports on a wallet's token balance.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use transparency_reports::access::{self, AccessTier, Feature};
use transparency_reports::chart::{self, ReportRange};
use transparency_reports::config::{Config, FileConfig, Overrides};
use transparency_reports::constants;
use transparency_reports::export;
use transparency_reports::formula::Operator;
use transparency_reports::indexer::IndexerClient;
use transparency_reports::poller::{self, BalancePoller};
use transparency_reports::selection::Selection;
use transparency_reports::series::DataSeries;
use transparency_reports::store::{self, Org};
use transparency_reports::taxonomy::{self, Taxonomy};

#[derive(Parser, Debug)]
#[command(name = "transparency-reports")]
#[command(about = "Charts and exports for Algorand transparency reports")]
struct Args {
    /// Config file (optional; defaults apply when missing)
    #[arg(short, long, default_value = constants::CONFIG_FILENAME, global = true)]
    config: PathBuf,

    /// Reporting organization: foundation or technologies
    #[arg(long, default_value = "foundation", global = true)]
    org: Org,

    /// Gating-token balance in micro-units (skips the wallet lookup)
    #[arg(long, global = true, allow_hyphen_values = true)]
    balance: Option<i64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every series in the organization's taxonomy
    Series,

    /// Print a dense table for the chosen series
    Table {
        /// Series ids, in column order
        #[arg(long = "series", required = true, num_args = 1..)]
        series: Vec<String>,

        #[command(flatten)]
        range: RangeArgs,

        /// Also write the table to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print JSON instead of a console table
        #[arg(long)]
        json: bool,

        /// Show disclosures as printed ("N/R" kept)
        #[arg(long)]
        raw: bool,
    },

    /// Pie aggregate (sum of absolute values) over a report range
    Pie {
        #[arg(long = "series", required = true, num_args = 1..)]
        series: Vec<String>,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Combine two series with an operator and print the result
    Formula {
        /// Left operand series id
        #[arg(long)]
        a: String,

        /// Right operand series id
        #[arg(long)]
        b: String,

        /// One of + - * /
        #[arg(long, allow_hyphen_values = true)]
        op: Operator,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// List the loan ledger entries disclosed in a report range
    Loans {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// List issues flagged in a report range
    Issues {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Show the tier and unlocked features for --balance (or the configured wallet)
    Tier,

    /// Look up the configured wallet's gating-token balance
    Balance {
        /// Wallet address (overrides config.toml)
        #[arg(long)]
        address: Option<String>,

        /// Indexer base URL (overrides config.toml)
        #[arg(long)]
        indexer_url: Option<String>,

        /// Keep polling and report tier changes
        #[arg(long)]
        watch: bool,
    },
}

#[derive(clap::Args, Debug)]
struct RangeArgs {
    /// First report (default: first published)
    #[arg(long)]
    start: Option<String>,

    /// Last report (default: latest published)
    #[arg(long)]
    end: Option<String>,
}

impl RangeArgs {
    fn to_range(&self, org: Org) -> ReportRange {
        let full = ReportRange::full(org);
        ReportRange::new(
            org,
            self.start.clone().unwrap_or(full.start),
            self.end.clone().unwrap_or(full.end),
        )
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_config(args: &Args, overrides: Overrides) -> Result<Config> {
    let file_config = FileConfig::load_optional(&args.config)?;
    if file_config.is_none() {
        info!("No {} found, using defaults", args.config.display());
    }
    Ok(Config::from_file(file_config.as_ref(), overrides))
}

fn indexer_client(config: &Config, address: &str) -> Result<IndexerClient> {
    IndexerClient::new(&config.indexer_url, address, config.asset_id, config.request_timeout)
        .context("Failed to create indexer client")
}

/// Tier from `--balance`, else one lookup of the configured wallet, else the base tier
async fn current_tier(args: &Args) -> Result<AccessTier> {
    if let Some(balance) = args.balance {
        return Ok(access::tier_for(balance));
    }

    let config = load_config(args, Overrides::default())?;
    let Some(address) = config.wallet_address.as_deref() else {
        return Ok(access::tier_for(0));
    };

    let client = indexer_client(&config, address)?;
    Ok(poller::poll_once(&client).await.tier)
}

fn require(tier: AccessTier, feature: Feature) -> Result<()> {
    if tier.allows(feature) {
        return Ok(());
    }
    anyhow::bail!(
        "{} requires the {} tier (current: {}).\n\
        Configure a wallet holding {} or pass --balance.",
        feature.label(),
        feature.required_tier(),
        tier,
        shared::CONFIG.gating.asset_name
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match &args.command {
        Command::Series => handle_series(args.org),
        Command::Table {
            series,
            range,
            csv,
            json,
            raw,
        } => {
            if csv.is_some() {
                require(current_tier(&args).await?, Feature::ExportCsv)?;
            }
            handle_table(args.org, series, range.to_range(args.org), csv.as_deref(), *json, *raw)
        }
        Command::Pie { series, range } => handle_pie(args.org, series, range.to_range(args.org)),
        Command::Formula { a, b, op, range } => {
            require(current_tier(&args).await?, Feature::FormulaBuilder)?;
            handle_formula(args.org, a, b, *op, range.to_range(args.org))
        }
        Command::Loans { range } => {
            handle_loans(args.org, range.to_range(args.org));
            Ok(())
        }
        Command::Issues { range } => {
            handle_issues(args.org, range.to_range(args.org));
            Ok(())
        }
        Command::Tier => match args.balance {
            Some(micro) => {
                handle_tier(micro);
                Ok(())
            }
            None => {
                let tier = current_tier(&args).await?;
                println!("Current tier: {}\n", tier);
                print_features(tier);
                Ok(())
            }
        },
        Command::Balance {
            address,
            indexer_url,
            watch,
        } => {
            let overrides = Overrides {
                address: address.clone(),
                base_url: indexer_url.clone(),
            };
            handle_balance(load_config(&args, overrides)?, *watch).await
        }
    }
}

/// Resolve series ids through a selection, so unknown ids are reported
fn select(taxonomy: &Taxonomy, ids: &[String]) -> Result<Vec<DataSeries>> {
    let mut selection = Selection::new(taxonomy.org);
    for id in ids {
        selection
            .select(taxonomy, id)
            .with_context(|| format!("Cannot select '{}' (run 'transparency-reports series' to list ids)", id))?;
    }
    Ok(selection.resolve(taxonomy)?)
}

fn print_range_header(org: Org, range: &ReportRange) {
    println!("{}: {} to {}\n", org.display_name(), range.start, range.end);
    if !range.is_valid() {
        println!("Unknown report in range (valid: {})\n", org.sequence().ids.join(", "));
    }
}

fn handle_series(org: Org) -> Result<()> {
    let taxonomy = taxonomy::build(org);
    println!("{} ({} reports)\n", org.display_name(), org.sequence().len());

    for category in &taxonomy.categories {
        println!("{}", category.name);
        for series in &category.series {
            print_series_line("  ", series);
        }
        for sub in &category.sub_categories {
            println!("  {}", sub.name);
            if sub.series.is_empty() {
                println!("    (no disclosures)");
            }
            for series in &sub.series {
                print_series_line("    ", series);
            }
        }
        println!();
    }

    println!(
        "{} series, {} selectable",
        taxonomy.series_count(),
        taxonomy.selectable().len()
    );
    Ok(())
}

fn print_series_line(indent: &str, series: &DataSeries) {
    println!(
        "{}{:<48} {:>3} pts  {}",
        indent,
        series.id,
        series.points.len(),
        series.color
    );
}

fn handle_table(
    org: Org,
    ids: &[String],
    range: ReportRange,
    csv_path: Option<&std::path::Path>,
    json: bool,
    raw: bool,
) -> Result<()> {
    let taxonomy = taxonomy::build(org);
    let series = select(&taxonomy, ids)?;
    let columns: Vec<&str> = series.iter().map(|s| s.id.as_str()).collect();

    if raw {
        let rows = chart::prepare_raw_table(&series, &range);
        if let Some(path) = csv_path {
            export::export_csv(path, &columns, &rows)?;
            println!("Wrote {} rows to {}", rows.len(), path.display());
        }
        if json {
            println!("{}", export::to_json(&rows)?);
        } else {
            print_range_header(org, &range);
            export::write_csv(std::io::stdout(), &columns, &rows)?;
        }
        return Ok(());
    }

    let rows = chart::prepare_table(&series, &range);
    if let Some(path) = csv_path {
        export::export_csv(path, &columns, &rows)?;
        println!("Wrote {} rows to {}", rows.len(), path.display());
    }

    if json {
        println!("{}", export::to_json(&rows)?);
    } else {
        print_range_header(org, &range);
        let names: Vec<(&str, &str)> = series.iter().map(|s| (s.id.as_str(), s.name.as_str())).collect();
        println!("{}", export::render_table(&rows, &names));
    }
    Ok(())
}

fn handle_pie(org: Org, ids: &[String], range: ReportRange) -> Result<()> {
    let taxonomy = taxonomy::build(org);
    let series = select(&taxonomy, ids)?;
    let slices = chart::prepare_aggregate(&series, &range);

    print_range_header(org, &range);
    if slices.is_empty() {
        println!("No non-zero values in range.");
        return Ok(());
    }

    let total: f64 = slices.iter().map(|s| s.value).sum();
    println!("{:<40} {:>14} {:>8}  {}", "Series", "Sum |value|", "Share", "Color");
    println!("{}", "-".repeat(74));
    for slice in &slices {
        println!(
            "{:<40} {:>14.2} {:>7.1}%  {}",
            slice.name,
            slice.value,
            slice.value / total * 100.0,
            slice.color
        );
    }
    println!("{}", "-".repeat(74));
    println!("{:<40} {:>14.2}", "Total", total);
    Ok(())
}

fn handle_formula(org: Org, a: &str, b: &str, op: Operator, range: ReportRange) -> Result<()> {
    let taxonomy = taxonomy::build(org);
    let mut selection = Selection::new(org);

    selection.select(&taxonomy, a)?;
    selection.select(&taxonomy, b)?;
    selection.add_calculated(&taxonomy, a, b, op)?;

    println!("Selected: {}", selection.selected().join(", "));
    for calculated in selection.calculated() {
        println!("{} = {}", calculated.id, calculated.name);
    }
    println!();

    let series = selection.resolve(&taxonomy)?;
    let rows = chart::prepare_table(&series, &range);

    print_range_header(selection.org(), &range);
    let names: Vec<(&str, &str)> = series.iter().map(|s| (s.id.as_str(), s.name.as_str())).collect();
    println!("{}", export::render_table(&rows, &names));
    Ok(())
}

fn handle_loans(org: Org, range: ReportRange) {
    print_range_header(org, &range);
    let entries = store::in_window(store::loans(org), range.reports(), |l| l.report);
    if entries.is_empty() {
        println!("No loans disclosed in range.");
        return;
    }

    println!(
        "{:<6} {:<9} {:<32} {:>12}  {}",
        "Report", "Period", "Counterparty", "Amount", "Status"
    );
    println!("{}", "-".repeat(76));

    let sequence = org.sequence();
    for entry in &entries {
        let amount = match entry.amount.as_number() {
            Some(v) => format!("{:.2}", v),
            None => entry.amount.raw(),
        };
        println!(
            "{:<6} {:<9} {:<32} {:>12}  {}",
            entry.report,
            sequence.period(entry.report).unwrap_or_default(),
            entry.counterparty,
            amount,
            entry.status
        );
    }

    let disclosed: f64 = entries.iter().filter_map(|e| e.amount.as_number()).sum();
    println!("{}", "-".repeat(76));
    println!("{:<49} {:>12.2}", "Total disclosed", disclosed);
}

fn handle_issues(org: Org, range: ReportRange) {
    print_range_header(org, &range);
    let flagged = store::in_window(store::issues(org), range.reports(), |i| i.report);
    if flagged.is_empty() {
        println!("No issues flagged in range.");
        return;
    }

    let sequence = org.sequence();
    for issue in flagged {
        println!(
            "[{} {}] {}",
            issue.report,
            sequence.period(issue.report).unwrap_or_default(),
            issue.title
        );
        println!("    {}", issue.note);
    }
}

fn handle_tier(micro: i64) {
    let tier = access::tier_for(micro);
    println!(
        "{:.6} {} -> {} ({})",
        access::whole_units(micro),
        shared::CONFIG.gating.asset_name,
        tier,
        tier.color()
    );
    println!();
    print_features(tier);
}

fn print_features(tier: AccessTier) {
    println!("Unlocked features:");
    for feature in Feature::ALL {
        let mark = if tier.allows(feature) { "x" } else { " " };
        println!("  [{}] {:<16} (requires {})", mark, feature.label(), feature.required_tier());
    }
}

async fn handle_balance(config: Config, watch: bool) -> Result<()> {
    let Some(address) = config.wallet_address.clone() else {
        anyhow::bail!(
            "No wallet configured.\n\n\
            Pass --address or add to {}:\n\
            [wallet]\n\
            address = \"YOUR_ADDRESS\"",
            constants::CONFIG_FILENAME
        );
    };

    let client = indexer_client(&config, &address)?;
    println!("Indexer: {}", client.url());

    if !watch {
        let snapshot = poller::poll_once(&client).await;
        println!(
            "{:.6} {} -> {}",
            access::whole_units(snapshot.balance_micro),
            shared::CONFIG.gating.asset_name,
            snapshot.tier
        );
        return Ok(());
    }

    println!("Polling every {}s (Ctrl-C to stop)\n", config.poll_interval.as_secs());
    let poller = BalancePoller::spawn(Arc::new(client), config.poll_interval);
    let mut rx = poller.subscribe();
    let mut last_tier = None;

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = *rx.borrow_and_update();
                if snapshot.fetched_at.is_some() && last_tier != Some(snapshot.tier) {
                    println!(
                        "{} {:.6} {} -> {}",
                        snapshot.fetched_at.map(|t| t.format("%H:%M:%S").to_string()).unwrap_or_default(),
                        access::whole_units(snapshot.balance_micro),
                        shared::CONFIG.gating.asset_name,
                        snapshot.tier
                    );
                    last_tier = Some(snapshot.tier);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!("\nStopping.");
                break;
            }
        }
    }

    poller.stop();
    Ok(())
}
