use std::path::PathBuf;

use clap::Parser;
use rocket_plot::aggregate_service::{AggregateOptions, AggregateService};
use rocket_plot::chart_service::ChartService;
use rocket_plot::config_handler;
use rocket_plot::replay_service::ReplayService;
use tracing::log;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "rocket-plot", version)]
#[command(about = "Charts one player's Rocket League results from replay JSON files")]
struct Args {
    /// Replay JSON files, or directories to search for *.json files
    files: Vec<PathBuf>,

    /// Aggregate and print the summary instead of opening the charts
    #[arg(long)]
    dry_run: bool,

    /// Fail when a file was recorded by a different player than the first one
    #[arg(long)]
    strict_player: bool,

    /// JSON config file, CONFIG_PATH is used when not given
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of histogram bins
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    bins: Option<u16>,
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut config = config_handler::get_config(args.config.as_deref())?;
    if let Some(bins) = args.bins {
        config.histogram_bins = usize::from(bins);
    }
    config.strict_player |= args.strict_player;

    let paths = ReplayService::expand_paths(&args.files)?;
    let matches = ReplayService::read_all(&paths)?;
    let options = AggregateOptions { strict_player: config.strict_player };
    let summary = AggregateService::aggregate_with(&matches, &options)?;

    if args.dry_run {
        print!("{summary}");
        return Ok(());
    }

    let charts = ChartService::build(&summary, &config);
    rocket_plot::ui::run(&charts)
}

fn main() {
    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    log::debug!("[MAIN] {:?}", args);

    if let Err(e) = run(&args) {
        for cause in e.chain() {
            eprintln!("{}", cause);
        }
        std::process::exit(1);
    }
}
