use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tour_basics::{catalog, select, Demo, Host, Runner, Section, TourConfig};

#[derive(Parser)]
#[command(name = "tour")]
#[command(about = "Walk through small demos of basic language mechanics", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a tour.toml config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run only this section (overrides the config's section list)
    #[arg(short, long, value_enum)]
    section: Option<Section>,

    /// Run a single demo by name
    #[arg(short, long)]
    demo: Option<String>,

    /// List demo names and exit
    #[arg(long)]
    list: bool,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    // Priority: RUST_LOG env var > verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// `--demo` wins over everything; `--section` replaces the config's list.
fn pick_demos<'a>(
    cli: &Cli,
    config: &TourConfig,
    demos: &'a [Demo],
) -> tour_basics::Result<Vec<&'a Demo>> {
    let sections = match cli.section {
        Some(section) => vec![section],
        None => config.sections.clone(),
    };
    select(demos, &sections, &config.skip, cli.demo.as_deref())
}

fn list_demos(out: &mut dyn Write, demos: &[Demo]) -> io::Result<()> {
    for demo in demos {
        writeln!(out, "{:<14} {}", demo.section.to_string(), demo.name)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let demos = catalog();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        list_demos(&mut out, &demos)?;
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => TourConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => TourConfig::default(),
    };

    let host = Host::from_config(&config.host).context("resolving host inputs")?;
    let picked = pick_demos(&cli, &config, &demos).context("choosing demos to run")?;
    tracing::info!(count = picked.len(), "starting tour");

    Runner::new(&host, config.output.color).run(&mut out, &picked)?;
    out.flush()?;
    Ok(())
}
