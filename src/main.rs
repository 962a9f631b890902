use clap::Parser;
use genpoly::config::{AppConfig, ConfigManager, SweepConfig};
use genpoly::domain::pressure::{burn_score, PressureReport, VOLUME};
use genpoly::engines::generation::ConsoleProgressCallback;
use genpoly::{GeneticOptimizer, Result};
use std::path::PathBuf;

/// Search gas mixtures for the highest burn rate with a genetic algorithm
#[derive(Parser, Debug)]
#[command(name = "genpoly", author, version, about)]
struct Args {
    /// TOML configuration file; GENPOLY__SECTION__KEY variables override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Generations to train, overriding the configured count
    #[arg(short, long)]
    generations: Option<usize>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Sweep the volume range in stages instead of a single run
    #[arg(long)]
    sweep: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let manager = ConfigManager::new();
    manager.load_layered(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        manager.update(|config| config.evolution.seed = Some(seed))?;
    }
    let config = manager.get();

    if args.sweep || config.pressure.sweep.is_some() {
        let sweep = config.pressure.sweep.clone().unwrap_or_else(|| {
            log::warn!("No [pressure.sweep] section configured, using defaults");
            SweepConfig::default()
        });
        run_sweep(&config, &sweep, args.generations)
    } else {
        run_single(&config, args.generations)
    }
}

fn run_single(config: &AppConfig, generations: Option<usize>) -> Result<()> {
    let mut optimizer = GeneticOptimizer::from_config(
        burn_score,
        config.pressure.ranges(),
        config.evolution.clone(),
    )?;
    let generations = generations.unwrap_or(config.pressure.generations);
    let mut progress = ConsoleProgressCallback::new((generations / 10).max(1));
    let best = optimizer.train_with_progress(Some(generations), &mut progress)?;

    println!("{}", PressureReport::new(&best));
    Ok(())
}

fn run_sweep(config: &AppConfig, sweep: &SweepConfig, generations: Option<usize>) -> Result<()> {
    let mut optimizer = GeneticOptimizer::from_config(
        burn_score,
        config.pressure.ranges(),
        config.evolution.clone(),
    )?;
    let generations = generations.unwrap_or(sweep.generations);

    for window in sweep.windows() {
        let mut ranges = optimizer.gene_space().ranges().to_vec();
        ranges[VOLUME] = window;
        optimizer.set_ranges(ranges)?;
        optimizer.reset_best_fit();

        let best = optimizer.train(Some(generations))?;
        let report = PressureReport::new(&best);
        println!("{}: {:.2}", window.min, report.operating_pressure);
    }
    Ok(())
}
