//! skyguard-run: headless driver for the SKYGUARD simulation.
//!
//! Usage:
//!   skyguard-run                                  (reference raid)
//!   skyguard-run --config raid.json --max-ticks 600
//!   skyguard-run --raid 8 --seed 42 --quiet

use std::path::{Path, PathBuf};
use std::process;

use thiserror::Error;

use skyguard_core::config::{ConfigError, SimConfig};
use skyguard_core::constants::DEFAULT_TICK_BUDGET;
use skyguard_sim::scenario;
use skyguard_sim::SimulationEngine;

#[derive(Debug, Error)]
enum RunError {
    #[error("{0}")]
    Usage(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Where the scenario comes from.
enum Source {
    Reference,
    File(PathBuf),
    Raid { count: usize, seed: u64 },
}

struct Options {
    source: Source,
    max_ticks: u64,
    quiet: bool,
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| matches!(a.as_str(), "help" | "--help" | "-h")) {
        print_usage();
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        if matches!(e, RunError::Usage(_)) {
            print_usage();
        }
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "skyguard-run: headless threat/interceptor simulation\n\
         \n\
         Options:\n\
         \n\
           --config <path>    Scenario JSON (SimConfig); omitted fields take reference values\n\
           --raid <N>         Generate a random raid of N threats instead\n\
           --seed <S>         Seed for --raid (default: 42)\n\
           --max-ticks <N>    Tick budget (default: {DEFAULT_TICK_BUDGET})\n\
           --quiet            Print only the summary, not the final snapshot\n\
         \n\
         With no scenario option the two-missile reference raid runs.\n\
         Set RUST_LOG=debug for per-tick detail.\n"
    );
}

fn run(args: &[String]) -> Result<(), RunError> {
    let options = parse_options(args)?;

    let config = match &options.source {
        Source::Reference => SimConfig::reference(),
        Source::File(path) => load_config(path)?,
        Source::Raid { count, seed } => scenario::random_raid(*seed, *count),
    };

    let mut engine = SimulationEngine::new(config)?;
    for spec in &engine.config().threats {
        log::info!(
            "Threat {} at ({:.0}, {:.0}), speed {:.0} m/tick",
            spec.name,
            spec.x,
            spec.y,
            spec.velocity().speed()
        );
    }
    let ran = engine.run_until_quiescent(options.max_ticks);

    let snapshot = engine.snapshot();
    let score = &snapshot.score;
    if engine.is_quiescent() {
        log::info!("Simulation quiescent after {ran} ticks");
    } else {
        log::warn!(
            "Tick budget of {} exhausted before quiescence",
            options.max_ticks
        );
    }
    println!(
        "tick {}: {}/{} threats destroyed, {} grounded, {} interceptors launched, {} misses",
        snapshot.time.tick,
        score.threats_destroyed,
        score.threats_total,
        score.threats_grounded,
        score.interceptors_launched,
        score.misses
    );

    for interceptor in &snapshot.interceptors {
        match interceptor.status.result() {
            Some(result) => log::info!(
                "Interceptor {} vs {}: {result:?}",
                interceptor.id.0,
                interceptor.target_name
            ),
            None => log::info!(
                "Interceptor {} vs {}: still in flight",
                interceptor.id.0,
                interceptor.target_name
            ),
        }
    }

    if !options.quiet {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<SimConfig, RunError> {
    let text = std::fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

fn parse_options(args: &[String]) -> Result<Options, RunError> {
    let config = flag_value(args, "--config")?.map(PathBuf::from);
    let raid = flag_value(args, "--raid")?
        .map(|v| parse_number::<usize>("--raid", v))
        .transpose()?;
    let seed = flag_value(args, "--seed")?
        .map(|v| parse_number::<u64>("--seed", v))
        .transpose()?
        .unwrap_or(42);
    let max_ticks = flag_value(args, "--max-ticks")?
        .map(|v| parse_number::<u64>("--max-ticks", v))
        .transpose()?
        .unwrap_or(DEFAULT_TICK_BUDGET);

    let source = match (config, raid) {
        (Some(_), Some(_)) => {
            return Err(RunError::Usage(
                "--config and --raid are mutually exclusive".to_string(),
            ))
        }
        (Some(path), None) => Source::File(path),
        (None, Some(count)) => Source::Raid { count, seed },
        (None, None) => Source::Reference,
    };

    for arg in args.iter().filter(|a| a.starts_with("--")) {
        if !matches!(
            arg.as_str(),
            "--config" | "--raid" | "--seed" | "--max-ticks" | "--quiet"
        ) {
            return Err(RunError::Usage(format!("Unknown option: {arg}")));
        }
    }

    Ok(Options {
        source,
        max_ticks,
        quiet: args.iter().any(|a| a == "--quiet"),
    })
}

/// The argument following `flag`, if the flag is present. A missing value or
/// another `--` option in its place is a usage error.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>, RunError> {
    let Some(i) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    match args.get(i + 1) {
        Some(value) if !value.starts_with("--") => Ok(Some(value.as_str())),
        _ => Err(RunError::Usage(format!("{flag} expects a value"))),
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, RunError> {
    value
        .parse()
        .map_err(|_| RunError::Usage(format!("{flag} expects a number, got `{value}`")))
}
