use gravity_swarm::prelude::*;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    Swarm,
    Orbit,
    Piloted,
    Anchored,
}

/// Runs a swarm headless and reports what happened to it.
#[derive(Parser, Debug)]
struct Args {
    /// Configuration preset, ignored when a scenario file is given.
    #[arg(short, long, value_enum, default_value = "swarm")]
    preset: Preset,

    /// YAML scenario file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to run after the start button is pressed.
    #[arg(short, long, default_value_t = 1000)]
    steps: u64,

    /// Overrides the seed of the configuration.
    #[arg(long)]
    seed: Option<u64>,

    /// Computes the attraction on multiple threads.
    #[arg(long)]
    parallel: bool,
}

fn load_config(args: &Args) -> Result<SwarmConfig> {
    let config = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            serde_yaml::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => match args.preset {
            Preset::Swarm => SwarmConfig::swarm(),
            Preset::Orbit => SwarmConfig::orbit(),
            Preset::Piloted => SwarmConfig::piloted(),
            Preset::Anchored => SwarmConfig::anchored(),
        },
    };

    Ok(match args.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}

fn run<C: ComputeMethod>(mut session: Session<C>, steps: u64) {
    session.tick(&ControlInput {
        start: true,
        ..Default::default()
    });

    let (mut collisions, mut escapes) = (0, 0);

    for _ in 0..steps {
        if let Some(report) = session.tick(&ControlInput::default()) {
            collisions += report.collisions();
            escapes += report.escapes();
        }
    }

    let field = session.field();
    let (min, max) = field
        .particles()
        .iter()
        .map(|p| p.position.length())
        .fold((f64::INFINITY, 0.0_f64), |(min, max), d| (min.min(d), max.max(d)));

    log::info!(
        "{} steps: {collisions} collisions, {escapes} escapes, particles between {min:.1} and {max:.1}",
        field.steps()
    );

    if let Some(ship) = field.pilot() {
        log::info!(
            "ship at {:.1} moving at {:.3}",
            ship.position.length(),
            ship.velocity.length()
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let field = ParticleField::new(config)?;

    if args.parallel {
        #[cfg(feature = "parallel")]
        run(Session::with_compute_method(field, parallel::BruteForce), args.steps);

        #[cfg(not(feature = "parallel"))]
        anyhow::bail!("built without the `parallel` feature");
    } else {
        run(Session::new(field), args.steps);
    }

    Ok(())
}
