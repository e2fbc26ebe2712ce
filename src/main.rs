//! Snake Trail headless driver
//!
//! Runs the simulation without a window: an autopilot presses arrow keys at
//! random (seeded, so runs are reproducible) and every tick's frame is
//! printed as one JSON line for an external renderer or for inspection.
//!
//! Usage: `snake-trail [SETTINGS.json] [--ticks N] [--seed S] [--ribbon] [--taper T]`

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use snake_trail::sim::{Direction, Simulation, TickInput, tick};
use snake_trail::{Settings, Taper};

const DEFAULT_TICKS: u64 = 600;
const DEFAULT_SEED: u64 = 0x5eed;
/// Chance per tick that the autopilot presses a key
const TURN_CHANCE: f64 = 0.08;

#[derive(Debug, Parser)]
#[command(name = "snake-trail", version, about = "Headless path-follower simulation")]
struct Options {
    /// JSON settings file; defaults are used when omitted
    settings: Option<PathBuf>,
    /// Number of ticks to simulate
    #[arg(long, default_value_t = DEFAULT_TICKS)]
    ticks: u64,
    /// Autopilot seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Include the ribbon polygon in every frame
    #[arg(long)]
    ribbon: bool,
    /// Override the ribbon taper (linear, arctangent)
    #[arg(long, value_parser = parse_taper)]
    taper: Option<Taper>,
}

fn parse_taper(value: &str) -> Result<Taper, String> {
    Taper::from_str(value).ok_or_else(|| format!("unknown taper {value:?}"))
}

/// Random key presses, one edge-triggered event at a time
struct Autopilot {
    rng: Pcg32,
}

impl Autopilot {
    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    fn next_input(&mut self) -> TickInput {
        let turn = if self.rng.random_bool(TURN_CHANCE) {
            Some(Direction::ALL[self.rng.random_range(0..Direction::ALL.len())])
        } else {
            None
        };
        TickInput { turn }
    }
}

fn run(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = match &options.settings {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };
    if let Some(taper) = options.taper {
        settings.ribbon.taper = taper;
    }
    let (ticks, seed) = (options.ticks, options.seed);
    log::info!("Ribbon taper: {}", settings.ribbon.taper.as_str());

    let mut sim = Simulation::new(settings)?;
    let mut autopilot = Autopilot::new(seed);
    log::info!("Running {} ticks with autopilot seed {}", ticks, seed);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    serde_json::to_writer(&mut out, &sim.frame(options.ribbon))?;
    writeln!(out)?;

    for _ in 0..ticks {
        let input = autopilot.next_input();
        tick(&mut sim, &input);
        serde_json::to_writer(&mut out, &sim.frame(options.ribbon))?;
        writeln!(out)?;
    }
    out.flush()?;

    log::info!(
        "Finished at tick {}: head {:?} heading {:?}",
        sim.time_ticks(),
        sim.head(),
        sim.direction()
    );
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Snake Trail (headless) starting...");

    let options = Options::parse();
    if let Err(e) = run(options) {
        log::error!("Simulation failed: {e}");
        eprintln!("snake-trail error: {e}");
        std::process::exit(1);
    }
}
