use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;

use cascade_versus::{simulate_with, LeftPlayer, MatchConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Left {
    /// The placement-search agent.
    Search,
    /// A player that never touches the controls.
    Idle,
}

impl From<Left> for LeftPlayer {
    fn from(left: Left) -> Self {
        match left {
            Left::Search => LeftPlayer::Search,
            Left::Idle => LeftPlayer::Idle,
        }
    }
}

/// Run headless matches against the placement-search agent.
#[derive(Parser, Debug)]
#[command(name = "versus")]
struct Args {
    /// Number of matches to play.
    #[arg(long, default_value_t = 4)]
    matches: u64,

    /// Base seed; match i uses seed + i. Random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Match config as JSON. Missing fields take their defaults.
    #[arg(long, value_name = "path")]
    config: Option<PathBuf>,

    /// Who plays the left side.
    #[arg(long, value_enum, default_value_t = Left::Search)]
    left: Left,

    /// Print the summary and every outcome as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            MatchConfig::from_json(&text).with_context(|| format!("loading {}", path.display()))?
        }
        None => MatchConfig::default(),
    };

    let base = args.seed.unwrap_or_else(rand::random);
    let seeds: Vec<u64> = (0..args.matches).map(|i| base.wrapping_add(i)).collect();
    info!("{} matches from seed {base}, left side {:?}", args.matches, args.left);

    let summary = simulate_with(&config, &seeds, args.left.into());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{summary}");
    }
    Ok(())
}
