use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use sweeper_core::{Clock, GameConfig, GameEngine, JsonFileStore, RandomSampler, SystemClock};

use input::{HELP, Input, parse_input};
use render::render;

mod input;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal minesweeper", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed for mine placement instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where the high score is kept
    #[arg(long, default_value = "sweeper_high_score.json")]
    scores: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(std::io::stderr)
        .init();
    log::debug!("seed: {:?}, scores: {}", args.seed, args.scores.display());

    let sampler = match args.seed {
        Some(seed) => RandomSampler::from_seed_u64(seed),
        None => RandomSampler::from_entropy(),
    };
    let mut engine = GameEngine::new(
        GameConfig::default(),
        JsonFileStore::new(args.scores),
        SystemClock,
        sampler,
    );
    let mut state = engine.new_game();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{HELP}\n")?;
    write!(stdout, "{}> ", render(&state, engine.clock().now()))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        match parse_input(&line?) {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => writeln!(stdout, "{HELP}")?,
            Ok(Input::Command(command)) => {
                log::debug!("command: {:?}", command);
                state = engine.apply(&state, command);
                write!(stdout, "{}", render(&state, engine.clock().now()))?;
            }
            Err(err) => writeln!(stdout, "{err}")?,
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    log::info!("Bye, high score {}", state.high_score());
    Ok(())
}
