//! Headless replay runner (default binary).
//!
//! Reads a command script from a file or stdin, plays it against a fresh session
//! and prints the result as JSON (or as a text picture of the board with `--ascii`).

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use blockfall::core::{Session, SessionConfig};
use blockfall::replay::{parse_script, render_ascii, run_script, Randomizer};
use blockfall::types::{PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RandomizerKind {
    /// Every kind equally likely on each draw
    Uniform,
    /// Shuffled bags holding one of each kind
    Bag,
}

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: u8,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: u8,

    /// Seed for the piece randomizer (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = RandomizerKind::Uniform)]
    randomizer: RandomizerKind,

    /// Fixed, repeating piece order (e.g. `i,o,t`); overrides --randomizer
    #[arg(long, value_delimiter = ',')]
    pieces: Vec<PieceKind>,

    /// Script file; reads stdin if omitted
    #[arg(long)]
    script: Option<PathBuf>,

    /// Include a snapshot after every command
    #[arg(long)]
    trace: bool,

    /// Print the final board as text instead of JSON
    #[arg(long)]
    ascii: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let randomizer = if !args.pieces.is_empty() {
        Randomizer::sequence(args.pieces.clone())
    } else {
        match args.randomizer {
            RandomizerKind::Uniform => Randomizer::uniform(args.seed),
            RandomizerKind::Bag => Randomizer::bag(args.seed),
        }
    };

    let config = SessionConfig::new(args.width, args.height);
    let mut session =
        Session::with_source(config, randomizer).context("cannot create session")?;

    let text = read_script(args.script.as_deref())?;
    let commands = parse_script(&text)?;
    let report = run_script(&mut session, &commands, args.trace);

    let state = &report.final_state;
    eprintln!(
        "[replay] {} commands, {} locks, score {}, lines {}, level {}, phase {:?}",
        report.steps.len(),
        report.events().count(),
        state.score,
        state.lines,
        state.level,
        state.phase
    );

    let mut stdout = io::stdout().lock();
    if args.ascii {
        stdout.write_all(render_ascii(state).as_bytes())?;
    } else {
        serde_json::to_writer_pretty(&mut stdout, &report).context("write report")?;
        writeln!(stdout)?;
    }
    Ok(())
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read script {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("read script from stdin")?;
            Ok(text)
        }
    }
}
