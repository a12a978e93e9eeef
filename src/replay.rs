//! Headless replay driver
//!
//! Runs a text script of commands against a session and reports what happened.
//! One command per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! start
//! left
//! rotate
//! tick 1001   # one gravity step at level 1
//! drop
//! ```
//!
//! Piece commands accept the action names and aliases understood by
//! [`GameAction`]'s `FromStr` (`left`, `right`, `down`, `drop`, `rotate`, `pause`,
//! `start`, `reset`, ...). `tick <ms>` advances the gravity timer.

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

use crate::core::{
    BagSource, GameSnapshot, LockEvent, PieceSource, SequenceSource, Session, UniformSource,
};
use crate::types::{GameAction, PieceKind};

/// One parsed script command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Action(GameAction),
    Tick(u32),
}

impl Command {
    fn label(&self) -> String {
        match self {
            Command::Action(action) => action.as_str().to_string(),
            Command::Tick(ms) => format!("tick {ms}"),
        }
    }
}

/// A command with the 1-based script line it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

/// Parse a single script line; None for blank lines and comments
pub fn parse_line(text: &str) -> Result<Option<Command>> {
    let text = text.split('#').next().unwrap_or_default().trim();
    let mut words = text.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };

    let command = if word.eq_ignore_ascii_case("tick") {
        let ms = words
            .next()
            .ok_or_else(|| anyhow!("tick: missing milliseconds"))?;
        let ms = ms
            .parse::<u32>()
            .map_err(|e| anyhow!("tick: invalid milliseconds {ms:?}: {e}"))?;
        Command::Tick(ms)
    } else {
        Command::Action(word.parse::<GameAction>()?)
    };

    if let Some(extra) = words.next() {
        bail!("unexpected argument {extra:?}");
    }
    Ok(Some(command))
}

/// Parse a whole script, naming the offending line on error
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>> {
    let mut commands = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let parsed = parse_line(line).with_context(|| format!("script line {}", i + 1))?;
        if let Some(command) = parsed {
            commands.push(ScriptLine {
                line: i + 1,
                command,
            });
        }
    }
    Ok(commands)
}

/// What one command did
#[derive(Debug, Clone, Serialize)]
pub struct ReplayStep {
    pub line: usize,
    pub command: String,
    pub changed: bool,
    /// Lock caused by this command, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<LockEvent>,
    /// State after the command (trace mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<GameSnapshot>,
}

/// Outcome of a whole script
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    pub final_state: GameSnapshot,
}

impl ReplayReport {
    /// Lock events in the order they happened
    pub fn events(&self) -> impl Iterator<Item = &LockEvent> + '_ {
        self.steps.iter().filter_map(|step| step.event.as_ref())
    }
}

/// Apply every command in order
pub fn run_script<S: PieceSource>(
    session: &mut Session<S>,
    commands: &[ScriptLine],
    trace: bool,
) -> ReplayReport {
    session.take_last_event();

    let steps = commands
        .iter()
        .map(|script_line| {
            let changed = match script_line.command {
                Command::Action(action) => session.apply_action(action),
                Command::Tick(ms) => session.tick(ms),
            };
            ReplayStep {
                line: script_line.line,
                command: script_line.command.label(),
                changed,
                event: session.take_last_event(),
                snapshot: trace.then(|| session.snapshot()),
            }
        })
        .collect();

    ReplayReport {
        steps,
        final_state: session.snapshot(),
    }
}

/// Piece source chosen at runtime
#[derive(Debug, Clone)]
pub enum Randomizer {
    Uniform(UniformSource),
    Bag(BagSource),
    Sequence(SequenceSource),
}

impl Randomizer {
    /// Uniform random source, seeded if a seed is given
    pub fn uniform(seed: Option<u64>) -> Self {
        Self::Uniform(seed.map_or_else(UniformSource::from_entropy, UniformSource::seeded))
    }

    /// 7-bag source, seeded if a seed is given
    pub fn bag(seed: Option<u64>) -> Self {
        Self::Bag(seed.map_or_else(BagSource::from_entropy, BagSource::seeded))
    }

    pub fn sequence(kinds: Vec<PieceKind>) -> Self {
        Self::Sequence(SequenceSource::new(kinds))
    }
}

impl PieceSource for Randomizer {
    fn next_kind(&mut self) -> PieceKind {
        match self {
            Randomizer::Uniform(source) => source.next_kind(),
            Randomizer::Bag(source) => source.next_kind(),
            Randomizer::Sequence(source) => source.next_kind(),
        }
    }
}

/// Text picture of a snapshot: `.` for empty cells, the color id otherwise
pub fn render_ascii(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();
    for row in snapshot.composed_board() {
        out.extend(row.iter().map(|&id| match id {
            0 => '.',
            id => char::from_digit(u32::from(id), 10).unwrap_or('?'),
        }));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_skips_blank_and_comments() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   # just a note").unwrap(), None);
        assert_eq!(
            parse_line("drop # slam it").unwrap(),
            Some(Command::Action(GameAction::HardDrop))
        );
        assert_eq!(parse_line("TICK 16").unwrap(), Some(Command::Tick(16)));
    }

    #[test]
    fn test_parse_line_errors() {
        assert!(parse_line("tick").is_err());
        assert!(parse_line("tick -5").is_err());
        assert!(parse_line("hold").is_err());
        assert!(parse_line("left 2").is_err());
    }

    #[test]
    fn test_parse_script_reports_line_number() {
        let err = parse_script("start\n\nwiggle\n").unwrap_err();
        assert_eq!(err.to_string(), "script line 3");
        assert!(format!("{err:#}").contains("unknown action: \"wiggle\""));
    }
}
