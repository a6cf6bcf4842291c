//! Line-oriented interactive calculator.
//!
//! One command per line; the form is redrawn after every change.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tip_core::InputField;
use tracing::debug;

use crate::logging::set_log_level;
use crate::render::{render_presets, render_text};
use crate::state::TipSession;

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  bill <amount>       set the bill amount
  tip <percent>       set the tip percent
  people <count>      set the number of people
  preset <n>          use tip preset n (see `presets`)
  tip+ | tip-         nudge the tip percent
  people+ | people-   add or remove a person
  presets             list tip presets
  show                redraw the form
  reset               clear the form
  log <filter>        change logging, e.g. `log tip_core=debug`
  help                show this help
  quit | exit         leave
";

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit(InputField, String),
    /// 0-based preset index.
    Preset(usize),
    StepTip(i32),
    StepPeople(i32),
    Presets,
    Show,
    Reset,
    /// New log filter directive.
    Log(String),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type `help` for a list)")]
    Unknown(String),

    #[error("`preset` needs a preset number, e.g. `preset 2`")]
    MissingPresetNumber,

    #[error("'{0}' is not a preset number")]
    InvalidPresetNumber(String),

    #[error("`log` needs a filter, e.g. `log debug`")]
    MissingLogFilter,
}

impl Command {
    /// Parses one input line. Blank lines give `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "tip+" => Self::StepTip(1),
            "tip-" => Self::StepTip(-1),
            "people+" => Self::StepPeople(1),
            "people-" => Self::StepPeople(-1),
            "preset" => Self::Preset(parse_preset_number(rest)?),
            "presets" => Self::Presets,
            "show" => Self::Show,
            "reset" => Self::Reset,
            "log" if rest.is_empty() => return Err(CommandError::MissingLogFilter),
            "log" => Self::Log(rest.to_string()),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => match InputField::parse(other) {
                Some(field) => Self::Edit(field, rest.to_string()),
                None => return Err(CommandError::Unknown(word.to_string())),
            },
        };
        Ok(Some(command))
    }
}

/// Presets are numbered from 1 on screen.
fn parse_preset_number(text: &str) -> Result<usize, CommandError> {
    if text.is_empty() {
        return Err(CommandError::MissingPresetNumber);
    }
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::InvalidPresetNumber(text.to_string())),
    }
}

/// Runs the REPL until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut TipSession,
    input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "Tip calculator. Type `help` for commands.")?;
    write!(output, "{}", render_text(session.state()))?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                writeln!(output, "{error}")?;
                continue;
            }
        };
        debug!(?command, "repl command");

        let redraw = match command {
            Command::Edit(field, raw) => {
                session.edit(field, &raw);
                true
            }
            Command::Preset(index) => {
                if session.apply_preset(index).is_none() {
                    writeln!(output, "no preset {}", index + 1)?;
                    false
                } else {
                    true
                }
            }
            Command::StepTip(steps) => {
                session.step_tip_percent(steps);
                true
            }
            Command::StepPeople(steps) => {
                session.step_people(steps);
                true
            }
            Command::Presets => {
                write!(output, "{}", render_presets(session.preset_percentages()))?;
                false
            }
            Command::Show => true,
            Command::Reset => {
                session.reset();
                true
            }
            Command::Log(filter) => {
                match set_log_level(&filter) {
                    Ok(()) => writeln!(output, "log filter set to '{filter}'")?,
                    Err(error) => writeln!(output, "{error:#}")?,
                }
                false
            }
            Command::Help => {
                write!(output, "{HELP}")?;
                false
            }
            Command::Quit => break,
        };

        if redraw {
            write!(output, "{}", render_text(session.state()))?;
        }
    }

    Ok(())
}
