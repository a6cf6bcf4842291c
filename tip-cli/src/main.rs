use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use tip_cli::config::load_config;
use tip_cli::logging::LogOptions;
use tip_cli::render::{OutputFormat, render, render_guide, render_presets};
use tip_cli::{TipSession, logging, repl};
use tip_core::InputField;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tip calculator: works out the tip, the total and each person's share.
#[derive(Debug, Parser)]
#[command(name = "tipcalc", version, about, long_about = None)]
struct Cli {
    /// TOML file with bounds, defaults and tip presets.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `tip_core=debug`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate once from the given fields and print the result.
    Calc {
        /// Bill amount, e.g. `86.43` or `$1,200`.
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        bill: String,

        /// Tip percent, e.g. `18` or `12.5%`.
        #[arg(long, allow_hyphen_values = true, conflicts_with = "preset")]
        tip: Option<String>,

        /// Use tip preset N (1-based, see `tipcalc presets`).
        #[arg(long)]
        preset: Option<usize>,

        /// Number of people splitting the bill.
        #[arg(long, allow_hyphen_values = true)]
        people: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Interactive calculator on stdin/stdout (the default).
    Interactive,

    /// List the configured tip presets.
    Presets,

    /// Show tipping etiquette by country.
    Guide,
}

// ─── commands ────────────────────────────────────────────────────────────────

fn cmd_calc(
    mut session: TipSession,
    bill: &str,
    tip: Option<&str>,
    preset: Option<usize>,
    people: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    session.edit(InputField::BillAmount, bill);
    if let Some(tip) = tip {
        session.edit(InputField::TipPercent, tip);
    }
    if let Some(n) = preset {
        let applied = match n.checked_sub(1) {
            Some(index) => session.apply_preset(index).is_some(),
            None => false,
        };
        if !applied {
            anyhow::bail!("no tip preset {n}; run `tipcalc presets` for the list");
        }
    }
    if let Some(people) = people {
        session.edit(InputField::NumberOfPeople, people);
    }

    println!("{}", render(session.state(), format)?.trim_end());
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&LogOptions {
        filter: cli.log_level.clone(),
        file: cli.log_file.clone(),
    })?;

    let config = load_config(cli.config.as_deref())?;
    let session = TipSession::new(config);
    debug!(command = ?cli.command, "starting");

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Calc {
            bill,
            tip,
            preset,
            people,
            format,
        } => cmd_calc(
            session,
            &bill,
            tip.as_deref(),
            preset,
            people.as_deref(),
            format,
        ),
        Command::Interactive => {
            let mut session = session;
            repl::run(&mut session, io::stdin().lock(), io::stdout().lock())
                .context("interactive session failed")
        }
        Command::Presets => {
            print!("{}", render_presets(session.preset_percentages()));
            Ok(())
        }
        Command::Guide => {
            print!("{}", render_guide());
            Ok(())
        }
    }
}
