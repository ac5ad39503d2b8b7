mod render;

use anyhow::{Result, bail};
use bdays_core::Reminder;
use bdays_core::parse_entries::parse_date_token;
use chrono::NaiveDate;
use clap::Parser;
use render::{ColorMode, Renderer};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

/// bdays — birthday reminders from a plain text list
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Prints the path of the entries file
    #[arg(long, short, exclusive = true)]
    path: bool,
    /// Read birthdays from this file instead of the configured one
    #[arg(long, short)]
    file: Option<PathBuf>,
    /// Classify against this date instead of today (e.g. `bdays --on 31.12.2020`)
    #[arg(long)]
    on: Option<String>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bdays: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut reminder = Reminder::new()?;
    if let Some(file) = cli.file {
        reminder.config.entries_path = file;
    }

    let use_color = match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    };
    let renderer = Renderer::new(use_color);

    if cli.path {
        renderer.print_info(&format!("{}", reminder.config.entries_path.display()));
        return Ok(());
    }

    let reference_date = match cli.on.as_deref() {
        Some(token) => Some(resolve_reference_date(token)?),
        None => None,
    };

    let messages = reminder.check(reference_date)?;
    if !messages.message.is_empty() {
        renderer.print_message(&messages.message);
    }
    if !messages.error_message.is_empty() {
        renderer.print_error_message(&messages.error_message);
    }
    Ok(())
}

/// `--on` takes the same `D.M.Y` form as the entries file, but every
/// component must be spelled out.
fn resolve_reference_date(token: &str) -> Result<NaiveDate> {
    let Ok(date) = parse_date_token(token) else {
        bail!("'{token}' is not a valid date, expected `D.M.Y` (e.g. 31.12.2020)");
    };
    if !(date.has_day && date.has_month && date.has_year) {
        bail!("'{token}' leaves date components unknown; --on needs a full date");
    }
    Ok(date.resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_date_accepts_a_full_date() {
        let date = resolve_reference_date("31.12.2020").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
    }

    #[test]
    fn reference_date_rejects_partial_dates_and_garbage() {
        assert!(resolve_reference_date("??.12.2020").is_err());
        assert!(resolve_reference_date("31.12").is_err());
        assert!(resolve_reference_date("not-a-date").is_err());
    }
}
