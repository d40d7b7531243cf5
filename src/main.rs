//! Foundation Helpers - command-line access to the fuzzy matcher,
//! validators, date formatting and the preference store.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use foundation_helpers::config::Config;
use foundation_helpers::preferences::Preferences;
use foundation_helpers::utils::{closest_match, closest_matches, edit_distance, DateExt, StrExt};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the edit distance between two strings
    Distance { a: String, b: String },

    /// Find the candidate closest to INPUT
    Closest {
        input: String,

        #[arg(required = true)]
        candidates: Vec<String>,

        /// Largest accepted edit distance
        #[arg(short, long)]
        max_distance: Option<usize>,

        /// Print every match within tolerance, nearest first
        #[arg(short, long)]
        ranked: bool,

        /// Cap on ranked results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Check VALUE against a validator
    Validate { kind: ValidationKind, value: String },

    /// Print the current local date
    Date {
        /// Days to add (negative to subtract)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        add_days: i64,

        /// strftime format
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Read a stored preference, or store VALUE (JSON, else plain string)
    Pref { key: String, value: Option<String> },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ValidationKind {
    Email,
    Password,
    Phone,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { config.level()? };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("foundation-helpers v{} starting", env!("CARGO_PKG_VERSION"));

    run(args.command, &config)
}

fn run(command: Command, config: &Config) -> Result<ExitCode> {
    match command {
        Command::Distance { a, b } => {
            println!("{}", edit_distance(&a, &b));
            Ok(ExitCode::SUCCESS)
        }

        Command::Closest {
            input,
            candidates,
            max_distance,
            ranked,
            limit,
        } => {
            let max_distance = Some(max_distance.unwrap_or(config.max_distance));

            if ranked {
                let limit = limit.unwrap_or(config.ranked_limit);
                let matches = closest_matches(&input, &candidates, max_distance, limit);
                for m in &matches {
                    println!("{}\t{}", m.distance, m.value);
                }
                return Ok(exit_for(!matches.is_empty()));
            }

            match closest_match(&input, &candidates, max_distance) {
                Some(best) => {
                    println!("{}", best);
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    info!("No match for '{}'", input);
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Command::Validate { kind, value } => {
            let valid = match kind {
                ValidationKind::Email => value.is_valid_email(),
                ValidationKind::Password => value.is_valid_password(),
                ValidationKind::Phone => value.is_valid_phone(),
            };
            println!("{}", if valid { "valid" } else { "invalid" });
            Ok(exit_for(valid))
        }

        Command::Date { add_days, format } => {
            let format = format.as_deref().unwrap_or(&config.date_format);
            let date = chrono::Local::now().adding_days(add_days);
            println!("{}", date.formatted(format)?);
            Ok(ExitCode::SUCCESS)
        }

        Command::Pref { key, value } => {
            let mut prefs = Preferences::open(&config.preferences_path)
                .with_context(|| format!("Failed to open {}", config.preferences_path))?;

            match value {
                Some(raw) => {
                    let value = serde_json::from_str::<serde_json::Value>(&raw)
                        .unwrap_or(serde_json::Value::String(raw));
                    prefs.set(&key, &value)?;
                    info!("Stored '{}' in {}", key, prefs.path().display());
                    Ok(ExitCode::SUCCESS)
                }
                None => match prefs.get::<serde_json::Value>(&key) {
                    Some(value) => {
                        println!("{}", value);
                        Ok(ExitCode::SUCCESS)
                    }
                    None => Ok(ExitCode::FAILURE),
                },
            }
        }
    }
}

fn exit_for(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
