//! Interactive session loop.
//!
//! Reads one command per line, parses it with clap in multicall mode and
//! dispatches it against the in-memory [`ActivityStore`]. The loop owns the
//! stdin reader so multi-line flows (`plan`, `focus`) can borrow it without
//! fighting over the stream.

use std::io::{IsTerminal, Write};

use clap::{Parser, Subcommand};
use quickwin_core::{capture, ActivityStore, Config};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands;

/// Line reader shared between the shell and interactive subcommands.
pub type InputLines = tokio::io::Lines<BufReader<tokio::io::Stdin>>;

/// One parsed input line.
#[derive(Parser)]
#[command(multicall = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Add one activity
    Add {
        /// Activity title (all words are joined)
        #[arg(required = true)]
        title: Vec<String>,
        /// Estimated minutes (config default when omitted)
        #[arg(long)]
        mins: Option<u32>,
        /// Free-form description
        #[arg(long, num_args = 1..)]
        desc: Option<Vec<String>>,
    },
    /// Capture several activities, one title per line
    Plan,
    /// List pending activities, quick wins first
    List {
        /// Include cancelled activities
        #[arg(long)]
        all: bool,
        /// Print as JSON instead of columns
        #[arg(long)]
        json: bool,
    },
    /// Show one activity in full
    Show {
        /// Activity id, unique id prefix, or list position
        reference: String,
    },
    /// Change title, estimate, or description
    Edit {
        /// Activity id, unique id prefix, or list position
        reference: String,
        /// New title
        #[arg(long, num_args = 1..)]
        title: Option<Vec<String>>,
        /// New estimate in minutes
        #[arg(long)]
        mins: Option<u32>,
        /// New description
        #[arg(long, num_args = 1..)]
        desc: Option<Vec<String>>,
    },
    /// Mark an activity completed
    Done {
        /// Activity id, unique id prefix, or list position
        reference: String,
    },
    /// Cancel an activity
    Cancel {
        /// Activity id, unique id prefix, or list position
        reference: String,
    },
    /// Return a completed or cancelled activity to pending
    Reactivate {
        /// Activity id, unique id prefix, or list position
        reference: String,
    },
    /// Delete an activity outright
    Rm {
        /// Activity id, unique id prefix, or list position
        reference: String,
    },
    /// Completed activities grouped by day
    History {
        /// Print as JSON instead of sections
        #[arg(long)]
        json: bool,
    },
    /// Run a countdown focus session for an activity
    Focus {
        /// Activity id, unique id prefix, or list position
        reference: String,
        /// Mark the activity done when the countdown finishes
        #[arg(long)]
        complete: bool,
        /// Tick period in milliseconds
        #[arg(long, hide = true, default_value_t = 1000)]
        tick_ms: u64,
    },
    /// Read or change configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ActivityStore::new();
    let mut config = Config::load_or_default();
    let interactive = std::io::stdin().is_terminal();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if interactive {
        println!("Quickwin session. Activities last until you quit; `help` lists commands.");
    }
    tracing::debug!("session started, interactive = {interactive}");

    loop {
        prompt(interactive)?;
        let Some(line) = lines.next_line().await? else {
            break; // stdin closed, session over.
        };
        if line.trim().is_empty() {
            continue;
        }
        let parsed = match ShellLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(e) => {
                // clap renders its own help and error text; stay in the loop.
                let _ = e.print();
                continue;
            }
        };
        match dispatch(parsed.command, &mut store, &mut config, &mut lines, interactive).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => eprintln!("error: {e}"),
        }
    }

    tracing::debug!("session ended with {} activities", store.len());
    Ok(())
}

async fn dispatch(
    command: ShellCommand,
    store: &mut ActivityStore,
    config: &mut Config,
    lines: &mut InputLines,
    interactive: bool,
) -> Result<Flow, Box<dyn std::error::Error>> {
    match command {
        ShellCommand::Add { title, mins, desc } => {
            commands::activity::add(store, config, &title.join(" "), mins, desc.map(|d| d.join(" ")))?;
        }
        ShellCommand::Plan => plan_capture(store, config, lines, interactive).await?,
        ShellCommand::List { all, json } => commands::activity::list(store, all, json)?,
        ShellCommand::Show { reference } => commands::activity::show(store, &reference),
        ShellCommand::Edit { reference, title, mins, desc } => commands::activity::edit(
            store,
            &reference,
            title.map(|t| t.join(" ")),
            mins,
            desc.map(|d| d.join(" ")),
        )?,
        ShellCommand::Done { reference } => commands::activity::done(store, &reference),
        ShellCommand::Cancel { reference } => commands::activity::cancel(store, &reference),
        ShellCommand::Reactivate { reference } => commands::activity::reactivate(store, &reference),
        ShellCommand::Rm { reference } => commands::activity::rm(store, &reference),
        ShellCommand::History { json } => commands::history::run(store, json)?,
        ShellCommand::Focus { reference, complete, tick_ms } => {
            commands::focus::run(store, config, &reference, complete, tick_ms, lines, interactive)
                .await?
        }
        ShellCommand::Config { action } => commands::config::run(config, action)?,
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Multi-line capture: one title per line, a blank line closes the batch,
/// then a single shared estimate applies to every title.
async fn plan_capture(
    store: &mut ActivityStore,
    config: &Config,
    lines: &mut InputLines,
    interactive: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if interactive {
        println!("One activity per line; blank line to finish.");
    }
    let mut buffer = String::new();
    loop {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            break;
        }
        buffer.push_str(&line);
        buffer.push('\n');
    }
    let titles = capture::parse_titles(&buffer);
    if titles.is_empty() {
        println!("Nothing to plan.");
        return Ok(());
    }

    if interactive {
        println!(
            "Minutes for each (presets {:?}, empty for {}):",
            capture::DURATION_PRESETS,
            config.durations.default_minutes
        );
    }
    let minutes = match lines.next_line().await? {
        Some(raw) if !raw.trim().is_empty() => capture::parse_duration(&raw)?,
        _ => config.durations.default_minutes,
    };

    commands::activity::plan(store, &titles, minutes);
    Ok(())
}

fn prompt(interactive: bool) -> std::io::Result<()> {
    if interactive {
        print!("quickwin> ");
        std::io::stdout().flush()?;
    }
    Ok(())
}
