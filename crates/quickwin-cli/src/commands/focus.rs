//! Focus command: run a countdown session for one activity.
//!
//! The countdown ticks on a background task while this loop multiplexes
//! timer events with single-letter controls typed on stdin:
//!
//! - `s` start, `p` pause, `r` resume
//! - `b` switch to a break countdown
//! - `x` reset to the full estimate; `s` starts it again
//! - `d` finish now, `q` leave without finishing

use std::io::Write;
use std::time::Duration;

use quickwin_core::{ActivityStore, Config, Event, SessionTimer};

use crate::shell::InputLines;

pub async fn run(
    store: &mut ActivityStore,
    config: &Config,
    reference: &str,
    complete: bool,
    tick_ms: u64,
    lines: &mut InputLines,
    interactive: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(activity) = super::resolve_ref(store, reference) else {
        println!("Activity not found: {reference}");
        return Ok(());
    };
    let id = activity.id.clone();
    let title = activity.title.clone();
    let focus_secs = u64::from(activity.duration_minutes) * 60;

    let (mut timer, mut events) =
        SessionTimer::with_tick_period(focus_secs, Duration::from_millis(tick_ms));
    println!("Focus: {title} ({})", timer.clock());
    if interactive {
        println!("Controls: s start, p pause, r resume, b break, x reset, d done now, q quit");
    }
    timer.start();
    tracing::info!("focus session started for {id} ({focus_secs}s)");

    // Controls only make sense at a terminal. A piped script keeps its
    // remaining lines for the shell and the countdown runs straight through.
    let mut reader_open = interactive;
    let mut on_break = false;
    let mut finished = false;
    loop {
        // Once stdin is gone a paused or stopped timer can never move
        // again, so waiting on events alone would hang forever.
        if !reader_open && !timer.is_ticking() {
            break;
        }
        tokio::select! {
            event = events.recv() => match event {
                Some(Event::TimerTick { .. }) => {
                    if interactive {
                        print!("\r  {}  ", timer.clock());
                        std::io::stdout().flush()?;
                    }
                }
                Some(Event::TimerCompleted { .. }) => {
                    if interactive {
                        println!();
                    }
                    if on_break {
                        println!("Break over.");
                        on_break = false;
                    } else {
                        println!("Session complete: {title}");
                        finished = true;
                    }
                    break;
                }
                Some(_) => {}
                None => break,
            },
            line = lines.next_line(), if reader_open => match line? {
                Some(line) => match line.trim() {
                    "s" => {
                        // Revives a countdown stopped by `x`; also brings a
                        // paused one back, like `r`.
                        timer.start();
                        if timer.is_ticking() {
                            println!("Started at {}.", timer.clock());
                        }
                    }
                    "p" => {
                        timer.pause();
                        if timer.is_paused() {
                            println!("Paused at {}.", timer.clock());
                        }
                    }
                    "r" => {
                        timer.resume();
                        if timer.is_ticking() {
                            println!("Resumed at {}.", timer.clock());
                        }
                    }
                    "b" => {
                        timer.start_break(config.break_secs());
                        on_break = true;
                        println!("Break: {}.", timer.clock());
                    }
                    "x" => {
                        timer.reset(focus_secs);
                        on_break = false;
                        println!("Reset to {}.", timer.clock());
                    }
                    "d" => {
                        finished = true;
                        break;
                    }
                    "q" => break,
                    "" => {}
                    other => println!("Unknown control '{other}' (s/p/r/b/x/d/q)"),
                },
                None => reader_open = false,
            },
        }
    }

    if finished && complete {
        store.complete(&id);
        tracing::info!("activity {id} done after focus session");
        println!("Done: {title}");
    }
    Ok(())
}
