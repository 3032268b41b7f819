//! Jenny-0 CLI
//!
//! Usage:
//!   jenny0 --text "student message"         # Single-turn evaluation
//!   jenny0 --interactive                    # Interactive session
//!   jenny0 --text "..." --json              # JSON output
//!   jenny0 --interactive --seed 42          # Deterministic phrase selection

use clap::Parser;
use colored::Colorize;
use serde_json::json;
use std::io::{self, BufRead, Write};

use jenny0::core::{build_style_overlay, CoachSession, TurnOutput};
use jenny0::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "jenny0",
    version = VERSION,
    about = "Jenny-0 - turn-level affective directive pipeline",
    long_about = "Jenny-0 drives the scripted coaching persona's per-turn decisions.\n\n\
                  For each student message it updates the momentum, structuring,\n\
                  archetype/stage/confidence trackers, arbitrates a coaching move,\n\
                  and emits two directive views: a categorical style overlay and a\n\
                  continuous tone directive with selected phrases.\n\n\
                  Modes:\n  \
                  --text         Evaluate a single message\n  \
                  --interactive  Drive a whole session from stdin"
)]
struct Args {
    /// Student message to evaluate (single-turn mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive session mode - read student messages from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Seed for deterministic phrase/clause selection
    #[arg(long)]
    seed: Option<u64>,

    /// Show the full per-engine breakdown
    #[arg(long)]
    verbose: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut session = match args.seed {
        Some(seed) => CoachSession::with_seed(seed),
        None => CoachSession::new(),
    };

    if args.interactive {
        run_interactive(&mut session, &args);
    } else if let Some(ref text) = args.text {
        let output = session.advance(text);
        print_turn(&output, &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&mut session, &args);
    }
}

/// Read student messages line by line until EOF or "quit"
fn run_interactive(session: &mut CoachSession, args: &Args) {
    println!("{}", format!("Jenny-0 v{} - interactive session", VERSION).bold());
    println!("Type student messages; 'reset' starts a new session; 'quit' exits.\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }
        let message = line.trim();

        match message {
            "" => continue,
            "quit" | "exit" => break,
            "reset" => {
                session.reset();
                println!("{}", "session reset".dimmed());
                continue;
            }
            _ => {
                let output = session.advance(message);
                print_turn(&output, args);
            }
        }
    }
}

fn print_turn(output: &TurnOutput, args: &Args) {
    if args.json {
        let value = json!({
            "momentum": {
                "score": output.momentum.score,
                "trend": output.momentum.trend,
                "level": output.momentum.level(),
                "disengaged": output.momentum.disengaged,
                "focus_lost": output.momentum.focus_lost,
            },
            "structuring": output.structuring,
            "coaching": output.coaching,
            "style": output.style,
            "tone": output.tone,
            "phrases": output.phrases,
        });
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
        return;
    }

    let momentum_line = format!(
        "momentum {:>3} ({}) {}",
        output.momentum.score,
        output.momentum.level(),
        if output.momentum.disengaged {
            "disengaged"
        } else {
            ""
        }
    );
    println!("{}", momentum_line.trim_end().cyan());
    println!("{}", output.structuring.summary().blue());
    println!("{}", output.coaching.summary().yellow());
    println!("{}", output.tone.summary().magenta());

    if let Some(marker) = &output.phrases.pacing_marker {
        println!("  pacing: {}", marker.italic());
    }
    for phrase in &output.phrases.body {
        println!("  - {}", phrase.green());
    }

    if args.verbose {
        println!("\n{}", build_style_overlay(&output.style).dimmed());
        println!("{}", output.coaching.to_hints().dimmed());
        println!("{}", output.structuring.to_hints().dimmed());
    }
    println!();
}
