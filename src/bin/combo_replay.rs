//! Headless Combo Replay
//!
//! Plays a recorded input script through a character with no engine attached
//! and prints every montage the character requested.

use anime_third_person::core::config::CharacterConfig;
use anime_third_person::core::error::Result;
use anime_third_person::replay::{replay, InputScript, ReplayReport};
use clap::Parser;
use std::path::PathBuf;

/// Headless Combo Replay - check combo and dodge timing without the engine
#[derive(Parser, Debug)]
#[command(name = "combo_replay")]
#[command(about = "Replay an input script and print the montages the character plays")]
struct Args {
    /// Input script (TOML, [[frames]] with time and events)
    #[arg(long)]
    script: PathBuf,

    /// Character config (TOML); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Log every accepted and rejected input
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        "anime_third_person=trace"
    } else {
        "anime_third_person=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => CharacterConfig::load(path)?,
        None => CharacterConfig::default(),
    };
    let script = InputScript::load(&args.script)?;

    tracing::info!(frames = script.frames.len(), "replaying {}", args.script.display());
    let report = replay(&config, &script)?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_text(&report),
    }

    Ok(())
}

fn print_text(report: &ReplayReport) {
    println!("=== COMBO REPLAY ===");
    println!(
        "Events: {} handled, {} ignored, final t={:.3}s",
        report.events_handled, report.events_ignored, report.final_time
    );
    println!();

    if report.playback.is_empty() {
        println!("No montages played.");
    }
    for record in &report.playback {
        println!(
            "  t={:>8.3}  {:<32} rate={:.2}  section={}",
            record.time,
            record.montage.name(),
            record.rate,
            record.section.as_deref().unwrap_or("-")
        );
    }

    println!();
    println!(
        "Primary:   stage {}/{}",
        report.primary.current_stage, report.primary.stage_count
    );
    println!(
        "Secondary: stage {}/{}",
        report.secondary.current_stage, report.secondary.stage_count
    );
    println!("Max walk speed: {:.1}", report.max_walk_speed);
}
