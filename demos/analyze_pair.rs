//! Example: Analyze two audio files and suggest a transition point
//!
//! Usage:
//!   cargo run --release --example analyze_pair -- [--json] <track_a> <track_b>
//!
//! Decodes both files (in parallel), runs the per-track analyzers, then
//! prints the best exit/entry points and the compatibility score. With
//! `--json` the suggestion is emitted as a single JSON object instead.

use mixpoint_dsp::io::decode_audio_file;
use mixpoint_dsp::{
    analyze_track, find_best_transition, AnalysisConfig, AudioBuffer, TrackAnalysis,
};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

fn format_time(seconds: f32) -> String {
    let total = seconds.max(0.0) as u32;
    format!("{}:{:02}", total / 60, total % 60)
}

fn print_track_report(label: &str, path: &str, audio: &AudioBuffer, analysis: &TrackAnalysis) {
    println!("Track {}: {}", label, path);
    println!(
        "  {} Hz, {} channel(s), {} frames ({})",
        audio.sample_rate(),
        audio.channels(),
        audio.len(),
        format_time(audio.duration_seconds())
    );
    if analysis.bpm > 0.0 {
        println!("  BPM: {:.1}", analysis.bpm);
    } else {
        println!("  BPM: unknown");
    }
    match analysis.key {
        Some(key) => println!("  Key: {} ({})", key.name(), key.camelot()),
        None => println!("  Key: unknown"),
    }
    println!(
        "  Energy: {} windows of {:.2}s",
        analysis.energy.len(),
        analysis.energy.window_seconds
    );
}

fn run(json: bool, path_a: &str, path_b: &str) -> Result<(), String> {
    let start = Instant::now();

    let (audio_a, audio_b) = rayon::join(
        || decode_audio_file(Path::new(path_a)),
        || decode_audio_file(Path::new(path_b)),
    );
    let audio_a = audio_a.map_err(|e| format!("{}: {}", path_a, e))?;
    let audio_b = audio_b.map_err(|e| format!("{}: {}", path_b, e))?;

    let config = AnalysisConfig::default();
    let (analysis_a, analysis_b) = rayon::join(
        || analyze_track(&audio_a, &config),
        || analyze_track(&audio_b, &config),
    );
    let suggestion = find_best_transition(&analysis_a, &analysis_b);

    if json {
        let out = serde_json::to_string_pretty(&suggestion)
            .map_err(|e| format!("JSON encoding failed: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    print_track_report("A", path_a, &audio_a, &analysis_a);
    println!();
    print_track_report("B", path_b, &audio_b, &analysis_b);
    println!();

    println!("Suggested transition:");
    println!(
        "  Exit {} at {} ({:.1}s)",
        path_a,
        format_time(suggestion.exit_seconds),
        suggestion.exit_seconds
    );
    println!(
        "  Enter {} at {} ({:.1}s)",
        path_b,
        format_time(suggestion.enter_seconds),
        suggestion.enter_seconds
    );
    println!("  Compatibility: {:.1}/10", suggestion.score);
    println!(
        "    tempo {:.1}  key {:.1}  energy {:.1}",
        suggestion.tempo_component * 10.0,
        suggestion.key_component * 10.0,
        suggestion.energy_component * 10.0
    );
    println!(
        "\nAnalyzed both tracks in {:.2}s",
        start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let paths: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    if paths.len() != 2 {
        eprintln!("Usage: analyze_pair [--json] <track_a> <track_b>");
        return ExitCode::from(2);
    }

    match run(json, paths[0], paths[1]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            ExitCode::FAILURE
        }
    }
}
