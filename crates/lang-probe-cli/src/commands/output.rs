//! Shared output formatting for detection results.

use anyhow::Result;
use serde::Serialize;

use lang_probe_core::{DetectionResult, ScoreEntry};

use crate::OutputFormat;

/// Everything the detect command reports for one sample.
#[derive(Debug, Serialize)]
pub struct DetectReport<'a> {
    /// The language the caller claimed.
    pub claimed: &'a str,
    /// The detection verdict.
    pub result: DetectionResult,
    /// Ranked per-language scores (positive scores only).
    pub scores: Vec<ScoreEntry>,
}

/// Print a detection report in the specified format.
pub fn print(report: &DetectReport<'_>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn print_text(report: &DetectReport<'_>) {
    match report.result.detected_language {
        Some(lang) => {
            println!(
                "\x1b[33mwarning\x1b[0m: code claimed as {} looks like {} (confidence {}%)",
                report.claimed,
                lang.label(),
                report.result.confidence
            );
        }
        None => {
            println!(
                "\x1b[32mok\x1b[0m: no mismatch detected (claimed {})",
                report.claimed
            );
        }
    }

    if !report.scores.is_empty() {
        println!();
        for entry in &report.scores {
            println!("  {:<12} {}", entry.language.as_str(), entry.score);
        }
    }
}

fn print_json(report: &DetectReport<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &DetectReport<'_>) {
    match report.result.detected_language {
        Some(lang) => println!("mismatch {} {}", lang, report.result.confidence),
        None => println!("ok"),
    }
}
