//! List languages command implementation.

use anyhow::{Context, Result};
use lang_probe_profiles::build_default_catalog;

/// Runs the list-languages command.
pub fn run() -> Result<()> {
    let catalog = build_default_catalog().context("failed to build pattern catalog")?;

    println!("Supported languages:\n");
    println!(
        "{:<12} {:<12} {:>6} {:>8} {:>10}",
        "Id", "Label", "Rules", "Weight", "Effective"
    );
    println!("{}", "-".repeat(52));

    for profile in catalog.profiles() {
        let lang = profile.language();
        println!(
            "{:<12} {:<12} {:>6} {:>8} {:>10}",
            lang.as_str(),
            lang.label(),
            profile.rules().len(),
            profile.total_weight(),
            catalog.effective_total_weight(lang),
        );
    }

    println!();
    for profile in catalog.profiles() {
        if let Some(base) = profile.extends() {
            println!(
                "{} extends {}: its effective rule set includes {}'s rules.",
                profile.language(),
                base,
                base.label()
            );
        }
    }

    println!("\nConfidence is the top score normalized against the largest");
    println!("effective weight ({}).", catalog.max_possible_score());

    Ok(())
}
