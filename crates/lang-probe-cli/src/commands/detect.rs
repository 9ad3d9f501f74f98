//! Detect command implementation.

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;

use lang_probe_core::{Config, Detector, Language, PatternCatalog, DEFAULT_MIN_CONFIDENCE};
use lang_probe_profiles::all_profiles;

use crate::config_resolver;
use crate::OutputFormat;

/// Runs the detect command.
///
/// Exits with status 1 when a mismatch is reported, so the binary can gate
/// CI pipelines the same way a linter does.
pub fn run(
    path: Option<&Path>,
    claimed: Option<String>,
    format: OutputFormat,
    min_confidence: Option<u8>,
    config_path: Option<&Path>,
) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;

    let config = match config_resolver::locate(&cwd, config_path) {
        None => Config::default(),
        Some(found) => {
            if found.origin == config_resolver::Origin::Global {
                tracing::info!("Using global config: {}", found.path.display());
            }
            Config::from_file(&found.path)
                .with_context(|| format!("Failed to load config: {}", found.path.display()))?
        }
    };

    let code = read_code(path)?;

    let max_len = config.effective_max_code_len();
    if code.len() > max_len {
        bail!(
            "input is {} bytes, which exceeds the {max_len} byte limit; \
             raise max_code_len in the config to allow larger inputs",
            code.len()
        );
    }

    let claimed = resolve_claimed(claimed, path)?;

    let catalog = build_catalog(&config)?;
    let effective_min = min_confidence
        .or(config.min_confidence)
        .unwrap_or(DEFAULT_MIN_CONFIDENCE);
    let detector = Detector::new(&catalog).with_min_confidence(effective_min);

    tracing::info!(
        "Scoring {} bytes against {} language profiles",
        code.len(),
        catalog.len()
    );

    let result = detector.detect(&code, &claimed);
    let scores = detector.rank(&code);

    let report = super::output::DetectReport {
        claimed: &claimed,
        result,
        scores,
    };
    super::output::print(&report, format)?;

    if result.is_mismatch() {
        std::process::exit(1);
    }

    Ok(())
}

/// Reads the code sample from a file or, for `None`/`-`, from stdin.
fn read_code(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("failed to read code from stdin")?;
            Ok(code)
        }
    }
}

/// Resolves the claimed language: explicit flag first, then the file
/// extension. The claim is passed through as-is; it is not validated
/// against the catalog.
fn resolve_claimed(claimed: Option<String>, path: Option<&Path>) -> Result<String> {
    if let Some(claimed) = claimed {
        return Ok(claimed);
    }

    if let Some(lang) = path
        .and_then(Path::extension)
        .and_then(|e| e.to_str())
        .and_then(Language::from_extension)
    {
        tracing::debug!("Inferred claimed language {} from file extension", lang);
        return Ok(lang.as_str().to_string());
    }

    bail!("no claimed language: pass --claimed or use a file with a recognized extension");
}

/// Builds the catalog from the built-in profiles, minus any the config
/// disables.
///
/// Disabling a language another profile extends (javascript under
/// typescript) fails catalog validation; the error names the missing base.
fn build_catalog(config: &Config) -> Result<PatternCatalog> {
    let mut builder = PatternCatalog::builder();
    for profile in all_profiles().context("failed to build language profiles")? {
        if config.is_language_enabled(profile.language().as_str()) {
            builder = builder.profile(profile);
        } else {
            tracing::debug!("Language {} disabled by config", profile.language());
        }
    }
    builder.build().context("failed to build pattern catalog")
}
