//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# lang-probe configuration

# Minimum confidence (0-100) required to report a language mismatch.
# min_confidence = 30

# Maximum accepted input length in bytes.
max_code_len = 10000

# Language toggles
# Disabling javascript while typescript stays enabled is rejected,
# because typescript's rule set extends javascript's.

# [languages.java]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("lang-probe.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created lang-probe.toml");
    println!("\nNext steps:");
    println!("  1. Edit lang-probe.toml to tune the confidence floor");
    println!("  2. Run: lang-probe detect --claimed python path/to/code");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lang_probe_core::Config;

    #[test]
    fn default_config_template_parses() {
        let config = Config::parse(DEFAULT_CONFIG).expect("template must parse");
        assert_eq!(config.max_code_len, Some(10_000));
        assert!(config.min_confidence.is_none());
    }
}
