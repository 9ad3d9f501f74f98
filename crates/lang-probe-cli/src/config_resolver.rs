//! Locates the configuration file for a run.
//!
//! Candidates, most specific first:
//!
//! 1. the path named by `--config`
//! 2. `lang-probe.toml` or `.lang-probe.toml` in the working directory
//! 3. `config.toml` under the global config directory (`~/.lang-probe/`,
//!    overridable via `$LANG_PROBE_CONFIG_DIR`)
//!
//! The first hit wins; no hit means built-in defaults.

use std::path::{Path, PathBuf};

/// Project-level file names, in preference order.
const PROJECT_NAMES: [&str; 2] = ["lang-probe.toml", ".lang-probe.toml"];

/// How a configuration file was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Named on the command line.
    Flag,
    /// Found next to the invocation.
    Project,
    /// The per-user fallback.
    Global,
}

/// A located configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// Path to the file.
    pub path: PathBuf,
    /// Where it came from.
    pub origin: Origin,
}

impl Located {
    fn new(path: PathBuf, origin: Origin) -> Self {
        Self { path, origin }
    }
}

/// Searches the standard locations. `None` means run on defaults.
#[must_use]
pub fn locate(workdir: &Path, flag: Option<&Path>) -> Option<Located> {
    locate_in(workdir, flag, global_dir())
}

/// Search body, with the global directory injected so tests stay free of
/// environment races.
fn locate_in(workdir: &Path, flag: Option<&Path>, global: Option<PathBuf>) -> Option<Located> {
    // A --config path is returned unchecked: a typo should surface as a
    // read error naming the file, not as silently ignored configuration.
    if let Some(path) = flag {
        return Some(Located::new(path.to_path_buf(), Origin::Flag));
    }

    for name in PROJECT_NAMES {
        let candidate = workdir.join(name);
        if candidate.exists() {
            tracing::debug!("using project config {}", candidate.display());
            return Some(Located::new(candidate, Origin::Project));
        }
    }

    let fallback = global?.join("config.toml");
    if fallback.exists() {
        tracing::debug!("using global config {}", fallback.display());
        return Some(Located::new(fallback, Origin::Global));
    }

    None
}

/// The global config directory: `$LANG_PROBE_CONFIG_DIR` if set, else
/// `~/.lang-probe`.
fn global_dir() -> Option<PathBuf> {
    match std::env::var_os("LANG_PROBE_CONFIG_DIR") {
        Some(dir) => Some(PathBuf::from(dir)),
        None => home::home_dir().map(|home| home.join(".lang-probe")),
    }
}
