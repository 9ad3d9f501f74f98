//! Python detection profile.
//!
//! The `def` keyword and the `if __name__ ==` main guard are the strongest
//! signals; block-opening colons and `print(` calls back them up.

use lang_probe_core::{CatalogError, Language, LanguageProfile};

/// Builds the Python profile.
///
/// # Errors
///
/// Returns an error if any rule fails to compile; covered by the
/// built-in-catalog tests.
pub fn profile() -> Result<LanguageProfile, CatalogError> {
    LanguageProfile::builder(Language::Python)
        .regex(r"(?m)^\s*def\s+\w+\s*\(", 12)
        .regex(r"(?m)^\s*if\s+__name__\s*==", 10)
        .regex(r"\bprint\s*\(", 8)
        .regex(r"(?m)^\s*(?:from\s+[\w.]+\s+)?import\s+\w+", 6)
        .regex(r"\belif\b", 5)
        .literal("self.", 4)
        .regex(r"(?m):\s*$", 4)
        .regex(r"\blambda\s", 3)
        .regex(r"\bNone\b", 3)
        .build()
}
