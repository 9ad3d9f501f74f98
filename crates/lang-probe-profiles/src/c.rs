//! C detection profile.
//!
//! Classic libc headers and the `printf`/`scanf`/`malloc` family are the
//! discriminating signals against C++.

use lang_probe_core::{CatalogError, Language, LanguageProfile};

/// Builds the C profile.
///
/// # Errors
///
/// Returns an error if any rule fails to compile; covered by the
/// built-in-catalog tests.
pub fn profile() -> Result<LanguageProfile, CatalogError> {
    LanguageProfile::builder(Language::C)
        .regex(r"#include\s*<(?:stdio|stdlib|string|math|ctype|time)\.h>", 10)
        .regex(r"\bprintf\s*\(", 7)
        .regex(r"\bint\s+main\s*\(", 6)
        .regex(r"\bmalloc\s*\(", 5)
        .regex(r"\bscanf\s*\(", 4)
        .regex(r"(?m)^#define\s+\w+", 4)
        .regex(r"\breturn\s+0\s*;", 3)
        .regex(r"\bvoid\s+\w+\s*\(", 2)
        .build()
}
