//! C++ detection profile.
//!
//! Standard-library includes, `std::` qualifiers, and stream I/O separate
//! C++ from C; the C profile keeps the `.h` headers and `printf` family.

use lang_probe_core::{CatalogError, Language, LanguageProfile};

/// Builds the C++ profile.
///
/// # Errors
///
/// Returns an error if any rule fails to compile; covered by the
/// built-in-catalog tests.
pub fn profile() -> Result<LanguageProfile, CatalogError> {
    LanguageProfile::builder(Language::Cpp)
        .regex(r"#include\s*<(?:iostream|vector|string|map|memory|algorithm)>", 10)
        .regex(r"\bcout\s*<<|\bcin\s*>>", 8)
        .regex(r"\bstd::\w+", 7)
        .regex(r"\btemplate\s*<", 6)
        .literal("nullptr", 5)
        .regex(r"\bnamespace\s+\w+", 4)
        .regex(r"\bauto\s+\w+\s*=", 3)
        .regex(r"\bclass\s+\w+", 3)
        .build()
}
