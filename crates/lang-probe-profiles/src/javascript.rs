//! JavaScript detection profile.
//!
//! `console.log` and `function` declarations carry most of the weight;
//! arrows, template interpolation, and strict equality fill in the rest.
//! TypeScript's profile extends this one, so every rule here also counts
//! toward TypeScript scores.

use lang_probe_core::{CatalogError, Language, LanguageProfile};

/// Builds the JavaScript profile.
///
/// # Errors
///
/// Returns an error if any rule fails to compile; covered by the
/// built-in-catalog tests.
pub fn profile() -> Result<LanguageProfile, CatalogError> {
    LanguageProfile::builder(Language::Javascript)
        .regex(r"\bfunction\s+\w+\s*\(", 8)
        .regex(r"\bconsole\.log\s*\(", 8)
        .literal("=>", 6)
        .regex(r"\bconst\s+\w+\s*=", 5)
        .literal("${", 4)
        .regex(r"\blet\s+\w+\s*=", 4)
        .literal("===", 4)
        .regex(r#"\brequire\s*\(\s*['"]"#, 4)
        .regex(r"\bdocument\.\w+", 3)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn javascript() -> LanguageProfile {
        profile().unwrap()
    }

    #[test]
    fn total_weight() {
        assert_eq!(javascript().total_weight(), 46);
    }

    #[test]
    fn scores_idiomatic_hello_world() {
        let code = "function greet(name) {\n  console.log(`Hello, ${name}!`);\n}\n\nconst message = \"world\";\ngreet(message);\n";
        // function(8) + console.log(8) + ${(4) + const(5)
        assert_eq!(javascript().score(code), 25);
    }

    #[test]
    fn arrow_functions_match() {
        assert!(javascript().score("const add = (a, b) => a + b;") > 0);
    }

    #[test]
    fn double_equals_does_not_match_strict_equality() {
        assert_eq!(javascript().score("a == b"), 0);
    }

    #[test]
    fn require_needs_a_string_argument() {
        assert!(javascript().score("const fs = require('fs');") > 0);
        // a bare call shaped like require(foo) is not counted
        assert_eq!(
            javascript().score("require(dependency)"),
            0
        );
    }

    #[test]
    fn prose_scores_zero() {
        assert_eq!(javascript().score("Hello, this is just a sentence."), 0);
    }
}
