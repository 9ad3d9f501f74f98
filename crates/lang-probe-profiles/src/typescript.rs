//! TypeScript detection profile.
//!
//! TypeScript is a strict syntactic superset of JavaScript, so this profile
//! extends the JavaScript profile and adds only TypeScript-specific
//! constructs: interfaces, type annotations and aliases, member visibility,
//! namespaces, and generic parameters.

use lang_probe_core::{CatalogError, Language, LanguageProfile};

/// Builds the TypeScript profile (extends JavaScript).
///
/// # Errors
///
/// Returns an error if any rule fails to compile; covered by the
/// built-in-catalog tests.
pub fn profile() -> Result<LanguageProfile, CatalogError> {
    LanguageProfile::builder(Language::Typescript)
        .extends(Language::Javascript)
        .regex(r"\binterface\s+\w+", 8)
        .regex(r":\s*(?:string|number|boolean|void|any|unknown)\b", 7)
        .regex(r"\btype\s+\w+\s*=", 5)
        .regex(r"\b(?:private|public|protected|readonly)\s+\w+\s*:", 4)
        .regex(r"\bnamespace\s+\w+", 3)
        .regex(r"<[A-Z]\w*(?:,\s*[A-Z]\w*)*>", 3)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typescript() -> LanguageProfile {
        profile().unwrap()
    }

    #[test]
    fn extends_javascript() {
        assert_eq!(typescript().extends(), Some(Language::Javascript));
    }

    #[test]
    fn own_total_weight() {
        // TypeScript-only rules; the JavaScript share is added by the catalog
        assert_eq!(typescript().total_weight(), 30);
    }

    #[test]
    fn scores_typescript_only_constructs() {
        let code = "interface Greeting {\n  message: string;\n}\n";
        // interface(8) + one type annotation(7)
        assert_eq!(typescript().score(code), 15);
    }

    #[test]
    fn typed_parameters_and_returns_match() {
        let code = "function greet(name: string): void {}";
        // two annotation matches
        assert_eq!(typescript().score(code), 14);
    }

    #[test]
    fn visibility_modifiers_match() {
        assert!(typescript().score("private count: number;") > 0);
    }

    #[test]
    fn plain_javascript_scores_zero_here() {
        let code = "function greet(name) {\n  console.log(name);\n}\n";
        assert_eq!(typescript().score(code), 0);
    }

    #[test]
    fn prose_scores_zero() {
        assert_eq!(typescript().score("Hello, this is just a sentence."), 0);
    }
}
