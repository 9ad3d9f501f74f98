//! Java detection profile.
//!
//! The `public static void main` entry point and `System.out.println` are
//! near-unique to Java and dominate the weights.

use lang_probe_core::{CatalogError, Language, LanguageProfile};

/// Builds the Java profile.
///
/// # Errors
///
/// Returns an error if any rule fails to compile; covered by the
/// built-in-catalog tests.
pub fn profile() -> Result<LanguageProfile, CatalogError> {
    LanguageProfile::builder(Language::Java)
        .regex(r"\bpublic\s+static\s+void\s+main\b", 12)
        .regex(r"\bSystem\.out\.print(?:ln)?\s*\(", 10)
        .regex(r"\bimport\s+java[\w.]*;", 8)
        .regex(r"\bpublic\s+class\s+\w+", 6)
        .literal("@Override", 5)
        .regex(r"\bString\[\]\s*\w+", 4)
        .regex(r"\bnew\s+\w+\s*\(", 3)
        .regex(r"\bextends\s+\w+", 3)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn java() -> LanguageProfile {
        profile().unwrap()
    }

    #[test]
    fn total_weight() {
        assert_eq!(java().total_weight(), 51);
    }

    #[test]
    fn scores_idiomatic_hello_world() {
        let code = "public class Main {\n    public static void main(String[] args) {\n        System.out.println(\"Hello, world!\");\n    }\n}\n";
        // main(12) + println(10) + public class(6) + String[](4)
        assert_eq!(java().score(code), 32);
    }

    #[test]
    fn print_and_println_both_match() {
        assert!(java().score("System.out.print(x);") > 0);
        assert!(java().score("System.out.println(x);") > 0);
    }

    #[test]
    fn java_imports_match() {
        assert!(java().score("import java.util.List;") > 0);
        // python-style imports do not
        assert_eq!(java().score("import os"), 0);
    }

    #[test]
    fn prose_scores_zero() {
        assert_eq!(java().score("Hello, this is just a sentence."), 0);
    }
}
