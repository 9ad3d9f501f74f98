//! # lang-probe
//!
//! Heuristic source-language detector.
//!
//! Given a code sample and the language the caller claims it is written in,
//! lang-probe scores the sample against a catalog of weighted per-language
//! patterns and reports a mismatch when another language fits clearly
//! better. It never parses or executes the code; detection is purely
//! textual, so any string is valid input.
//!
//! This is the main facade crate that re-exports the core framework and the
//! built-in profiles.
//!
//! ## Quick Start
//!
//! ```ignore
//! let result = lang_probe::detect("def greet():\n    print('hi')", "javascript");
//! assert_eq!(result.detected_language.map(|l| l.as_str()), Some("python"));
//! assert!(result.confidence >= 30);
//! ```
//!
//! ## Custom catalogs
//!
//! ```ignore
//! use lang_probe::{Detector, Language, LanguageProfile, PatternCatalog};
//!
//! let catalog = PatternCatalog::builder()
//!     .profile(LanguageProfile::builder(Language::Python)
//!         .regex(r"(?m)^\s*def\s+\w+\s*\(", 12)
//!         .build()?)
//!     .build()?;
//!
//! let detector = Detector::new(&catalog).with_min_confidence(50);
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use lang_probe_core::*;

/// Built-in language profiles and the default catalog.
pub mod profiles {
    pub use lang_probe_profiles::*;
}

/// Detects whether `code` more plausibly belongs to a language other than
/// `claimed_language`, using the built-in catalog and the default
/// confidence floor.
#[must_use]
pub fn detect(code: &str, claimed_language: &str) -> DetectionResult {
    Detector::new(profiles::default_catalog()).detect(code, claimed_language)
}

/// Ranks the built-in catalog's languages against `code`, descending by
/// score. Languages with no matches are omitted.
#[must_use]
pub fn rank(code: &str) -> Vec<ScoreEntry> {
    Detector::new(profiles::default_catalog()).rank(code)
}
