//! # lang-probe-core
//!
//! Core framework for heuristic source-language detection.
//!
//! This crate provides the foundational types for building language
//! detectors from weighted pattern catalogs. It includes:
//!
//! - [`Pattern`] and [`DetectionRule`] for weighted syntactic signals
//! - [`LanguageProfile`] grouping the rules for one language
//! - [`PatternCatalog`] for the validated, immutable rule table
//! - [`Detector`] for scoring code against the catalog
//!
//! ## Example
//!
//! ```ignore
//! use lang_probe_core::{Detector, Language, LanguageProfile, PatternCatalog};
//!
//! let catalog = PatternCatalog::builder()
//!     .profile(LanguageProfile::builder(Language::Python)
//!         .regex(r"(?m)^\s*def\s+\w+\s*\(", 12)
//!         .build()?)
//!     .build()?;
//!
//! let result = Detector::new(&catalog).detect("def greet(): pass", "javascript");
//! assert!(result.is_mismatch());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod config;
mod detector;
mod profile;
mod rule;
mod types;

pub use catalog::{CatalogBuilder, CatalogError, PatternCatalog};
pub use config::{Config, ConfigError, LanguageToggle, DEFAULT_MAX_CODE_LEN};
pub use detector::{Detector, DEFAULT_MIN_CONFIDENCE};
pub use profile::{LanguageProfile, ProfileBuilder};
pub use rule::{DetectionRule, Pattern, PatternError};
pub use types::{DetectionResult, Language, ScoreEntry, UnknownLanguage};
