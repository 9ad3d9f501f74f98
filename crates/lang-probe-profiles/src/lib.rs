//! # lang-probe-profiles
//!
//! Built-in language detection profiles for lang-probe.
//!
//! Each module defines one language's weighted rule set. Rules pair a
//! pattern (substring or regex) with a weight: language-defining boilerplate
//! gets high weights, tokens shared across languages get low ones, so a
//! single strong signal can outweigh several weak foreign ones.
//!
//! ## Supported Languages
//!
//! | Identifier | Label | Strongest signal |
//! |------------|-------|------------------|
//! | `python` | Python | `if __name__ ==` main guard |
//! | `javascript` | JavaScript | `console.log(...)` / `function` declarations |
//! | `typescript` | TypeScript | `interface` declarations, type annotations |
//! | `java` | Java | `public static void main` |
//! | `cpp` | C++ | `#include <iostream>`, `std::` qualifiers |
//! | `c` | C | `#include <stdio.h>` and friends |
//!
//! TypeScript extends JavaScript: its effective rule set is JavaScript's
//! plus the TypeScript-only rules, composed rather than duplicated.
//!
//! ## Usage
//!
//! ```ignore
//! use lang_probe_core::Detector;
//! use lang_probe_profiles::default_catalog;
//!
//! let detector = Detector::new(default_catalog());
//! let result = detector.detect("def greet(): pass", "javascript");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod c;
mod catalog;
mod cpp;
mod java;
mod javascript;
mod python;
mod typescript;

pub use c::profile as c_profile;
pub use catalog::{all_profiles, build_default_catalog, default_catalog};
pub use cpp::profile as cpp_profile;
pub use java::profile as java_profile;
pub use javascript::profile as javascript_profile;
pub use python::profile as python_profile;
pub use typescript::profile as typescript_profile;

/// Re-export core types for convenience.
pub use lang_probe_core::{CatalogError, Language, LanguageProfile, PatternCatalog};
