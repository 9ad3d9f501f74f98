//! Core types for detection results and language identifiers.

use serde::{Deserialize, Serialize};

/// A supported source language.
///
/// The variant order here is also the catalog declaration order used for
/// tie-breaking, matching the order languages are offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python 3.
    Python,
    /// JavaScript (ECMAScript).
    Javascript,
    /// TypeScript. Its rule set extends JavaScript's.
    Typescript,
    /// Java.
    Java,
    /// C++.
    Cpp,
    /// C.
    C,
}

impl Language {
    /// All supported languages, in catalog declaration order.
    pub const ALL: [Self; 6] = [
        Self::Python,
        Self::Javascript,
        Self::Typescript,
        Self::Java,
        Self::Cpp,
        Self::C,
    ];

    /// Returns the lowercase identifier (e.g., `"python"`, `"cpp"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Javascript => "javascript",
            Self::Typescript => "typescript",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::C => "c",
        }
    }

    /// Returns the human-readable label (e.g., `"Python"`, `"C++"`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Javascript => "JavaScript",
            Self::Typescript => "TypeScript",
            Self::Java => "Java",
            Self::Cpp => "C++",
            Self::C => "C",
        }
    }

    /// Maps a file extension to a language, if recognized.
    ///
    /// The extension is matched case-insensitively and without a leading dot.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "py" => Some(Self::Python),
            "js" => Some(Self::Javascript),
            "ts" => Some(Self::Typescript),
            "java" => Some(Self::Java),
            "cpp" => Some(Self::Cpp),
            "c" => Some(Self::C),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" => Ok(Self::Python),
            "javascript" => Ok(Self::Javascript),
            "typescript" => Ok(Self::Typescript),
            "java" => Ok(Self::Java),
            "cpp" => Ok(Self::Cpp),
            "c" => Ok(Self::C),
            _ => Err(UnknownLanguage {
                name: s.to_string(),
            }),
        }
    }
}

/// Error returned when parsing an unrecognized language identifier.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown language `{name}`")]
pub struct UnknownLanguage {
    /// The identifier that failed to parse.
    pub name: String,
}

/// One language's aggregate score for a single detection call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// The scored language.
    pub language: Language,
    /// Sum of `weight × match_count` over the language's effective rules.
    pub score: u32,
}

/// Outcome of one detection call.
///
/// Either a mismatch was found (`detected_language` names the language the
/// code appears to be written in, with a 0-100 confidence), or no mismatch
/// is reported and both fields are in their zero state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// The detected language, or `None` when no mismatch is reported.
    pub detected_language: Option<Language>,
    /// Confidence in the detected language, 0-100.
    pub confidence: u8,
}

impl DetectionResult {
    /// The "no mismatch" outcome.
    #[must_use]
    pub fn no_mismatch() -> Self {
        Self {
            detected_language: None,
            confidence: 0,
        }
    }

    /// A reported mismatch.
    #[must_use]
    pub fn mismatch(language: Language, confidence: u8) -> Self {
        Self {
            detected_language: Some(language),
            confidence,
        }
    }

    /// Returns `true` if a mismatch was reported.
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        self.detected_language.is_some()
    }
}

impl Default for DetectionResult {
    fn default() -> Self {
        Self::no_mismatch()
    }
}

impl std::fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.detected_language {
            Some(lang) => write!(f, "{} (confidence {}%)", lang.label(), self.confidence),
            None => write!(f, "no mismatch"),
        }
    }
}
