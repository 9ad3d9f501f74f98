//! Weighted detection rules and their patterns.
//!
//! A [`DetectionRule`] pairs a [`Pattern`] with a positive integer weight.
//! Patterns are either plain substrings or regular expressions; both count
//! non-overlapping occurrences and both run in linear time (the `regex`
//! crate rejects backtracking constructs at compile time).

use regex::Regex;

/// Errors from constructing patterns and rules.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// Pattern string was empty.
    #[error("pattern must not be empty")]
    EmptyPattern,

    /// Regular expression failed to compile.
    #[error("invalid regex `{pattern}`: {reason}")]
    InvalidRegex {
        /// The pattern that failed to compile.
        pattern: String,
        /// Compiler error message.
        reason: String,
    },

    /// Rule weight was zero.
    #[error("rule `{pattern}` must have a positive weight")]
    ZeroWeight {
        /// The pattern of the offending rule.
        pattern: String,
    },
}

/// A compiled match pattern.
///
/// Compiled once at catalog construction and reused for all detection calls.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    Literal,
    Regex(Regex),
}

impl Pattern {
    /// Creates a plain substring pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty.
    pub fn literal(pattern: impl Into<String>) -> Result<Self, PatternError> {
        let raw = pattern.into();
        if raw.is_empty() {
            return Err(PatternError::EmptyPattern);
        }
        Ok(Self {
            raw,
            matcher: Matcher::Literal,
        })
    }

    /// Creates a regular-expression pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or fails to compile.
    pub fn regex(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::EmptyPattern);
        }
        let compiled = Regex::new(pattern).map_err(|e| PatternError::InvalidRegex {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            raw: pattern.to_string(),
            matcher: Matcher::Regex(compiled),
        })
    }

    /// Counts non-overlapping occurrences of this pattern in `haystack`.
    ///
    /// Matching is case-sensitive to the authored form.
    #[must_use]
    pub fn count_matches(&self, haystack: &str) -> usize {
        match &self.matcher {
            Matcher::Literal => haystack.matches(self.raw.as_str()).count(),
            Matcher::Regex(re) => re.find_iter(haystack).count(),
        }
    }

    /// Returns the pattern source as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `true` if this is a plain substring pattern.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self.matcher, Matcher::Literal)
    }
}

/// An immutable `(pattern, weight)` pair.
///
/// Weights are larger for rarer, more diagnostic patterns (language-defining
/// boilerplate) and smaller for tokens shared across languages.
#[derive(Debug, Clone)]
pub struct DetectionRule {
    pattern: Pattern,
    weight: u32,
}

impl DetectionRule {
    /// Creates a new rule.
    ///
    /// # Errors
    ///
    /// Returns an error if `weight` is zero.
    pub fn new(pattern: Pattern, weight: u32) -> Result<Self, PatternError> {
        if weight == 0 {
            return Err(PatternError::ZeroWeight {
                pattern: pattern.as_str().to_string(),
            });
        }
        Ok(Self { pattern, weight })
    }

    /// Returns this rule's pattern.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns this rule's weight.
    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Scores `code` against this rule: `weight × match_count`, saturating.
    #[must_use]
    pub fn score(&self, code: &str) -> u32 {
        let count = u32::try_from(self.pattern.count_matches(code)).unwrap_or(u32::MAX);
        self.weight.saturating_mul(count)
    }
}
