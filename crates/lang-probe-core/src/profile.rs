//! Language profiles: one language's ordered set of weighted rules.

use crate::catalog::CatalogError;
use crate::rule::{DetectionRule, Pattern};
use crate::types::Language;

/// A named language and its ordered collection of detection rules.
///
/// A profile may extend another profile (TypeScript extends JavaScript);
/// scoring then accumulates the base profile's matches as well, so the
/// superset relationship is expressed by composition rather than by
/// duplicating rules.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    language: Language,
    extends: Option<Language>,
    rules: Vec<DetectionRule>,
}

impl LanguageProfile {
    /// Starts building a profile for `language`.
    #[must_use]
    pub fn builder(language: Language) -> ProfileBuilder {
        ProfileBuilder {
            language,
            extends: None,
            rules: Vec::new(),
        }
    }

    /// Returns the language this profile describes.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the base profile this one extends, if any.
    #[must_use]
    pub fn extends(&self) -> Option<Language> {
        self.extends
    }

    /// Returns this profile's own rules (excluding any base profile's).
    #[must_use]
    pub fn rules(&self) -> &[DetectionRule] {
        &self.rules
    }

    /// Sum of this profile's own rule weights (excluding any base profile's).
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.rules
            .iter()
            .fold(0, |acc, r| acc.saturating_add(r.weight()))
    }

    /// Scores `code` against this profile's own rules.
    ///
    /// Base-profile matches are accumulated by
    /// [`PatternCatalog::effective_score`](crate::PatternCatalog::effective_score).
    #[must_use]
    pub fn score(&self, code: &str) -> u32 {
        self.rules
            .iter()
            .fold(0, |acc, r| acc.saturating_add(r.score(code)))
    }
}

/// Uncompiled rule, held until [`ProfileBuilder::build`].
#[derive(Debug, Clone)]
enum RawRule {
    Literal(String, u32),
    Regex(String, u32),
}

/// Builder for [`LanguageProfile`].
///
/// Rules are declared as plain strings and compiled together in
/// [`build`](Self::build), so a profile definition stays a readable table.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    language: Language,
    extends: Option<Language>,
    rules: Vec<RawRule>,
}

impl ProfileBuilder {
    /// Adds a plain substring rule.
    #[must_use]
    pub fn literal(mut self, pattern: impl Into<String>, weight: u32) -> Self {
        self.rules.push(RawRule::Literal(pattern.into(), weight));
        self
    }

    /// Adds a regular-expression rule.
    #[must_use]
    pub fn regex(mut self, pattern: impl Into<String>, weight: u32) -> Self {
        self.rules.push(RawRule::Regex(pattern.into(), weight));
        self
    }

    /// Declares that this profile extends `base`.
    ///
    /// The base profile's matches are added to this profile's score, and its
    /// weights count toward this profile's effective total.
    #[must_use]
    pub fn extends(mut self, base: Language) -> Self {
        self.extends = Some(base);
        self
    }

    /// Compiles all rules and validates the profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile has no rules, or if any rule has an
    /// empty/invalid pattern or a zero weight.
    pub fn build(self) -> Result<LanguageProfile, CatalogError> {
        if self.rules.is_empty() {
            return Err(CatalogError::EmptyProfile {
                language: self.language,
            });
        }

        let mut rules = Vec::with_capacity(self.rules.len());
        for raw_rule in self.rules {
            let rule = match raw_rule {
                RawRule::Literal(raw, weight) => {
                    Pattern::literal(raw).and_then(|p| DetectionRule::new(p, weight))
                }
                RawRule::Regex(raw, weight) => {
                    Pattern::regex(&raw).and_then(|p| DetectionRule::new(p, weight))
                }
            }
            .map_err(|source| CatalogError::Rule {
                language: self.language,
                source,
            })?;
            rules.push(rule);
        }

        Ok(LanguageProfile {
            language: self.language,
            extends: self.extends,
            rules,
        })
    }
}
