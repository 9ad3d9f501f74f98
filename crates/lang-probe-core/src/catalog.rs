//! The pattern catalog: the complete, validated rule table.
//!
//! A [`PatternCatalog`] is pure configuration. It is built once, validated
//! at construction, and never mutated afterwards, so it can be shared
//! read-only across concurrent detection calls without synchronization.

use std::collections::HashMap;

use crate::profile::LanguageProfile;
use crate::rule::PatternError;
use crate::types::Language;

/// Errors from catalog construction.
///
/// A malformed catalog is a build-time defect: these errors surface in tests
/// of the built-in catalog, never on the detection path.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog has no profiles.
    #[error("catalog must contain at least one language profile")]
    Empty,

    /// The same language was declared twice.
    #[error("language `{language}` is declared more than once")]
    DuplicateLanguage {
        /// The duplicated language.
        language: Language,
    },

    /// A profile extends a language that is not in the catalog.
    #[error("`{language}` extends `{base}`, which is not in the catalog")]
    UnknownBase {
        /// The extending profile's language.
        language: Language,
        /// The missing base language.
        base: Language,
    },

    /// Profile extends-chain loops back on itself.
    #[error("extends chain starting at `{language}` forms a cycle")]
    ExtendsCycle {
        /// The language whose chain cycles.
        language: Language,
    },

    /// A profile declared no rules.
    #[error("profile `{language}` declares no rules")]
    EmptyProfile {
        /// The empty profile's language.
        language: Language,
    },

    /// A profile's effective total weight is zero.
    #[error("profile `{language}` has zero total weight")]
    ZeroTotalWeight {
        /// The offending profile's language.
        language: Language,
    },

    /// A rule failed to compile or validate.
    #[error("invalid rule in profile `{language}`: {source}")]
    Rule {
        /// The profile containing the bad rule.
        language: Language,
        /// Underlying pattern error.
        source: PatternError,
    },
}

/// The static mapping from every supported language to its detection rules.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    /// Profiles in declaration order. The order is observable: score ties
    /// are broken in favor of the earlier declaration.
    profiles: Vec<LanguageProfile>,
    index: HashMap<Language, usize>,
    max_possible: u32,
}

impl PatternCatalog {
    /// Starts building a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder {
            profiles: Vec::new(),
        }
    }

    /// Returns all profiles in declaration order.
    #[must_use]
    pub fn profiles(&self) -> &[LanguageProfile] {
        &self.profiles
    }

    /// Looks up the profile for `language`.
    #[must_use]
    pub fn profile(&self, language: Language) -> Option<&LanguageProfile> {
        self.index.get(&language).map(|&i| &self.profiles[i])
    }

    /// Returns `true` if `language` has a profile in this catalog.
    #[must_use]
    pub fn contains(&self, language: Language) -> bool {
        self.index.contains_key(&language)
    }

    /// Number of profiles in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` if the catalog has no profiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The highest effective total weight of any single profile.
    ///
    /// This is the fixed normalization constant for confidence values. It is
    /// derived from the catalog alone, not from any particular input, so
    /// confidence measures signal intensity relative to the best possible
    /// single-language match, not a calibrated probability.
    #[must_use]
    pub fn max_possible_score(&self) -> u32 {
        self.max_possible
    }

    /// Scores `code` against `language`, including its extends-chain.
    ///
    /// Returns 0 for a language not in the catalog.
    #[must_use]
    pub fn effective_score(&self, language: Language, code: &str) -> u32 {
        let mut total: u32 = 0;
        let mut current = Some(language);
        // Chain is validated acyclic at build time.
        while let Some(lang) = current {
            let Some(profile) = self.profile(lang) else {
                break;
            };
            total = total.saturating_add(profile.score(code));
            current = profile.extends();
        }
        total
    }

    /// Total weight of `language`'s effective rule set, including its
    /// extends-chain. Returns 0 for a language not in the catalog.
    #[must_use]
    pub fn effective_total_weight(&self, language: Language) -> u32 {
        let mut total: u32 = 0;
        let mut current = Some(language);
        while let Some(lang) = current {
            let Some(profile) = self.profile(lang) else {
                break;
            };
            total = total.saturating_add(profile.total_weight());
            current = profile.extends();
        }
        total
    }
}

/// Builder for [`PatternCatalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    profiles: Vec<LanguageProfile>,
}

impl CatalogBuilder {
    /// Adds a profile. Declaration order is preserved and observable.
    #[must_use]
    pub fn profile(mut self, profile: LanguageProfile) -> Self {
        self.profiles.push(profile);
        self
    }

    /// Validates and finalizes the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is empty, a language is declared
    /// twice, an extends target is missing or cyclic, or any profile's
    /// effective total weight is zero.
    pub fn build(self) -> Result<PatternCatalog, CatalogError> {
        if self.profiles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(self.profiles.len());
        for (i, profile) in self.profiles.iter().enumerate() {
            if index.insert(profile.language(), i).is_some() {
                return Err(CatalogError::DuplicateLanguage {
                    language: profile.language(),
                });
            }
        }

        // Validate extends targets and walk each chain for cycles.
        for profile in &self.profiles {
            if let Some(base) = profile.extends() {
                if !index.contains_key(&base) {
                    return Err(CatalogError::UnknownBase {
                        language: profile.language(),
                        base,
                    });
                }
            }

            let mut visited = vec![profile.language()];
            let mut current = profile.extends();
            while let Some(lang) = current {
                if visited.contains(&lang) {
                    return Err(CatalogError::ExtendsCycle {
                        language: profile.language(),
                    });
                }
                visited.push(lang);
                current = index
                    .get(&lang)
                    .and_then(|&i| self.profiles[i].extends());
            }
        }

        let catalog = PatternCatalog {
            profiles: self.profiles,
            index,
            max_possible: 0,
        };

        let mut max_possible: u32 = 0;
        for profile in &catalog.profiles {
            let effective = catalog.effective_total_weight(profile.language());
            if effective == 0 {
                return Err(CatalogError::ZeroTotalWeight {
                    language: profile.language(),
                });
            }
            max_possible = max_possible.max(effective);
        }

        Ok(PatternCatalog {
            max_possible,
            ..catalog
        })
    }
}
