//! Assembly of the built-in pattern catalog.

use once_cell::sync::Lazy;

use lang_probe_core::{CatalogError, LanguageProfile, PatternCatalog};

use crate::{c, cpp, java, javascript, python, typescript};

/// The default catalog, built once per process.
///
/// # Panics
///
/// Panics if the built-in profiles are invalid; this is a build-time defect
/// and the catalog tests prove it cannot fire.
static DEFAULT_CATALOG: Lazy<PatternCatalog> = Lazy::new(|| {
    build_default_catalog()
        .unwrap_or_else(|e| panic!("lang-probe: built-in catalog is invalid: {e}"))
});

/// Returns the shared default catalog.
///
/// The catalog is immutable, so the reference is safe to use from any number
/// of concurrent detection calls.
#[must_use]
pub fn default_catalog() -> &'static PatternCatalog {
    &DEFAULT_CATALOG
}

/// All built-in profiles in declaration order.
///
/// Declaration order is the tie-break order: `python`, `javascript`,
/// `typescript`, `java`, `cpp`, `c`.
///
/// # Errors
///
/// Returns an error if any built-in rule fails to compile.
pub fn all_profiles() -> Result<Vec<LanguageProfile>, CatalogError> {
    Ok(vec![
        python::profile()?,
        javascript::profile()?,
        typescript::profile()?,
        java::profile()?,
        cpp::profile()?,
        c::profile()?,
    ])
}

/// Builds a fresh copy of the default catalog.
///
/// Prefer [`default_catalog`] unless you need to filter or extend the
/// profile set before building.
///
/// # Errors
///
/// Returns an error if any built-in profile is invalid.
pub fn build_default_catalog() -> Result<PatternCatalog, CatalogError> {
    let mut builder = PatternCatalog::builder();
    for profile in all_profiles()? {
        builder = builder.profile(profile);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lang_probe_core::Language;

    #[test]
    fn built_in_catalog_is_valid() {
        let catalog = build_default_catalog().expect("built-in catalog must build");
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn declaration_order_matches_language_list() {
        let catalog = default_catalog();
        let order: Vec<Language> = catalog.profiles().iter().map(|p| p.language()).collect();
        assert_eq!(order, Language::ALL.to_vec());
    }

    #[test]
    fn typescript_extends_javascript() {
        let catalog = default_catalog();
        let ts = catalog.profile(Language::Typescript).unwrap();
        assert_eq!(ts.extends(), Some(Language::Javascript));
    }

    #[test]
    fn typescript_has_the_largest_effective_weight() {
        let catalog = default_catalog();
        let ts_total = catalog.effective_total_weight(Language::Typescript);
        assert_eq!(ts_total, catalog.max_possible_score());

        for lang in Language::ALL {
            assert!(catalog.effective_total_weight(lang) <= ts_total);
        }
    }

    #[test]
    fn every_language_has_positive_weight() {
        let catalog = default_catalog();
        for lang in Language::ALL {
            assert!(catalog.effective_total_weight(lang) > 0, "{lang}");
        }
    }

    #[test]
    fn every_profile_has_one_dominant_rule() {
        // Each language needs at least one high-weight, low-false-positive
        // signal that can outweigh several weak foreign matches.
        let catalog = default_catalog();
        for profile in catalog.profiles() {
            let max = profile.rules().iter().map(|r| r.weight()).max().unwrap();
            let min = profile.rules().iter().map(|r| r.weight()).min().unwrap();
            assert!(max >= 2 * min, "{}", profile.language());
        }
    }
}
