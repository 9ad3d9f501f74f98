//! The scorer: ranks catalog languages against a code sample and decides
//! whether to report a mismatch with the caller's claimed language.

use crate::catalog::PatternCatalog;
use crate::types::{DetectionResult, ScoreEntry};

/// Minimum confidence required before a mismatch is reported.
///
/// The detector is advisory; a wrongly flagged mismatch costs more trust
/// than a missed one, so the floor is deliberately conservative.
pub const DEFAULT_MIN_CONFIDENCE: u8 = 30;

/// Scores code samples against an immutable [`PatternCatalog`].
///
/// The detector holds no per-call state: every [`detect`](Self::detect) call
/// is independent and safe to run concurrently.
#[derive(Debug, Clone, Copy)]
pub struct Detector<'c> {
    catalog: &'c PatternCatalog,
    min_confidence: u8,
}

impl<'c> Detector<'c> {
    /// Creates a detector over `catalog` with the default confidence floor.
    #[must_use]
    pub fn new(catalog: &'c PatternCatalog) -> Self {
        Self {
            catalog,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    /// Overrides the minimum confidence (0-100) for reporting a mismatch.
    #[must_use]
    pub fn with_min_confidence(mut self, min_confidence: u8) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Returns the configured confidence floor.
    #[must_use]
    pub fn min_confidence(&self) -> u8 {
        self.min_confidence
    }

    /// Returns the catalog this detector scores against.
    #[must_use]
    pub fn catalog(&self) -> &'c PatternCatalog {
        self.catalog
    }

    /// Ranks all catalog languages with a positive score for `code`,
    /// descending. Ties keep catalog declaration order.
    #[must_use]
    pub fn rank(&self, code: &str) -> Vec<ScoreEntry> {
        let mut entries: Vec<ScoreEntry> = self
            .catalog
            .profiles()
            .iter()
            .map(|p| ScoreEntry {
                language: p.language(),
                score: self.catalog.effective_score(p.language(), code),
            })
            .filter(|e| e.score > 0)
            .collect();

        // Stable sort: equal scores keep declaration order.
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries
    }

    /// Decides whether `code` more plausibly belongs to a cataloged language
    /// other than `claimed_language`.
    ///
    /// `claimed_language` is compared case-insensitively and is not required
    /// to name a cataloged language. Any string input is valid; code with no
    /// recognizable signal yields the no-mismatch result rather than an
    /// error.
    #[must_use]
    pub fn detect(&self, code: &str, claimed_language: &str) -> DetectionResult {
        let ranked = self.rank(code);
        let Some(top) = ranked.first() else {
            tracing::debug!("no language signal found");
            return DetectionResult::no_mismatch();
        };

        for entry in &ranked {
            tracing::trace!("score {}: {}", entry.language, entry.score);
        }

        let confidence = self.confidence(top.score);
        tracing::debug!(
            "top language {} scored {} (confidence {}%, claimed {})",
            top.language,
            top.score,
            confidence,
            claimed_language
        );

        let differs = !top
            .language
            .as_str()
            .eq_ignore_ascii_case(claimed_language);

        if confidence >= self.min_confidence && differs {
            DetectionResult::mismatch(top.language, confidence)
        } else {
            DetectionResult::no_mismatch()
        }
    }

    /// Normalizes a raw score into a 0-100 confidence value.
    ///
    /// Occurrence counts can push a raw score past any single profile's
    /// total weight, hence the clamp.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn confidence(&self, score: u32) -> u8 {
        let ratio = f64::from(score) / f64::from(self.catalog.max_possible_score());
        let percent = (ratio * 100.0).min(100.0).round();
        // percent is clamped to 0..=100 before the cast
        percent as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::LanguageProfile;
    use crate::types::Language;

    /// Two languages, both totaling 10: X = alpha(2) + beta(8), Y = gamma(10).
    fn toy_catalog() -> PatternCatalog {
        PatternCatalog::builder()
            .profile(
                LanguageProfile::builder(Language::Python)
                    .literal("alpha", 2)
                    .literal("beta", 8)
                    .build()
                    .unwrap(),
            )
            .profile(
                LanguageProfile::builder(Language::Java)
                    .literal("gamma", 10)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn no_signal_yields_no_mismatch() {
        let catalog = toy_catalog();
        let detector = Detector::new(&catalog);

        let result = detector.detect("nothing recognizable", "java");
        assert_eq!(result, DetectionResult::no_mismatch());

        let result = detector.detect("", "java");
        assert_eq!(result, DetectionResult::no_mismatch());
    }

    #[test]
    fn weak_signal_is_suppressed_strong_is_reported() {
        let catalog = toy_catalog();
        let detector = Detector::new(&catalog);

        // alpha alone: 2/10 = 20%, below the 30 floor
        let result = detector.detect("alpha", "java");
        assert_eq!(result, DetectionResult::no_mismatch());

        // beta: 8/10 = 80%, reported
        let result = detector.detect("beta", "java");
        assert_eq!(result, DetectionResult::mismatch(Language::Python, 80));
    }

    #[test]
    fn confidence_floor_is_inclusive() {
        let catalog = toy_catalog();
        // alpha scores exactly the configured floor: 2/10 = 20%
        let detector = Detector::new(&catalog).with_min_confidence(20);
        assert_eq!(
            detector.detect("alpha", "java"),
            DetectionResult::mismatch(Language::Python, 20)
        );
    }

    #[test]
    fn matching_claim_suppresses_report() {
        let catalog = toy_catalog();
        let detector = Detector::new(&catalog);

        let result = detector.detect("beta", "python");
        assert_eq!(result, DetectionResult::no_mismatch());
    }

    #[test]
    fn claim_comparison_is_case_insensitive() {
        let catalog = toy_catalog();
        let detector = Detector::new(&catalog);

        assert_eq!(
            detector.detect("beta", "Python"),
            DetectionResult::no_mismatch()
        );
        assert_eq!(
            detector.detect("beta", "PYTHON"),
            DetectionResult::no_mismatch()
        );
    }

    #[test]
    fn unknown_claim_still_detects() {
        let catalog = toy_catalog();
        let detector = Detector::new(&catalog);

        let result = detector.detect("beta", "cobol");
        assert_eq!(result, DetectionResult::mismatch(Language::Python, 80));
    }

    #[test]
    fn confidence_clamps_at_100() {
        let catalog = toy_catalog();
        let detector = Detector::new(&catalog);

        // three beta occurrences: raw 24 against max 10
        let result = detector.detect("beta beta beta", "java");
        assert_eq!(result, DetectionResult::mismatch(Language::Python, 100));
    }

    #[test]
    fn ties_keep_declaration_order() {
        let catalog = PatternCatalog::builder()
            .profile(
                LanguageProfile::builder(Language::Javascript)
                    .literal("shared", 5)
                    .literal("js-only", 5)
                    .build()
                    .unwrap(),
            )
            .profile(
                LanguageProfile::builder(Language::Typescript)
                    .literal("shared", 5)
                    .literal("ts-only", 5)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let detector = Detector::new(&catalog);

        // Both score 5; javascript is declared first and wins the tie.
        let ranked = detector.rank("shared");
        assert_eq!(ranked[0].language, Language::Javascript);
        assert_eq!(ranked[1].language, Language::Typescript);

        let result = detector.detect("shared", "typescript");
        assert_eq!(result.detected_language, Some(Language::Javascript));
    }

    #[test]
    fn extended_profile_outscores_base_on_its_own_constructs() {
        let catalog = PatternCatalog::builder()
            .profile(
                LanguageProfile::builder(Language::Javascript)
                    .literal("js1", 4)
                    .build()
                    .unwrap(),
            )
            .profile(
                LanguageProfile::builder(Language::Typescript)
                    .literal("ts1", 6)
                    .extends(Language::Javascript)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let detector = Detector::new(&catalog);

        // typescript accumulates both matches: 4 + 6 = 10 against max 10
        let result = detector.detect("js1 ts1", "javascript");
        assert_eq!(result, DetectionResult::mismatch(Language::Typescript, 100));

        // pure base code ties; the base wins by declaration order
        let result = detector.detect("js1", "typescript");
        assert_eq!(result.detected_language, Some(Language::Javascript));
    }

    #[test]
    fn custom_min_confidence_is_honored() {
        let catalog = toy_catalog();
        let detector = Detector::new(&catalog).with_min_confidence(90);

        // 80% clears the default floor but not 90
        assert_eq!(
            detector.detect("beta", "java"),
            DetectionResult::no_mismatch()
        );

        let lenient = Detector::new(&catalog).with_min_confidence(10);
        assert_eq!(
            lenient.detect("alpha", "java"),
            DetectionResult::mismatch(Language::Python, 20)
        );
    }

    #[test]
    fn detect_is_deterministic() {
        let catalog = toy_catalog();
        let detector = Detector::new(&catalog);

        let code = "beta alpha beta";
        assert_eq!(detector.detect(code, "java"), detector.detect(code, "java"));
        assert_eq!(detector.rank(code), detector.rank(code));
    }

    #[test]
    fn score_is_monotonic_in_occurrences() {
        let catalog = toy_catalog();
        let detector = Detector::new(&catalog);

        let one = detector.rank("beta")[0].score;
        let two = detector.rank("beta beta")[0].score;
        assert!(two >= one);
    }
}
