//! Complexity classification and duration scaling
//!
//! Sums feature weights into a complexity bucket, then converts the bucket
//! into the duration multiplier consumed by milestone generation.

use crate::catalog;
use crate::models::{ComplexityLevel, ProjectType};

/// Weight ceiling for the simple bucket
const SIMPLE_MAX_WEIGHT: u32 = 4;
/// Weight ceiling for the moderate bucket
const MODERATE_MAX_WEIGHT: u32 = 10;

/// Sum the complexity weights of the given feature ids
///
/// Unknown ids contribute zero. Duplicates count as given, matching what the
/// wizard sends (it never emits duplicates, but the engine does not rely on
/// that).
pub fn total_weight(feature_ids: &[String]) -> u32 {
    feature_ids
        .iter()
        .map(|id| match catalog::find_feature(id) {
            Some(entry) => entry.complexity_weight,
            None => {
                log::debug!("Ignoring unknown feature id '{}' in weight sum", id);
                0
            }
        })
        .sum()
}

/// Bucket a feature selection into a complexity level
///
/// An empty or all-unknown selection degrades to `Simple`.
pub fn classify_complexity(feature_ids: &[String]) -> ComplexityLevel {
    let weight = total_weight(feature_ids);
    if weight <= SIMPLE_MAX_WEIGHT {
        ComplexityLevel::Simple
    } else if weight <= MODERATE_MAX_WEIGHT {
        ComplexityLevel::Moderate
    } else {
        ComplexityLevel::Complex
    }
}

/// Convert a complexity bucket into a duration-scaling factor
///
/// The base factor per level is scaled by the project type: a simple
/// website compresses every phase, a combined web and mobile build
/// stretches them.
pub fn duration_multiplier(level: ComplexityLevel, project_type: ProjectType) -> f64 {
    let base = match level {
        ComplexityLevel::Simple => 1.0,
        ComplexityLevel::Moderate => 1.5,
        ComplexityLevel::Complex => 2.2,
    };
    let type_scale = match project_type {
        ProjectType::SimpleWebsite => 0.5,
        ProjectType::Web => 1.0,
        ProjectType::Mobile => 1.2,
        ProjectType::WebMobile => 1.6,
    };
    base * type_scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_is_simple() {
        assert_eq!(classify_complexity(&[]), ComplexityLevel::Simple);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let selection = ids(&["hologram", "time_travel"]);
        assert_eq!(total_weight(&selection), 0);
        assert_eq!(classify_complexity(&selection), ComplexityLevel::Simple);
    }

    #[test]
    fn test_threshold_boundaries() {
        // auth (2) + notifications (2) = 4, still simple
        assert_eq!(
            classify_complexity(&ids(&["auth", "notifications"])),
            ComplexityLevel::Simple
        );
        // auth (2) + chat (3) = 5, moderate
        assert_eq!(
            classify_complexity(&ids(&["auth", "chat"])),
            ComplexityLevel::Moderate
        );
        // auth (2) + chat (3) + payments (3) + notifications (2) = 10, still moderate
        assert_eq!(
            classify_complexity(&ids(&["auth", "chat", "payments", "notifications"])),
            ComplexityLevel::Moderate
        );
        // add ai (3) = 13, complex
        assert_eq!(
            classify_complexity(&ids(&["auth", "chat", "payments", "notifications", "ai"])),
            ComplexityLevel::Complex
        );
    }

    #[test]
    fn test_classification_is_monotonic() {
        let mut selection = Vec::new();
        let mut previous = classify_complexity(&selection);
        for entry in crate::catalog::APP_FEATURES {
            selection.push(entry.id.to_string());
            let current = classify_complexity(&selection);
            assert!(current >= previous, "bucket decreased after adding '{}'", entry.id);
            previous = current;
        }
    }

    #[test]
    fn test_multiplier_values() {
        let m = duration_multiplier(ComplexityLevel::Complex, ProjectType::WebMobile);
        assert!((m - 3.52).abs() < 1e-9);

        let m = duration_multiplier(ComplexityLevel::Simple, ProjectType::SimpleWebsite);
        assert!((m - 0.5).abs() < 1e-9);

        let m = duration_multiplier(ComplexityLevel::Moderate, ProjectType::Web);
        assert!((m - 1.5).abs() < 1e-9);

        let m = duration_multiplier(ComplexityLevel::Simple, ProjectType::Mobile);
        assert!((m - 1.2).abs() < 1e-9);
    }
}
