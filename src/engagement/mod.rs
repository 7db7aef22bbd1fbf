//! Visitor engagement heuristics
//!
//! The popup and A/B-test layer that sits next to the estimate wizard.
//! Everything here is a pure function over caller-supplied state: the
//! caller passes timestamps and (for variant assignment) its own rng, so
//! outcomes are reproducible in tests and the engine never reads the clock.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Raw activity signals collected for one visitor session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorActivity {
    /// Seconds since the page became visible
    pub seconds_on_page: u32,
    /// Deepest scroll position reached, 0-100
    pub scroll_depth_percent: u8,
    /// Pages viewed this session
    pub pages_viewed: u32,
    /// Whether this visitor has been here before
    pub returning_visitor: bool,
}

/// Thresholds controlling when the engagement popup may appear
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupPolicy {
    /// Minimum engagement score before the popup is eligible
    pub min_score: u32,
    /// Hours that must pass after a popup before showing another
    pub cooldown_hours: i64,
}

impl Default for PopupPolicy {
    fn default() -> Self {
        Self {
            min_score: 30,
            cooldown_hours: 24,
        }
    }
}

/// Score a visitor's engagement from their activity signals
///
/// Time on page dominates, capped so idle tabs do not score forever;
/// scroll depth and page count add smaller contributions.
pub fn engagement_score(activity: &VisitorActivity) -> u32 {
    let time_points = activity.seconds_on_page.min(120) / 4;
    let scroll_points = u32::from(activity.scroll_depth_percent.min(100)) / 5;
    let page_points = activity.pages_viewed.saturating_sub(1).min(5) * 4;
    let returning_points = if activity.returning_visitor { 10 } else { 0 };

    time_points + scroll_points + page_points + returning_points
}

/// Decide whether the engagement popup should appear right now
///
/// Never shows inside the cooldown window, regardless of score.
pub fn should_show_popup(
    activity: &VisitorActivity,
    now: DateTime<Utc>,
    last_shown: Option<DateTime<Utc>>,
    policy: &PopupPolicy,
) -> bool {
    if let Some(shown_at) = last_shown {
        if now - shown_at < Duration::hours(policy.cooldown_hours) {
            return false;
        }
    }
    engagement_score(activity) >= policy.min_score
}

/// One arm of an A/B experiment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Stable id recorded alongside conversions
    pub id: String,
    /// Relative weight; zero-weight variants are never assigned
    pub weight: u32,
}

/// A named A/B experiment with weighted variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    pub id: String,
    pub variants: Vec<Variant>,
}

impl Experiment {
    pub fn new(id: &str, variants: Vec<Variant>) -> Self {
        Self {
            id: id.to_string(),
            variants,
        }
    }
}

/// Assign a variant by weighted random pick
///
/// Returns `None` when the experiment has no assignable weight. The caller
/// owns the rng; a seeded rng makes assignment reproducible.
pub fn assign_variant<'a, R: Rng>(experiment: &'a Experiment, rng: &mut R) -> Option<&'a Variant> {
    let total_weight: u32 = experiment.variants.iter().map(|v| v.weight).sum();
    if total_weight == 0 {
        log::warn!(
            "Experiment '{}' has no assignable weight, skipping assignment",
            experiment.id
        );
        return None;
    }

    let mut pick = rng.gen_range(0..total_weight);
    for variant in &experiment.variants {
        if pick < variant.weight {
            return Some(variant);
        }
        pick -= variant.weight;
    }
    // Unreachable: pick is always below the summed weight
    experiment.variants.last()
}
