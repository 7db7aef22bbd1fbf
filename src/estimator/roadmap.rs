//! Roadmap milestone generation
//!
//! Emits the fixed five-phase delivery roadmap, scaled by the duration
//! multiplier. Each phase rounds up to whole weeks independently, so the
//! total is the sum of the rounded values, not a rescaled base total.

use crate::models::{DurationRange, PlanningDepth, RoadmapMilestone};

/// The five phase kinds, in delivery order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MilestoneKind {
    Discovery,
    Design,
    Development,
    Testing,
    Launch,
}

/// Static definition of one milestone kind
struct MilestoneBlueprint {
    kind: MilestoneKind,
    name: &'static str,
    description: &'static str,
    /// Unscaled duration range in weeks
    base_weeks: (f64, f64),
    deliverables: &'static [&'static str],
    activities: &'static [&'static str],
    /// Appended when planning depth is detailed
    detailed_deliverables: &'static [&'static str],
    detailed_activities: &'static [&'static str],
}

const BLUEPRINTS: &[MilestoneBlueprint] = &[
    MilestoneBlueprint {
        kind: MilestoneKind::Discovery,
        name: "Discovery & Strategy",
        description: "Align on goals, audience, and scope before anything is designed or built.",
        base_weeks: (0.5, 1.0),
        deliverables: &["Project brief", "Feature scope document", "Success metrics"],
        activities: &[
            "Stakeholder kickoff workshop",
            "Audience and goal definition",
            "Feature prioritization",
        ],
        detailed_deliverables: &["Competitive analysis report", "User personas"],
        detailed_activities: &["Competitive landscape review", "User persona interviews"],
    },
    MilestoneBlueprint {
        kind: MilestoneKind::Design,
        name: "UX/UI Design",
        description: "Turn the agreed scope into wireframes and polished visual designs.",
        base_weeks: (1.0, 2.0),
        deliverables: &["Wireframes", "High-fidelity designs", "Clickable prototype"],
        activities: &[
            "Information architecture",
            "Wireframing",
            "Visual design iterations",
        ],
        detailed_deliverables: &["Design system", "Accessibility guidelines"],
        detailed_activities: &["Design system definition", "Accessibility review"],
    },
    MilestoneBlueprint {
        kind: MilestoneKind::Development,
        name: "Development",
        description: "Build, integrate, and iterate on the product itself.",
        base_weeks: (2.0, 4.0),
        deliverables: &["Working application", "Source repository", "Integration setup"],
        activities: &[
            "Environment setup",
            "Core feature development",
            "Internal demo reviews",
        ],
        detailed_deliverables: &["Technical documentation", "Code review reports"],
        detailed_activities: &["Architecture documentation", "Scheduled code audits"],
    },
    MilestoneBlueprint {
        kind: MilestoneKind::Testing,
        name: "Testing & QA",
        description: "Verify the product works for real users on real devices.",
        base_weeks: (1.0, 2.0),
        deliverables: &[
            "Test plan",
            "Bug reports and fixes",
            "Cross-browser test results",
        ],
        activities: &[
            "Functional testing",
            "Device and browser testing",
            "Bug triage and fixes",
        ],
        detailed_deliverables: &["Security audit report", "Load testing results"],
        detailed_activities: &["Security audit", "Load and performance testing"],
    },
    MilestoneBlueprint {
        kind: MilestoneKind::Launch,
        name: "Deployment & Launch",
        description: "Ship to production and hand over the keys.",
        base_weeks: (1.0, 1.0),
        deliverables: &["Production deployment", "Handover documentation"],
        activities: &["Production environment setup", "Go-live and monitoring"],
        detailed_deliverables: &["Launch checklist", "Training session recording"],
        detailed_activities: &["Launch checklist run-through", "Team training session"],
    },
];

/// Feature ids that add an authentication pair to Development
const AUTH_TRIGGERS: &[&str] = &["auth", "membership"];
/// Feature ids that add a payment-integration pair to Development
const PAYMENT_TRIGGERS: &[&str] = &["payments", "ecommerce_lite", "subscriptions"];
/// Feature ids that add an AI-integration pair to Development
const AI_TRIGGERS: &[&str] = &["ai", "automation"];

fn selection_matches(feature_ids: &[String], triggers: &[&str]) -> bool {
    feature_ids.iter().any(|id| triggers.contains(&id.as_str()))
}

/// Scale a base week value and round up to whole weeks, never below one
fn scale_weeks(base: f64, multiplier: f64) -> u32 {
    (base * multiplier).ceil().max(1.0) as u32
}

/// Build the five roadmap milestones for a selection
///
/// Launch stays pinned at one week regardless of the multiplier; launch
/// activities do not compress or stretch with project complexity.
pub fn build_milestones(
    multiplier: f64,
    planning_depth: PlanningDepth,
    feature_ids: &[String],
) -> Vec<RoadmapMilestone> {
    BLUEPRINTS
        .iter()
        .map(|blueprint| {
            let duration_weeks = if blueprint.kind == MilestoneKind::Launch {
                DurationRange::new(1, 1)
            } else {
                DurationRange::new(
                    scale_weeks(blueprint.base_weeks.0, multiplier),
                    scale_weeks(blueprint.base_weeks.1, multiplier),
                )
            };

            let mut deliverables: Vec<String> =
                blueprint.deliverables.iter().map(|s| s.to_string()).collect();
            let mut activities: Vec<String> =
                blueprint.activities.iter().map(|s| s.to_string()).collect();

            if planning_depth == PlanningDepth::Detailed {
                deliverables.extend(blueprint.detailed_deliverables.iter().map(|s| s.to_string()));
                activities.extend(blueprint.detailed_activities.iter().map(|s| s.to_string()));
            }

            if blueprint.kind == MilestoneKind::Development {
                if selection_matches(feature_ids, AUTH_TRIGGERS) {
                    activities.push("Implement authentication and account management".to_string());
                    deliverables.push("Authentication system".to_string());
                }
                if selection_matches(feature_ids, PAYMENT_TRIGGERS) {
                    activities.push("Integrate payment processing".to_string());
                    deliverables.push("Payment integration".to_string());
                }
                if selection_matches(feature_ids, AI_TRIGGERS) {
                    activities.push("Build and wire AI/ML integrations".to_string());
                    deliverables.push("AI integration layer".to_string());
                }
            }

            RoadmapMilestone {
                name: blueprint.name.to_string(),
                description: blueprint.description.to_string(),
                duration_weeks,
                deliverables,
                activities,
            }
        })
        .collect()
}

/// Componentwise sum of the milestones' week ranges
pub fn total_duration(milestones: &[RoadmapMilestone]) -> DurationRange {
    DurationRange::new(
        milestones.iter().map(|m| m.duration_weeks.min).sum(),
        milestones.iter().map(|m| m.duration_weeks.max).sum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_five_milestones_in_order() {
        let milestones = build_milestones(1.0, PlanningDepth::Quick, &[]);
        let names: Vec<&str> = milestones.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Discovery & Strategy",
                "UX/UI Design",
                "Development",
                "Testing & QA",
                "Deployment & Launch",
            ]
        );
    }

    #[test]
    fn test_launch_is_pinned_regardless_of_multiplier() {
        for multiplier in [0.5, 1.0, 3.52] {
            let milestones = build_milestones(multiplier, PlanningDepth::Quick, &[]);
            assert_eq!(milestones[4].duration_weeks, DurationRange::new(1, 1));
        }
    }

    #[test]
    fn test_durations_round_up_per_milestone() {
        // Multiplier 0.5: discovery base 0.5-1.0 becomes 1-1
        let milestones = build_milestones(0.5, PlanningDepth::Quick, &[]);
        assert_eq!(milestones[0].duration_weeks, DurationRange::new(1, 1));
        // Development base 2.0-4.0 becomes 1-2
        assert_eq!(milestones[2].duration_weeks, DurationRange::new(1, 2));
    }

    #[test]
    fn test_total_is_sum_of_rounded_values() {
        let milestones = build_milestones(1.5, PlanningDepth::Quick, &[]);
        let total = total_duration(&milestones);
        let expected_min: u32 = milestones.iter().map(|m| m.duration_weeks.min).sum();
        let expected_max: u32 = milestones.iter().map(|m| m.duration_weeks.max).sum();
        assert_eq!(total, DurationRange::new(expected_min, expected_max));
        assert!(total.min <= total.max);
    }

    #[test]
    fn test_detailed_depth_extends_every_milestone() {
        let quick = build_milestones(1.0, PlanningDepth::Quick, &[]);
        let detailed = build_milestones(1.0, PlanningDepth::Detailed, &[]);
        for (q, d) in quick.iter().zip(detailed.iter()) {
            assert!(d.deliverables.len() > q.deliverables.len(), "{}", q.name);
            assert!(d.activities.len() > q.activities.len(), "{}", q.name);
        }
        assert!(detailed[3]
            .activities
            .iter()
            .any(|a| a == "Load and performance testing"));
        assert!(detailed[4].deliverables.iter().any(|d| d == "Launch checklist"));
    }

    #[test]
    fn test_development_feature_extensions_stack() {
        let milestones = build_milestones(
            1.0,
            PlanningDepth::Quick,
            &ids(&["auth", "payments", "ai"]),
        );
        let development = &milestones[2];
        assert!(development
            .deliverables
            .iter()
            .any(|d| d == "Authentication system"));
        assert!(development
            .deliverables
            .iter()
            .any(|d| d == "Payment integration"));
        assert!(development
            .deliverables
            .iter()
            .any(|d| d == "AI integration layer"));

        // Other milestones are untouched by feature triggers
        let baseline = build_milestones(1.0, PlanningDepth::Quick, &[]);
        assert_eq!(milestones[0], baseline[0]);
        assert_eq!(milestones[3], baseline[3]);
    }

    #[test]
    fn test_triggers_match_any_member() {
        let milestones = build_milestones(1.0, PlanningDepth::Quick, &ids(&["subscriptions"]));
        assert!(milestones[2]
            .deliverables
            .iter()
            .any(|d| d == "Payment integration"));

        let milestones = build_milestones(1.0, PlanningDepth::Quick, &ids(&["membership"]));
        assert!(milestones[2]
            .deliverables
            .iter()
            .any(|d| d == "Authentication system"));

        let milestones = build_milestones(1.0, PlanningDepth::Quick, &ids(&["automation"]));
        assert!(milestones[2]
            .deliverables
            .iter()
            .any(|d| d == "AI integration layer"));
    }
}
