//! Requirements summary assembly
//!
//! The single entry point the surrounding application calls once per
//! wizard submission. Stateless; identical input yields identical output.

use crate::estimator::complexity::{classify_complexity, duration_multiplier};
use crate::estimator::roadmap::{build_milestones, total_duration};
use crate::estimator::tech_stack::recommend_stack;
use crate::models::{EstimateRequest, ProjectPurpose, RequirementsSummary};

/// Resolve the purpose against the project type's catalog
///
/// If the validation boundary was bypassed and the purpose is not offered
/// for the type, fall back to the first catalog entry so the roadmap stays
/// renderable.
fn resolve_purpose(request: &EstimateRequest) -> ProjectPurpose {
    let offered = ProjectPurpose::all_for(request.project_type);
    if offered.contains(&request.project_purpose) {
        request.project_purpose
    } else {
        log::warn!(
            "Purpose '{}' is not offered for project type '{}', falling back to '{}'",
            request.project_purpose,
            request.project_type,
            offered[0]
        );
        offered[0]
    }
}

/// Generate the requirements summary for a validated request
pub fn generate_summary(request: &EstimateRequest) -> RequirementsSummary {
    let project_purpose = resolve_purpose(request);
    let complexity = classify_complexity(&request.selected_features);
    let multiplier = duration_multiplier(complexity, request.project_type);
    let milestones = build_milestones(
        multiplier,
        request.planning_depth,
        &request.selected_features,
    );
    let total = total_duration(&milestones);
    let recommended_tech_stack = recommend_stack(
        request.project_type,
        project_purpose,
        &request.selected_features,
        &request.preferred_tech_stack,
    );

    RequirementsSummary {
        project_type: request.project_type,
        project_purpose,
        selected_features: RequirementsSummary::resolve_features(&request.selected_features),
        requirements: request.requirements.clone(),
        planning_depth: request.planning_depth,
        complexity,
        milestones,
        total_duration: total,
        recommended_tech_stack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComplexityLevel, DurationRange, PlanningDepth, ProjectType};

    fn request(
        project_type: ProjectType,
        purpose: ProjectPurpose,
        features: &[&str],
    ) -> EstimateRequest {
        EstimateRequest {
            project_type,
            project_purpose: purpose,
            selected_features: features.iter().map(|s| s.to_string()).collect(),
            requirements: None,
            preferred_tech_stack: Vec::new(),
            planning_depth: PlanningDepth::Quick,
        }
    }

    #[test]
    fn test_portfolio_site_scenario() {
        let summary = generate_summary(&request(
            ProjectType::SimpleWebsite,
            ProjectPurpose::Portfolio,
            &["responsive"],
        ));

        assert_eq!(summary.complexity, ComplexityLevel::Simple);
        // Multiplier 0.5 compresses discovery to a single week at both ends
        assert_eq!(summary.milestones[0].duration_weeks, DurationRange::new(1, 1));
        assert_eq!(summary.milestones.len(), 5);
        assert_eq!(
            summary.total_duration.min,
            summary.milestones.iter().map(|m| m.duration_weeks.min).sum::<u32>()
        );
    }

    #[test]
    fn test_features_echoed_with_labels() {
        let summary = generate_summary(&request(
            ProjectType::Web,
            ProjectPurpose::Saas,
            &["auth", "hologram"],
        ));
        assert_eq!(summary.selected_features[0].name, "User Accounts & Login");
        // Unknown id falls back to the id itself as the label
        assert_eq!(summary.selected_features[1].name, "hologram");
    }

    #[test]
    fn test_mismatched_purpose_falls_back_to_first_entry() {
        let summary = generate_summary(&request(
            ProjectType::SimpleWebsite,
            ProjectPurpose::Saas,
            &[],
        ));
        assert_eq!(summary.project_purpose, ProjectPurpose::Portfolio);
    }

    #[test]
    fn test_markdown_rendering_covers_sections() {
        let mut req = request(ProjectType::Web, ProjectPurpose::Saas, &["auth", "payments"]);
        req.requirements = Some("Must integrate with our CRM".to_string());
        let summary = generate_summary(&req);
        let md = summary.to_markdown();
        assert!(md.contains("# Project Estimate: SaaS Product"));
        assert!(md.contains("## Roadmap"));
        assert!(md.contains("### Development"));
        assert!(md.contains("## Recommended Tech Stack"));
        assert!(md.contains("Must integrate with our CRM"));
    }
}
