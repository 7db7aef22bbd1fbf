//! Boundary validation for raw wizard submissions
//!
//! The engine itself treats enum inputs as preconditions; this is the
//! boundary that enforces them. Unknown feature and tech ids are allowed
//! through because the engine tolerates them downstream.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{EstimateRequest, PlanningDepth, ProjectPurpose, ProjectType};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Unknown project type: '{0}'")]
    UnknownProjectType(String),

    #[error("Unknown project purpose: '{0}'")]
    UnknownProjectPurpose(String),

    #[error("Unknown planning depth: '{0}'")]
    UnknownPlanningDepth(String),

    #[error("Purpose '{purpose}' is not offered for project type '{project_type}'")]
    PurposeNotOffered {
        project_type: ProjectType,
        purpose: ProjectPurpose,
    },
}

/// An estimate request as the wizard submits it, before enum parsing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEstimateRequest {
    pub project_type: String,
    pub project_purpose: String,
    #[serde(default)]
    pub selected_features: Vec<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub preferred_tech_stack: Vec<String>,
    /// Missing depth means the visitor skipped the step; defaults to quick
    #[serde(default)]
    pub planning_depth: Option<String>,
}

/// Parse and validate a raw request into a typed [`EstimateRequest`]
pub fn validate_request(raw: &RawEstimateRequest) -> Result<EstimateRequest, ValidationError> {
    let project_type: ProjectType = raw
        .project_type
        .parse()
        .map_err(|_| ValidationError::UnknownProjectType(raw.project_type.clone()))?;

    let project_purpose: ProjectPurpose = raw
        .project_purpose
        .parse()
        .map_err(|_| ValidationError::UnknownProjectPurpose(raw.project_purpose.clone()))?;

    if !ProjectPurpose::all_for(project_type).contains(&project_purpose) {
        return Err(ValidationError::PurposeNotOffered {
            project_type,
            purpose: project_purpose,
        });
    }

    let planning_depth = match &raw.planning_depth {
        Some(depth) => depth
            .parse()
            .map_err(|_| ValidationError::UnknownPlanningDepth(depth.clone()))?,
        None => PlanningDepth::default(),
    };

    Ok(EstimateRequest {
        project_type,
        project_purpose,
        selected_features: raw.selected_features.clone(),
        requirements: raw.requirements.clone(),
        preferred_tech_stack: raw.preferred_tech_stack.clone(),
        planning_depth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(project_type: &str, purpose: &str) -> RawEstimateRequest {
        RawEstimateRequest {
            project_type: project_type.to_string(),
            project_purpose: purpose.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_request_parses() {
        let mut request = raw("web", "saas");
        request.selected_features = vec!["auth".to_string()];
        request.planning_depth = Some("detailed".to_string());

        let validated = validate_request(&request).unwrap();
        assert_eq!(validated.project_type, ProjectType::Web);
        assert_eq!(validated.project_purpose, ProjectPurpose::Saas);
        assert_eq!(validated.planning_depth, PlanningDepth::Detailed);
    }

    #[test]
    fn test_unknown_project_type_rejected() {
        let err = validate_request(&raw("desktop", "saas")).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownProjectType(_)));
    }

    #[test]
    fn test_unknown_purpose_rejected() {
        let err = validate_request(&raw("web", "world_domination")).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownProjectPurpose(_)));
    }

    #[test]
    fn test_purpose_must_match_track() {
        // saas is an app purpose, not offered on the website track
        let err = validate_request(&raw("simple_website", "saas")).unwrap_err();
        assert!(matches!(err, ValidationError::PurposeNotOffered { .. }));

        // portfolio is a website purpose, not offered on the app track
        let err = validate_request(&raw("web", "portfolio")).unwrap_err();
        assert!(matches!(err, ValidationError::PurposeNotOffered { .. }));
    }

    #[test]
    fn test_missing_depth_defaults_to_quick() {
        let validated = validate_request(&raw("simple_website", "portfolio")).unwrap();
        assert_eq!(validated.planning_depth, PlanningDepth::Quick);
    }

    #[test]
    fn test_unknown_depth_rejected() {
        let mut request = raw("web", "saas");
        request.planning_depth = Some("exhaustive".to_string());
        let err = validate_request(&request).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownPlanningDepth(_)));
    }

    #[test]
    fn test_unknown_feature_ids_pass_through() {
        let mut request = raw("web", "saas");
        request.selected_features = vec!["hologram".to_string()];
        request.preferred_tech_stack = vec!["fortran_iv".to_string()];
        let validated = validate_request(&request).unwrap();
        assert_eq!(validated.selected_features, vec!["hologram"]);
        assert_eq!(validated.preferred_tech_stack, vec!["fortran_iv"]);
    }

    #[test]
    fn test_raw_request_deserializes_camel_case() {
        let json = r#"{
            "projectType": "web",
            "projectPurpose": "saas",
            "selectedFeatures": ["auth"],
            "preferredTechStack": ["postgresql"],
            "planningDepth": "quick"
        }"#;
        let request: RawEstimateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.project_type, "web");
        assert_eq!(request.selected_features, vec!["auth"]);
        assert!(validate_request(&request).is_ok());
    }
}
