// Data models matching the frontend TypeScript types

use serde::{Deserialize, Serialize};

use crate::catalog;

/// Kind of project the visitor wants built
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    SimpleWebsite,
    Web,
    Mobile,
    WebMobile,
}

impl ProjectType {
    /// Returns all project types in wizard order
    pub fn all() -> &'static [ProjectType] {
        &[
            ProjectType::SimpleWebsite,
            ProjectType::Web,
            ProjectType::Mobile,
            ProjectType::WebMobile,
        ]
    }

    /// Returns the string representation of this project type
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::SimpleWebsite => "simple_website",
            ProjectType::Web => "web",
            ProjectType::Mobile => "mobile",
            ProjectType::WebMobile => "web_mobile",
        }
    }

    /// Get the display name for this project type
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::SimpleWebsite => "Simple Website",
            ProjectType::Web => "Web Application",
            ProjectType::Mobile => "Mobile Application",
            ProjectType::WebMobile => "Web & Mobile Application",
        }
    }

    /// Whether this type is the website track (as opposed to the app track)
    pub fn is_website(&self) -> bool {
        matches!(self, ProjectType::SimpleWebsite)
    }

    /// Whether this type includes a native mobile target
    pub fn includes_mobile(&self) -> bool {
        matches!(self, ProjectType::Mobile | ProjectType::WebMobile)
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple_website" => Ok(ProjectType::SimpleWebsite),
            "web" => Ok(ProjectType::Web),
            "mobile" => Ok(ProjectType::Mobile),
            "web_mobile" => Ok(ProjectType::WebMobile),
            _ => Err(format!(
                "Unknown project type: '{}'. Expected one of: simple_website, web, mobile, web_mobile",
                s
            )),
        }
    }
}

/// What the project is primarily for
///
/// Website purposes and app purposes are disjoint catalogs; use
/// [`ProjectPurpose::all_for`] to get the list valid for a project type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPurpose {
    // Website purposes
    Portfolio,
    Business,
    LandingPage,
    Blog,
    Nonprofit,
    Event,
    // App purposes
    Saas,
    Marketplace,
    InternalTool,
    Social,
    Ecommerce,
    BookingPlatform,
    Education,
}

impl ProjectPurpose {
    /// Returns the purposes offered for a project type, in wizard order
    pub fn all_for(project_type: ProjectType) -> &'static [ProjectPurpose] {
        if project_type.is_website() {
            &[
                ProjectPurpose::Portfolio,
                ProjectPurpose::Business,
                ProjectPurpose::LandingPage,
                ProjectPurpose::Blog,
                ProjectPurpose::Nonprofit,
                ProjectPurpose::Event,
            ]
        } else {
            &[
                ProjectPurpose::Saas,
                ProjectPurpose::Marketplace,
                ProjectPurpose::InternalTool,
                ProjectPurpose::Social,
                ProjectPurpose::Ecommerce,
                ProjectPurpose::BookingPlatform,
                ProjectPurpose::Education,
            ]
        }
    }

    /// Returns the string representation of this purpose
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectPurpose::Portfolio => "portfolio",
            ProjectPurpose::Business => "business",
            ProjectPurpose::LandingPage => "landing_page",
            ProjectPurpose::Blog => "blog",
            ProjectPurpose::Nonprofit => "nonprofit",
            ProjectPurpose::Event => "event",
            ProjectPurpose::Saas => "saas",
            ProjectPurpose::Marketplace => "marketplace",
            ProjectPurpose::InternalTool => "internal_tool",
            ProjectPurpose::Social => "social",
            ProjectPurpose::Ecommerce => "ecommerce",
            ProjectPurpose::BookingPlatform => "booking_platform",
            ProjectPurpose::Education => "education",
        }
    }

    /// Get the display name for this purpose
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectPurpose::Portfolio => "Portfolio",
            ProjectPurpose::Business => "Business Website",
            ProjectPurpose::LandingPage => "Landing Page",
            ProjectPurpose::Blog => "Blog & Publication",
            ProjectPurpose::Nonprofit => "Nonprofit",
            ProjectPurpose::Event => "Event Site",
            ProjectPurpose::Saas => "SaaS Product",
            ProjectPurpose::Marketplace => "Marketplace",
            ProjectPurpose::InternalTool => "Internal Tool",
            ProjectPurpose::Social => "Social Platform",
            ProjectPurpose::Ecommerce => "E-Commerce",
            ProjectPurpose::BookingPlatform => "Booking Platform",
            ProjectPurpose::Education => "Education Platform",
        }
    }
}

impl std::fmt::Display for ProjectPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProjectPurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "portfolio" => Ok(ProjectPurpose::Portfolio),
            "business" => Ok(ProjectPurpose::Business),
            "landing_page" => Ok(ProjectPurpose::LandingPage),
            "blog" => Ok(ProjectPurpose::Blog),
            "nonprofit" => Ok(ProjectPurpose::Nonprofit),
            "event" => Ok(ProjectPurpose::Event),
            "saas" => Ok(ProjectPurpose::Saas),
            "marketplace" => Ok(ProjectPurpose::Marketplace),
            "internal_tool" => Ok(ProjectPurpose::InternalTool),
            "social" => Ok(ProjectPurpose::Social),
            "ecommerce" => Ok(ProjectPurpose::Ecommerce),
            "booking_platform" => Ok(ProjectPurpose::BookingPlatform),
            "education" => Ok(ProjectPurpose::Education),
            _ => Err(format!("Unknown project purpose: '{}'", s)),
        }
    }
}

/// How much supplementary planning detail the visitor asked for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanningDepth {
    Quick,
    Detailed,
}

impl PlanningDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanningDepth::Quick => "quick",
            PlanningDepth::Detailed => "detailed",
        }
    }
}

impl Default for PlanningDepth {
    fn default() -> Self {
        PlanningDepth::Quick
    }
}

impl std::str::FromStr for PlanningDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quick" => Ok(PlanningDepth::Quick),
            "detailed" => Ok(PlanningDepth::Detailed),
            _ => Err(format!(
                "Unknown planning depth: '{}'. Expected one of: quick, detailed",
                s
            )),
        }
    }
}

/// Complexity bucket derived from the summed feature weights
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Simple,
    Moderate,
    Complex,
}

impl ComplexityLevel {
    /// Get the display name for this complexity level
    pub fn display_name(&self) -> &'static str {
        match self {
            ComplexityLevel::Simple => "Simple",
            ComplexityLevel::Moderate => "Moderate",
            ComplexityLevel::Complex => "Complex",
        }
    }
}

/// Recommendation category in the generated tech stack
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StackCategory {
    Platform,
    Frontend,
    Backend,
    Database,
    Mobile,
    Infrastructure,
    Services,
}

impl StackCategory {
    /// Get the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            StackCategory::Platform => "Platform",
            StackCategory::Frontend => "Frontend",
            StackCategory::Backend => "Backend",
            StackCategory::Database => "Database",
            StackCategory::Mobile => "Mobile",
            StackCategory::Infrastructure => "Infrastructure",
            StackCategory::Services => "Services",
        }
    }
}

/// Validated wizard input, handed to the engine once per estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    /// Kind of project being scoped
    pub project_type: ProjectType,
    /// Primary purpose of the project
    pub project_purpose: ProjectPurpose,
    /// Selected feature ids (order irrelevant, unknown ids tolerated)
    pub selected_features: Vec<String>,
    /// Free-text requirements from the visitor
    pub requirements: Option<String>,
    /// Preferred technology ids, if the visitor stated any
    pub preferred_tech_stack: Vec<String>,
    /// Quick or detailed planning
    pub planning_depth: PlanningDepth,
}

/// A week range, min and max tracked independently
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DurationRange {
    pub min: u32,
    pub max: u32,
}

impl DurationRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Format as a human-readable week range
    pub fn label(&self) -> String {
        if self.min == self.max {
            format!("{} week{}", self.min, if self.min == 1 { "" } else { "s" })
        } else {
            format!("{}-{} weeks", self.min, self.max)
        }
    }
}

/// A named phase of the delivery roadmap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapMilestone {
    /// Phase name (e.g. "Discovery & Strategy")
    pub name: String,
    /// What this phase accomplishes
    pub description: String,
    /// Estimated duration in whole weeks
    pub duration_weeks: DurationRange,
    /// Concrete outputs of the phase, in order
    pub deliverables: Vec<String>,
    /// Work carried out during the phase, in order
    pub activities: Vec<String>,
}

/// A category-grouped technology suggestion with a short justification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TechStackRecommendation {
    /// Which part of the stack this covers
    pub category: StackCategory,
    /// Technology display names, in recommendation order
    pub technologies: Vec<String>,
    /// Why these were picked
    pub reasoning: String,
}

/// A selected feature echoed back with its catalog label
///
/// Unknown ids keep the id itself as the label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFeature {
    pub id: String,
    pub name: String,
}

/// The engine's output aggregate
///
/// Serialized as a camelCase JSON blob for the review screen, the
/// transactional email, and the submission record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequirementsSummary {
    /// Project type echoed from the request
    pub project_type: ProjectType,
    /// Purpose echoed from the request (resolved against the type's catalog)
    pub project_purpose: ProjectPurpose,
    /// Selected features with display labels
    pub selected_features: Vec<SelectedFeature>,
    /// Free-text requirements echoed from the request
    pub requirements: Option<String>,
    /// Planning depth echoed from the request
    pub planning_depth: PlanningDepth,
    /// Derived complexity bucket
    pub complexity: ComplexityLevel,
    /// Roadmap phases in delivery order
    pub milestones: Vec<RoadmapMilestone>,
    /// Componentwise sum of the per-milestone week ranges
    pub total_duration: DurationRange,
    /// Tech stack recommendations in category order
    pub recommended_tech_stack: Vec<TechStackRecommendation>,
}

impl RequirementsSummary {
    /// Export to markdown format (used for the estimate email body)
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str(&format!(
            "# Project Estimate: {}\n\n",
            self.project_purpose.display_name()
        ));
        md.push_str(&format!(
            "**Project type:** {}\n\n",
            self.project_type.display_name()
        ));
        md.push_str(&format!(
            "**Complexity:** {}\n\n",
            self.complexity.display_name()
        ));
        md.push_str(&format!(
            "**Estimated timeline:** {}\n\n",
            self.total_duration.label()
        ));

        if !self.selected_features.is_empty() {
            md.push_str("## Selected Features\n\n");
            for feature in &self.selected_features {
                md.push_str(&format!("- {}\n", feature.name));
            }
            md.push_str("\n");
        }

        if let Some(requirements) = &self.requirements {
            if !requirements.trim().is_empty() {
                md.push_str("## Additional Requirements\n\n");
                md.push_str(&format!("{}\n\n", requirements.trim()));
            }
        }

        md.push_str("## Roadmap\n\n");
        md.push_str("| Phase | Duration |\n");
        md.push_str("|-------|----------|\n");
        for milestone in &self.milestones {
            md.push_str(&format!(
                "| {} | {} |\n",
                milestone.name,
                milestone.duration_weeks.label()
            ));
        }
        md.push_str("\n");

        for milestone in &self.milestones {
            md.push_str(&format!("### {}\n\n", milestone.name));
            md.push_str(&format!("{}\n\n", milestone.description));
            md.push_str(&format!(
                "**Duration:** {}\n\n",
                milestone.duration_weeks.label()
            ));

            md.push_str("**Deliverables:**\n");
            for deliverable in &milestone.deliverables {
                md.push_str(&format!("- {}\n", deliverable));
            }
            md.push_str("\n");

            md.push_str("**Activities:**\n");
            for activity in &milestone.activities {
                md.push_str(&format!("- {}\n", activity));
            }
            md.push_str("\n");
        }

        md.push_str("## Recommended Tech Stack\n\n");
        for recommendation in &self.recommended_tech_stack {
            md.push_str(&format!(
                "**{}:** {}\n\n",
                recommendation.category.display_name(),
                recommendation.technologies.join(", ")
            ));
            md.push_str(&format!("{}\n\n", recommendation.reasoning));
        }

        md
    }

    /// Resolve feature ids to echoed features with catalog labels
    pub fn resolve_features(ids: &[String]) -> Vec<SelectedFeature> {
        ids.iter()
            .map(|id| SelectedFeature {
                id: id.clone(),
                name: catalog::find_feature(id)
                    .map(|entry| entry.name.to_string())
                    .unwrap_or_else(|| id.clone()),
            })
            .collect()
    }
}
