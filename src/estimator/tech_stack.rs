//! Tech stack recommendation rules
//!
//! One recommendation per applicable stack category. A stated user
//! preference always overrides inference for its category; inference rules
//! are evaluated independently per category.

use std::collections::HashMap;

use crate::catalog;
use crate::models::{ProjectPurpose, ProjectType, StackCategory, TechStackRecommendation};

/// Reasoning attached when the user's stated preference is echoed back
const PREFERENCE_REASONING: &str = "Selected based on your stated preference.";

/// A trigger-driven entry merged into the Services recommendation
struct ServiceRule {
    triggers: &'static [&'static str],
    technologies: &'static [&'static str],
    use_case: &'static str,
}

const SERVICE_RULES: &[ServiceRule] = &[
    ServiceRule {
        triggers: &["payments", "ecommerce_lite", "subscriptions"],
        technologies: &["Stripe"],
        use_case: "payment processing",
    },
    ServiceRule {
        triggers: &["notifications", "newsletter", "contact_form"],
        technologies: &["Resend", "Postmark"],
        use_case: "email delivery",
    },
    ServiceRule {
        triggers: &["auth", "membership"],
        technologies: &["Clerk"],
        use_case: "user authentication",
    },
    ServiceRule {
        triggers: &["ai"],
        technologies: &["OpenAI"],
        use_case: "AI capabilities",
    },
    ServiceRule {
        triggers: &["analytics", "reports"],
        technologies: &["Plausible", "Mixpanel"],
        use_case: "product analytics",
    },
];

fn has(feature_ids: &[String], id: &str) -> bool {
    feature_ids.iter().any(|f| f == id)
}

fn has_any(feature_ids: &[String], ids: &[&str]) -> bool {
    feature_ids.iter().any(|f| ids.contains(&f.as_str()))
}

/// Build an inferred recommendation from static name lists
fn inferred(category: StackCategory, technologies: &[&str], reasoning: &str) -> TechStackRecommendation {
    TechStackRecommendation {
        category,
        technologies: technologies.iter().map(|s| s.to_string()).collect(),
        reasoning: reasoning.to_string(),
    }
}

/// Group the user's preferred technology ids by stack category
///
/// Unknown ids are dropped; the wizard's preference step only emits catalog
/// ids, so anything else is stale client state.
fn preferences_by_category(preferred_ids: &[String]) -> HashMap<StackCategory, Vec<String>> {
    let mut grouped: HashMap<StackCategory, Vec<String>> = HashMap::new();
    for id in preferred_ids {
        match catalog::find_tech(id) {
            Some(option) => grouped
                .entry(option.category)
                .or_default()
                .push(option.name.to_string()),
            None => log::debug!("Ignoring unknown preferred tech id '{}'", id),
        }
    }
    grouped
}

/// Echo the user's stated preference for a category, if any
fn preference_for(
    preferences: &HashMap<StackCategory, Vec<String>>,
    category: StackCategory,
) -> Option<TechStackRecommendation> {
    preferences.get(&category).map(|technologies| TechStackRecommendation {
        category,
        technologies: technologies.clone(),
        reasoning: PREFERENCE_REASONING.to_string(),
    })
}

/// Produce the recommendation list for a selection
///
/// Output order is fixed: Platform, Frontend, Backend, Database, Mobile,
/// Infrastructure, Services. Categories that do not apply to the project
/// type, and a Services entry with no matched trigger, are omitted.
pub fn recommend_stack(
    project_type: ProjectType,
    purpose: ProjectPurpose,
    feature_ids: &[String],
    preferred_ids: &[String],
) -> Vec<TechStackRecommendation> {
    let preferences = preferences_by_category(preferred_ids);
    let mut recommendations: Vec<TechStackRecommendation> = Vec::new();

    if project_type.is_website() {
        recommendations.push(
            preference_for(&preferences, StackCategory::Platform).unwrap_or_else(|| {
                inferred(
                    StackCategory::Platform,
                    &["Webflow", "WordPress"],
                    "A visual site builder gets a content site live quickly, with WordPress as the general-purpose CMS option.",
                )
            }),
        );
    } else {
        recommendations.push(
            preference_for(&preferences, StackCategory::Frontend).unwrap_or_else(|| {
                if has(feature_ids, "ai") || purpose == ProjectPurpose::Saas {
                    inferred(
                        StackCategory::Frontend,
                        &["Next.js", "React"],
                        "Server-side rendering improves SEO and initial load, which suits SaaS and AI-driven product surfaces.",
                    )
                } else {
                    inferred(
                        StackCategory::Frontend,
                        &["React", "Vite"],
                        "A component-based frontend with fast build tooling covers interactive product UIs.",
                    )
                }
            }),
        );
    }

    recommendations.push(
        preference_for(&preferences, StackCategory::Backend).unwrap_or_else(|| {
            if has(feature_ids, "ai") {
                inferred(
                    StackCategory::Backend,
                    &["Python", "FastAPI", "Node.js"],
                    "Python carries the AI workload, with Node.js alongside for the application API.",
                )
            } else if has_any(feature_ids, &["chat", "notifications"]) {
                inferred(
                    StackCategory::Backend,
                    &["Node.js", "Socket.io"],
                    "Node.js with socket support handles real-time messaging and event pushes.",
                )
            } else {
                inferred(
                    StackCategory::Backend,
                    &["Node.js", "Express"],
                    "A Node.js API keeps the backend simple and widely supported.",
                )
            }
        }),
    );

    recommendations.push(
        preference_for(&preferences, StackCategory::Database).unwrap_or_else(|| {
            if has_any(feature_ids, &["analytics", "reports"]) {
                inferred(
                    StackCategory::Database,
                    &["PostgreSQL", "Redis"],
                    "A relational store with a cache layer supports reporting and aggregate queries.",
                )
            } else if has(feature_ids, "chat") {
                inferred(
                    StackCategory::Database,
                    &["PostgreSQL", "Redis", "MongoDB"],
                    "Relational data plus a cache and a document store covers message history and presence.",
                )
            } else {
                inferred(
                    StackCategory::Database,
                    &["PostgreSQL"],
                    "A single relational database covers the data model.",
                )
            }
        }),
    );

    if project_type.includes_mobile() {
        recommendations.push(
            preference_for(&preferences, StackCategory::Mobile).unwrap_or_else(|| {
                inferred(
                    StackCategory::Mobile,
                    &["React Native", "Expo"],
                    "One cross-platform codebase ships to both iOS and Android.",
                )
            }),
        );
    }

    if !project_type.is_website() {
        recommendations.push(
            preference_for(&preferences, StackCategory::Infrastructure).unwrap_or_else(|| {
                if has(feature_ids, "ai") {
                    inferred(
                        StackCategory::Infrastructure,
                        &["AWS", "Vercel"],
                        "Managed cloud AI services sit next to a frontend deployment platform.",
                    )
                } else {
                    inferred(
                        StackCategory::Infrastructure,
                        &["Vercel", "Railway"],
                        "Modern deployment platforms with minimal operations overhead.",
                    )
                }
            }),
        );
    }

    let mut service_technologies: Vec<String> = Vec::new();
    let mut service_use_cases: Vec<&str> = Vec::new();
    for rule in SERVICE_RULES {
        if has_any(feature_ids, rule.triggers) {
            for technology in rule.technologies {
                if !service_technologies.iter().any(|t| t == technology) {
                    service_technologies.push(technology.to_string());
                }
            }
            service_use_cases.push(rule.use_case);
        }
    }
    if !service_technologies.is_empty() {
        recommendations.push(TechStackRecommendation {
            category: StackCategory::Services,
            technologies: service_technologies,
            reasoning: format!(
                "Recommended services for {}.",
                service_use_cases.join(", ")
            ),
        });
    }

    recommendations
}
