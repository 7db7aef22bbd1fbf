//! Static catalogs backing the scoping wizard
//!
//! Feature entries are partitioned into two overlapping lists, one for the
//! simple-website track and one for the app track. Tech options map the ids
//! the wizard's preference step emits to display names and stack categories.

use crate::models::{ProjectType, StackCategory};

/// A selectable feature in the wizard, with its complexity weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCatalogEntry {
    /// Stable id used by the wizard and the engine
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Group shown as a heading in the wizard step
    pub category: &'static str,
    /// Short helper line under the feature name
    pub helper_text: &'static str,
    /// Contribution to the project complexity score
    pub complexity_weight: u32,
}

/// Features offered on the simple-website track
pub const WEBSITE_FEATURES: &[FeatureCatalogEntry] = &[
    FeatureCatalogEntry {
        id: "responsive",
        name: "Responsive Design",
        category: "Essentials",
        helper_text: "Looks great on phones, tablets, and desktops",
        complexity_weight: 1,
    },
    FeatureCatalogEntry {
        id: "seo",
        name: "SEO Foundations",
        category: "Essentials",
        helper_text: "Meta tags, sitemap, and search-engine friendly markup",
        complexity_weight: 1,
    },
    FeatureCatalogEntry {
        id: "contact_form",
        name: "Contact Form",
        category: "Essentials",
        helper_text: "Let visitors reach you without leaving the site",
        complexity_weight: 1,
    },
    FeatureCatalogEntry {
        id: "cms",
        name: "Content Management",
        category: "Content",
        helper_text: "Edit pages and posts without touching code",
        complexity_weight: 2,
    },
    FeatureCatalogEntry {
        id: "blog",
        name: "Blog",
        category: "Content",
        helper_text: "Publish articles with categories and tags",
        complexity_weight: 2,
    },
    FeatureCatalogEntry {
        id: "gallery",
        name: "Image Gallery",
        category: "Content",
        helper_text: "Showcase photos or portfolio pieces",
        complexity_weight: 1,
    },
    FeatureCatalogEntry {
        id: "multilingual",
        name: "Multiple Languages",
        category: "Content",
        helper_text: "Serve content in more than one language",
        complexity_weight: 2,
    },
    FeatureCatalogEntry {
        id: "newsletter",
        name: "Newsletter Signup",
        category: "Engagement",
        helper_text: "Collect email subscribers from the site",
        complexity_weight: 1,
    },
    FeatureCatalogEntry {
        id: "booking",
        name: "Appointment Booking",
        category: "Engagement",
        helper_text: "Let visitors book time slots online",
        complexity_weight: 2,
    },
    FeatureCatalogEntry {
        id: "analytics",
        name: "Visitor Analytics",
        category: "Engagement",
        helper_text: "Understand where visitors come from and what they do",
        complexity_weight: 2,
    },
    FeatureCatalogEntry {
        id: "membership",
        name: "Members Area",
        category: "Commerce",
        helper_text: "Gated content behind a login",
        complexity_weight: 3,
    },
    FeatureCatalogEntry {
        id: "ecommerce_lite",
        name: "Simple Online Store",
        category: "Commerce",
        helper_text: "Sell a small catalog of products",
        complexity_weight: 3,
    },
];

/// Features offered on the app track (web, mobile, web_mobile)
pub const APP_FEATURES: &[FeatureCatalogEntry] = &[
    FeatureCatalogEntry {
        id: "responsive",
        name: "Responsive Web App",
        category: "Platform",
        helper_text: "Full experience across desktop and mobile browsers",
        complexity_weight: 1,
    },
    FeatureCatalogEntry {
        id: "auth",
        name: "User Accounts & Login",
        category: "Accounts",
        helper_text: "Sign-up, login, password reset, and profiles",
        complexity_weight: 2,
    },
    FeatureCatalogEntry {
        id: "membership",
        name: "Membership Tiers",
        category: "Accounts",
        helper_text: "Role- or plan-gated access to features",
        complexity_weight: 3,
    },
    FeatureCatalogEntry {
        id: "payments",
        name: "Payment Processing",
        category: "Commerce",
        helper_text: "Accept one-off card payments",
        complexity_weight: 3,
    },
    FeatureCatalogEntry {
        id: "subscriptions",
        name: "Subscription Billing",
        category: "Commerce",
        helper_text: "Recurring plans with upgrades and cancellation",
        complexity_weight: 3,
    },
    FeatureCatalogEntry {
        id: "chat",
        name: "Real-Time Chat",
        category: "Communication",
        helper_text: "Live messaging between users",
        complexity_weight: 3,
    },
    FeatureCatalogEntry {
        id: "notifications",
        name: "Notifications",
        category: "Communication",
        helper_text: "Email and push notifications on key events",
        complexity_weight: 2,
    },
    FeatureCatalogEntry {
        id: "ai",
        name: "AI-Powered Features",
        category: "Intelligence",
        helper_text: "Assistants, recommendations, or content generation",
        complexity_weight: 3,
    },
    FeatureCatalogEntry {
        id: "automation",
        name: "Workflow Automation",
        category: "Intelligence",
        helper_text: "Trigger actions automatically from user events",
        complexity_weight: 3,
    },
    FeatureCatalogEntry {
        id: "analytics",
        name: "Usage Analytics",
        category: "Insights",
        helper_text: "Dashboards of user behavior inside the product",
        complexity_weight: 2,
    },
    FeatureCatalogEntry {
        id: "reports",
        name: "Scheduled Reports",
        category: "Insights",
        helper_text: "Exportable summaries delivered on a schedule",
        complexity_weight: 2,
    },
    FeatureCatalogEntry {
        id: "search",
        name: "Search & Filtering",
        category: "Platform",
        helper_text: "Full-text search across the app's content",
        complexity_weight: 2,
    },
    FeatureCatalogEntry {
        id: "file_uploads",
        name: "File Uploads",
        category: "Platform",
        helper_text: "Let users attach documents and images",
        complexity_weight: 2,
    },
    FeatureCatalogEntry {
        id: "admin_dashboard",
        name: "Admin Dashboard",
        category: "Platform",
        helper_text: "Internal tools to manage users and content",
        complexity_weight: 3,
    },
    FeatureCatalogEntry {
        id: "api_integrations",
        name: "Third-Party Integrations",
        category: "Platform",
        helper_text: "Connect external APIs and services",
        complexity_weight: 2,
    },
];

/// A technology the wizard's preference step can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechOption {
    /// Stable id used by the wizard
    pub id: &'static str,
    /// Display name echoed into recommendations
    pub name: &'static str,
    /// Which part of the stack this belongs to
    pub category: StackCategory,
}

/// All technologies the preference step offers
pub const TECH_OPTIONS: &[TechOption] = &[
    // Frontend
    TechOption { id: "react", name: "React", category: StackCategory::Frontend },
    TechOption { id: "nextjs", name: "Next.js", category: StackCategory::Frontend },
    TechOption { id: "vue", name: "Vue.js", category: StackCategory::Frontend },
    TechOption { id: "angular", name: "Angular", category: StackCategory::Frontend },
    TechOption { id: "svelte", name: "Svelte", category: StackCategory::Frontend },
    // Backend
    TechOption { id: "nodejs", name: "Node.js", category: StackCategory::Backend },
    TechOption { id: "python", name: "Python", category: StackCategory::Backend },
    TechOption { id: "django", name: "Django", category: StackCategory::Backend },
    TechOption { id: "fastapi", name: "FastAPI", category: StackCategory::Backend },
    TechOption { id: "go", name: "Go", category: StackCategory::Backend },
    TechOption { id: "rails", name: "Ruby on Rails", category: StackCategory::Backend },
    // Database
    TechOption { id: "postgresql", name: "PostgreSQL", category: StackCategory::Database },
    TechOption { id: "mysql", name: "MySQL", category: StackCategory::Database },
    TechOption { id: "mongodb", name: "MongoDB", category: StackCategory::Database },
    TechOption { id: "redis", name: "Redis", category: StackCategory::Database },
    // Mobile
    TechOption { id: "react_native", name: "React Native", category: StackCategory::Mobile },
    TechOption { id: "flutter", name: "Flutter", category: StackCategory::Mobile },
    TechOption { id: "swift", name: "Swift", category: StackCategory::Mobile },
    TechOption { id: "kotlin", name: "Kotlin", category: StackCategory::Mobile },
    // Infrastructure
    TechOption { id: "aws", name: "AWS", category: StackCategory::Infrastructure },
    TechOption { id: "gcp", name: "Google Cloud", category: StackCategory::Infrastructure },
    TechOption { id: "azure", name: "Azure", category: StackCategory::Infrastructure },
    TechOption { id: "vercel", name: "Vercel", category: StackCategory::Infrastructure },
    TechOption { id: "railway", name: "Railway", category: StackCategory::Infrastructure },
    TechOption { id: "netlify", name: "Netlify", category: StackCategory::Infrastructure },
    // Platform (site builders and CMSes, simple-website track)
    TechOption { id: "webflow", name: "Webflow", category: StackCategory::Platform },
    TechOption { id: "wordpress", name: "WordPress", category: StackCategory::Platform },
    TechOption { id: "framer", name: "Framer", category: StackCategory::Platform },
    TechOption { id: "squarespace", name: "Squarespace", category: StackCategory::Platform },
];

/// Get the feature list offered for a project type
pub fn features_for(project_type: ProjectType) -> &'static [FeatureCatalogEntry] {
    if project_type.is_website() {
        WEBSITE_FEATURES
    } else {
        APP_FEATURES
    }
}

/// Look up a feature id across both catalogs
///
/// The website catalog is consulted first; ids present in both carry the
/// same weight, so the order is unobservable to callers.
pub fn find_feature(id: &str) -> Option<&'static FeatureCatalogEntry> {
    WEBSITE_FEATURES
        .iter()
        .chain(APP_FEATURES.iter())
        .find(|entry| entry.id == id)
}

/// Look up a technology preference id
pub fn find_tech(id: &str) -> Option<&'static TechOption> {
    TECH_OPTIONS.iter().find(|option| option.id == id)
}

/// List all feature ids across both catalogs, website catalog first
pub fn list_feature_ids() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = WEBSITE_FEATURES.iter().map(|entry| entry.id).collect();
    for entry in APP_FEATURES {
        if !ids.contains(&entry.id) {
            ids.push(entry.id);
        }
    }
    ids
}
