// Clippy allows for reasonable defaults
// These suppress warnings where the suggested change doesn't improve readability
#![allow(clippy::single_char_add_str)] // push_str("\n") reads better than push('\n')
#![allow(clippy::derivable_impls)] // Explicit Default impls can be clearer
#![allow(clippy::field_reassign_with_default)] // Builder pattern is clearer
#![allow(clippy::collapsible_if)] // Separate ifs can be more readable

// Module declarations
pub mod catalog;
pub mod engagement;
pub mod estimator;
pub mod models;

// Re-export models for use by the application layer
pub use models::*;

// Re-export the engine entry points
pub use estimator::{
    classify_complexity, duration_multiplier, generate_summary, recommend_stack,
    validate_request, RawEstimateRequest, ValidationError,
};
