//! Estimation Engine Module
//!
//! Maps a scoping wizard's accumulated selections to a structured
//! requirements summary through a fixed pipeline:
//!
//! 1. **Validation** - Parse the raw submission into closed enums
//! 2. **Complexity** - Sum feature weights into a complexity bucket
//! 3. **Roadmap** - Emit the five delivery phases, scaled and rounded
//! 4. **Tech Stack** - Recommend technologies per stack category
//! 5. **Summary** - Assemble the aggregate the application persists
//!
//! Every step is a pure function; the engine holds no state between calls
//! and is safe to invoke concurrently from multiple wizard sessions.

pub mod complexity;
pub mod roadmap;
pub mod summary;
pub mod tech_stack;
pub mod validation;

// Re-export main entry points
pub use complexity::{classify_complexity, duration_multiplier, total_weight};
pub use roadmap::{build_milestones, total_duration};
pub use summary::generate_summary;
pub use tech_stack::recommend_stack;
pub use validation::{validate_request, RawEstimateRequest, ValidationError};
