pub mod filters;
pub mod generator;
pub mod options;
pub mod selection;

pub use filters::{apply_filters, suggest_course, unknown_names};
pub use generator::{Placement, build_menu, generate_plan, plan_placements, seeded_rng};
pub use options::PlanOptions;
pub use selection::{AcceptAll, Decision, SelectionPrompt};
