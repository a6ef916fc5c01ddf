use crate::constants::{DEFAULT_DAYS, DEFAULT_SERVINGS};
use crate::error::{PlannerError, Result};

/// Parameters for one plan generation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOptions {
    /// Number of days to plan (>= 1).
    pub days: u32,
    /// Serving multiplier applied to every placed course (>= 1).
    pub servings: u32,
    /// Never place the same course twice within a category.
    pub no_reuse: bool,
    /// Cap on placements per (category, course) across the plan.
    pub max_repeats: Option<u32>,
    /// Fixing the seed makes generation reproducible.
    pub seed: Option<u64>,
    pub interactive: bool,
    /// If non-empty, only these course names are eligible.
    pub include: Vec<String>,
    /// Course names never eligible.
    pub exclude: Vec<String>,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            servings: DEFAULT_SERVINGS,
            no_reuse: false,
            max_repeats: None,
            seed: None,
            interactive: false,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl PlanOptions {
    pub fn validate(&self) -> Result<()> {
        if self.days == 0 {
            return Err(PlannerError::InvalidInput("days must be at least 1".to_string()));
        }
        if self.servings == 0 {
            return Err(PlannerError::InvalidInput(
                "servings must be at least 1".to_string(),
            ));
        }
        if self.max_repeats == Some(0) {
            return Err(PlannerError::InvalidInput(
                "max repeats must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
