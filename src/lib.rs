pub mod cli;
pub mod constants;
pub mod error;
pub mod interface;
pub mod models;
pub mod nutrition;
pub mod planner;
pub mod shopping;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{Course, Ingredient, Menu};
