pub mod summary;

pub use summary::{calculate_plan_macros, dish_macros, dishes_by_day};
