pub mod course;
pub mod ingredient;
pub mod menu;
pub mod nutrition;
pub mod ordered;

pub use course::{Course, CourseRecord};
pub use ingredient::{Ingredient, IngredientRecord};
pub use menu::Menu;
pub use nutrition::{DayTotals, MacroTotals, NutritionTotals};
pub use ordered::OrderedMap;
