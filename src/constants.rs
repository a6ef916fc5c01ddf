//! Default file names, plan defaults and reserved document keys.

/// Catalog file used when `--courses` is not given.
pub const DEFAULT_COURSES_FILE: &str = "courses.json";

/// Menu file written by `plan` and read by `ingredients` / `macros`.
pub const DEFAULT_MENU_FILE: &str = "menu.json";

/// Shopping list written by `ingredients`.
pub const DEFAULT_SHOPPING_FILE: &str = "shopping_list.csv";

/// Key of the nutrition side-car in a menu document. Never a category.
pub const NUTRITION_TOTALS_KEY: &str = "nutrition_totals";

/// Catalog format version written on save.
pub const CATALOG_VERSION: u32 = 1;

pub const DEFAULT_DAYS: u32 = 7;
pub const DEFAULT_SERVINGS: u32 = 1;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// CSV header of the shopping list (historical spelling kept for compatibility).
pub const SHOPPING_LIST_HEADER: [&str; 3] = ["Ingridient", "Amount", "Unit"];
