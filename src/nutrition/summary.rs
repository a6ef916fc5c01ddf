use crate::models::{CourseRecord, DayTotals, MacroTotals, Menu, NutritionTotals};

/// Macros of one dish. Unknown values count as zero here.
pub fn dish_macros(dish: &CourseRecord) -> MacroTotals {
    let mut totals = MacroTotals::default();
    for ing in dish.ingredients.values() {
        totals += MacroTotals {
            calories: ing.calories.unwrap_or(0.0),
            protein: ing.protein.unwrap_or(0.0),
            fat: ing.fat.unwrap_or(0.0),
            carbs: ing.carbs.unwrap_or(0.0),
        };
    }
    totals
}

/// Group dishes into days by position.
///
/// Day `i` holds the `i`-th dish of every category that has one. The menu
/// has no explicit day field, so this follows stored order only.
pub fn dishes_by_day(menu: &Menu) -> Vec<Vec<&CourseRecord>> {
    let columns: Vec<Vec<&CourseRecord>> = menu
        .categories()
        .map(|(_, dishes)| dishes.values().collect())
        .collect();
    let day_count = columns.iter().map(Vec::len).max().unwrap_or(0);

    (0..day_count)
        .map(|day| {
            columns
                .iter()
                .filter_map(|dishes| dishes.get(day).copied())
                .collect()
        })
        .collect()
}

/// Per-day and overall macro totals for a menu.
pub fn calculate_plan_macros(menu: &Menu) -> NutritionTotals {
    let mut overall = MacroTotals::default();
    let per_day: Vec<DayTotals> = dishes_by_day(menu)
        .into_iter()
        .enumerate()
        .map(|(day_index, dishes)| {
            let mut day = MacroTotals::default();
            for dish in dishes {
                day += dish_macros(dish);
            }
            overall += day;
            DayTotals::new(day_index, day)
        })
        .collect();

    NutritionTotals { per_day, overall }
}
