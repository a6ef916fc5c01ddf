use assert_float_eq::*;

use meal_planner_rs::models::{Course, Ingredient, MacroTotals, Menu};
use meal_planner_rs::nutrition::{calculate_plan_macros, dishes_by_day};
use meal_planner_rs::planner::{AcceptAll, PlanOptions, generate_plan};
use meal_planner_rs::state::Catalog;

fn menu_from_json(json: &str) -> Menu {
    serde_json::from_str(json).unwrap()
}

fn assert_totals(actual: MacroTotals, calories: f64, protein: f64, fat: f64, carbs: f64) {
    assert_float_absolute_eq!(actual.calories, calories, 1e-9);
    assert_float_absolute_eq!(actual.protein, protein, 1e-9);
    assert_float_absolute_eq!(actual.fat, fat, 1e-9);
    assert_float_absolute_eq!(actual.carbs, carbs, 1e-9);
}

#[test]
fn test_single_day_sums_every_category() {
    let menu = menu_from_json(
        r#"{
            "breakfast": {"eggs": {"ingridients": {
                "eggs": {"amount": 2, "unit": "pieces", "calories": 140, "protein": 12, "fat": 10, "carbs": 1},
                "butter": {"amount": 10, "unit": "g", "calories": 75, "protein": 0, "fat": 8, "carbs": 0}
            }}},
            "lunch": {"salad": {"ingridients": {
                "lettuce": {"amount": 100, "unit": "g", "calories": 15, "protein": 1, "fat": 0, "carbs": 3}
            }}}
        }"#,
    );

    let totals = calculate_plan_macros(&menu);
    assert_eq!(totals.per_day.len(), 1);
    assert_eq!(totals.per_day[0].day_index, 0);
    assert_totals(totals.per_day[0].totals(), 230.0, 13.0, 18.0, 4.0);
    assert_totals(totals.overall, 230.0, 13.0, 18.0, 4.0);
}

#[test]
fn test_uneven_categories_pair_by_position() {
    let menu = menu_from_json(
        r#"{
            "breakfast": {
                "eggs": {"ingridients": {"eggs": {"amount": 2, "unit": "pieces", "calories": 140, "protein": 12}}},
                "oats": {"ingridients": {"oats": {"amount": 50, "unit": "g", "calories": 190, "protein": 6}}}
            },
            "lunch": {
                "salad": {"ingridients": {"lettuce": {"amount": 100, "unit": "g", "calories": 15, "protein": 1}}}
            }
        }"#,
    );

    let totals = calculate_plan_macros(&menu);
    assert_eq!(totals.per_day.len(), 2);

    // day 0: eggs + salad, day 1: oats only
    assert_totals(totals.per_day[0].totals(), 155.0, 13.0, 0.0, 0.0);
    assert_totals(totals.per_day[1].totals(), 190.0, 6.0, 0.0, 0.0);
    assert_eq!(totals.per_day[1].day_index, 1);
    assert_totals(totals.overall, 345.0, 19.0, 0.0, 0.0);
}

#[test]
fn test_missing_macros_count_as_zero() {
    let menu = menu_from_json(
        r#"{"dinner": {"plain rice": {"ingridients": {
            "rice": {"amount": 80, "unit": "g"},
            "salt": {"amount": 1, "unit": "pinch", "carbs": null}
        }}}}"#,
    );

    let totals = calculate_plan_macros(&menu);
    assert_eq!(totals.per_day.len(), 1);
    assert_totals(totals.overall, 0.0, 0.0, 0.0, 0.0);
}

#[test]
fn test_stored_totals_are_not_a_day_column() {
    let menu = menu_from_json(
        r#"{
            "lunch": {"soup": {"ingridients": {"broth": {"amount": 300, "unit": "ml", "calories": 40}}}},
            "nutrition_totals": {"per_day": [], "overall": {"calories": 9999, "protein": 0, "fat": 0, "carbs": 0}}
        }"#,
    );

    assert_eq!(dishes_by_day(&menu).len(), 1);
    let totals = calculate_plan_macros(&menu);
    assert_totals(totals.overall, 40.0, 0.0, 0.0, 0.0);
}

#[test]
fn test_overall_equals_sum_of_days_for_generated_plan() {
    let mut catalog = Catalog::new();
    for (i, category) in ["breakfast", "lunch", "dinner"].iter().enumerate() {
        for j in 0..3 {
            let mut course = Course::new(&format!("{} {}", category, j), category, "");
            course.add_ingredient(Ingredient::new("base", 100.0, "g").with_macros(
                Some(100.0 * (i + 1) as f64 + j as f64),
                Some(5.0),
                Some(2.5),
                None,
            ));
            catalog.add_course(course);
        }
    }
    let options = PlanOptions {
        days: 3,
        servings: 2,
        no_reuse: true,
        seed: Some(99),
        ..PlanOptions::default()
    };
    let menu = generate_plan(&catalog, &options, &mut AcceptAll).unwrap();
    let totals = calculate_plan_macros(&menu);

    assert_eq!(totals.per_day.len(), 3);
    let mut summed = MacroTotals::default();
    for day in &totals.per_day {
        summed += day.totals();
    }
    assert_totals(totals.overall, summed.calories, summed.protein, summed.fat, summed.carbs);
    // 9 dishes, 2 servings of 5g protein each
    assert_float_absolute_eq!(totals.overall.protein, 90.0, 1e-9);
    assert_float_absolute_eq!(totals.overall.carbs, 0.0, 1e-9);
}

#[test]
fn test_totals_round_trip_through_menu_file_shape() {
    let menu = menu_from_json(
        r#"{"lunch": {"soup": {"ingridients": {"broth": {"amount": 300, "unit": "ml", "calories": 40}}}}}"#,
    );
    let mut with_totals = menu.clone();
    with_totals.set_nutrition_totals(calculate_plan_macros(&menu));

    let json = serde_json::to_value(&with_totals).unwrap();
    assert_eq!(json["nutrition_totals"]["per_day"][0]["day_index"], 0);
    assert_eq!(json["nutrition_totals"]["overall"]["calories"], 40.0);

    let reloaded: Menu = serde_json::from_value(json).unwrap();
    assert_eq!(reloaded, with_totals);
}
