use std::collections::BTreeMap;
use std::fmt::Write;

use crate::models::{Course, NutritionTotals};

/// Format courses grouped by category, both sorted by name.
pub fn format_course_list(courses: &[&Course]) -> String {
    if courses.is_empty() {
        return "No courses found.\n".to_string();
    }

    let mut by_category: BTreeMap<&str, Vec<&Course>> = BTreeMap::new();
    for course in courses {
        by_category
            .entry(course.category.as_str())
            .or_default()
            .push(*course);
    }

    let mut out = String::new();
    for (category, mut dishes) in by_category {
        dishes.sort_by(|a, b| a.name.cmp(&b.name));
        let _ = writeln!(out, "\n{}:", category.to_uppercase());
        for course in dishes {
            let _ = writeln!(out, "  - {}", course.name);
            if !course.description.is_empty() {
                let _ = writeln!(out, "    {}", course.description);
            }
        }
    }
    out
}

/// Display the catalog listing.
pub fn display_course_list(courses: &[&Course]) {
    print!("{}", format_course_list(courses));
}

/// Format the per-day and overall macro table.
pub fn format_macro_summary(totals: &NutritionTotals) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Nutrition Summary ===");

    let _ = writeln!(out, "\nPer Day:");
    let _ = writeln!(
        out,
        "{:<5} {:<10} {:<10} {:<8} {:<8}",
        "Day", "Calories", "Protein", "Fat", "Carbs"
    );
    let _ = writeln!(out, "{}", "-".repeat(45));
    for day in &totals.per_day {
        let _ = writeln!(
            out,
            "{:<5} {:<10.1} {:<10.1} {:<8.1} {:<8.1}",
            day.day_index + 1,
            day.calories,
            day.protein,
            day.fat,
            day.carbs
        );
    }

    let overall = &totals.overall;
    let _ = writeln!(out, "\nOverall Totals:");
    let _ = writeln!(
        out,
        "{:<5} {:<10.1} {:<10.1} {:<8.1} {:<8.1}",
        "Total", overall.calories, overall.protein, overall.fat, overall.carbs
    );
    out
}

/// Display the macro table.
pub fn display_macro_summary(totals: &NutritionTotals) {
    println!("{}", format_macro_summary(totals));
}
