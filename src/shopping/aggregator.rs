use std::collections::HashMap;

use tracing::debug;

use crate::models::{Ingredient, Menu};

/// Running shopping-list totals, one row per (ingredient, unit).
///
/// Rows are looked up through a hash index and kept in first-seen order.
#[derive(Debug, Default)]
pub struct ShoppingAggregator {
    index: HashMap<(String, String), usize>,
    first_unit: HashMap<String, String>,
    rows: Vec<Ingredient>,
}

impl ShoppingAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one ingredient occurrence.
    ///
    /// Same name and unit merges into the existing row. Any other unit gets
    /// its own row; no conversion is attempted.
    pub fn add(&mut self, ingredient: Ingredient) {
        let first = self
            .first_unit
            .entry(ingredient.name.clone())
            .or_insert_with(|| ingredient.unit.clone());
        if *first != ingredient.unit {
            debug!(
                ingredient = %ingredient.name,
                unit = %ingredient.unit,
                existing = %first,
                "unit mismatch, keeping separate row"
            );
        }

        let key = (ingredient.name.clone(), ingredient.unit.clone());
        match self.index.get(&key).copied() {
            Some(i) => {
                self.rows[i] = self.rows[i].merged_with(&ingredient);
            }
            None => {
                self.index.insert(key, self.rows.len());
                self.rows.push(ingredient);
            }
        }
    }

    /// Add every ingredient of every course in the menu.
    pub fn add_menu(&mut self, menu: &Menu) {
        for (_, courses) in menu.categories() {
            for course in courses.values() {
                for (name, record) in course.ingredients.iter() {
                    self.add(Ingredient::from_record(name, record));
                }
            }
        }
    }

    pub fn into_rows(self) -> Vec<Ingredient> {
        self.rows
    }
}

/// Reduce a menu to its shopping list.
pub fn aggregate_ingredients(menu: &Menu) -> Vec<Ingredient> {
    let mut aggregator = ShoppingAggregator::new();
    aggregator.add_menu(menu);
    aggregator.into_rows()
}
