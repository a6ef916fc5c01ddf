use serde::{Deserialize, Serialize};

use crate::models::ingredient::{Ingredient, IngredientRecord};
use crate::models::ordered::OrderedMap;

/// A recipe belonging to one category (breakfast, lunch, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub name: String,
    pub category: String,
    pub description: String,
    /// Keyed by ingredient name; each key equals its ingredient's `name`.
    pub ingredients: OrderedMap<Ingredient>,
}

/// Storage form of a course, as found in both the catalog and menu files.
///
/// Written with the historical `ingridients` spelling. Reading also accepts
/// `ingredients`, and a null description from old files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCourseRecord")]
pub struct CourseRecord {
    pub description: String,
    #[serde(rename = "ingridients")]
    pub ingredients: OrderedMap<IngredientRecord>,
}

#[derive(Deserialize)]
struct RawCourseRecord {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    ingridients: Option<OrderedMap<IngredientRecord>>,
    #[serde(default)]
    ingredients: Option<OrderedMap<IngredientRecord>>,
}

impl From<RawCourseRecord> for CourseRecord {
    fn from(raw: RawCourseRecord) -> Self {
        Self {
            description: raw.description.unwrap_or_default(),
            ingredients: raw.ingridients.or(raw.ingredients).unwrap_or_default(),
        }
    }
}

impl Course {
    /// Create an empty course. Name and category are lower-cased.
    pub fn new(name: &str, category: &str, description: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            category: category.to_lowercase(),
            description: description.to_string(),
            ingredients: OrderedMap::new(),
        }
    }

    /// Add or replace an ingredient under its own name.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.insert(ingredient.name.clone(), ingredient);
    }

    pub fn from_record(name: &str, category: &str, record: &CourseRecord) -> Self {
        let mut course = Self::new(name, category, &record.description);
        for (ing_name, ing) in record.ingredients.iter() {
            course.add_ingredient(Ingredient::from_record(ing_name, ing));
        }
        course
    }

    pub fn to_record(&self) -> CourseRecord {
        CourseRecord {
            description: self.description.clone(),
            ingredients: self
                .ingredients
                .iter()
                .map(|(name, ing)| (name, ing.to_record()))
                .collect(),
        }
    }

    /// New course with every ingredient scaled for `servings` portions.
    pub fn scale_servings(&self, servings: u32) -> Self {
        let mut scaled = Self::new(&self.name, &self.category, &self.description);
        for ing in self.ingredients.values() {
            scaled.add_ingredient(ing.scale(f64::from(servings)));
        }
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn omelette() -> Course {
        let mut course = Course::new("Omelette", "Breakfast", "Whisk and fry");
        course.add_ingredient(Ingredient::new("Eggs", 2.0, "pieces").with_macros(
            Some(140.0),
            Some(12.0),
            Some(10.0),
            None,
        ));
        course.add_ingredient(Ingredient::new("butter", 10.0, "g"));
        course
    }

    #[test]
    fn test_names_are_case_folded() {
        let course = omelette();
        assert_eq!(course.name, "omelette");
        assert_eq!(course.category, "breakfast");
        assert!(course.ingredients.contains_key("eggs"));
    }

    #[test]
    fn test_scale_servings_returns_new_course() {
        let course = omelette();
        let scaled = course.scale_servings(3);

        let eggs = scaled.ingredients.get("eggs").unwrap();
        assert_eq!(eggs.amount, 6.0);
        assert_eq!(eggs.calories, Some(420.0));
        assert_eq!(eggs.carbs, None);
        assert_eq!(course.ingredients.get("eggs").unwrap().amount, 2.0);
    }

    #[test]
    fn test_record_uses_legacy_spelling() {
        let json = serde_json::to_value(omelette().to_record()).unwrap();
        assert!(json.get("ingridients").is_some());
        assert!(json.get("ingredients").is_none());
        assert_eq!(json["description"], "Whisk and fry");
    }

    #[test]
    fn test_record_accepts_both_spellings_and_null_description() {
        let modern: CourseRecord = serde_json::from_str(
            r#"{"description": null, "ingredients": {"rice": {"amount": 80, "unit": "g"}}}"#,
        )
        .unwrap();
        assert_eq!(modern.description, "");
        assert_eq!(modern.ingredients.get("rice").unwrap().amount, 80.0);

        let legacy: CourseRecord = serde_json::from_str(
            r#"{"ingridients": {"rice": {"amount": 80, "unit": "g"}}}"#,
        )
        .unwrap();
        assert_eq!(legacy.ingredients.len(), 1);
    }

    #[test]
    fn test_round_trip_through_record() {
        let course = omelette();
        let json = serde_json::to_string(&course.to_record()).unwrap();
        let record: CourseRecord = serde_json::from_str(&json).unwrap();
        let back = Course::from_record(&course.name, &course.category, &record);
        assert_eq!(back, course);
    }
}
