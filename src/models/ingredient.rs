use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// An ingredient with an amount and optional per-amount macros.
///
/// Macro fields are `None` when unknown, which is different from zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub carbs: Option<f64>,
}

/// Storage form of an ingredient. The name is the key of the enclosing object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub amount: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
}

impl Ingredient {
    /// Create an ingredient without macro data. The name is lower-cased.
    pub fn new(name: &str, amount: f64, unit: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            amount,
            unit: unit.to_string(),
            calories: None,
            protein: None,
            fat: None,
            carbs: None,
        }
    }

    /// Builder-style setter for all four macros at once.
    pub fn with_macros(
        mut self,
        calories: Option<f64>,
        protein: Option<f64>,
        fat: Option<f64>,
        carbs: Option<f64>,
    ) -> Self {
        self.calories = calories;
        self.protein = protein;
        self.fat = fat;
        self.carbs = carbs;
        self
    }

    pub fn from_record(name: &str, record: &IngredientRecord) -> Self {
        Self::new(name, record.amount, &record.unit).with_macros(
            record.calories,
            record.protein,
            record.fat,
            record.carbs,
        )
    }

    pub fn to_record(&self) -> IngredientRecord {
        IngredientRecord {
            amount: self.amount,
            unit: self.unit.clone(),
            calories: self.calories,
            protein: self.protein,
            fat: self.fat,
            carbs: self.carbs,
        }
    }

    /// New ingredient with amount and every known macro multiplied.
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            name: self.name.clone(),
            amount: self.amount * multiplier,
            unit: self.unit.clone(),
            calories: self.calories.map(|v| v * multiplier),
            protein: self.protein.map(|v| v * multiplier),
            fat: self.fat.map(|v| v * multiplier),
            carbs: self.carbs.map(|v| v * multiplier),
        }
    }

    /// Sum with another ingredient of the same unit.
    ///
    /// A macro stays unknown only when it is unknown on both sides.
    pub fn merged_with(&self, other: &Ingredient) -> Self {
        Self {
            name: self.name.clone(),
            amount: self.amount + other.amount,
            unit: self.unit.clone(),
            calories: add_known(self.calories, other.calories),
            protein: add_known(self.protein, other.protein),
            fat: add_known(self.fat, other.fat),
            carbs: add_known(self.carbs, other.carbs),
        }
    }
}

fn add_known(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (None, None) => None,
        _ => Some(a.unwrap_or(0.0) + b.unwrap_or(0.0)),
    }
}

/// Parse a finite number. `nan`, `inf` and overflowing literals are rejected
/// because they cannot be stored as JSON numbers.
fn parse_number(value: &str, label: &str, raw: &str) -> Result<f64, PlannerError> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(PlannerError::InvalidIngredient(format!(
            "invalid {} in ingredient: {}",
            label, raw
        ))),
    }
}

fn parse_macro(field: Option<&str>, label: &str, raw: &str) -> Result<Option<f64>, PlannerError> {
    match field.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_number(value, label, raw).map(Some),
    }
}

/// Parses `name,amount,unit[,calories,protein,fat,carbs]`.
impl FromStr for Ingredient {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() < 3 {
            return Err(PlannerError::InvalidIngredient(format!(
                "{}. Expected: name,amount,unit[,calories,protein,fat,carbs]",
                s
            )));
        }

        let name = parts[0].trim();
        if name.is_empty() {
            return Err(PlannerError::InvalidIngredient(format!(
                "missing name in ingredient: {}",
                s
            )));
        }

        let amount = parse_number(parts[1], "amount", s)?;
        let unit = parts[2].trim();

        let calories = parse_macro(parts.get(3).copied(), "calories", s)?;
        let protein = parse_macro(parts.get(4).copied(), "protein", s)?;
        let fat = parse_macro(parts.get(5).copied(), "fat", s)?;
        let carbs = parse_macro(parts.get(6).copied(), "carbs", s)?;

        Ok(Ingredient::new(name, amount, unit).with_macros(calories, protein, fat, carbs))
    }
}
