use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::NUTRITION_TOTALS_KEY;
use crate::models::course::CourseRecord;
use crate::models::nutrition::NutritionTotals;
use crate::models::ordered::OrderedMap;

/// A planning document: category -> course name -> scaled course.
///
/// The optional nutrition side-car shares the top-level JSON object with
/// the categories on disk but is held apart here, so iterating categories
/// never yields it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    categories: OrderedMap<OrderedMap<CourseRecord>>,
    nutrition_totals: Option<NutritionTotals>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a course, overwriting any same-named course in that category.
    pub fn insert_course(&mut self, category: &str, name: &str, record: CourseRecord) {
        self.categories
            .get_or_insert_default(category)
            .insert(name, record);
    }

    /// Categories in document order, without the nutrition side-car.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &OrderedMap<CourseRecord>)> {
        self.categories.iter()
    }

    pub fn category(&self, name: &str) -> Option<&OrderedMap<CourseRecord>> {
        self.categories.get(name)
    }

    pub fn nutrition_totals(&self) -> Option<&NutritionTotals> {
        self.nutrition_totals.as_ref()
    }

    pub fn set_nutrition_totals(&mut self, totals: NutritionTotals) {
        self.nutrition_totals = Some(totals);
    }

    /// Number of course entries across all categories.
    pub fn course_count(&self) -> usize {
        self.categories.values().map(OrderedMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.course_count() == 0
    }
}

impl Serialize for Menu {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.categories.len() + usize::from(self.nutrition_totals.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (category, courses) in self.categories.iter() {
            map.serialize_entry(category, courses)?;
        }
        if let Some(totals) = &self.nutrition_totals {
            map.serialize_entry(NUTRITION_TOTALS_KEY, totals)?;
        }
        map.end()
    }
}

struct MenuVisitor;

impl<'de> Visitor<'de> for MenuVisitor {
    type Value = Menu;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a menu object of categories")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Menu, A::Error> {
        let mut menu = Menu::new();
        while let Some(key) = access.next_key::<String>()? {
            if key == NUTRITION_TOTALS_KEY {
                menu.nutrition_totals = Some(access.next_value()?);
            } else {
                let courses: OrderedMap<CourseRecord> = access.next_value()?;
                menu.categories.insert(key, courses);
            }
        }
        Ok(menu)
    }
}

impl<'de> Deserialize<'de> for Menu {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MenuVisitor)
    }
}
