use crate::constants::CATALOG_VERSION;
use crate::models::{Course, CourseRecord, OrderedMap};

/// In-memory recipe catalog: category -> course name -> course.
///
/// Iteration follows insertion order (file order when loaded), which keeps
/// seeded plan generation reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    courses: OrderedMap<OrderedMap<Course>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from the storage shape shared by legacy and versioned files.
    pub fn from_records(records: &OrderedMap<OrderedMap<CourseRecord>>) -> Self {
        let mut catalog = Self::new();
        for (category, dishes) in records.iter() {
            for (name, record) in dishes.iter() {
                catalog.add_course(Course::from_record(name, category, record));
            }
        }
        catalog
    }

    pub fn to_records(&self) -> OrderedMap<OrderedMap<CourseRecord>> {
        self.courses
            .iter()
            .map(|(category, dishes)| {
                let records: OrderedMap<CourseRecord> = dishes
                    .iter()
                    .map(|(name, course)| (name, course.to_record()))
                    .collect();
                (category, records)
            })
            .collect()
    }

    /// Canonical versioned document for this catalog.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            version: CATALOG_VERSION,
            courses: self.to_records(),
        }
    }

    /// Add a course, replacing any course of the same name in its category.
    pub fn add_course(&mut self, course: Course) {
        self.courses
            .get_or_insert_default(&course.category)
            .insert(course.name.clone(), course);
    }

    /// Get a course by category and name (case-insensitive).
    pub fn get_course(&self, category: &str, name: &str) -> Option<&Course> {
        self.courses
            .get(&category.to_lowercase())?
            .get(&name.to_lowercase())
    }

    /// All courses, or only those of one category (case-insensitive).
    pub fn list_courses(&self, category: Option<&str>) -> Vec<&Course> {
        match category {
            Some(category) => self
                .courses
                .get(&category.to_lowercase())
                .map(|dishes| dishes.values().collect())
                .unwrap_or_default(),
            None => self
                .courses
                .values()
                .flat_map(|dishes| dishes.values())
                .collect(),
        }
    }

    /// Courses grouped by category, in catalog order.
    pub fn courses_by_category(&self) -> Vec<(&str, Vec<&Course>)> {
        self.courses
            .iter()
            .map(|(category, dishes)| (category, dishes.values().collect()))
            .collect()
    }

    /// Every distinct course name across all categories.
    pub fn course_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .courses
            .values()
            .flat_map(|dishes| dishes.keys())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Count of courses in the catalog.
    pub fn len(&self) -> usize {
        self.courses.values().map(OrderedMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Canonical on-disk shape: `{"version": 1, "courses": {...}}`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CatalogDocument {
    pub version: u32,
    #[serde(default)]
    pub courses: OrderedMap<OrderedMap<CourseRecord>>,
}
