use strsim::jaro_winkler;
use tracing::warn;

use crate::constants::SUGGESTION_THRESHOLD;
use crate::models::Course;
use crate::state::Catalog;

/// Apply include then exclude filters to one category's candidates.
///
/// Names are compared case-insensitively and exactly. An empty `include`
/// means no restriction.
pub fn apply_filters<'a>(
    courses: &[&'a Course],
    include: &[String],
    exclude: &[String],
) -> Vec<&'a Course> {
    let include: Vec<String> = include.iter().map(|n| n.to_lowercase()).collect();
    let exclude: Vec<String> = exclude.iter().map(|n| n.to_lowercase()).collect();

    courses
        .iter()
        .copied()
        .filter(|c| include.is_empty() || include.contains(&c.name))
        .filter(|c| !exclude.contains(&c.name))
        .collect()
}

/// Closest catalog course name to `name`, if similar enough.
pub fn suggest_course<'a>(catalog: &'a Catalog, name: &str) -> Option<&'a str> {
    let needle = name.to_lowercase();
    catalog
        .course_names()
        .into_iter()
        .map(|candidate| (candidate, jaro_winkler(candidate, &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(candidate, _)| candidate)
}

/// Filter names that match no course in any category, with suggestions.
pub fn unknown_names<'a>(catalog: &'a Catalog, names: &[String]) -> Vec<(String, Option<&'a str>)> {
    let known = catalog.course_names();
    names
        .iter()
        .filter(|n| {
            let lowered = n.to_lowercase();
            !known.iter().any(|k| *k == lowered)
        })
        .map(|n| (n.clone(), suggest_course(catalog, n)))
        .collect()
}

/// Log a warning for every include/exclude name that matches nothing.
pub fn warn_unknown_names(catalog: &Catalog, include: &[String], exclude: &[String]) {
    for (filter, names) in [("include", include), ("exclude", exclude)] {
        for (name, suggestion) in unknown_names(catalog, names) {
            match suggestion {
                Some(s) => warn!(
                    filter,
                    name = %name,
                    suggestion = s,
                    "no course matches filter name"
                ),
                None => warn!(filter, name = %name, "no course matches filter name"),
            }
        }
    }
}
