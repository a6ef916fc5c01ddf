use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::{Course, CourseRecord, Menu, OrderedMap};
use crate::state::catalog::{Catalog, CatalogDocument};

/// Only looks for the `version` key that marks the versioned shape.
#[derive(Deserialize)]
struct VersionProbe {
    #[serde(default)]
    version: Option<IgnoredAny>,
}

/// Load the recipe catalog.
///
/// A missing or unparsable file yields an empty catalog. A legacy
/// (unversioned) file is upgraded and written back in the versioned shape.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "catalog file not found, starting empty");
            return Ok(Catalog::new());
        }
        Err(e) => return Err(e.into()),
    };

    let probe: VersionProbe = match serde_json::from_str(&content) {
        Ok(probe) => probe,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "catalog is not a JSON object, treating as empty"
            );
            return Ok(Catalog::new());
        }
    };

    let catalog = if probe.version.is_some() {
        match serde_json::from_str::<CatalogDocument>(&content) {
            Ok(doc) => Catalog::from_records(&doc.courses),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "unreadable versioned catalog, treating as empty"
                );
                return Ok(Catalog::new());
            }
        }
    } else {
        match serde_json::from_str::<OrderedMap<OrderedMap<CourseRecord>>>(&content) {
            Ok(records) => {
                let catalog = Catalog::from_records(&records);
                save_catalog(path, &catalog)?;
                info!(path = %path.display(), courses = catalog.len(), "upgraded legacy catalog");
                catalog
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "unreadable legacy catalog, treating as empty"
                );
                return Ok(Catalog::new());
            }
        }
    };

    debug!(path = %path.display(), courses = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Save the catalog in the versioned shape.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let json = serde_json::to_string_pretty(&catalog.to_document())?;
    fs::write(path, json)?;
    Ok(())
}

/// Load, insert one course and save.
pub fn add_course<P: AsRef<Path>>(path: P, course: Course) -> Result<()> {
    let path = path.as_ref();
    let mut catalog = load_catalog(path)?;
    catalog.add_course(course);
    save_catalog(path, &catalog)
}

/// Load a menu document. Unlike the catalog, a bad menu file is an error.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Menu> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save a menu document, including its nutrition side-car if set.
pub fn save_menu<P: AsRef<Path>>(path: P, menu: &Menu) -> Result<()> {
    let json = serde_json::to_string_pretty(menu)?;
    fs::write(path, json)?;
    Ok(())
}
