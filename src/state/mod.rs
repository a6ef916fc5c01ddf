mod catalog;
mod persistence;

pub use catalog::{Catalog, CatalogDocument};
pub use persistence::{add_course, load_catalog, load_menu, save_catalog, save_menu};
