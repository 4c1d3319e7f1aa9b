//! In-memory record collections, one per site section.

pub mod loader;
pub mod store;

pub use loader::load_section;
pub use store::{DepartmentCatalog, SectionCatalog, get_catalog};
