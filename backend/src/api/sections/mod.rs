//! Section API functions and module exports.

mod list_sections;
pub use list_sections::list_sections;

mod section_facets;
pub use section_facets::section_facets;

mod search_section;
pub use search_section::{reload_section, search_section};
