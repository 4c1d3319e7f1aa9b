//! Backend services for the department site: record collections, facet
//! options and filtered results.

pub mod api;
pub mod catalog;
pub mod config;
pub mod server_extra;
