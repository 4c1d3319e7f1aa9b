//! Faceted filtering engine and department record models shared between
//! frontend and backend.

extern crate serde;


pub mod facet_value;
pub mod facet_schema;
pub mod facet_definition;
pub mod collection_snapshot;
pub mod facet_extractor;
pub mod filter_state;
pub mod filter_controller;
pub mod filter_evaluator;
pub mod active_filter_counter;
pub mod department;
pub mod section_result;
pub mod text_highlight;
