pub mod section_api;
