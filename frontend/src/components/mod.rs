pub mod error_boundary;
pub mod navbar;
pub mod section_components;
pub mod suspend_boundary;
