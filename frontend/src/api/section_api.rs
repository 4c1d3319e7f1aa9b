//! Client API calls for section endpoints.

use common::{
    department::DepartmentSection,
    filter_state::FilterState,
    section_result::{SectionFacets, SectionResults, SectionSummary},
};
use dioxus::prelude::*;


#[server]
pub async fn list_sections() -> Result<Vec<SectionSummary>, ServerFnError> {
    let x = backend::api::sections::list_sections().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn section_facets(section: DepartmentSection) -> Result<SectionFacets, ServerFnError> {
    let x = backend::api::sections::section_facets(section).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn search_section(section: DepartmentSection, state: FilterState) -> Result<SectionResults, ServerFnError> {
    let x = backend::api::sections::search_section(section, state).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn reload_section(section: DepartmentSection) -> Result<u64, ServerFnError> {
    let x = backend::api::sections::reload_section(section).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
