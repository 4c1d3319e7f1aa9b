//! Facet options of a section, computed from the full collection.

use common::{department::DepartmentSection, section_result::SectionFacets};
use tracing::info;

use crate::catalog::get_catalog;

pub async fn section_facets(section: DepartmentSection) -> anyhow::Result<SectionFacets> {
    let catalog = get_catalog().await?;
    let t0 = std::time::Instant::now();
    let facets = catalog.facets(section).await;
    info!(
        "section_facets: {} facets for {} in {}us",
        facets.facet_options.len(),
        section,
        t0.elapsed().as_micros()
    );
    Ok(facets)
}
