use common::{department::DepartmentSection, filter_state::FilterState, section_result::SectionResults};
use tracing::info;

use crate::catalog::get_catalog;

pub async fn search_section(section: DepartmentSection, state: FilterState) -> anyhow::Result<SectionResults> {
    let catalog = get_catalog().await?;
    let results = catalog.search(section, &state).await;
    info!(
        "search_section: {} matched {}/{} with {} active filters",
        section, results.matched_count, results.total_count, results.active_filter_count
    );
    Ok(results)
}

/// Re-reads one section's data file; the previous collection stays if that fails.
pub async fn reload_section(section: DepartmentSection) -> anyhow::Result<u64> {
    let catalog = get_catalog().await?;
    catalog.reload_section(section).await?;
    let count = catalog.record_count(section).await as u64;
    info!("reload_section: {} now holds {} records", section, count);
    Ok(count)
}
