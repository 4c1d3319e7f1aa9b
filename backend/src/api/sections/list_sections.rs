use common::section_result::SectionSummary;

use crate::catalog::get_catalog;

pub async fn list_sections() -> anyhow::Result<Vec<SectionSummary>> {
    let catalog = get_catalog().await?;
    Ok(catalog.summaries().await)
}
