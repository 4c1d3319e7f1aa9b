//! Research and student projects.

use serde::{Deserialize, Serialize};

use crate::{
    department::{DepartmentRecord, DepartmentSection, RecordCard},
    facet_definition::{FacetDefinition, FilterConfig},
    facet_schema::{FacetCardinality, FacetOrdering},
};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: Option<String>,
    pub year: Option<u64>,
    pub categories: Vec<String>,
    /// `active`, `completed`, ...
    pub status: Option<String>,
    pub members: Vec<String>,
}

impl DepartmentRecord for Project {
    const SECTION: DepartmentSection = DepartmentSection::Projects;

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::new()
            .facet(FacetDefinition::int("year", "Year", FacetCardinality::Multi, |p: &Project| p.year).ordered(FacetOrdering::Descending))
            .facet(
                FacetDefinition::text_list("categories", "Categories", FacetCardinality::Multi, |p: &Project| p.categories.clone())
                    .ordered(FacetOrdering::CountDescending),
            )
            .facet(FacetDefinition::text("status", "Status", FacetCardinality::Single, |p: &Project| p.status.clone()))
            .search_field("title", |p: &Project| Some(p.title.as_str()))
            .search_field("description", |p: &Project| p.description.as_deref())
    }

    fn card(&self) -> RecordCard {
        let mut subtitle = self.members.join(", ");
        if let Some(year) = self.year {
            if !subtitle.is_empty() {
                subtitle.push_str(" · ");
            }
            subtitle.push_str(&year.to_string());
        }
        RecordCard {
            title: self.title.clone(),
            subtitle,
            summary: self.description.clone().unwrap_or_default(),
            tags: self.categories.clone(),
        }
    }
}
