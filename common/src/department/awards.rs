//! Awards and honors received by faculty and students.

use serde::{Deserialize, Serialize};

use crate::{
    department::{DepartmentRecord, DepartmentSection, RecordCard},
    facet_definition::{FacetDefinition, FilterConfig},
    facet_schema::{FacetCardinality, FacetOrdering},
};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Award {
    pub title: String,
    pub recipient: String,
    pub year: Option<u64>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl DepartmentRecord for Award {
    const SECTION: DepartmentSection = DepartmentSection::Awards;

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::new()
            .facet(FacetDefinition::int("year", "Year", FacetCardinality::Multi, |a: &Award| a.year).ordered(FacetOrdering::Descending))
            .facet(FacetDefinition::text("category", "Category", FacetCardinality::Multi, |a: &Award| a.category.clone()))
            .search_field("title", |a: &Award| Some(a.title.as_str()))
            .search_field("recipient", |a: &Award| Some(a.recipient.as_str()))
            .search_field("description", |a: &Award| a.description.as_deref())
    }

    fn card(&self) -> RecordCard {
        RecordCard {
            title: self.title.clone(),
            subtitle: match self.year {
                Some(year) => format!("{} ({})", self.recipient, year),
                None => self.recipient.clone(),
            },
            summary: self.description.clone().unwrap_or_default(),
            tags: self.category.iter().cloned().collect(),
        }
    }
}
