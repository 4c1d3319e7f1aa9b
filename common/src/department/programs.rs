//! Degree programs offered by the department.

use serde::{Deserialize, Serialize};

use crate::{
    department::{DepartmentRecord, DepartmentSection, RecordCard},
    facet_definition::{FacetDefinition, FilterConfig},
    facet_schema::FacetCardinality,
};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Program {
    pub name: String,
    pub description: Option<String>,
    /// `undergraduate`, `graduate`, `certificate`, ...
    pub level: Option<String>,
    /// Delivery formats, e.g. `on-campus` and `online`.
    pub formats: Vec<String>,
    pub duration_years: Option<u64>,
}

impl DepartmentRecord for Program {
    const SECTION: DepartmentSection = DepartmentSection::Programs;

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::new()
            .facet(FacetDefinition::text("level", "Level", FacetCardinality::Single, |p: &Program| p.level.clone()))
            .facet(FacetDefinition::text_list("format", "Format", FacetCardinality::Multi, |p: &Program| p.formats.clone()))
            .search_field("name", |p: &Program| Some(p.name.as_str()))
            .search_field("description", |p: &Program| p.description.as_deref())
    }

    fn card(&self) -> RecordCard {
        let mut subtitle = self.level.clone().unwrap_or_default();
        if let Some(years) = self.duration_years {
            if !subtitle.is_empty() {
                subtitle.push_str(" · ");
            }
            subtitle.push_str(&format!("{} year{}", years, if years == 1 { "" } else { "s" }));
        }
        RecordCard {
            title: self.name.clone(),
            subtitle,
            summary: self.description.clone().unwrap_or_default(),
            tags: self.formats.clone(),
        }
    }
}
