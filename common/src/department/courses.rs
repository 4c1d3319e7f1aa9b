//! Course catalog entries.

use serde::{Deserialize, Serialize};

use crate::{
    department::{DepartmentRecord, DepartmentSection, RecordCard},
    facet_definition::{FacetDefinition, FilterConfig},
    facet_schema::FacetCardinality,
};

pub const SEMESTERS: [&str; 3] = ["Fall", "Spring", "Summer"];


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub level: Option<String>,
    pub credits: Option<u64>,
    pub semesters: Vec<String>,
}

impl DepartmentRecord for Course {
    const SECTION: DepartmentSection = DepartmentSection::Courses;

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::new()
            .facet(FacetDefinition::text("level", "Level", FacetCardinality::Single, |c: &Course| c.level.clone()))
            .facet(FacetDefinition::int("credits", "Credits", FacetCardinality::Single, |c: &Course| c.credits))
            .facet(FacetDefinition::text_list("semesters", "Offered", FacetCardinality::Multi, |c: &Course| c.semesters.clone()).fixed_order(SEMESTERS))
            .search_field("code", |c: &Course| Some(c.code.as_str()))
            .search_field("title", |c: &Course| Some(c.title.as_str()))
            .search_field("description", |c: &Course| c.description.as_deref())
    }

    fn card(&self) -> RecordCard {
        RecordCard {
            title: format!("{} {}", self.code, self.title),
            subtitle: match self.credits {
                Some(credits) => format!("{} credits", credits),
                None => String::new(),
            },
            summary: self.description.clone().unwrap_or_default(),
            tags: self.semesters.clone(),
        }
    }
}
