//! Department records and the filter configuration of each site section.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{facet_definition::FilterConfig, facet_schema::FilterSchema};

pub mod awards;
pub mod courses;
pub mod events;
pub mod programs;
pub mod projects;
pub mod schedule;

pub use awards::Award;
pub use courses::Course;
pub use events::Event;
pub use programs::Program;
pub use projects::Project;
pub use schedule::ScheduleEntry;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DepartmentSection {
    Awards,
    Events,
    Programs,
    Courses,
    Projects,
    Schedule,
}

impl DepartmentSection {
    pub const ALL: [DepartmentSection; 6] = [
        DepartmentSection::Awards,
        DepartmentSection::Events,
        DepartmentSection::Programs,
        DepartmentSection::Courses,
        DepartmentSection::Projects,
        DepartmentSection::Schedule,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            DepartmentSection::Awards => "awards",
            DepartmentSection::Events => "events",
            DepartmentSection::Programs => "programs",
            DepartmentSection::Courses => "courses",
            DepartmentSection::Projects => "projects",
            DepartmentSection::Schedule => "schedule",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DepartmentSection::Awards => "Awards & Honors",
            DepartmentSection::Events => "Events",
            DepartmentSection::Programs => "Degree Programs",
            DepartmentSection::Courses => "Courses",
            DepartmentSection::Projects => "Research Projects",
            DepartmentSection::Schedule => "Class Schedule",
        }
    }

    pub fn schema(&self) -> FilterSchema {
        match self {
            DepartmentSection::Awards => Award::filter_config().schema(),
            DepartmentSection::Events => Event::filter_config().schema(),
            DepartmentSection::Programs => Program::filter_config().schema(),
            DepartmentSection::Courses => Course::filter_config().schema(),
            DepartmentSection::Projects => Project::filter_config().schema(),
            DepartmentSection::Schedule => ScheduleEntry::filter_config().schema(),
        }
    }
}

impl Default for DepartmentSection {
    fn default() -> Self {
        DepartmentSection::Awards
    }
}

impl Display for DepartmentSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl Display for UnknownSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown department section: {}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for DepartmentSection {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DepartmentSection::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// What host views render for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RecordCard {
    pub title: String,
    pub subtitle: String,
    pub summary: String,
    pub tags: Vec<String>,
}

/// A record type listed in one section of the site.
pub trait DepartmentRecord: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const SECTION: DepartmentSection;

    fn filter_config() -> FilterConfig<Self>;

    fn card(&self) -> RecordCard;
}
