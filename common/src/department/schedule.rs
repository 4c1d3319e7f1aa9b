//! Class schedule: one entry per scheduled section of a course.

use serde::{Deserialize, Serialize};

use crate::{
    department::{DepartmentRecord, DepartmentSection, RecordCard},
    facet_definition::{FacetDefinition, FilterConfig, FlagDefinition},
    facet_schema::FacetCardinality,
};

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScheduleEntry {
    pub course_code: String,
    pub course_title: String,
    pub instructor: Option<String>,
    /// Short weekday name, `Mon` to `Sun`.
    pub day: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub room: Option<String>,
    pub semester: Option<String>,
    pub enrolled: u64,
    pub capacity: u64,
}

impl ScheduleEntry {
    pub fn has_open_seats(&self) -> bool {
        self.enrolled < self.capacity
    }
}

impl DepartmentRecord for ScheduleEntry {
    const SECTION: DepartmentSection = DepartmentSection::Schedule;

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::new()
            .facet(FacetDefinition::text("day", "Day", FacetCardinality::Single, |s: &ScheduleEntry| s.day.clone()).fixed_order(WEEKDAYS))
            .facet(FacetDefinition::text("semester", "Semester", FacetCardinality::Single, |s: &ScheduleEntry| s.semester.clone()))
            .facet(FacetDefinition::text("instructor", "Instructor", FacetCardinality::Multi, |s: &ScheduleEntry| s.instructor.clone()))
            .flag(FlagDefinition::new("open_seats", "Open seats only", |s: &ScheduleEntry| s.has_open_seats()))
            .search_field("course_code", |s: &ScheduleEntry| Some(s.course_code.as_str()))
            .search_field("course_title", |s: &ScheduleEntry| Some(s.course_title.as_str()))
            .search_field("instructor", |s: &ScheduleEntry| s.instructor.as_deref())
    }

    fn card(&self) -> RecordCard {
        let when = match &self.day {
            Some(day) => format!("{} {}-{}", day, self.start_time, self.end_time),
            None => format!("{}-{}", self.start_time, self.end_time),
        };
        RecordCard {
            title: format!("{} {}", self.course_code, self.course_title),
            subtitle: [Some(when), self.room.clone(), self.instructor.clone()].into_iter().flatten().collect::<Vec<_>>().join(" · "),
            summary: format!("{}/{} enrolled", self.enrolled, self.capacity),
            tags: self.semester.iter().cloned().collect(),
        }
    }
}
