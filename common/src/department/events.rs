//! Talks, workshops and social events.

use serde::{Deserialize, Serialize};

use crate::{
    department::{DepartmentRecord, DepartmentSection, RecordCard},
    facet_definition::{FacetDefinition, FilterConfig, FlagDefinition},
    facet_schema::FacetCardinality,
};

pub const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Event {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub location: Option<String>,
    /// Ticket price in cents. `None` when not announced.
    pub price: Option<u64>,
}

impl Event {
    /// Short month name of `date`, if the date is well formed.
    pub fn month(&self) -> Option<String> {
        let month = self.date.get(5..7)?.parse::<usize>().ok()?;
        MONTHS.get(month.checked_sub(1)?).map(|m| m.to_string())
    }

    pub fn is_free(&self) -> bool {
        self.price == Some(0)
    }
}

impl DepartmentRecord for Event {
    const SECTION: DepartmentSection = DepartmentSection::Events;

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::new()
            .facet(FacetDefinition::text("type", "Type", FacetCardinality::Single, |e: &Event| e.event_type.clone()))
            .facet(FacetDefinition::text("month", "Month", FacetCardinality::Single, |e: &Event| e.month()).fixed_order(MONTHS))
            .flag(FlagDefinition::new("free_only", "Free events only", |e: &Event| e.is_free()))
            .search_field("title", |e: &Event| Some(e.title.as_str()))
            .search_field("description", |e: &Event| e.description.as_deref())
            .search_field("location", |e: &Event| e.location.as_deref())
    }

    fn card(&self) -> RecordCard {
        let price = match self.price {
            Some(0) => "Free".to_string(),
            Some(cents) => format!("${}.{:02}", cents / 100, cents % 100),
            None => "Price TBA".to_string(),
        };
        RecordCard {
            title: self.title.clone(),
            subtitle: [Some(self.date.clone()), self.location.clone(), Some(price)].into_iter().flatten().collect::<Vec<_>>().join(" · "),
            summary: self.description.clone().unwrap_or_default(),
            tags: self.event_type.iter().cloned().collect(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn on(date: &str) -> Event {
        Event { title: "Colloquium".into(), date: date.into(), ..Default::default() }
    }

    #[test]
    fn test_month_from_date() {
        assert_eq!(on("2024-03-14").month(), Some("Mar".to_string()));
        assert_eq!(on("2024-12-01").month(), Some("Dec".to_string()));
        assert_eq!(on("2024-13-01").month(), None);
        assert_eq!(on("2024-00-01").month(), None);
        assert_eq!(on("soon").month(), None);
    }

    #[test]
    fn test_only_zero_price_is_free() {
        assert!(Event { price: Some(0), ..on("2024-01-01") }.is_free());
        assert!(!Event { price: Some(1), ..on("2024-01-01") }.is_free());
        assert!(!on("2024-01-01").is_free());
    }

    #[test]
    fn test_card_price_label() {
        let event = Event { price: Some(1250), location: Some("Hall B".into()), ..on("2024-05-02") };
        assert_eq!(event.card().subtitle, "2024-05-02 · Hall B · $12.50");
    }
}
