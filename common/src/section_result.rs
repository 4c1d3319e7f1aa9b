use serde::{Deserialize, Serialize};

use crate::{
    department::{DepartmentSection, RecordCard},
    facet_extractor::FacetOptionSet,
    facet_schema::FilterSchema,
    filter_state::FilterState,
    text_highlight::{HighlightTextSpan, highlight_matches},
};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionResults {
    pub section: DepartmentSection,
    pub state: FilterState,
    pub cards: Vec<SectionResultCard>,
    pub total_count: u64,
    pub matched_count: u64,
    pub active_filter_count: u64,
    /// Revision of the collection snapshot the results were computed from.
    pub revision: String,
}

/// A matched record with the search text highlighted in its title and summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionResultCard {
    pub card: RecordCard,
    pub title_spans: Vec<HighlightTextSpan>,
    pub summary_spans: Vec<HighlightTextSpan>,
}

impl SectionResultCard {
    pub fn new(card: RecordCard, search: &str) -> Self {
        Self {
            title_spans: highlight_matches(&card.title, search),
            summary_spans: highlight_matches(&card.summary, search),
            card,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionFacets {
    pub section: DepartmentSection,
    pub schema: FilterSchema,
    pub facet_options: Vec<FacetOptionSet>,
    pub revision: String,
}

impl SectionFacets {
    pub fn options_for(&self, facet_key: &str) -> Option<&FacetOptionSet> {
        self.facet_options.iter().find(|o| o.facet_key == facet_key)
    }
}

/// One entry of the section index shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub section: DepartmentSection,
    pub title: String,
    pub record_count: u64,
}
