//! The filter state value replaced on every interaction.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{facet_schema::{FacetCardinality, FilterSchema}, facet_value::FacetValue};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetSelection {
    Single(Option<FacetValue>),
    Multi(BTreeSet<FacetValue>),
}

impl FacetSelection {
    pub fn inert(cardinality: FacetCardinality) -> Self {
        match cardinality {
            FacetCardinality::Single => FacetSelection::Single(None),
            FacetCardinality::Multi => FacetSelection::Multi(BTreeSet::new()),
        }
    }

    pub fn cardinality(&self) -> FacetCardinality {
        match self {
            FacetSelection::Single(_) => FacetCardinality::Single,
            FacetSelection::Multi(_) => FacetCardinality::Multi,
        }
    }

    /// True when this selection constrains the result set.
    pub fn is_active(&self) -> bool {
        match self {
            FacetSelection::Single(selected) => selected.is_some(),
            FacetSelection::Multi(selected) => !selected.is_empty(),
        }
    }

    pub fn contains(&self, value: &FacetValue) -> bool {
        match self {
            FacetSelection::Single(selected) => selected.as_ref() == Some(value),
            FacetSelection::Multi(selected) => selected.contains(value),
        }
    }
}

/// Complete snapshot of the active selections of one view.
///
/// Values are never edited in place: the controller builds a new state for
/// every interaction and the host swaps it in wholesale.
///
/// Equality follows how the state reads: an entry missing on one side equals
/// an inert entry on the other.
#[derive(Debug, Clone, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterState {
    pub search: String,
    pub facets: BTreeMap<String, FacetSelection>,
    pub flags: BTreeMap<String, bool>,
}

impl FilterState {
    /// All-inert state with every declared facet and flag present.
    pub fn inert(schema: &FilterSchema) -> Self {
        Self {
            search: String::new(),
            facets: schema.facets.iter().map(|f| (f.key.clone(), FacetSelection::inert(f.cardinality))).collect(),
            flags: schema.flags.iter().map(|f| (f.key.clone(), false)).collect(),
        }
    }

    pub fn selection(&self, facet_key: &str) -> Option<&FacetSelection> {
        self.facets.get(facet_key)
    }

    pub fn flag(&self, flag_key: &str) -> bool {
        self.flags.get(flag_key).copied().unwrap_or(false)
    }

    pub fn is_selected(&self, facet_key: &str, value: &FacetValue) -> bool {
        self.selection(facet_key).map(|s| s.contains(value)).unwrap_or(false)
    }
}

impl PartialEq for FilterState {
    fn eq(&self, other: &Self) -> bool {
        self.search == other.search
            && same_entries(&self.facets, &other.facets, |s| !s.is_active())
            && same_entries(&self.flags, &other.flags, |f| !*f)
    }
}

fn same_entries<V: PartialEq>(a: &BTreeMap<String, V>, b: &BTreeMap<String, V>, is_inert: impl Fn(&V) -> bool) -> bool {
    a.iter().all(|(k, v)| b.get(k).map_or_else(|| is_inert(v), |w| v == w))
        && b.iter().all(|(k, w)| a.contains_key(k) || is_inert(w))
}
