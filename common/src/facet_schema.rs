//! Record-independent facet descriptions.
//!
//! A schema is everything the controller and the counter need to know about a
//! facet set. It carries no accessors, so host views can hold it (and ship it
//! over the wire) without knowing the record type.

use serde::{Deserialize, Serialize};

use crate::facet_value::{FacetValue, FacetValueKind};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetCardinality {
    /// At most one selected value. Re-selecting the selected value clears it.
    Single,
    /// Any number of selected values, OR-ed together.
    Multi,
}

/// Display order of the options extracted for a facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetOrdering {
    /// Natural order: lexical for strings, numeric for integers.
    Ascending,
    Descending,
    /// Most frequent first, ties broken by display string.
    CountDescending,
    /// Explicit enumeration. Values outside it are never offered.
    Fixed(Vec<FacetValue>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSchema {
    pub key: String,
    pub label: String,
    pub cardinality: FacetCardinality,
    pub kind: FacetValueKind,
    pub ordering: FacetOrdering,
}

impl FacetSchema {
    pub fn new(key: impl Into<String>, label: impl Into<String>, cardinality: FacetCardinality, kind: FacetValueKind) -> Self {
        Self { key: key.into(), label: label.into(), cardinality, kind, ordering: FacetOrdering::Ascending }
    }

    pub fn with_ordering(mut self, ordering: FacetOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Uses a fixed enumeration as ordering. Entries that do not normalize to
    /// the facet kind are skipped.
    pub fn with_fixed_order<V: Into<FacetValue>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        let kind = self.kind;
        let values = values.into_iter().filter_map(|v| kind.normalize(v.into())).collect();
        self.ordering = FacetOrdering::Fixed(values);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSchema {
    pub key: String,
    pub label: String,
}

impl FlagSchema {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self { key: key.into(), label: label.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterSchema {
    pub facets: Vec<FacetSchema>,
    pub flags: Vec<FlagSchema>,
}

impl FilterSchema {
    pub fn facet(&self, key: &str) -> Option<&FacetSchema> {
        self.facets.iter().find(|f| f.key == key)
    }

    pub fn flag(&self, key: &str) -> Option<&FlagSchema> {
        self.flags.iter().find(|f| f.key == key)
    }
}
