//! Record membership under a filter state.
//!
//! Constraints are AND-ed: search, then every active facet, then every flag
//! that is on. Within one facet the accepted values are OR-ed, so a record
//! passes when any of its values is accepted.

use std::collections::BTreeSet;

use crate::{
    facet_definition::{FacetDefinition, FilterConfig, FlagDefinition, SearchField},
    facet_value::FacetValue,
    filter_state::{FacetSelection, FilterState},
};


struct ActiveFacet<'c, R> {
    definition: &'c FacetDefinition<R>,
    accepted: BTreeSet<FacetValue>,
}

/// A filter state resolved against a config, ready to test many records.
///
/// Resolution lowercases the search text once, drops undeclared or inert
/// entries, and normalizes selected values to each facet's kind.
pub struct PreparedFilter<'c, R> {
    needle: Option<String>,
    search_fields: &'c [SearchField<R>],
    facets: Vec<ActiveFacet<'c, R>>,
    flags: Vec<&'c FlagDefinition<R>>,
}

impl<'c, R> PreparedFilter<'c, R> {
    pub fn new(state: &FilterState, config: &'c FilterConfig<R>) -> Self {
        let needle = if state.search.is_empty() { None } else { Some(state.search.to_lowercase()) };

        let facets = config
            .facets
            .iter()
            .filter_map(|definition| {
                let selection = state.selection(definition.key())?;
                if selection.cardinality() != definition.schema.cardinality || !selection.is_active() {
                    return None;
                }
                let selected: Vec<&FacetValue> = match selection {
                    FacetSelection::Single(selected) => selected.iter().collect(),
                    FacetSelection::Multi(selected) => selected.iter().collect(),
                };
                let kind = definition.schema.kind;
                let accepted = selected.into_iter().filter_map(|v| kind.normalize(v.clone())).collect();
                Some(ActiveFacet { definition, accepted })
            })
            .collect();

        let flags = config.flags.iter().filter(|flag| state.flag(flag.key())).collect();

        Self { needle, search_fields: &config.search_fields, facets, flags }
    }

    /// True when no constraint is active and every record passes.
    pub fn is_inert(&self) -> bool {
        self.needle.is_none() && self.facets.is_empty() && self.flags.is_empty()
    }

    pub fn matches(&self, record: &R) -> bool {
        if let Some(needle) = &self.needle {
            let found = self
                .search_fields
                .iter()
                .filter_map(|field| field.text(record))
                .any(|text| contains_folded(text, needle));
            if !found {
                return false;
            }
        }

        for facet in &self.facets {
            if !facet.definition.has_any(record, &facet.accepted) {
                return false;
            }
        }

        self.flags.iter().all(|flag| flag.holds(record))
    }
}

/// Case-insensitive substring test against an already lowercased needle.
/// ASCII text is compared in place; anything else is lowercased first.
fn contains_folded(text: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if text.is_ascii() && needle.is_ascii() {
        return text.as_bytes().windows(needle.len()).any(|window| window.eq_ignore_ascii_case(needle.as_bytes()));
    }
    text.to_lowercase().contains(needle)
}

pub fn matches<R>(record: &R, state: &FilterState, config: &FilterConfig<R>) -> bool {
    PreparedFilter::new(state, config).matches(record)
}

/// Records passing `state`, in input order.
pub fn filter_records<'r, R>(records: &'r [R], state: &FilterState, config: &FilterConfig<R>) -> Vec<&'r R> {
    let prepared = PreparedFilter::new(state, config);
    if prepared.is_inert() {
        return records.iter().collect();
    }
    records.iter().filter(|record| prepared.matches(record)).collect()
}
