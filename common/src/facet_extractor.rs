//! Derives the selectable options of a facet from the records themselves.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    collection_snapshot::CollectionSnapshot,
    facet_definition::{FacetDefinition, FilterConfig},
    facet_schema::FacetOrdering,
    facet_value::FacetValue,
};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: FacetValue,
    pub display_string: String,
    /// Number of records carrying this value.
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOptionSet {
    pub facet_key: String,
    pub options: Vec<FacetOption>,
}

impl FacetOptionSet {
    pub fn values(&self) -> Vec<FacetValue> {
        self.options.iter().map(|o| o.value.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Distinct values of `facet` across `records`, in the facet's display order.
///
/// Multi-valued fields are flattened one level. Records without a value are
/// skipped. A record listing the same value twice is counted once.
pub fn extract<R>(records: &[R], facet: &FacetDefinition<R>) -> FacetOptionSet {
    let mut counts: BTreeMap<FacetValue, u64> = BTreeMap::new();
    for record in records {
        let mut values = facet.values(record);
        values.sort();
        values.dedup();
        for value in values {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    let mut options = counts
        .into_iter()
        .map(|(value, count)| FacetOption { display_string: value.display_string(), value, count })
        .collect::<Vec<_>>();
    order_options(&mut options, &facet.schema.ordering);

    FacetOptionSet { facet_key: facet.key().to_string(), options }
}

pub fn extract_values<R>(records: &[R], facet: &FacetDefinition<R>) -> Vec<FacetValue> {
    extract(records, facet).values()
}

fn order_options(options: &mut Vec<FacetOption>, ordering: &FacetOrdering) {
    match ordering {
        FacetOrdering::Ascending => options.sort_by(|a, b| a.value.cmp(&b.value)),
        FacetOrdering::Descending => options.sort_by(|a, b| b.value.cmp(&a.value)),
        FacetOrdering::CountDescending => {
            options.sort_by_key(|o| (u64::MAX - o.count, o.display_string.clone()));
        }
        FacetOrdering::Fixed(enumeration) => {
            let mut position = HashMap::new();
            for (index, value) in enumeration.iter().enumerate() {
                position.entry(value).or_insert(index);
            }
            options.retain(|o| position.contains_key(&o.value));
            options.sort_by_key(|o| position.get(&o.value).copied().unwrap_or(usize::MAX));
        }
    }
}

/// Memoizes option sets per (snapshot revision, facet key).
///
/// Only the latest revision is kept: the first lookup against a new revision
/// drops everything computed for the previous one.
#[derive(Debug, Default)]
pub struct FacetOptionCache {
    revision: Option<String>,
    entries: HashMap<String, Arc<FacetOptionSet>>,
}

impl FacetOptionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_or_extract<R>(&mut self, snapshot: &CollectionSnapshot<R>, facet: &FacetDefinition<R>) -> Arc<FacetOptionSet> {
        if self.revision.as_deref() != Some(snapshot.revision.as_str()) {
            if !self.entries.is_empty() {
                debug!("facet cache: revision {} replaces {:?}, dropping {} entries", snapshot.revision, self.revision, self.entries.len());
            }
            self.entries.clear();
            self.revision = Some(snapshot.revision.clone());
        }

        if let Some(cached) = self.entries.get(facet.key()) {
            debug!("facet cache hit: {}@{}", facet.key(), snapshot.revision);
            return cached.clone();
        }
        debug!("facet cache miss: {}@{}", facet.key(), snapshot.revision);
        let options = Arc::new(extract(snapshot.records(), facet));
        self.entries.insert(facet.key().to_string(), options.clone());
        options
    }
}

/// Option sets of every facet in `config`, in declaration order.
pub fn extract_all<R>(cache: &mut FacetOptionCache, snapshot: &CollectionSnapshot<R>, config: &FilterConfig<R>) -> Vec<Arc<FacetOptionSet>> {
    config.facets.iter().map(|facet| cache.get_or_extract(snapshot, facet)).collect()
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::facet_schema::FacetCardinality;

    #[derive(Debug, Clone)]
    struct Project {
        year: Option<u64>,
        categories: Vec<String>,
    }

    fn project(year: Option<u64>, categories: &[&str]) -> Project {
        Project { year, categories: categories.iter().map(|c| c.to_string()).collect() }
    }

    fn projects() -> Vec<Project> {
        vec![
            project(Some(2023), &["iot", "machine_learning"]),
            project(Some(2024), &["iot"]),
            project(None, &["security", "iot"]),
            project(Some(2022), &[]),
            project(Some(2024), &["machine_learning", "machine_learning"]),
        ]
    }

    fn year_facet() -> FacetDefinition<Project> {
        FacetDefinition::int("year", "Year", FacetCardinality::Multi, |p: &Project| p.year).ordered(FacetOrdering::Descending)
    }

    fn category_facet() -> FacetDefinition<Project> {
        FacetDefinition::text_list("categories", "Categories", FacetCardinality::Multi, |p: &Project| p.categories.clone())
    }

    #[test]
    fn test_years_descending_without_absent_values() {
        let years = extract_values(&projects(), &year_facet());
        assert_eq!(years, vec![FacetValue::Int(2024), FacetValue::Int(2023), FacetValue::Int(2022)]);
    }

    #[test]
    fn test_multi_valued_field_is_flattened_and_counted() {
        let options = extract(&projects(), &category_facet());
        let summary = options.options.iter().map(|o| (o.display_string.as_str(), o.count)).collect::<Vec<_>>();
        assert_eq!(summary, vec![("iot", 3), ("machine_learning", 2), ("security", 1)]);
    }

    #[test]
    fn test_count_descending_breaks_ties_by_name() {
        let facet = category_facet().ordered(FacetOrdering::CountDescending);
        let mut records = projects();
        records.push(project(Some(2021), &["security"]));
        assert_eq!(
            extract_values(&records, &facet),
            vec![FacetValue::from("iot"), FacetValue::from("machine_learning"), FacetValue::from("security")]
        );
    }

    #[test]
    fn test_fixed_order_drops_unknown_values() {
        #[derive(Debug)]
        struct Event {
            month: String,
        }
        let facet = FacetDefinition::text("month", "Month", FacetCardinality::Single, |e: &Event| Some(e.month.clone()))
            .fixed_order(["Jan", "Feb", "Mar", "Apr"]);
        let events = ["Mar", "Jan", "Smarch", "Mar", ""].iter().map(|m| Event { month: m.to_string() }).collect::<Vec<_>>();
        assert_eq!(extract_values(&events, &facet), vec![FacetValue::from("Jan"), FacetValue::from("Mar")]);
    }

    #[test]
    fn test_empty_collection_yields_no_options() {
        let options = extract(&[], &year_facet());
        assert!(options.is_empty());
        assert_eq!(options.facet_key, "year");
    }

    #[test]
    fn test_cache_reuses_options_until_revision_changes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let facet = FacetDefinition::int("year", "Year", FacetCardinality::Multi, move |p: &Project| {
            counter.fetch_add(1, Ordering::SeqCst);
            p.year
        });
        let mut cache = FacetOptionCache::new();
        let first = CollectionSnapshot::new("r1", projects());

        let a = cache.get_or_extract(&first, &facet);
        let b = cache.get_or_extract(&first, &facet);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(calls.load(Ordering::SeqCst), 5);

        let second = CollectionSnapshot::new("r2", vec![project(Some(1999), &[])]);
        let c = cache.get_or_extract(&second, &facet);
        assert_eq!(c.values(), vec![FacetValue::Int(1999)]);
        assert_eq!(calls.load(Ordering::SeqCst), 6);
        assert_eq!(cache.revision(), Some("r2"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_extract_all_follows_declaration_order() {
        let config = FilterConfig::new().facet(category_facet()).facet(year_facet());
        let mut cache = FacetOptionCache::new();
        let sets = extract_all(&mut cache, &CollectionSnapshot::new("r1", projects()), &config);
        let keys = sets.iter().map(|s| s.facet_key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["categories", "year"]);
        assert_eq!(cache.len(), 2);
    }

    fn project_strategy() -> impl Strategy<Value = Project> {
        (
            proptest::option::of(2018u64..2026),
            proptest::collection::vec(prop_oneof![Just("iot"), Just("security"), Just("robotics"), Just("")], 0..4),
        )
            .prop_map(|(year, categories)| project(year, &categories))
    }

    proptest! {
        /// Property: extracted options are distinct and each one occurs in some record.
        #[test]
        fn extracted_values_are_distinct_and_observed(records in proptest::collection::vec(project_strategy(), 0..20)) {
            let facet = category_facet();
            let values = extract_values(&records, &facet);
            let mut deduped = values.clone();
            deduped.sort();
            deduped.dedup();
            prop_assert_eq!(deduped.len(), values.len());
            for value in &values {
                prop_assert!(records.iter().any(|r| facet.values(r).contains(value)));
            }
        }

        /// Property: extraction does not depend on record order.
        #[test]
        fn extraction_is_order_independent(records in proptest::collection::vec(project_strategy(), 0..20)) {
            let mut reversed = records.clone();
            reversed.reverse();
            prop_assert_eq!(extract(&records, &year_facet()), extract(&reversed, &year_facet()));
            prop_assert_eq!(extract(&records, &category_facet()), extract(&reversed, &category_facet()));
        }
    }
}
