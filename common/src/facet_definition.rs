//! Facet, flag and search field definitions bound to a record type.

use std::{collections::BTreeSet, sync::Arc};

use crate::{
    facet_schema::{FacetCardinality, FacetOrdering, FacetSchema, FilterSchema, FlagSchema},
    facet_value::{FacetValue, FacetValueKind},
};

type FacetAccessor<R> = Arc<dyn Fn(&R) -> Vec<FacetValue> + Send + Sync>;
type FlagPredicate<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;
type TextAccessor<R> = Arc<dyn for<'a> Fn(&'a R) -> Option<&'a str> + Send + Sync>;

/// One filterable dimension of `R`.
///
/// The accessor returns zero values for an absent field, one for a scalar
/// field and several for a multi-valued field. The typed constructors keep
/// every produced value in the kind declared by the schema.
pub struct FacetDefinition<R> {
    pub schema: FacetSchema,
    accessor: FacetAccessor<R>,
}

impl<R> Clone for FacetDefinition<R> {
    fn clone(&self) -> Self {
        Self { schema: self.schema.clone(), accessor: self.accessor.clone() }
    }
}

impl<R> std::fmt::Debug for FacetDefinition<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacetDefinition").field("schema", &self.schema).finish_non_exhaustive()
    }
}

impl<R: 'static> FacetDefinition<R> {
    /// Facet over an optional string field.
    pub fn text<F>(key: &str, label: &str, cardinality: FacetCardinality, accessor: F) -> Self
    where
        F: Fn(&R) -> Option<String> + Send + Sync + 'static,
    {
        Self::text_list(key, label, cardinality, move |r| accessor(r).into_iter().collect())
    }

    /// Facet over a field holding several strings per record.
    pub fn text_list<F>(key: &str, label: &str, cardinality: FacetCardinality, accessor: F) -> Self
    where
        F: Fn(&R) -> Vec<String> + Send + Sync + 'static,
    {
        Self {
            schema: FacetSchema::new(key, label, cardinality, FacetValueKind::String),
            accessor: Arc::new(move |r| accessor(r).into_iter().map(FacetValue::String).collect()),
        }
    }

    /// Facet over an optional integer field such as a year.
    pub fn int<F>(key: &str, label: &str, cardinality: FacetCardinality, accessor: F) -> Self
    where
        F: Fn(&R) -> Option<u64> + Send + Sync + 'static,
    {
        Self {
            schema: FacetSchema::new(key, label, cardinality, FacetValueKind::Int),
            accessor: Arc::new(move |r| accessor(r).into_iter().map(FacetValue::Int).collect()),
        }
    }
}

impl<R> FacetDefinition<R> {
    pub fn ordered(mut self, ordering: FacetOrdering) -> Self {
        self.schema = self.schema.with_ordering(ordering);
        self
    }

    pub fn fixed_order<V: Into<FacetValue>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.schema = self.schema.with_fixed_order(values);
        self
    }

    pub fn key(&self) -> &str {
        &self.schema.key
    }

    /// Values of this facet for one record. Empty strings count as absent.
    pub fn values(&self, record: &R) -> Vec<FacetValue> {
        let mut values = (self.accessor)(record);
        values.retain(|v| !is_blank(v));
        values
    }

    /// True when any value of `record` is in `accepted`. Stops at the first hit.
    pub fn has_any(&self, record: &R, accepted: &BTreeSet<FacetValue>) -> bool {
        (self.accessor)(record).iter().any(|v| !is_blank(v) && accepted.contains(v))
    }
}

fn is_blank(value: &FacetValue) -> bool {
    matches!(value, FacetValue::String(s) if s.is_empty())
}

/// A boolean filter and the predicate records must satisfy while it is on.
pub struct FlagDefinition<R> {
    pub schema: FlagSchema,
    predicate: FlagPredicate<R>,
}

impl<R> Clone for FlagDefinition<R> {
    fn clone(&self) -> Self {
        Self { schema: self.schema.clone(), predicate: self.predicate.clone() }
    }
}

impl<R> FlagDefinition<R> {
    pub fn new<F>(key: &str, label: &str, predicate: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Self { schema: FlagSchema::new(key, label), predicate: Arc::new(predicate) }
    }

    pub fn key(&self) -> &str {
        &self.schema.key
    }

    pub fn holds(&self, record: &R) -> bool {
        (self.predicate)(record)
    }
}

/// A text field consulted by free-text search.
pub struct SearchField<R> {
    pub name: String,
    accessor: TextAccessor<R>,
}

impl<R> Clone for SearchField<R> {
    fn clone(&self) -> Self {
        Self { name: self.name.clone(), accessor: self.accessor.clone() }
    }
}

impl<R> SearchField<R> {
    pub fn new<F>(name: &str, accessor: F) -> Self
    where
        F: for<'a> Fn(&'a R) -> Option<&'a str> + Send + Sync + 'static,
    {
        Self { name: name.to_string(), accessor: Arc::new(accessor) }
    }

    pub fn text<'a>(&self, record: &'a R) -> Option<&'a str> {
        (self.accessor)(record)
    }
}

/// Complete filter configuration of one view over records of type `R`.
pub struct FilterConfig<R> {
    pub facets: Vec<FacetDefinition<R>>,
    pub flags: Vec<FlagDefinition<R>>,
    pub search_fields: Vec<SearchField<R>>,
}

impl<R> Clone for FilterConfig<R> {
    fn clone(&self) -> Self {
        Self { facets: self.facets.clone(), flags: self.flags.clone(), search_fields: self.search_fields.clone() }
    }
}

impl<R> Default for FilterConfig<R> {
    fn default() -> Self {
        Self { facets: Vec::new(), flags: Vec::new(), search_fields: Vec::new() }
    }
}

impl<R> FilterConfig<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn facet(mut self, facet: FacetDefinition<R>) -> Self {
        self.facets.push(facet);
        self
    }

    pub fn flag(mut self, flag: FlagDefinition<R>) -> Self {
        self.flags.push(flag);
        self
    }

    pub fn search_field<F>(mut self, name: &str, accessor: F) -> Self
    where
        F: for<'a> Fn(&'a R) -> Option<&'a str> + Send + Sync + 'static,
    {
        self.search_fields.push(SearchField::new(name, accessor));
        self
    }

    pub fn facet_definition(&self, key: &str) -> Option<&FacetDefinition<R>> {
        self.facets.iter().find(|f| f.key() == key)
    }

    pub fn flag_definition(&self, key: &str) -> Option<&FlagDefinition<R>> {
        self.flags.iter().find(|f| f.key() == key)
    }

    pub fn schema(&self) -> FilterSchema {
        FilterSchema {
            facets: self.facets.iter().map(|f| f.schema.clone()).collect(),
            flags: self.flags.iter().map(|f| f.schema.clone()).collect(),
        }
    }
}
