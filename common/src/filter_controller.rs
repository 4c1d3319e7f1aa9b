//! State transitions driven by user interaction.
//!
//! Every operation takes the current state by reference and returns the next
//! one. Operations naming a facet or flag the schema does not declare, or a
//! value that cannot be expressed in the facet's kind, return the input state
//! unchanged.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    facet_schema::{FacetCardinality, FilterSchema},
    facet_value::FacetValue,
    filter_state::{FacetSelection, FilterState},
};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterAction {
    ToggleMulti { facet_key: String, value: FacetValue },
    SetSingle { facet_key: String, value: FacetValue },
    SetFlag { flag_key: String },
    SetSearch { text: String },
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterController {
    schema: FilterSchema,
}

impl FilterController {
    pub fn new(schema: FilterSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &FilterSchema {
        &self.schema
    }

    /// The all-inert state. Depends on the schema only.
    pub fn clear(&self) -> FilterState {
        FilterState::inert(&self.schema)
    }

    /// Adds `value` to a multi-select facet, or removes it when present.
    pub fn toggle_multi(&self, state: &FilterState, facet_key: &str, value: FacetValue) -> FilterState {
        let Some(value) = self.resolve(facet_key, FacetCardinality::Multi, value) else {
            return state.clone();
        };
        let mut next = state.clone();
        let selection = next.facets.entry(facet_key.to_string()).or_insert_with(|| FacetSelection::inert(FacetCardinality::Multi));
        if selection.cardinality() != FacetCardinality::Multi {
            *selection = FacetSelection::inert(FacetCardinality::Multi);
        }
        if let FacetSelection::Multi(selected) = selection {
            if !selected.remove(&value) {
                selected.insert(value);
            }
        }
        next
    }

    /// Selects `value` on a single-select facet. Selecting the current value
    /// clears the facet.
    pub fn set_single(&self, state: &FilterState, facet_key: &str, value: FacetValue) -> FilterState {
        let Some(value) = self.resolve(facet_key, FacetCardinality::Single, value) else {
            return state.clone();
        };
        let mut next = state.clone();
        let selection = next.facets.entry(facet_key.to_string()).or_insert_with(|| FacetSelection::inert(FacetCardinality::Single));
        if selection.cardinality() != FacetCardinality::Single {
            *selection = FacetSelection::inert(FacetCardinality::Single);
        }
        if let FacetSelection::Single(current) = selection {
            if current.as_ref() == Some(&value) {
                *current = None;
            } else {
                *current = Some(value);
            }
        }
        next
    }

    pub fn set_flag(&self, state: &FilterState, flag_key: &str) -> FilterState {
        if self.schema.flag(flag_key).is_none() {
            debug!("filter controller: ignoring undeclared flag {flag_key}");
            return state.clone();
        }
        let mut next = state.clone();
        next.flags.insert(flag_key.to_string(), !state.flag(flag_key));
        next
    }

    /// Replaces the search text verbatim.
    pub fn set_search(&self, state: &FilterState, text: &str) -> FilterState {
        let mut next = state.clone();
        next.search = text.to_string();
        next
    }

    pub fn apply(&self, state: &FilterState, action: FilterAction) -> FilterState {
        match action {
            FilterAction::ToggleMulti { facet_key, value } => self.toggle_multi(state, &facet_key, value),
            FilterAction::SetSingle { facet_key, value } => self.set_single(state, &facet_key, value),
            FilterAction::SetFlag { flag_key } => self.set_flag(state, &flag_key),
            FilterAction::SetSearch { text } => self.set_search(state, &text),
            FilterAction::Clear => self.clear(),
        }
    }

    fn resolve(&self, facet_key: &str, cardinality: FacetCardinality, value: FacetValue) -> Option<FacetValue> {
        let Some(facet) = self.schema.facet(facet_key) else {
            debug!("filter controller: ignoring undeclared facet {facet_key}");
            return None;
        };
        if facet.cardinality != cardinality {
            debug!("filter controller: facet {facet_key} is {:?}, not {:?}", facet.cardinality, cardinality);
            return None;
        }
        let normalized = facet.kind.normalize(value.clone());
        if normalized.is_none() {
            debug!("filter controller: value {value} does not fit {:?} facet {facet_key}", facet.kind);
        }
        normalized
    }
}


#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::{
        facet_schema::{FacetSchema, FlagSchema},
        facet_value::FacetValueKind,
    };

    fn controller() -> FilterController {
        FilterController::new(FilterSchema {
            facets: vec![
                FacetSchema::new("year", "Year", FacetCardinality::Multi, FacetValueKind::Int),
                FacetSchema::new("categories", "Categories", FacetCardinality::Multi, FacetValueKind::String),
                FacetSchema::new("type", "Type", FacetCardinality::Single, FacetValueKind::String),
            ],
            flags: vec![FlagSchema::new("free_only", "Free only")],
        })
    }

    fn multi(state: &FilterState, key: &str) -> BTreeSet<FacetValue> {
        match state.selection(key) {
            Some(FacetSelection::Multi(selected)) => selected.clone(),
            other => panic!("expected multi selection, got {other:?}"),
        }
    }

    #[test]
    fn test_toggle_multi_adds_then_removes() {
        let c = controller();
        let s1 = c.toggle_multi(&c.clear(), "categories", "iot".into());
        let s2 = c.toggle_multi(&s1, "categories", "security".into());
        assert_eq!(multi(&s2, "categories"), BTreeSet::from(["iot".into(), "security".into()]));

        let s3 = c.toggle_multi(&s2, "categories", "iot".into());
        assert_eq!(multi(&s3, "categories"), BTreeSet::from(["security".into()]));
    }

    #[test]
    fn test_toggle_multi_normalizes_year_strings() {
        let c = controller();
        let state = c.toggle_multi(&c.clear(), "year", "2024".into());
        assert_eq!(multi(&state, "year"), BTreeSet::from([FacetValue::Int(2024)]));
        let state = c.toggle_multi(&state, "year", FacetValue::Int(2024));
        assert!(multi(&state, "year").is_empty());
    }

    #[test]
    fn test_set_single_replaces_and_reselect_clears() {
        let c = controller();
        let s1 = c.set_single(&c.clear(), "type", "seminar".into());
        let s2 = c.set_single(&s1, "type", "workshop".into());
        assert_eq!(s2.selection("type"), Some(&FacetSelection::Single(Some("workshop".into()))));

        let s3 = c.set_single(&s2, "type", "workshop".into());
        assert_eq!(s3.selection("type"), Some(&FacetSelection::Single(None)));
    }

    #[test]
    fn test_configuration_mismatches_are_no_ops() {
        let c = controller();
        let state = c.set_search(&c.clear(), "robots");

        assert_eq!(c.toggle_multi(&state, "room", "B12".into()), state);
        assert_eq!(c.toggle_multi(&state, "type", "seminar".into()), state);
        assert_eq!(c.set_single(&state, "year", 2024.into()), state);
        assert_eq!(c.toggle_multi(&state, "year", "twenty".into()), state);
        assert_eq!(c.set_flag(&state, "members_only"), state);
    }

    #[test]
    fn test_set_flag_inverts() {
        let c = controller();
        let on = c.set_flag(&c.clear(), "free_only");
        assert!(on.flag("free_only"));
        assert!(!c.set_flag(&on, "free_only").flag("free_only"));
    }

    #[test]
    fn test_round_trips_keep_partial_state() {
        let c = controller();
        let partial = FilterState::default();
        let twice = c.toggle_multi(&c.toggle_multi(&partial, "year", 2024.into()), "year", 2024.into());
        assert_eq!(twice, partial);
        let twice = c.set_flag(&c.set_flag(&partial, "free_only"), "free_only");
        assert_eq!(twice, partial);

        let declared = c.clear();
        let twice = c.toggle_multi(&c.toggle_multi(&declared, "year", 2024.into()), "year", 2024.into());
        assert_eq!(twice, declared);
        let twice = c.set_flag(&c.set_flag(&declared, "free_only"), "free_only");
        assert_eq!(twice, declared);
    }

    #[test]
    fn test_set_search_is_verbatim() {
        let c = controller();
        assert_eq!(c.set_search(&c.clear(), "  Deep Learning ").search, "  Deep Learning ");
    }

    #[test]
    fn test_toggle_repairs_mismatched_selection_shape() {
        let c = controller();
        let mut state = c.clear();
        state.facets.insert("year".into(), FacetSelection::Single(Some(2020.into())));
        let state = c.toggle_multi(&state, "year", 2024.into());
        assert_eq!(multi(&state, "year"), BTreeSet::from([FacetValue::Int(2024)]));
    }

    #[test]
    fn test_clear_ignores_previous_state() {
        let c = controller();
        let busy = c.apply(&c.clear(), FilterAction::SetSearch { text: "x".into() });
        let busy = c.apply(&busy, FilterAction::SetFlag { flag_key: "free_only".into() });
        assert_eq!(c.apply(&busy, FilterAction::Clear), FilterState::inert(c.schema()));
    }

    fn value_strategy() -> impl Strategy<Value = FacetValue> {
        prop_oneof![
            (2018u64..2026).prop_map(FacetValue::Int),
            prop_oneof![Just("iot"), Just("security"), Just("2024")].prop_map(FacetValue::from),
        ]
    }

    fn action_strategy() -> impl Strategy<Value = FilterAction> {
        let facet = prop_oneof![Just("year"), Just("categories"), Just("type"), Just("unknown")].prop_map(String::from);
        prop_oneof![
            (facet.clone(), value_strategy()).prop_map(|(facet_key, value)| FilterAction::ToggleMulti { facet_key, value }),
            (facet, value_strategy()).prop_map(|(facet_key, value)| FilterAction::SetSingle { facet_key, value }),
            prop_oneof![Just("free_only"), Just("unknown")].prop_map(|k| FilterAction::SetFlag { flag_key: k.to_string() }),
            "[a-z ]{0,6}".prop_map(|text| FilterAction::SetSearch { text }),
            Just(FilterAction::Clear),
        ]
    }

    fn run(c: &FilterController, actions: &[FilterAction]) -> FilterState {
        run_from(c, c.clear(), actions)
    }

    fn run_from(c: &FilterController, start: FilterState, actions: &[FilterAction]) -> FilterState {
        actions.iter().cloned().fold(start, |state, action| c.apply(&state, action))
    }

    proptest! {
        /// Property: toggling the same multi value twice restores the selection.
        #[test]
        fn toggle_multi_twice_restores(
            actions in proptest::collection::vec(action_strategy(), 0..12),
            value in value_strategy(),
            from_partial in any::<bool>(),
        ) {
            let c = controller();
            let start = if from_partial { FilterState::default() } else { c.clear() };
            let state = run_from(&c, start, &actions);
            for key in ["year", "categories"] {
                let twice = c.toggle_multi(&c.toggle_multi(&state, key, value.clone()), key, value.clone());
                prop_assert_eq!(twice, state.clone());
            }
        }

        /// Property: setting a flag twice restores the state.
        #[test]
        fn set_flag_twice_restores(actions in proptest::collection::vec(action_strategy(), 0..12), from_partial in any::<bool>()) {
            let c = controller();
            let start = if from_partial { FilterState::default() } else { c.clear() };
            let state = run_from(&c, start, &actions);
            let twice = c.set_flag(&c.set_flag(&state, "free_only"), "free_only");
            prop_assert_eq!(twice, state);
        }

        /// Property: selecting an unselected single value twice leaves the facet empty.
        #[test]
        fn set_single_twice_clears(actions in proptest::collection::vec(action_strategy(), 0..12), value in value_strategy()) {
            let c = controller();
            let state = run(&c, &actions);
            let normalized = FacetValueKind::String.normalize(value.clone());
            prop_assume!(normalized.map(|v| !state.is_selected("type", &v)).unwrap_or(true));
            let twice = c.set_single(&c.set_single(&state, "type", value.clone()), "type", value);
            prop_assert_eq!(twice.selection("type"), Some(&FacetSelection::Single(None)));
        }

        /// Property: clear always returns the inert state.
        #[test]
        fn clear_after_anything_is_inert(actions in proptest::collection::vec(action_strategy(), 0..12)) {
            let c = controller();
            let state = run(&c, &actions);
            prop_assert_eq!(c.apply(&state, FilterAction::Clear), FilterState::inert(c.schema()));
        }
    }
}
