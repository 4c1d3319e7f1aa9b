//! Number of filters currently constraining the result set.
//!
//! Host views read both the visibility of the "clear filters" control and its
//! badge from [`count`].

use crate::{facet_schema::FilterSchema, filter_state::FilterState};


/// One per non-empty search, active facet and flag that is on. A multi-select
/// facet counts once however many values it holds. Entries the schema does
/// not declare, or whose shape disagrees with it, are not counted.
pub fn count(state: &FilterState, schema: &FilterSchema) -> usize {
    let search = usize::from(!state.search.is_empty());
    let facets = schema
        .facets
        .iter()
        .filter_map(|facet| state.selection(&facet.key).filter(|s| s.cardinality() == facet.cardinality))
        .filter(|selection| selection.is_active())
        .count();
    let flags = schema.flags.iter().filter(|flag| state.flag(&flag.key)).count();
    search + facets + flags
}

pub fn has_active(state: &FilterState, schema: &FilterSchema) -> bool {
    count(state, schema) > 0
}


#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;
    use crate::{
        facet_schema::{FacetCardinality, FacetSchema, FlagSchema},
        facet_value::{FacetValue, FacetValueKind},
        filter_controller::FilterController,
        filter_state::FacetSelection,
    };

    fn schema() -> FilterSchema {
        FilterSchema {
            facets: vec![
                FacetSchema::new("year", "Year", FacetCardinality::Multi, FacetValueKind::Int),
                FacetSchema::new("day", "Day", FacetCardinality::Single, FacetValueKind::String),
            ],
            flags: vec![FlagSchema::new("open_seats", "Open seats")],
        }
    }

    #[test]
    fn test_clear_counts_zero() {
        let c = FilterController::new(schema());
        assert_eq!(count(&c.clear(), c.schema()), 0);
        assert!(!has_active(&c.clear(), c.schema()));
    }

    #[test]
    fn test_multi_facet_counts_once() {
        let c = FilterController::new(schema());
        let state = ["2022", "2023", "2024"].iter().fold(c.clear(), |s, y| c.toggle_multi(&s, "year", (*y).into()));
        assert_eq!(count(&state, c.schema()), 1);
    }

    #[test]
    fn test_every_kind_of_filter_counts() {
        let c = FilterController::new(schema());
        let state = c.set_search(&c.clear(), "smith");
        let state = c.toggle_multi(&state, "year", 2024.into());
        let state = c.set_single(&state, "day", "Mon".into());
        let state = c.set_flag(&state, "open_seats");
        assert_eq!(count(&state, c.schema()), 4);
    }

    #[test]
    fn test_undeclared_entries_do_not_count() {
        let mut state = FilterState::default();
        state.facets.insert("room".into(), FacetSelection::Single(Some("B12".into())));
        state.facets.insert("day".into(), FacetSelection::Multi(BTreeSet::from([FacetValue::from("Mon")])));
        state.flags.insert("members_only".into(), true);
        assert_eq!(count(&state, &schema()), 0);
    }

    #[derive(Debug, Clone, Copy)]
    enum Activation {
        Search,
        Year,
        Day,
        OpenSeats,
    }

    fn activate(c: &FilterController, state: &FilterState, activation: Activation) -> FilterState {
        match activation {
            Activation::Search => c.set_search(state, "lab"),
            Activation::Year => c.toggle_multi(state, "year", 2024.into()),
            Activation::Day => c.set_single(state, "day", "Wed".into()),
            Activation::OpenSeats => c.set_flag(state, "open_seats"),
        }
    }

    proptest! {
        /// Property: each independent activation adds exactly one, in any order.
        #[test]
        fn count_grows_by_one_per_activation(
            order in Just(vec![Activation::Search, Activation::Year, Activation::Day, Activation::OpenSeats]).prop_shuffle()
        ) {
            let c = FilterController::new(schema());
            let mut state = c.clear();
            for (i, activation) in order.into_iter().enumerate() {
                state = activate(&c, &state, activation);
                prop_assert_eq!(count(&state, c.schema()), i + 1);
            }
            prop_assert_eq!(count(&c.clear(), c.schema()), 0);
        }
    }
}
