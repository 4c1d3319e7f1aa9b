//! Building blocks of a section page: search box, facet chips, flag
//! toggles, the active filter summary and result cards.

pub mod facet_chips;
pub mod filter_summary;
pub mod flag_toggles;
pub mod result_card;
pub mod section_icon;
pub mod section_search_input;

use common::{filter_controller::FilterAction, filter_state::FilterState, section_result::SectionFacets};
use dioxus::prelude::*;

/// Shared by every control of a section page.
///
/// Controls never write `state` themselves: they send a [`FilterAction`] to
/// `dispatch`, which computes the next state and publishes it.
#[derive(Clone, Copy)]
pub struct SectionFilterContext {
    pub facets: ReadSignal<SectionFacets>,
    pub state: ReadSignal<FilterState>,
    pub dispatch: Callback<FilterAction>,
}
