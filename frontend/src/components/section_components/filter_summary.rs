//! Active filter badge and the clear button.

use common::{active_filter_counter, filter_controller::FilterAction};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::components::section_components::SectionFilterContext;


#[component]
pub fn FilterSummary(matched_count: u64, total_count: u64) -> Element {
    let context = use_context::<SectionFilterContext>();
    let state = context.state;
    let facets = context.facets;
    let dispatch = context.dispatch;
    // badge and clear button read the same count so they never disagree
    let active_count = use_memo(move || active_filter_counter::count(&state.read(), &facets.read().schema));

    rsx! {
        div {
            id: "x-section-filter-summary",
            span {
                class: "x-result-count",
                "{matched_count} of {total_count}"
            }
            if active_count() > 0 {
                span { class: "x-active-filter-badge", "{active_count} active" }
                button {
                    class: "x-clear-filters",
                    onclick: move |_| dispatch(FilterAction::Clear),
                    Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
                    "Clear filters"
                }
            }
        }
    }
}
