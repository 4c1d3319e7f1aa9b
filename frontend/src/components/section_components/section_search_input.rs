use common::filter_controller::FilterAction;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::components::section_components::SectionFilterContext;


/// Free-text search. Every keystroke is dispatched, so results follow the input.
#[component]
pub fn SectionSearchInput(placeholder: String) -> Element {
    let context = use_context::<SectionFilterContext>();
    let state = context.state;
    let dispatch = context.dispatch;

    rsx! {
        div {
            id: "x-section-search-box",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{state.read().search}",
                oninput: move |event: Event<FormData>| {
                    dispatch(FilterAction::SetSearch { text: event.value() });
                },
            }
        }
    }
}
