use common::{facet_schema::FlagSchema, filter_controller::FilterAction};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use crate::components::section_components::SectionFilterContext;


#[component]
pub fn FlagToggleStrip() -> Element {
    let context = use_context::<SectionFilterContext>();
    let flags = context.facets.read().schema.flags.clone();
    if flags.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 12px; padding: 0px 16px 10px 16px;",
            for flag in flags {
                FlagToggle { key: "{flag.key}", flag: flag.clone() }
            }
        }
    }
}

#[component]
fn FlagToggle(flag: ReadSignal<FlagSchema>) -> Element {
    let context = use_context::<SectionFilterContext>();
    let state = context.state;
    let dispatch = context.dispatch;
    let is_on = use_memo(move || state.read().flag(&flag.read().key));
    let label = flag.read().label.clone();
    let class = if is_on() { "x-flag-toggle x-flag-toggle-on" } else { "x-flag-toggle" };

    rsx! {
        button {
            class,
            onclick: move |_| {
                dispatch(FilterAction::SetFlag { flag_key: flag.read().key.clone() });
            },
            if is_on() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px;" }
            }
            "{label}"
        }
    }
}
