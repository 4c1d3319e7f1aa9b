use common::{
    facet_extractor::FacetOption,
    facet_schema::{FacetCardinality, FacetSchema},
    facet_value::FacetValue,
    filter_controller::FilterAction,
    filter_state::FacetSelection,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_navigation_icons::MdArrowDropDown, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank, MdRadioButtonChecked, MdRadioButtonUnchecked}}};

use crate::components::section_components::SectionFilterContext;


/// One chip per facet declared for the section.
#[component]
pub fn FacetChipStrip() -> Element {
    let context = use_context::<SectionFilterContext>();
    let expanded_facet = use_signal(|| "".to_string());
    let facet_schemas = context.facets.read().schema.facets.clone();

    rsx! {
        div {
            id: "x-section-facet-chips",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 12px;
                padding: 10px 16px;
            ",
            for schema in facet_schemas {
                FacetChip {
                    key: "{schema.key}",
                    schema: schema.clone(),
                    expanded_facet,
                }
            }
        }
    }
}

#[component]
fn FacetChip(schema: ReadSignal<FacetSchema>, mut expanded_facet: Signal<String>) -> Element {
    let context = use_context::<SectionFilterContext>();
    let state = context.state;

    let is_expanded = use_memo(move || *expanded_facet.read() == schema.read().key);
    let is_filtered = use_memo(move || state.read().selection(&schema.read().key).is_some_and(|s| s.is_active()));
    let border_color = use_memo(move || if is_filtered() { "rgba(0,0,255,0.9)" } else { "rgba(0,0,0,0.5)" });
    let chip_z_level = use_memo(move || if is_expanded() { 1000 } else { 888 });
    let label = schema.read().label.clone();

    rsx! {
        div {
            style: "position: relative;",
            if is_expanded() {
                div {
                    style: "
                        position: fixed;
                        top: 0px;
                        left: 0px;
                        width: 100vw;
                        height: 100vh;
                        z-index: 999;
                        background-color: rgba(0,0,0,0.1);
                    ",
                    onclick: move |_| expanded_facet.set("".to_string()),
                }
                div {
                    class: "x-facet-dropdown",
                    FacetOptionList { schema }
                }
            }

            button {
                class: "x-facet-chip",
                style: "border: 2px solid {border_color()}; z-index: {chip_z_level()};",
                onclick: move |_| {
                    let key = schema.read().key.clone();
                    if *expanded_facet.peek() == key {
                        expanded_facet.set("".to_string());
                    } else {
                        expanded_facet.set(key);
                    }
                },
                "{label}"
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color:rgba(0,0,0,0.9);" }
            }
        }
    }
}

#[component]
fn FacetOptionList(schema: ReadSignal<FacetSchema>) -> Element {
    let context = use_context::<SectionFilterContext>();
    let facets = context.facets.read();
    let schema_value = schema.read().clone();
    let mut options = facets.options_for(&schema_value.key).map(|o| o.options.clone()).unwrap_or_default();

    // selected values that no longer occur in the collection stay visible so they can be removed
    let state = context.state.read();
    if let Some(selection) = state.selection(&schema_value.key) {
        let selected: Vec<FacetValue> = match selection {
            FacetSelection::Single(value) => value.iter().cloned().collect(),
            FacetSelection::Multi(values) => values.iter().cloned().collect(),
        };
        for value in selected {
            if !options.iter().any(|o| o.value == value) {
                options.push(FacetOption { display_string: value.display_string(), value, count: 0 });
            }
        }
    }

    if options.is_empty() {
        return rsx! {
            div { style: "padding: 10px; color: rgba(0,0,0,0.6);", "No values" }
        };
    }

    rsx! {
        ul {
            style: "list-style: none; padding: 0px; margin: 0px;",
            for option in options {
                li {
                    key: "{option.display_string}-{option.count}",
                    FacetOptionRow {
                        facet_key: schema_value.key.clone(),
                        cardinality: schema_value.cardinality,
                        option,
                    }
                }
            }
        }
    }
}

#[component]
fn FacetOptionRow(facet_key: ReadSignal<String>, cardinality: FacetCardinality, option: ReadSignal<FacetOption>) -> Element {
    let context = use_context::<SectionFilterContext>();
    let state = context.state;
    let dispatch = context.dispatch;
    let is_checked = use_memo(move || state.read().is_selected(&facet_key.read(), &option.read().value));
    let display_string = option.read().display_string.clone();
    let count = option.read().count;

    rsx! {
        div {
            class: "x-facet-list-item",
            onclick: move |_| {
                let facet_key = facet_key.read().clone();
                let value = option.read().value.clone();
                dispatch(match cardinality {
                    FacetCardinality::Multi => FilterAction::ToggleMulti { facet_key, value },
                    FacetCardinality::Single => FilterAction::SetSingle { facet_key, value },
                });
            },

            {match (cardinality, is_checked()) {
                (FacetCardinality::Multi, true) => rsx! { Icon { icon: MdCheckBox, style: "width: 24px; height: 24px; color: rgb(28, 33, 45); flex-shrink: 0;" } },
                (FacetCardinality::Multi, false) => rsx! { Icon { icon: MdCheckBoxOutlineBlank, style: "width: 24px; height: 24px; flex-shrink: 0;" } },
                (FacetCardinality::Single, true) => rsx! { Icon { icon: MdRadioButtonChecked, style: "width: 24px; height: 24px; color: rgb(28, 33, 45); flex-shrink: 0;" } },
                (FacetCardinality::Single, false) => rsx! { Icon { icon: MdRadioButtonUnchecked, style: "width: 24px; height: 24px; flex-shrink: 0;" } },
            }}
            div { class: "x-facet-list-item-label", "{display_string}" }
            div { style: "flex: 1 1 auto;" }
            div { class: "x-facet-list-item-count", "{count}" }
        }
    }
}
