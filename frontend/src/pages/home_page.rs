use common::section_result::SectionSummary;
use dioxus::prelude::*;

use crate::api::section_api::list_sections;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::section_components::section_icon::SectionIcon;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Department - Home" }
        div {
            id: "x-home-container",

            div {
                class: "x-home-title",
                span { "Welcome to the" }
                span { style: "color:#4F46E5;", "Department" }
            }
            div {
                class: "x-home-subtext",
                "Browse awards, events, programs, courses, projects and the teaching schedule. Every list can be narrowed down with filters and search."
            }

            SuspendWrapper { SectionCardGrid {} }
        }
    }
}

#[component]
fn SectionCardGrid() -> Element {
    let summaries = use_resource(list_sections).suspend()?.cloned();
    let summaries = match summaries {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(s) => s,
    };

    rsx! {
        div {
            class: "x-home-card-grid",
            for summary in summaries {
                SectionCard { key: "{summary.section}", summary: summary.clone() }
            }
        }
    }
}

#[component]
fn SectionCard(summary: ReadSignal<SectionSummary>) -> Element {
    let SectionSummary { section, title, record_count } = summary.read().clone();
    let count_label = match record_count {
        0 => "Nothing listed yet".to_string(),
        1 => "1 entry".to_string(),
        n => format!("{n} entries"),
    };

    rsx! {
        Link {
            to: Route::SectionPage { section },
            class: "x-home-section-card",
            div {
                class: "x-home-section-card-title",
                SectionIcon { section, size: 30 }
                "{title}"
            }
            div { class: "x-home-section-card-count", "{count_label}" }
        }
    }
}
