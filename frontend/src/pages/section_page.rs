//! One section of the site: filter controls on top, matching records below.

use common::{
    department::DepartmentSection,
    filter_controller::{FilterAction, FilterController},
    section_result::SectionFacets,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_editor_icons::MdInsertLink, md_file_icons::MdFileDownload, md_navigation_icons::MdRefresh}};

use crate::{
    api::section_api::{reload_section, search_section, section_facets},
    components::{
        error_boundary::ComponentErrorDisplay,
        section_components::{
            SectionFilterContext,
            facet_chips::FacetChipStrip,
            filter_summary::FilterSummary,
            flag_toggles::FlagToggleStrip,
            result_card::ResultCard,
            section_icon::SectionIcon,
            section_search_input::SectionSearchInput,
        },
        suspend_boundary::SuspendWrapper,
    },
};


#[component]
pub fn SectionPage(section: DepartmentSection) -> Element {
    rsx! {
        Title { "Department - {section.title()}" }
        SuspendWrapper {
            SectionPageRoot { section }
        }
    }
}

#[component]
fn SectionPageRoot(section: ReadSignal<DepartmentSection>) -> Element {
    let mut facets_resource = use_resource(move || section_facets(section()));
    let on_reload = use_callback(move |_: ()| {
        spawn(async move {
            match reload_section(section()).await {
                Ok(count) => {
                    dioxus::logger::tracing::info!("reloaded {}: {} records", section(), count);
                    facets_resource.restart();
                }
                Err(e) => dioxus::logger::tracing::error!("reload of {} failed: {:#?}", section(), e),
            }
        });
    });
    let facets = facets_resource.suspend()?.cloned();
    let facets = match facets {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(f) => f,
    };

    rsx! {
        SectionFilterView { section, facets, on_reload }
    }
}

#[component]
fn SectionFilterView(
    section: ReadSignal<DepartmentSection>,
    facets: ReadSignal<SectionFacets>,
    on_reload: Callback<()>,
) -> Element {
    let controller = use_memo(move || FilterController::new(facets.read().schema.clone()));
    let mut state = use_signal(|| controller.peek().clear());
    // signals survive navigation between sections: start over when the schema changes
    use_effect(move || {
        let inert = controller.read().clear();
        if *state.peek() != inert {
            state.set(inert);
        }
    });
    let dispatch = use_callback(move |action: FilterAction| {
        let next = controller.read().apply(&state.peek(), action);
        if *state.peek() != next {
            state.set(next);
        }
    });
    use_context_provider(|| SectionFilterContext {
        facets,
        state: state.into(),
        dispatch,
    });
    let revision = use_memo(move || facets.read().revision.clone());

    rsx! {
        div {
            id: "x-section-page-root",
            SectionHeader { section, on_reload }
            div {
                id: "x-section-controls",
                SectionSearchInput { placeholder: format!("Search {}", section().title().to_lowercase()) }
                FacetChipStrip {}
                FlagToggleStrip {}
            }
            div {
                id: "x-section-results",
                SuspendWrapper { SectionResultsPanel { section, revision } }
            }
        }
    }
}

#[component]
fn SectionHeader(section: ReadSignal<DepartmentSection>, on_reload: Callback<()>) -> Element {
    let do_copy_link = use_callback(move |_: ()| {
        let Some(window) = web_sys::window() else { return };
        if let Ok(url) = window.location().href() {
            let _r = window.navigator().clipboard().write_text(&url);
            dioxus::logger::tracing::info!("Link copied to clipboard: {}", url);
        }
    });
    let slug = section().slug();

    rsx! {
        div {
            id: "x-section-header",
            SectionIcon { section: section(), size: 34 }
            h1 { "{section().title()}" }
            div { style: "flex-grow: 1;" }
            button {
                class: "x-header-action",
                title: "Copy a link to this section",
                onclick: move |_| do_copy_link(()),
                Icon { icon: MdInsertLink, style: "width: 22px; height: 22px;" }
            }
            a {
                class: "x-header-action",
                title: "Download all records as JSON",
                href: "/_download_section/{slug}",
                download: "{slug}.json",
                Icon { icon: MdFileDownload, style: "width: 22px; height: 22px;" }
            }
            button {
                class: "x-header-action",
                title: "Reload records from disk",
                onclick: move |_| on_reload(()),
                Icon { icon: MdRefresh, style: "width: 22px; height: 22px;" }
            }
        }
    }
}

#[component]
fn SectionResultsPanel(section: ReadSignal<DepartmentSection>, revision: ReadSignal<String>) -> Element {
    let context = use_context::<SectionFilterContext>();
    let state = context.state;
    let results = use_resource(move || {
        // a new revision means the collection was reloaded
        let _revision = revision.read();
        search_section(section(), state.read().clone())
    })
    .suspend()?
    .cloned();
    let results = match results {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(r) => r,
    };

    rsx! {
        FilterSummary { matched_count: results.matched_count, total_count: results.total_count }
        if results.cards.is_empty() {
            div {
                class: "x-no-results",
                if results.total_count == 0 { "Nothing is listed here yet." } else { "No entries match the current filters." }
            }
        }
        div {
            class: "x-result-list",
            for (i, card) in results.cards.into_iter().enumerate() {
                ResultCard { key: "{i}-{card.card.title}", result: card }
            }
        }
    }
}
