//! Side navigation: home plus one link per section.

use common::department::DepartmentSection;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::section_components::section_icon::SectionIcon;
use crate::routes::Route;


#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-nav-sidebar",
                style: "
                    display:flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 24px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px 0px;
                ",

                IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
                div { style: "width: 38px; border-bottom: 1px solid rgba(255,255,255,0.3);" }
                for section in DepartmentSection::ALL {
                    SectionLink { key: "{section}", section }
                }
            }

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-width: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn SectionLink(section: DepartmentSection) -> Element {
    rsx! {
        Link {
            to: Route::SectionPage { section },
            span {
                title: section.title(),
                style: "color:white;",
                SectionIcon { section, size: 26 }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: label,
                style: "color:white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
