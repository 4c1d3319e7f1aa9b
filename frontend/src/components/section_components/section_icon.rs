use common::department::DepartmentSection;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdBuild, MdClass, MdEvent, MdSchedule, MdStars};
use dioxus_free_icons::icons::md_social_icons::MdSchool;

#[component]
pub fn SectionIcon(section: DepartmentSection, size: u32) -> Element {
    match section {
        DepartmentSection::Awards => rsx! { Icon { icon: MdStars, style: "width: {size}px; height: {size}px;" } },
        DepartmentSection::Events => rsx! { Icon { icon: MdEvent, style: "width: {size}px; height: {size}px;" } },
        DepartmentSection::Programs => rsx! { Icon { icon: MdSchool, style: "width: {size}px; height: {size}px;" } },
        DepartmentSection::Courses => rsx! { Icon { icon: MdClass, style: "width: {size}px; height: {size}px;" } },
        DepartmentSection::Projects => rsx! { Icon { icon: MdBuild, style: "width: {size}px; height: {size}px;" } },
        DepartmentSection::Schedule => rsx! { Icon { icon: MdSchedule, style: "width: {size}px; height: {size}px;" } },
    }
}
