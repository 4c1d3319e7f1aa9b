pub mod home_page;
pub mod section_page;
