pub mod download_section;
