use std::path::PathBuf;

use common::department::DepartmentSection;


#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    /// Directory holding one `<section>.json` file per site section.
    pub data_dir: PathBuf,
}

impl BackendConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var("DEPARTMENT_DATA_DIR").unwrap_or("data".to_string()))
    }

    pub fn section_path(&self, section: DepartmentSection) -> PathBuf {
        self.data_dir.join(format!("{}.json", section.slug()))
    }
}
