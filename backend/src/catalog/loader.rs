use std::path::Path;

use anyhow::Context;
use common::{collection_snapshot::CollectionSnapshot, department::DepartmentRecord};
use tracing::{info, warn};

use crate::config::BackendConfig;

/// Raw contents of a section data file, `None` when the file does not exist.
pub async fn read_section_file(path: &Path) -> anyhow::Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read section file {}", path.display())),
    }
}

/// Parses a JSON array of records. The revision is the digest of the file
/// contents, so reloading an unchanged file keeps cached facet options valid.
pub fn parse_section<R: DepartmentRecord>(text: &str) -> anyhow::Result<CollectionSnapshot<R>> {
    let records: Vec<R> = serde_json::from_str(text)
        .with_context(|| format!("Failed to parse {} records", R::SECTION))?;
    let revision = sha256::digest(text);
    Ok(CollectionSnapshot::new(revision, records))
}

pub async fn load_section<R: DepartmentRecord>(config: &BackendConfig) -> anyhow::Result<CollectionSnapshot<R>> {
    let path = config.section_path(R::SECTION);
    let Some(text) = read_section_file(&path).await? else {
        warn!("load_section: {} not found, section {} starts empty", path.display(), R::SECTION);
        return Ok(CollectionSnapshot::empty());
    };
    let snapshot = parse_section::<R>(&text)?;
    info!("load_section: {} records for {} (revision {})", snapshot.len(), R::SECTION, &snapshot.revision[..12]);
    Ok(snapshot)
}


#[cfg(test)]
mod tests {
    use common::department::{Award, Event};

    use super::*;

    #[tokio::test]
    async fn test_missing_file_gives_empty_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let config = BackendConfig::new(dir.path());
        let snapshot = load_section::<Award>(&config).await.unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.revision, "empty");
    }

    #[tokio::test]
    async fn test_load_events_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = BackendConfig::new(dir.path());
        tokio::fs::write(
            config.section_path(Event::SECTION),
            r#"[{"title": "Open day", "type": "social", "date": "2025-06-01", "price": 0},
                {"title": "Compilers talk", "type": "talk", "date": "2025-03-11"}]"#,
        )
        .await
        .unwrap();

        let snapshot = load_section::<Event>(&config).await.unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.records()[0].event_type.as_deref(), Some("social"));
        assert_eq!(snapshot.records()[1].price, None);
        assert_eq!(snapshot.revision.len(), 64);
    }

    #[test]
    fn test_revision_follows_content() {
        let a = parse_section::<Award>(r#"[{"title": "Best paper"}]"#).unwrap();
        let b = parse_section::<Award>(r#"[{"title": "Best paper"}]"#).unwrap();
        let c = parse_section::<Award>(r#"[{"title": "Best talk"}]"#).unwrap();
        assert_eq!(a.revision, b.revision);
        assert_ne!(a.revision, c.revision);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let err = parse_section::<Award>("{not json").unwrap_err();
        assert!(format!("{:#}", err).contains("awards"));
    }
}
