use common::{
    active_filter_counter,
    collection_snapshot::CollectionSnapshot,
    department::{Award, Course, DepartmentRecord, DepartmentSection, Event, Program, Project, ScheduleEntry},
    facet_definition::FilterConfig,
    facet_extractor::{FacetOptionCache, extract_all},
    facet_schema::FilterSchema,
    filter_evaluator::filter_records,
    filter_state::FilterState,
    section_result::{SectionFacets, SectionResultCard, SectionResults, SectionSummary},
};
use tokio::sync::{Mutex, OnceCell, RwLock};
use tracing::{debug, info, warn};

use crate::{catalog::loader::load_section, config::BackendConfig};


/// Collection of one section plus the facet options computed from it.
///
/// Readers clone the current snapshot and work on it without holding the
/// lock, so a reload never exposes a half-replaced collection.
pub struct SectionCatalog<R> {
    config: FilterConfig<R>,
    schema: FilterSchema,
    snapshot: RwLock<CollectionSnapshot<R>>,
    facet_cache: Mutex<FacetOptionCache>,
}

impl<R: DepartmentRecord> SectionCatalog<R> {
    pub fn new(snapshot: CollectionSnapshot<R>) -> Self {
        let config = R::filter_config();
        let schema = config.schema();
        Self {
            config,
            schema,
            snapshot: RwLock::new(snapshot),
            facet_cache: Mutex::new(FacetOptionCache::new()),
        }
    }

    pub fn schema(&self) -> &FilterSchema {
        &self.schema
    }

    pub async fn snapshot(&self) -> CollectionSnapshot<R> {
        self.snapshot.read().await.clone()
    }

    pub async fn replace(&self, snapshot: CollectionSnapshot<R>) {
        let mut current = self.snapshot.write().await;
        info!("catalog: {} revision {} -> {}", R::SECTION, current.revision, snapshot.revision);
        *current = snapshot;
    }

    /// Re-reads the section file. On failure the current snapshot stays in place.
    pub async fn reload(&self, config: &BackendConfig) -> anyhow::Result<()> {
        let snapshot = load_section::<R>(config).await?;
        self.replace(snapshot).await;
        Ok(())
    }

    pub async fn facets(&self) -> SectionFacets {
        let snapshot = self.snapshot().await;
        let options = {
            let mut cache = self.facet_cache.lock().await;
            extract_all(&mut cache, &snapshot, &self.config)
        };
        SectionFacets {
            section: R::SECTION,
            schema: self.schema.clone(),
            facet_options: options.iter().map(|o| o.as_ref().clone()).collect(),
            revision: snapshot.revision.clone(),
        }
    }

    pub async fn search(&self, state: &FilterState) -> SectionResults {
        let snapshot = self.snapshot().await;
        let matched = filter_records(snapshot.records(), state, &self.config);
        debug!("catalog: {} search matched {}/{}", R::SECTION, matched.len(), snapshot.len());
        SectionResults {
            section: R::SECTION,
            state: state.clone(),
            cards: matched.iter().map(|r| SectionResultCard::new(r.card(), &state.search)).collect(),
            total_count: snapshot.len() as u64,
            matched_count: matched.len() as u64,
            active_filter_count: active_filter_counter::count(state, &self.schema) as u64,
            revision: snapshot.revision.clone(),
        }
    }

    pub async fn record_count(&self) -> usize {
        self.snapshot.read().await.len()
    }

    /// The whole collection serialized back to the data file format.
    pub async fn export_json(&self) -> anyhow::Result<String> {
        let snapshot = self.snapshot().await;
        Ok(serde_json::to_string_pretty(snapshot.records())?)
    }
}


/// Every section of the site.
pub struct DepartmentCatalog {
    config: BackendConfig,
    awards: SectionCatalog<Award>,
    events: SectionCatalog<Event>,
    programs: SectionCatalog<Program>,
    courses: SectionCatalog<Course>,
    projects: SectionCatalog<Project>,
    schedule: SectionCatalog<ScheduleEntry>,
}

macro_rules! with_section {
    ($catalog:expr, $section:expr, |$s:ident| $body:expr) => {
        match $section {
            DepartmentSection::Awards => { let $s = &$catalog.awards; $body }
            DepartmentSection::Events => { let $s = &$catalog.events; $body }
            DepartmentSection::Programs => { let $s = &$catalog.programs; $body }
            DepartmentSection::Courses => { let $s = &$catalog.courses; $body }
            DepartmentSection::Projects => { let $s = &$catalog.projects; $body }
            DepartmentSection::Schedule => { let $s = &$catalog.schedule; $body }
        }
    };
}

impl DepartmentCatalog {
    /// Loads every section. A section whose file cannot be read or parsed
    /// starts empty; `reload_section` keeps reporting its error.
    pub async fn load(config: BackendConfig) -> anyhow::Result<Self> {
        info!("catalog: loading sections from {}", config.data_dir.display());
        Ok(Self {
            awards: SectionCatalog::new(load_or_empty(&config).await),
            events: SectionCatalog::new(load_or_empty(&config).await),
            programs: SectionCatalog::new(load_or_empty(&config).await),
            courses: SectionCatalog::new(load_or_empty(&config).await),
            projects: SectionCatalog::new(load_or_empty(&config).await),
            schedule: SectionCatalog::new(load_or_empty(&config).await),
            config,
        })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub async fn reload_section(&self, section: DepartmentSection) -> anyhow::Result<()> {
        with_section!(self, section, |s| s.reload(&self.config).await)
    }

    pub async fn reload(&self) -> anyhow::Result<()> {
        for section in DepartmentSection::ALL {
            self.reload_section(section).await?;
        }
        Ok(())
    }

    pub fn schema(&self, section: DepartmentSection) -> FilterSchema {
        with_section!(self, section, |s| s.schema().clone())
    }

    pub async fn facets(&self, section: DepartmentSection) -> SectionFacets {
        with_section!(self, section, |s| s.facets().await)
    }

    pub async fn search(&self, section: DepartmentSection, state: &FilterState) -> SectionResults {
        with_section!(self, section, |s| s.search(state).await)
    }

    pub async fn export_json(&self, section: DepartmentSection) -> anyhow::Result<String> {
        with_section!(self, section, |s| s.export_json().await)
    }

    pub async fn record_count(&self, section: DepartmentSection) -> usize {
        with_section!(self, section, |s| s.record_count().await)
    }

    pub async fn summaries(&self) -> Vec<SectionSummary> {
        let mut summaries = Vec::with_capacity(DepartmentSection::ALL.len());
        for section in DepartmentSection::ALL {
            summaries.push(SectionSummary {
                section,
                title: section.title().to_string(),
                record_count: self.record_count(section).await as u64,
            });
        }
        summaries
    }
}

async fn load_or_empty<R: DepartmentRecord>(config: &BackendConfig) -> CollectionSnapshot<R> {
    match load_section::<R>(config).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("catalog: {} failed to load, starting empty: {e:#}", R::SECTION);
            CollectionSnapshot::empty()
        }
    }
}


static CATALOG: OnceCell<DepartmentCatalog> = OnceCell::const_new();

/// Process-wide catalog, loaded from `DEPARTMENT_DATA_DIR` on first use.
pub async fn get_catalog() -> anyhow::Result<&'static DepartmentCatalog> {
    CATALOG.get_or_try_init(|| DepartmentCatalog::load(BackendConfig::from_env())).await
}
