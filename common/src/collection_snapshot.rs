//! Identified, immutable versions of a record collection.

use std::sync::Arc;


/// A record collection frozen under a revision id.
///
/// Two snapshots with the same revision hold the same records. Facet option
/// caches key on the revision, so a refreshed collection must come with a new
/// one.
pub struct CollectionSnapshot<R> {
    pub revision: String,
    pub records: Arc<Vec<R>>,
}

impl<R> Clone for CollectionSnapshot<R> {
    fn clone(&self) -> Self {
        Self { revision: self.revision.clone(), records: self.records.clone() }
    }
}

impl<R> std::fmt::Debug for CollectionSnapshot<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionSnapshot")
            .field("revision", &self.revision)
            .field("len", &self.records.len())
            .finish()
    }
}

impl<R> CollectionSnapshot<R> {
    pub fn new(revision: impl Into<String>, records: Vec<R>) -> Self {
        Self { revision: revision.into(), records: Arc::new(records) }
    }

    pub fn empty() -> Self {
        Self::new("empty", Vec::new())
    }

    pub fn records(&self) -> &[R] {
        self.records.as_slice()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
