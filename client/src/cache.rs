use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use typedex_analytics::{Creature, TypeRecord};

use crate::error::FetchError;

/// One cached catalog batch
pub(crate) struct CacheSlot<T> {
    entry: Option<(Arc<[T]>, Instant)>,
}

impl<T> CacheSlot<T> {
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// The cached batch, if it is younger than `ttl`
    pub fn fresh(&self, ttl: Duration) -> Option<Arc<[T]>> {
        let (value, fetched_at) = self.entry.as_ref()?;
        (fetched_at.elapsed() < ttl).then(|| Arc::clone(value))
    }

    /// Store a newly fetched batch and hand it back. Errors are passed
    /// through without touching the slot.
    pub fn settle(&mut self, loaded: Result<Loaded<T>, FetchError>) -> Result<Arc<[T]>, FetchError> {
        match loaded? {
            Loaded::Cached(value) => Ok(value),
            Loaded::Fetched(value) => {
                self.entry = Some((Arc::clone(&value), Instant::now()));
                Ok(value)
            }
        }
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}

/// Where a batch came from
pub(crate) enum Loaded<T> {
    Cached(Arc<[T]>),
    Fetched(Arc<[T]>),
}

/// Catalog batches accumulated across snapshots
pub(crate) struct CatalogCache {
    pub creatures: CacheSlot<Creature>,
    pub types: CacheSlot<TypeRecord>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self {
            creatures: CacheSlot::new(),
            types: CacheSlot::new(),
        }
    }

    pub fn clear(&mut self) {
        self.creatures.clear();
        self.types.clear();
    }
}
