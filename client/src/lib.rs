mod cache;
mod config;
mod error;
mod fetcher;

use std::sync::Arc;

use cache::{CatalogCache, Loaded};
use fetcher::Fetcher;

pub use config::{
    ClientConfig, DEFAULT_CACHE_TTL, DEFAULT_CREATURE_COUNT, DEFAULT_TYPE_COUNT, POKEAPI_URL,
    RetryPolicy,
};
pub use error::FetchError;

pub use typedex_analytics::{Creature, PLACEHOLDER_SPRITE, TypeRecord};

/// Immutable view of both catalogs for one session
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub creatures: Arc<[Creature]>,
    pub types: Arc<[TypeRecord]>,
}

/// PokeAPI catalog client with a short-lived in-memory cache
pub struct CatalogClient {
    fetcher: Fetcher,
    cache: CatalogCache,
}

impl CatalogClient {
    /// Create a client for the public API with default settings
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
            cache: CatalogCache::new(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        self.fetcher.config()
    }

    /// Both catalogs, served from cache while fresh.
    ///
    /// Stale or missing halves are fetched concurrently. A half that fetched
    /// successfully is cached even if the other half failed.
    pub async fn snapshot(&mut self) -> Result<CatalogSnapshot, FetchError> {
        let ttl = self.config().cache_ttl;
        let cached_creatures = self.cache.creatures.fresh(ttl);
        let cached_types = self.cache.types.fresh(ttl);
        let fetcher = &self.fetcher;

        let (creatures, types) = tokio::join!(
            async {
                match cached_creatures {
                    Some(hit) => Ok(Loaded::Cached(hit)),
                    None => fetcher
                        .fetch_creatures()
                        .await
                        .map(|v| Loaded::Fetched(Arc::from(v))),
                }
            },
            async {
                match cached_types {
                    Some(hit) => Ok(Loaded::Cached(hit)),
                    None => fetcher
                        .fetch_types()
                        .await
                        .map(|v| Loaded::Fetched(Arc::from(v))),
                }
            }
        );

        let creatures = self.cache.creatures.settle(creatures);
        let types = self.cache.types.settle(types);

        Ok(CatalogSnapshot {
            creatures: creatures?,
            types: types?,
        })
    }

    /// The creature catalog, served from cache while fresh
    pub async fn creatures(&mut self) -> Result<Arc<[Creature]>, FetchError> {
        let loaded = match self.cache.creatures.fresh(self.config().cache_ttl) {
            Some(hit) => Ok(Loaded::Cached(hit)),
            None => self
                .fetcher
                .fetch_creatures()
                .await
                .map(|v| Loaded::Fetched(Arc::from(v))),
        };
        self.cache.creatures.settle(loaded)
    }

    /// The type catalog, served from cache while fresh
    pub async fn types(&mut self) -> Result<Arc<[TypeRecord]>, FetchError> {
        let loaded = match self.cache.types.fresh(self.config().cache_ttl) {
            Some(hit) => Ok(Loaded::Cached(hit)),
            None => self
                .fetcher
                .fetch_types()
                .await
                .map(|v| Loaded::Fetched(Arc::from(v))),
        };
        self.cache.types.settle(loaded)
    }

    /// Fetch a single creature, bypassing the cache
    pub async fn creature(&self, id: u32) -> Result<Creature, FetchError> {
        self.fetcher.fetch_creature(id).await
    }

    /// Fetch a single type, bypassing the cache
    pub async fn type_record(&self, id: u32) -> Result<TypeRecord, FetchError> {
        self.fetcher.fetch_type(id).await
    }

    /// Drop cached catalogs so the next call refetches
    pub fn invalidate(&mut self) {
        tracing::debug!("Invalidating catalog cache");
        self.cache.clear();
    }
}
