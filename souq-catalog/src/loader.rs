//! Write-once catalog cache with retry-on-demand loading.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info};

use crate::product::Product;
use crate::source::CatalogSource;

/// The shared, read-only catalog snapshot.
pub type Catalog = Arc<Vec<Product>>;

/// Lazily loads the catalog from its source and memoizes the first success.
///
/// Failures are swallowed: the caller gets an empty catalog, nothing is
/// cached, and the next call retries the fetch. Callers cannot distinguish a
/// genuinely empty catalog from a failed load by the result alone, so every
/// consumer must treat an empty catalog as a valid, recoverable state.
///
/// The cache is owned by the loader instance, never ambient process state;
/// constructing a fresh loader yields a fresh cache.
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    cache: RwLock<Option<Catalog>>,
}

impl CatalogLoader {
    /// Create a loader over the given source with an empty cache.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source, cache: RwLock::new(None) }
    }

    /// Return the catalog, fetching it on first use.
    ///
    /// Safe to call concurrently. The lock is not held across the fetch
    /// await, so two racing first calls may both fetch; the last store wins.
    /// Sources are idempotent, so either store is the same catalog.
    pub async fn load(&self) -> Catalog {
        if let Some(catalog) = self.cache.read().await.as_ref() {
            return Arc::clone(catalog);
        }

        match self.source.fetch().await {
            Ok(products) => {
                let catalog: Catalog = Arc::new(products);
                info!(product_count = catalog.len(), "catalog loaded");
                *self.cache.write().await = Some(Arc::clone(&catalog));
                catalog
            }
            Err(e) => {
                error!(error = %e, "failed to load catalog");
                Arc::new(Vec::new())
            }
        }
    }

    /// Whether the cache currently holds a catalog.
    pub async fn is_loaded(&self) -> bool {
        self.cache.read().await.is_some()
    }
}
