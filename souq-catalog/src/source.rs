//! Catalog sources: where product data is fetched from.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::product::Product;

/// A read-only origin for catalog data.
///
/// The loader calls [`fetch`](CatalogSource::fetch) lazily and memoizes the
/// first success, so implementations must be idempotent: every fetch is
/// assumed to return the same catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full product catalog.
    async fn fetch(&self) -> Result<Vec<Product>>;
}

/// Fetches the catalog from an HTTP endpoint serving a JSON product array.
///
/// # Example
///
/// ```rust,ignore
/// use souq_catalog::HttpCatalogSource;
///
/// let source = HttpCatalogSource::new("https://shop.example/products.json");
/// let products = source.fetch().await?;
/// ```
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    /// Create a source for the given URL with a fresh HTTP client.
    pub fn new(url: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), url: url.into() }
    }

    /// Create a source reusing an existing HTTP client.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Vec<Product>> {
        debug!(url = %self.url, "fetching catalog");

        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status { status: response.status().as_u16() });
        }

        let body = response.text().await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;

        debug!(product_count = products.len(), "catalog fetched");
        Ok(products)
    }
}

/// Reads the catalog from a JSON file on disk.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    /// Create a source for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<Vec<Product>> {
        debug!(path = %self.path.display(), "reading catalog file");

        let body = tokio::fs::read_to_string(&self.path).await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;

        debug!(product_count = products.len(), "catalog read");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_source_reads_product_array() {
        let dir = std::env::temp_dir().join("souq-catalog-file-source-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("products.json");
        std::fs::write(
            &path,
            r#"[{"id":1,"name":"سماعة لاسلكية","category":"إكسسوارات","price":150.0,"url":"","description":""}]"#,
        )
        .unwrap();

        let source = FileCatalogSource::new(&path);
        let products = source.fetch().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "سماعة لاسلكية");
    }

    #[tokio::test]
    async fn file_source_missing_file_is_io_error() {
        let source = FileCatalogSource::new("/nonexistent/souq/products.json");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[tokio::test]
    async fn file_source_non_array_payload_is_decode_error() {
        let dir = std::env::temp_dir().join("souq-catalog-decode-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let source = FileCatalogSource::new(&path);
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}
