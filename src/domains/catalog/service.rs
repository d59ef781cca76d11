//! Catalog service: the three operations exposed to agents.
//!
//! Each operation builds its request, performs one backend call and
//! normalizes the answer. Failures are converted to an [`ErrorResult`] that
//! echoes the caller's query or link argument.

use serde_json::Value;
use tracing::{info, instrument, warn};

use super::client::{ApiStatus, CatalogClient};
use super::error::{CatalogError, Echo, ErrorResult};
use super::normalize::{annotate_product_detail, annotate_search_results};
use super::request::{ProductLink, SearchQuery, SortOrder};
use crate::core::config::BackendConfig;

/// Outcome of a catalog operation: the normalized body or a failure payload.
pub type CatalogResult = Result<Value, ErrorResult>;

/// Facade over the catalog backend.
#[derive(Debug, Clone)]
pub struct CatalogService {
    client: CatalogClient,
}

impl CatalogService {
    /// Create a service for the backend described by `config`.
    pub fn new(config: BackendConfig) -> Result<Self, CatalogError> {
        info!("Initializing CatalogService for {}", config.base_url);
        Ok(Self {
            client: CatalogClient::new(config)?,
        })
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Search the catalog.
    #[instrument(skip(self, search), fields(query = %search.query))]
    pub async fn search_products(&self, search: &SearchQuery) -> CatalogResult {
        let echo = || Echo::Query(search.query.clone());

        let url = search
            .url(self.client.base_url())
            .map_err(|e| ErrorResult::new(&e, echo()))?;

        info!("Searching products: {}", url);
        let mut body = self
            .client
            .get_json(&url)
            .await
            .map_err(|e| ErrorResult::new(&e, echo()))?;

        annotate_search_results(&mut body);
        Ok(body)
    }

    /// Fetch the detail page of one product.
    #[instrument(skip(self))]
    pub async fn get_product_details(&self, product_link_argument: &str) -> CatalogResult {
        let echo = || Echo::ProductLink(product_link_argument.to_string());

        let link = ProductLink::parse(product_link_argument).map_err(|e| {
            warn!("Rejected product link argument: {:?}", product_link_argument);
            ErrorResult::new(&e, echo())
        })?;

        let url = link.url(self.client.base_url());
        info!("Fetching product details: {}", url);
        let mut body = self
            .client
            .get_json(&url)
            .await
            .map_err(|e| ErrorResult::new(&e, echo()))?;

        annotate_product_detail(&mut body, &link);
        Ok(body)
    }

    /// Search within a price band, cheapest first unless told otherwise.
    pub async fn search_by_price_range(
        &self,
        query: impl Into<String>,
        min_price: u64,
        max_price: u64,
        sort: Option<SortOrder>,
        page_number: Option<u32>,
    ) -> CatalogResult {
        let search = SearchQuery {
            sort: Some(sort.unwrap_or(SortOrder::PriceLowToHigh)),
            page_number,
            min_price: Some(min_price),
            max_price: Some(max_price),
            ..SearchQuery::new(query)
        };
        self.search_products(&search).await
    }

    /// Check whether the backend is reachable.
    pub async fn api_status(&self) -> ApiStatus {
        self.client.probe().await
    }
}
