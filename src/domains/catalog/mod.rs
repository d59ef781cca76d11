//! Catalog domain module.
//!
//! Everything needed to talk to the Flipkart-style catalog backend:
//!
//! - `request.rs` - search and product URL builders, link sanitization
//! - `client.rs` - single-shot HTTP GET with failure classification
//! - `normalize.rs` - derived fields on successful responses
//! - `service.rs` - the search / detail / price-range operations
//! - `error.rs` - failure categories and the payload returned to clients

mod client;
mod error;
mod normalize;
mod request;
mod service;

pub use client::{ApiStatus, CatalogClient};
pub use error::{CatalogError, Echo, ErrorResult, TIMEOUT_MESSAGE};
pub use normalize::{annotate_product_detail, annotate_search_results, discount_percent};
pub use request::{
    CANONICAL_URL_PREFIX, LISTING_URL_PREFIX, LOCAL_HOST_PREFIX, MIN_LINK_LEN, ProductLink,
    SearchParams, SearchQuery, SortOrder,
};
pub use service::{CatalogResult, CatalogService};
