//! Catalog tools: search, product details and price-band search.

pub mod common;
mod details;
mod price_range;
mod search;

pub use details::{ProductDetailsParams, ProductDetailsTool};
pub use price_range::{PriceRangeParams, PriceRangeSearchTool};
pub use search::{SearchProductsParams, SearchProductsTool};
