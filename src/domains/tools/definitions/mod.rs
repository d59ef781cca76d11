//! Tool definitions module.
//!
//! Each tool is defined in its own file under `catalog/`.

pub mod catalog;

pub use catalog::{
    PriceRangeParams, PriceRangeSearchTool, ProductDetailsParams, ProductDetailsTool,
    SearchProductsParams, SearchProductsTool,
};
