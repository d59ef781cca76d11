//! Request builders for the catalog backend.
//!
//! The search endpoint takes the free-text query as a path segment and the
//! optional filters as a query string. The product endpoint takes a relative
//! product path (the "link argument") verbatim after sanitization.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::CatalogError;

/// Characters left as-is when the query is embedded as a single path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Prefix of the absolute product URLs the backend puts in search results.
pub const LISTING_URL_PREFIX: &str = "https://flipkart.com/";

/// Prefix used to re-qualify a link argument into a shareable URL.
pub const CANONICAL_URL_PREFIX: &str = "https://www.flipkart.com/";

/// Host and port callers sometimes paste in front of a link argument.
pub const LOCAL_HOST_PREFIX: &str = "0.0.0.0:3000";

/// Shortest link argument worth sending to the backend.
pub const MIN_LINK_LEN: usize = 10;

/// Result ordering understood by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Relevance,
    PriceLowToHigh,
    PriceHighToLow,
    NewestFirst,
    Popularity,
}

impl SortOrder {
    /// Every sort order, in the order they are documented.
    pub const ALL: [SortOrder; 5] = [
        Self::Relevance,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::NewestFirst,
        Self::Popularity,
    ];

    /// Wire name of the sort order.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceLowToHigh => "price_low_to_high",
            Self::PriceHighToLow => "price_high_to_low",
            Self::NewestFirst => "newest_first",
            Self::Popularity => "popularity",
        }
    }

    /// Human-readable label, e.g. "Price Low To High".
    pub fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::PriceLowToHigh => "Price Low To High",
            Self::PriceHighToLow => "Price High To Low",
            Self::NewestFirst => "Newest First",
            Self::Popularity => "Popularity",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product search as issued to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub sort: Option<SortOrder>,
    pub page_number: Option<u32>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
}

/// Optional filters in the form they go on the wire.
///
/// Zero counts as "not supplied": a page or price bound of 0 is never sent.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
}

impl SearchQuery {
    /// A plain search with no filters.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            sort: None,
            page_number: None,
            min_price: None,
            max_price: None,
        }
    }

    /// Path of the search endpoint, relative to the base URL.
    pub fn path(&self) -> String {
        format!("search/{}", utf8_percent_encode(&self.query, PATH_SEGMENT))
    }

    /// The filters that will actually be sent.
    pub fn params(&self) -> SearchParams {
        SearchParams {
            sort: self.sort,
            page_number: self.page_number.filter(|&p| p != 0),
            min_price: self.min_price.filter(|&p| p != 0),
            max_price: self.max_price.filter(|&p| p != 0),
        }
    }

    /// Full request URL against `base_url`.
    pub fn url(&self, base_url: &str) -> Result<String, CatalogError> {
        let query_string = serde_urlencoded::to_string(self.params())
            .map_err(|e| CatalogError::unexpected(e.to_string()))?;

        let mut url = format!("{}/{}", base_url, self.path());
        if !query_string.is_empty() {
            url.push('?');
            url.push_str(&query_string);
        }
        Ok(url)
    }
}

/// A sanitized relative product path, e.g. `realme-buds-air7/p/itm15cefc7cf75ad`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLink(String);

impl ProductLink {
    /// Clean a caller-supplied link argument.
    ///
    /// Surrounding whitespace and slashes are dropped, as is a leading
    /// `0.0.0.0:3000`. The remainder must be at least [`MIN_LINK_LEN`]
    /// characters long.
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let mut clean = raw.trim().trim_matches('/');
        if let Some(rest) = clean.strip_prefix(LOCAL_HOST_PREFIX) {
            clean = rest.trim_start_matches('/');
        }

        if clean.chars().count() < MIN_LINK_LEN {
            return Err(CatalogError::InvalidLink);
        }

        Ok(Self(clean.to_string()))
    }

    /// Extract the link argument from an absolute search-result URL.
    ///
    /// Returns `None` for URLs that are not under [`LISTING_URL_PREFIX`].
    pub fn argument_from_listing_url(url: &str) -> Option<&str> {
        url.strip_prefix(LISTING_URL_PREFIX)
    }

    /// The cleaned link argument.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the product endpoint, relative to the base URL.
    pub fn path(&self) -> String {
        format!("product/{}", self.0)
    }

    /// Full request URL against `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url, self.path())
    }

    /// Shareable storefront URL for this product.
    pub fn canonical_url(&self) -> String {
        format!("{}{}", CANONICAL_URL_PREFIX, self.0)
    }
}
