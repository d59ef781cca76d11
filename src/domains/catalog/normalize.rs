//! Post-processing of successful backend responses.
//!
//! Search results gain a `product_link_argument` per listing, product detail
//! gains `flipkart_url` and, when the backend leaves it out, a
//! `calculated_discount_percent` derived from the price fields.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use super::request::ProductLink;

/// Price-related fields of a product detail body.
///
/// Each field is `None` when the key is absent and `Some` when it is present,
/// whatever the value (including `null`).
#[derive(Debug, Default, Deserialize)]
struct PriceFields {
    #[serde(default, deserialize_with = "present")]
    current_price: Option<PriceValue>,
    #[serde(default, deserialize_with = "present")]
    original_price: Option<PriceValue>,
    #[serde(default, deserialize_with = "present")]
    discount_percent: Option<PriceValue>,
}

/// A price as the backend may send it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceValue {
    Number(f64),
    Text(String),
    Other(Value),
}

impl PriceValue {
    /// Numeric value, accepting numbers and numeric strings.
    fn as_f64(&self) -> Option<f64> {
        let n = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().ok()?,
            Self::Other(_) => return None,
        };
        n.is_finite().then_some(n)
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<PriceValue>, D::Error>
where
    D: Deserializer<'de>,
{
    PriceValue::deserialize(deserializer).map(Some)
}

/// Attach `product_link_argument` to every search listing with a storefront link.
///
/// Listings without a `link` string under the storefront host are left alone,
/// as is a body without a `result` array.
pub fn annotate_search_results(body: &mut Value) {
    let Some(listings) = body.get_mut("result").and_then(Value::as_array_mut) else {
        return;
    };

    let mut annotated = 0usize;
    for listing in listings.iter_mut().filter_map(Value::as_object_mut) {
        let argument = listing
            .get("link")
            .and_then(Value::as_str)
            .and_then(ProductLink::argument_from_listing_url)
            .map(str::to_string);

        if let Some(argument) = argument {
            listing.insert("product_link_argument".to_string(), Value::String(argument));
            annotated += 1;
        }
    }

    debug!(
        "Annotated {} of {} search listings",
        annotated,
        listings.len()
    );
}

/// Attach `flipkart_url` and, where derivable, `calculated_discount_percent`.
///
/// Non-object bodies are returned untouched. An existing `discount_percent`
/// suppresses the calculation.
pub fn annotate_product_detail(body: &mut Value, link: &ProductLink) {
    let discount = PriceFields::deserialize(&*body)
        .ok()
        .and_then(|fields| derived_discount(&fields));

    let Some(detail) = body.as_object_mut() else {
        return;
    };

    detail.insert(
        "flipkart_url".to_string(),
        Value::String(link.canonical_url()),
    );

    if let Some(percent) = discount {
        detail.insert("calculated_discount_percent".to_string(), percent.into());
    }
}

fn derived_discount(fields: &PriceFields) -> Option<f64> {
    if fields.discount_percent.is_some() {
        return None;
    }
    let current = fields.current_price.as_ref()?.as_f64()?;
    let original = fields.original_price.as_ref()?.as_f64()?;
    discount_percent(current, original)
}

/// Percentage saved going from `original` to `current`, rounded to 2 decimals
/// with ties going to the even digit.
///
/// `None` when `original` is not positive or `current` is negative.
pub fn discount_percent(current: f64, original: f64) -> Option<f64> {
    if original <= 0.0 || current < 0.0 {
        return None;
    }
    let percent = (original - current) / original * 100.0;
    let rounded = (percent * 100.0).round_ties_even() / 100.0;
    rounded.is_finite().then_some(rounded)
}
