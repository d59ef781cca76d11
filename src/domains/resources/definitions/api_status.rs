//! API status resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// Live reachability of the catalog backend (dynamic).
pub struct ApiStatusResource;

impl ResourceDefinition for ApiStatusResource {
    const URI: &'static str = "flipkart://api/status";
    const NAME: &'static str = "API Status";
    const DESCRIPTION: &'static str = "Real-time status of the Flipkart API server";
    const MIME_TYPE: &'static str = "text/plain";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ApiStatus)
    }
}
