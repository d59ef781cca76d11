//! Resource service implementation.
//!
//! The ResourceService lists the registered resources and reads them. Static
//! resources are served from memory; dynamic ones are computed on each read,
//! which for the status page means one probe of the catalog backend.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::sync::Arc;
use tracing::{debug, info};

use super::definitions::ServerInfoResource;
use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::domains::catalog::CatalogService;

/// Service for managing and accessing resources.
pub struct ResourceService {
    catalog: Arc<CatalogService>,

    /// Registered resources, in listing order.
    resources: Vec<ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content that requires computation.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicResourceType {
    /// Reachability of the catalog backend.
    ApiStatus,

    /// Server capabilities and backend configuration.
    ServerInfo,
}

impl ResourceService {
    /// Create a new ResourceService reading from `catalog`.
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            catalog,
            resources: Vec::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources.push(entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .iter()
            .find(|entry| entry.resource.raw.uri == uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = match &entry.content {
            ResourceContent::Text(text) => text.clone(),
            ResourceContent::Dynamic(dynamic_type) => self.resolve_dynamic_content(*dynamic_type).await,
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }

    /// Resolve dynamic resource content.
    async fn resolve_dynamic_content(&self, dynamic_type: DynamicResourceType) -> String {
        let client = self.catalog.client();
        match dynamic_type {
            DynamicResourceType::ApiStatus => {
                let status = self.catalog.api_status().await;
                info!("API status probe: {}", status);
                status.describe(client.base_url())
            }
            DynamicResourceType::ServerInfo => ServerInfoResource::render(client.config()),
        }
    }
}
