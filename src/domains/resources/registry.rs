//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{
    ApiStatusResource, ProductHelpResource, ResourceDefinition, SearchHelpResource,
    ServerInfoResource,
};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all registered resources as ResourceEntries, in listing order.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<SearchHelpResource>(),
        build_resource::<ProductHelpResource>(),
        build_resource::<ApiStatusResource>(),
        build_resource::<ServerInfoResource>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 4);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert_eq!(
            uris,
            vec![
                SearchHelpResource::URI,
                ProductHelpResource::URI,
                ApiStatusResource::URI,
                ServerInfoResource::URI,
            ]
        );
    }

    #[test]
    fn test_resources_carry_mime_types() {
        for entry in get_all_resources() {
            assert!(entry.resource.raw.mime_type.is_some());
            assert!(entry.resource.raw.description.is_some());
        }
    }
}
