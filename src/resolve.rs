use k8s_openapi::apimachinery::pkg::apis::meta::v1::{APIResource, APIResourceList};

use crate::{CompletionError, ResourceAddress};

/// Flatten a discovery catalog into `(group_version, descriptor)` pairs,
/// in catalog iteration order.
pub fn catalog_entries(
    catalog: &[APIResourceList],
) -> impl Iterator<Item = (&str, &APIResource)> {
    catalog.iter().flat_map(|list| {
        list.resources
            .iter()
            .map(move |api_resource| (list.group_version.as_str(), api_resource))
    })
}

/// Find the address of the resource whose plural name is `plural`.
///
/// The first matching descriptor wins. Discovery catalogs are unordered, so when two
/// groups serve the same plural name the result depends on the order the server returned.
/// Only the grouping holding the match is parsed; other malformed groupings are ignored.
pub fn resolve_address(
    plural: &str,
    catalog: &[APIResourceList],
) -> Result<ResourceAddress, CompletionError> {
    let (group_version, api_resource) = catalog_entries(catalog)
        .find(|(_, api_resource)| api_resource.name == plural)
        .ok_or_else(|| CompletionError::ResourceNotFound {
            resource: plural.to_string(),
        })?;

    let address = ResourceAddress::from_group_version(group_version, &api_resource.name)?;
    tracing::debug!(%address, group_version, "resolved resource");
    Ok(address)
}
