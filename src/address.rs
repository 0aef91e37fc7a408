use std::fmt;

use kube::{api::GroupVersionKind, discovery::ApiResource};
use serde::Serialize;

use crate::CompletionError;

/// Group-version string of the core API group, which carries no group segment.
pub const CORE_GROUP_VERSION: &str = "v1";

/// Group/version/resource address of a resource kind.
///
/// `group` is empty for the core API group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceAddress {
    pub group: String,
    pub version: String,
    pub resource: String,
}

impl ResourceAddress {
    /// Build an address from a discovery group-version string and a plural resource name.
    ///
    /// Accepts the bare core version (`v1`) or `group/version`;
    /// every other shape is rejected as malformed.
    pub fn from_group_version(
        group_version: &str,
        resource: &str,
    ) -> Result<Self, CompletionError> {
        let segments: Vec<&str> = group_version.split('/').collect();
        match segments.as_slice() {
            [version] if *version == CORE_GROUP_VERSION => Ok(Self {
                group: String::new(),
                version: version.to_string(),
                resource: resource.to_string(),
            }),
            [group, version] => Ok(Self {
                group: group.to_string(),
                version: version.to_string(),
                resource: resource.to_string(),
            }),
            _ => Err(CompletionError::MalformedDiscoveryData {
                group_version: group_version.to_string(),
            }),
        }
    }

    pub fn is_core(&self) -> bool {
        self.group.is_empty()
    }

    /// Convert into the dynamic type used by `kube::Api<DynamicObject>`.
    ///
    /// The kind is left empty: list requests are routed by group, version and plural only.
    pub fn to_api_resource(&self) -> ApiResource {
        let gvk = GroupVersionKind::gvk(&self.group, &self.version, "");
        ApiResource::from_gvk_with_plural(&gvk, &self.resource)
    }
}

impl fmt::Display for ResourceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_core() {
            write!(f, "{}.{}", self.resource, self.version)
        } else {
            write!(f, "{}.{}.{}", self.resource, self.version, self.group)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ResourceAddress;
    use crate::CompletionError;

    #[test]
    fn parses_core_group() {
        let address = ResourceAddress::from_group_version("v1", "pods").unwrap();
        assert_eq!(address.group, "");
        assert_eq!(address.version, "v1");
        assert_eq!(address.resource, "pods");
        assert!(address.is_core());
        assert_eq!(address.to_string(), "pods.v1");
    }

    #[test]
    fn parses_named_group() {
        let address = ResourceAddress::from_group_version("apps/v1", "deployments").unwrap();
        assert_eq!(address.group, "apps");
        assert_eq!(address.version, "v1");
        assert_eq!(address.to_string(), "deployments.v1.apps");
    }

    #[test]
    fn rejects_malformed_group_versions() {
        for group_version in ["", "v2", "a/b/c", "networking.k8s.io/v1/extra"] {
            let err = ResourceAddress::from_group_version(group_version, "pods").unwrap_err();
            match err {
                CompletionError::MalformedDiscoveryData { group_version: gv } => {
                    assert_eq!(gv, group_version)
                }
                other => panic!("{group_version:?} should be malformed, got {other:?}"),
            }
        }
    }

    #[test]
    fn api_resource_routes_to_plural() {
        let address = ResourceAddress::from_group_version("batch/v1", "cronjobs").unwrap();
        let api_resource = address.to_api_resource();
        assert_eq!(api_resource.group, "batch");
        assert_eq!(api_resource.version, "v1");
        assert_eq!(api_resource.api_version, "batch/v1");
        assert_eq!(api_resource.plural, "cronjobs");
    }
}
