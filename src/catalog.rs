use crate::CompletionError;

/// Static knowledge about which resource types can be completed
/// and how their friendly names map to plural resource names.
pub trait ResourceTypeCatalog {
    /// Resource-type tokens offered for completion, in display order.
    ///
    /// Every token offered here names a namespaced resource.
    fn resource_types(&self) -> Vec<String>;

    /// Map a friendly name (plural, singular or short name) to its plural resource name.
    fn plural_name(&self, token: &str) -> Result<String, CompletionError>;
}

struct ResourceType {
    plural: &'static str,
    aliases: &'static [&'static str],
    namespaced: bool,
}

const RESOURCE_TYPES: &[ResourceType] = &[
    ResourceType {
        plural: "cronjobs",
        aliases: &["cronjob", "cj"],
        namespaced: true,
    },
    ResourceType {
        plural: "daemonsets",
        aliases: &["daemonset", "ds"],
        namespaced: true,
    },
    ResourceType {
        plural: "deployments",
        aliases: &["deployment", "deploy"],
        namespaced: true,
    },
    ResourceType {
        plural: "jobs",
        aliases: &["job"],
        namespaced: true,
    },
    ResourceType {
        plural: "namespaces",
        aliases: &["namespace", "ns"],
        namespaced: false,
    },
    ResourceType {
        plural: "pods",
        aliases: &["pod", "po"],
        namespaced: true,
    },
    ResourceType {
        plural: "replicasets",
        aliases: &["replicaset", "rs"],
        namespaced: true,
    },
    ResourceType {
        plural: "replicationcontrollers",
        aliases: &["replicationcontroller", "rc"],
        namespaced: true,
    },
    ResourceType {
        plural: "services",
        aliases: &["service", "svc"],
        namespaced: true,
    },
    ResourceType {
        plural: "statefulsets",
        aliases: &["statefulset", "sts"],
        namespaced: true,
    },
];

/// The built-in catalog of workload and core resource types.
///
/// Lookups are case-insensitive, so kinds such as `Deployment` resolve as well.
/// Cluster-scoped types are recognized by [`ResourceTypeCatalog::plural_name`]
/// but not offered as positional completions.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl ResourceTypeCatalog for StaticCatalog {
    fn resource_types(&self) -> Vec<String> {
        RESOURCE_TYPES
            .iter()
            .filter(|resource_type| resource_type.namespaced)
            .map(|resource_type| resource_type.plural.to_string())
            .collect()
    }

    fn plural_name(&self, token: &str) -> Result<String, CompletionError> {
        let token_lower = token.to_lowercase();
        RESOURCE_TYPES
            .iter()
            .find(|resource_type| {
                resource_type.plural == token_lower
                    || resource_type.aliases.contains(&token_lower.as_str())
            })
            .map(|resource_type| resource_type.plural.to_string())
            .ok_or_else(|| CompletionError::UnknownResourceType {
                token: token.to_string(),
            })
    }
}
