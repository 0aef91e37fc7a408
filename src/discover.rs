use std::future::Future;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::APIResourceList;
use kube::Error as KubeError;

pub mod client;

/// Which resources a discovery pass should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryScope {
    /// Only namespaced resources, for completing names inside a namespace.
    Namespaced,
    /// Every resource the server prefers, namespaced or cluster-scoped.
    All,
}

/// Source of the server's preferred API resources.
pub trait ServerResources {
    /// Fetch the preferred resources of every API group, grouped by group-version.
    fn server_preferred_resources(
        &self,
        scope: DiscoveryScope,
    ) -> impl Future<Output = Result<Vec<APIResourceList>, KubeError>>;
}

/// Drop subresources and, for [`DiscoveryScope::Namespaced`], cluster-scoped resources.
/// Groupings left without resources are removed.
pub fn retain_scope(lists: Vec<APIResourceList>, scope: DiscoveryScope) -> Vec<APIResourceList> {
    lists
        .into_iter()
        .filter_map(|mut list| {
            list.resources.retain(|api_resource| {
                !api_resource.name.contains('/')
                    && (scope == DiscoveryScope::All || api_resource.namespaced)
            });
            (!list.resources.is_empty()).then_some(list)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::APIResourceList;

    use super::{DiscoveryScope, retain_scope};
    use crate::resolve::tests::api_resource;

    fn catalog() -> Vec<APIResourceList> {
        vec![
            APIResourceList {
                group_version: String::from("v1"),
                resources: vec![
                    api_resource("pods", true),
                    api_resource("pods/log", true),
                    api_resource("namespaces", false),
                    api_resource("nodes", false),
                ],
            },
            APIResourceList {
                group_version: String::from("storage.k8s.io/v1"),
                resources: vec![api_resource("storageclasses", false)],
            },
        ]
    }

    fn names(lists: &[APIResourceList]) -> Vec<(&str, &str)> {
        lists
            .iter()
            .flat_map(|list| {
                list.resources
                    .iter()
                    .map(move |r| (list.group_version.as_str(), r.name.as_str()))
            })
            .collect()
    }

    #[test]
    fn namespaced_scope_drops_cluster_resources() {
        let lists = retain_scope(catalog(), DiscoveryScope::Namespaced);
        assert_eq!(names(&lists), vec![("v1", "pods")]);
    }

    #[test]
    fn all_scope_keeps_cluster_resources() {
        let lists = retain_scope(catalog(), DiscoveryScope::All);
        assert_eq!(
            names(&lists),
            vec![
                ("v1", "pods"),
                ("v1", "namespaces"),
                ("v1", "nodes"),
                ("storage.k8s.io/v1", "storageclasses"),
            ]
        );
    }
}
