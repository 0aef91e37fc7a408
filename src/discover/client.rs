use k8s_openapi::apimachinery::pkg::apis::meta::v1::APIResourceList;
use kube::{Client, Error as KubeError};

use super::{DiscoveryScope, ServerResources, retain_scope};

/// Discovery against a live API server.
///
/// Walks the legacy core API and the preferred version of every API group.
/// Nothing is cached: each call issues fresh discovery requests.
#[derive(Clone)]
pub struct DiscoverClient {
    client: Client,
}

impl DiscoverClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// List the preferred resources of all API groups, including cluster-scoped ones.
    pub async fn list_api_resources(&self) -> Result<Vec<APIResourceList>, KubeError> {
        let mut lists = Vec::new();

        let core_versions = self.client.list_core_api_versions().await?;
        if let Some(version) = core_versions.versions.first() {
            lists.push(self.client.list_core_api_resources(version).await?);
        }

        let groups = self.client.list_api_groups().await?;
        for group in groups.groups {
            let Some(preferred) = group
                .preferred_version
                .as_ref()
                .or_else(|| group.versions.first())
            else {
                tracing::trace!(group = %group.name, "skipping group without versions");
                continue;
            };
            lists.push(
                self.client
                    .list_api_group_resources(&preferred.group_version)
                    .await?,
            );
        }

        tracing::debug!(groups = lists.len(), "discovered API groups");
        Ok(lists)
    }
}

impl ServerResources for DiscoverClient {
    async fn server_preferred_resources(
        &self,
        scope: DiscoveryScope,
    ) -> Result<Vec<APIResourceList>, KubeError> {
        let lists = self.list_api_resources().await?;
        Ok(retain_scope(lists, scope))
    }
}
