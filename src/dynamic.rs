use std::future::Future;

use kube::{
    Api, Client, Error as KubeError,
    api::{DynamicObject, ListParams},
};

use crate::ResourceAddress;

/// Where instances of a resource are listed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope<'a> {
    /// Restrict the list to one namespace.
    Namespace(&'a str),
    /// List across the whole cluster.
    AllNamespaces,
}

impl<'a> ListScope<'a> {
    /// An empty or missing namespace lists across all namespaces.
    pub fn from_namespace(namespace: Option<&'a str>) -> Self {
        match namespace {
            Some(ns) if !ns.is_empty() => Self::Namespace(ns),
            _ => Self::AllNamespaces,
        }
    }
}

/// Lists the names of live instances of a resource.
pub trait InstanceLister {
    fn list_names(
        &self,
        address: &ResourceAddress,
        scope: ListScope<'_>,
    ) -> impl Future<Output = Result<Vec<String>, KubeError>>;
}

/// Instance listing through `kube::Api<DynamicObject>`.
///
/// Only object metadata is requested, in a single unpaginated call.
#[derive(Clone)]
pub struct DynamicLister {
    client: Client,
}

impl DynamicLister {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl InstanceLister for DynamicLister {
    async fn list_names(
        &self,
        address: &ResourceAddress,
        scope: ListScope<'_>,
    ) -> Result<Vec<String>, KubeError> {
        let api_resource = address.to_api_resource();
        let api: Api<DynamicObject> = match scope {
            ListScope::Namespace(ns) => {
                Api::namespaced_with(self.client.clone(), ns, &api_resource)
            }
            ListScope::AllNamespaces => Api::all_with(self.client.clone(), &api_resource),
        };

        let list = api.list_metadata(&ListParams::default()).await?;
        tracing::debug!(%address, ?scope, items = list.items.len(), "listed resources");

        Ok(list
            .items
            .into_iter()
            .filter_map(|item| item.metadata.name)
            .collect())
    }
}
