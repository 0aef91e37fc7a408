use std::future::Future;

use futures::future::{AbortRegistration, Abortable};
use kube::Client;

use crate::{
    CompletionError, ResourceAddress,
    catalog::{ResourceTypeCatalog, StaticCatalog},
    discover::{DiscoveryScope, ServerResources, client::DiscoverClient},
    dynamic::{DynamicLister, InstanceLister, ListScope},
    prefix::filter_by_prefix,
    resolve::resolve_address,
};

/// Completes resource types and resource names against a cluster.
pub struct Completer<D, L, C = StaticCatalog> {
    discovery: D,
    lister: L,
    catalog: C,
}

impl Completer<DiscoverClient, DynamicLister, StaticCatalog> {
    /// Create a completer backed by a live cluster and the built-in resource types.
    pub fn new(client: Client) -> Self {
        Self::with_parts(
            DiscoverClient::new(client.clone()),
            DynamicLister::new(client),
            StaticCatalog,
        )
    }
}

impl<D, L, C> Completer<D, L, C>
where
    D: ServerResources,
    L: InstanceLister,
    C: ResourceTypeCatalog,
{
    pub fn with_parts(discovery: D, lister: L, catalog: C) -> Self {
        Self {
            discovery,
            lister,
            catalog,
        }
    }

    /// Resolve a friendly resource-type token to its address.
    ///
    /// `scope` selects the discovery catalog the token is looked up in.
    pub async fn resolve(
        &self,
        token: &str,
        scope: DiscoveryScope,
    ) -> Result<ResourceAddress, CompletionError> {
        let plural = self.catalog.plural_name(token)?;
        self.resolve_plural(&plural, scope).await
    }

    async fn resolve_plural(
        &self,
        plural: &str,
        scope: DiscoveryScope,
    ) -> Result<ResourceAddress, CompletionError> {
        let catalog = self
            .discovery
            .server_preferred_resources(scope)
            .await
            .map_err(CompletionError::DiscoveryFailed)?;
        resolve_address(plural, &catalog)
    }

    /// Complete positional arguments of the form `<type> <name>`.
    ///
    /// With no arguments the resource types are offered. With the type given,
    /// names of its instances in `namespace` are offered; `None` lists all namespaces.
    /// Once the name is present there is nothing more to complete.
    pub async fn complete<S: AsRef<str>>(
        &self,
        namespace: Option<&str>,
        args: &[S],
        to_complete: &str,
    ) -> Result<Vec<String>, CompletionError> {
        match args {
            [] if to_complete.is_empty() => Ok(self.catalog.resource_types()),
            [] => Ok(filter_by_prefix(self.catalog.resource_types(), to_complete)),
            [resource_type] => {
                let address = self
                    .resolve(resource_type.as_ref(), DiscoveryScope::Namespaced)
                    .await?;
                self.list_matching(&address, ListScope::from_namespace(namespace), to_complete)
                    .await
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Complete a flag value naming an instance of `resource`, across the whole cluster.
    ///
    /// `resource` is normalized through the catalog when it is a known resource type,
    /// otherwise it is taken as a plural resource name.
    pub async fn flag_complete(
        &self,
        resource: &str,
        to_complete: &str,
    ) -> Result<Vec<String>, CompletionError> {
        let plural = self
            .catalog
            .plural_name(resource)
            .unwrap_or_else(|_| resource.to_string());
        let address = self.resolve_plural(&plural, DiscoveryScope::All).await?;
        self.list_matching(&address, ListScope::AllNamespaces, to_complete)
            .await
    }

    async fn list_matching(
        &self,
        address: &ResourceAddress,
        scope: ListScope<'_>,
        to_complete: &str,
    ) -> Result<Vec<String>, CompletionError> {
        let names = self
            .lister
            .list_names(address, scope)
            .await
            .map_err(CompletionError::ListFailed)?;
        Ok(filter_by_prefix(names, to_complete))
    }
}

/// Run a completion until it finishes or the paired `AbortHandle` fires.
pub async fn cancellable<T, F>(
    registration: AbortRegistration,
    completion: F,
) -> Result<T, CompletionError>
where
    F: Future<Output = Result<T, CompletionError>>,
{
    Abortable::new(completion, registration)
        .await
        .map_err(|_| CompletionError::Cancelled)?
}
