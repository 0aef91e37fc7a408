#![cfg_attr(not(doctest), doc = include_str!("../README.md"))]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use clap_complete;
pub use k8s_openapi;
pub use kube;

mod address;
pub use address::{CORE_GROUP_VERSION, ResourceAddress};
pub mod catalog;
pub mod claputil;
pub use claputil::{
    flag_value_completer, namespace_value_completer, resource_name_value_completer,
    resource_type_value_completer,
};
mod complete;
pub use complete::{Completer, cancellable};
pub mod discover;
pub mod dynamic;
mod error;
pub use error::CompletionError;
#[cfg(test)]
mod mock;
pub mod prefix;
pub mod resolve;

use kube::{
    Client, Config,
    config::{KubeConfigOptions, Kubeconfig},
};

/// Detects the Kubernetes context based on the provided `context` argument.
///
/// Context determination follows this priority:
/// 1. Uses the context if explicitly specified.
/// 2. Retrieves the current context from the kubeconfig file.
///
/// # Errors
/// Returns an error if the kubeconfig file cannot be read or if no current context is set in the kubeconfig.
pub fn determine_context(context: &Option<String>) -> anyhow::Result<String> {
    match context {
        Some(context) => Ok(context.to_string()),
        _ => {
            let kubeconfig = Kubeconfig::read()?;
            Ok(kubeconfig
                .current_context
                .ok_or_else(|| anyhow::anyhow!("current_context is not set"))?)
        }
    }
}

/// Determines the Kubernetes namespace based on the provided `namespace` and `context`.
///
/// Namespace determination follows this priority:
/// 1. Uses the namespace if explicitly specified.
/// 2. Retrieves the default namespace associated with the context from kubeconfig.
/// 3. Uses "default".
pub fn determine_namespace(namespace: Option<String>, context: &str) -> String {
    if let Some(ns) = namespace {
        return ns;
    }

    match Kubeconfig::read() {
        Ok(kubeconfig) => kubeconfig
            .contexts
            .iter()
            .find(|c| c.name == context)
            .and_then(|context| {
                context
                    .context
                    .as_ref()
                    .and_then(|ctx| ctx.namespace.clone())
            })
            .unwrap_or_else(|| String::from("default")),
        Err(_) => String::from("default"),
    }
}

/// Build a client for `context` from the kubeconfig file.
///
/// Without a context the client is inferred the way `kube::Client::try_default` does,
/// which also covers in-cluster configuration.
pub async fn client_for_context(context: Option<&str>) -> anyhow::Result<Client> {
    let config = match context {
        Some(context) => {
            let options = KubeConfigOptions {
                context: Some(context.to_string()),
                ..Default::default()
            };
            Config::from_custom_kubeconfig(Kubeconfig::read()?, &options).await?
        }
        None => Config::infer().await?,
    };
    tracing::debug!(cluster_url = %config.cluster_url, context, "building client");
    Ok(Client::try_from(config)?)
}
