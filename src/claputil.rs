use std::{ffi::OsStr, future::Future};

use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use tokio::{
    runtime::{Handle, Runtime, RuntimeFlavor},
    task,
};

use crate::{
    CompletionError, Completer, client_for_context,
    catalog::{ResourceTypeCatalog, StaticCatalog},
    prefix::filter_by_prefix,
};

/// Create an `ArgValueCompleter` that lists the built-in resource types.
///
/// No cluster access is needed, so this completer never blocks.
pub fn resource_type_value_completer() -> ArgValueCompleter {
    ArgValueCompleter::new(|input: &OsStr| -> Vec<CompletionCandidate> {
        let input = input.to_string_lossy();
        let input = input.trim();

        filter_by_prefix(StaticCatalog.resource_types(), input)
            .into_iter()
            .map(CompletionCandidate::new)
            .collect()
    })
}

/// Create an `ArgValueCompleter` that lists names of `resource_type` instances.
///
/// Names are listed in `namespace`, or in the namespace of the current kubeconfig
/// context when `None`. `resource_type` may be any friendly name known to [`StaticCatalog`].
///
/// Like every completer here that talks to the cluster, this may be slow and returns
/// an empty list on network, authentication or permission failures.
///
/// Limitation: The context specified by --context is not considered.
/// See https://github.com/clap-rs/clap/issues/1910 for more details.
pub fn resource_name_value_completer(
    resource_type: impl Into<String>,
    namespace: Option<String>,
) -> ArgValueCompleter {
    let resource_type = resource_type.into();
    ArgValueCompleter::new(move |input: &OsStr| -> Vec<CompletionCandidate> {
        let input = input.to_string_lossy();
        let input = input.trim();

        let resource_type = resource_type.as_str();
        let namespace = namespace.clone();
        let completion = async move {
            let context = crate::determine_context(&None).ok();
            let namespace = match &context {
                Some(context) => crate::determine_namespace(namespace, context),
                None => namespace.unwrap_or_else(|| String::from("default")),
            };
            let client = client_for_context(context.as_deref())
                .await
                .map_err(|err| tracing::debug!(error = %err, "failed to build client"))
                .ok()?;
            Completer::new(client)
                .complete(Some(namespace.as_str()), &[resource_type], input)
                .await
                .map_err(log_completion_error)
                .ok()
        };

        block_on_completion(completion)
            .into_iter()
            .map(CompletionCandidate::new)
            .collect()
    })
}

/// Create an `ArgValueCompleter` for a flag whose value names an instance of `resource`.
///
/// Instances are listed cluster-wide. `resource` is a friendly name or a plural resource
/// name as reported by discovery, so custom resources work as well.
pub fn flag_value_completer(resource: impl Into<String>) -> ArgValueCompleter {
    let resource = resource.into();
    ArgValueCompleter::new(move |input: &OsStr| -> Vec<CompletionCandidate> {
        let input = input.to_string_lossy();
        let input = input.trim();

        let resource = resource.as_str();
        let completion = async move {
            let context = crate::determine_context(&None).ok();
            let client = client_for_context(context.as_deref())
                .await
                .map_err(|err| tracing::debug!(error = %err, "failed to build client"))
                .ok()?;
            Completer::new(client)
                .flag_complete(resource, input)
                .await
                .map_err(log_completion_error)
                .ok()
        };

        block_on_completion(completion)
            .into_iter()
            .map(CompletionCandidate::new)
            .collect()
    })
}

/// Create an `ArgValueCompleter` that lists namespaces from the active cluster.
pub fn namespace_value_completer() -> ArgValueCompleter {
    flag_value_completer("namespaces")
}

fn log_completion_error(err: CompletionError) {
    // The variant's fields carry what the display message drops.
    if err.is_resolution_error() {
        tracing::debug!(error = ?err, "{err}");
    } else {
        tracing::warn!(error = ?err, "{err}");
    }
}

/// Drive a completion future to its end and flatten a failure into no candidates.
///
/// If called on an existing Tokio runtime, `Runtime::block_on` will panic.
/// On a multi-threaded runtime we use `block_in_place` to escape to a blocking thread,
/// and from there we call `block_on` with the current handle.
/// `block_in_place` panics on a current-thread runtime, so there the completion runs
/// on a fresh runtime in a separate thread.
fn block_on_completion<F>(completion: F) -> Vec<String>
where
    F: Future<Output = Option<Vec<String>>> + Send,
{
    let candidates = match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            task::block_in_place(move || handle.block_on(completion))
        }
        Ok(_) => std::thread::scope(|scope| {
            scope
                .spawn(|| block_on_fresh_runtime(completion))
                .join()
                .ok()
                .flatten()
        }),
        Err(_) => block_on_fresh_runtime(completion),
    };
    candidates.unwrap_or_default()
}

fn block_on_fresh_runtime<F>(completion: F) -> Option<Vec<String>>
where
    F: Future<Output = Option<Vec<String>>>,
{
    Runtime::new().ok().and_then(|rt| rt.block_on(completion))
}
