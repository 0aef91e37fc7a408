use kube::Error as KubeError;

/// Errors returned while resolving a resource type or completing its names.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The typed token has no mapping to a canonical plural resource name.
    #[error("{token} not a valid resource name")]
    UnknownResourceType { token: String },

    /// A discovery grouping is neither `v1` nor `group/version`.
    #[error("could not find the requested resource")]
    MalformedDiscoveryData { group_version: String },

    /// The discovery catalog was scanned without a match.
    #[error("could not find the requested resource")]
    ResourceNotFound { resource: String },

    #[error("failed to discover API resources")]
    DiscoveryFailed(#[source] KubeError),

    #[error("failed to list resources")]
    ListFailed(#[source] KubeError),

    /// The completion was aborted by the caller.
    #[error("completion cancelled")]
    Cancelled,
}

impl CompletionError {
    /// Returns true for failures of the resolution step,
    /// as opposed to transport failures or cancellation.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownResourceType { .. }
                | Self::MalformedDiscoveryData { .. }
                | Self::ResourceNotFound { .. }
        )
    }
}
