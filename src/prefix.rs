/// Checks whether `candidate` should be offered for the typed `prefix`.
///
/// The prefix is compared literally, never interpreted as a pattern.
pub fn matches_prefix(candidate: &str, prefix: &str) -> bool {
    candidate.starts_with(prefix)
}

/// Keep the candidates that start with `prefix`, preserving their order.
pub fn filter_by_prefix<I, S>(candidates: I, prefix: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String> + AsRef<str>,
{
    candidates
        .into_iter()
        .filter(|candidate| matches_prefix(candidate.as_ref(), prefix))
        .map(Into::into)
        .collect()
}
