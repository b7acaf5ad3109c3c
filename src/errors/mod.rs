use anyhow::Context as _;

/// Context for failed navigations
pub fn navigation_context(target: &str) -> String {
    format!("Failed to navigate to: {}", target)
}

/// Context for output that could not be written
pub fn output_context(what: &str) -> String {
    format!("Failed to write {}", what)
}

/// Wrap result with navigation context
pub fn with_navigation_context<T>(result: anyhow::Result<T>, target: &str) -> anyhow::Result<T> {
    result.with_context(|| navigation_context(target))
}

/// Wrap result with output context
pub fn with_output_context<T, E>(result: Result<T, E>, what: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| output_context(what))
}
