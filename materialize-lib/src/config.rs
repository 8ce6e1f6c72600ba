//! Render configuration

/// Selector used to find the mount point when none is configured.
pub const DEFAULT_CONTAINER_SELECTOR: &str = "#root";

/// Configuration for [`render_into`](crate::render_into).
///
/// # Example
///
/// ```
/// use materialize_lib::RenderConfig;
///
/// let config = RenderConfig::default().with_container_selector("main#app");
/// assert_eq!(config.container_selector(), "main#app");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Selector for the container that receives rendered nodes.
    ///
    /// Default: `#root`
    container_selector: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
        }
    }
}

impl RenderConfig {
    /// Creates a new render config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the container selector.
    pub fn with_container_selector(mut self, selector: impl Into<String>) -> Self {
        self.container_selector = selector.into();
        self
    }

    pub fn container_selector(&self) -> &str {
        &self.container_selector
    }
}
