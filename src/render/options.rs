//! Rendering options and configuration.

/// Options for rendering an assembled document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Prepend the title/provenance header
    pub include_header: bool,

    /// Collect extraction statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the metadata header.
    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_header: true,
            collect_stats: false,
        }
    }
}
