//! Configuration for packing operations.

use crate::pack::exclude::SourceFilter;
use std::path::Path;

/// Controls which files a packing operation includes.
///
/// Constructed per invocation by the assembler and passed by reference
/// to a single packing call; the packers never retain it.
///
/// # Examples
///
/// ```
/// use fnbundle_core::PackConfig;
///
/// // Default policy: source files are excluded.
/// let config = PackConfig::default();
///
/// // Bundle everything, sources included.
/// let everything = PackConfig::default().with_all_files(true);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PackConfig {
    /// Include files regardless of the source-extension exclusion set.
    ///
    /// Default: `false`.
    pub all_files: bool,

    /// The exclusion policy applied when `all_files` is `false`.
    pub filter: SourceFilter,
}

impl PackConfig {
    /// Creates a `PackConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether source files are included.
    #[must_use]
    pub fn with_all_files(mut self, all_files: bool) -> Self {
        self.all_files = all_files;
        self
    }

    /// Sets the exclusion filter.
    #[must_use]
    pub fn with_filter(mut self, filter: SourceFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Returns `true` if this configuration rejects `path`.
    #[must_use]
    pub fn excludes(&self, path: &Path) -> bool {
        !self.all_files && self.filter.is_excluded(path)
    }
}
