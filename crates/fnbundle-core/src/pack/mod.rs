//! Bundle packing operations.
//!
//! Two traversal strategies write filesystem files into an open zip
//! writer: [`pack_flat`] takes a single named file or the immediate
//! children of a directory, [`pack_tree`] mirrors a whole directory
//! tree. Both share one naming rule ([`entry::archive_name`]) and one
//! exclusion policy ([`SourceFilter`]); [`pack_program`] adds the
//! compiled program entry the bundle is built around.

pub mod config;
pub mod entry;
pub mod exclude;
pub mod flat;
pub mod program;
pub mod report;
pub mod tree;

// Re-exports for public API
pub use config::PackConfig;
pub use exclude::SourceFilter;
pub use flat::pack_flat;
pub use program::pack_program;
pub use report::PackReport;
pub use tree::pack_tree;
