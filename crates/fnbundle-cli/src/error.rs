//! Error conversion utilities for the CLI.
//!
//! Converts fnbundle-core's typed errors (thiserror) into user-facing
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use fnbundle_core::BundleError;

/// Converts a `BundleError` from one include request into a
/// user-friendly anyhow error with context.
pub fn convert_bundle_error(err: BundleError, request: &str) -> anyhow::Error {
    match err {
        BundleError::ExcludedSource { path } => {
            anyhow!(
                "'{}' looks like a source file and was excluded from the bundle\n\
                 HINT: Pass --all-files to bundle source files as well.",
                path.display()
            )
        }
        BundleError::SourceNotFound { path } => {
            anyhow!(
                "include request '{request}' refers to '{}', which does not exist",
                path.display()
            )
        }
        BundleError::NotRegularFile { path } => {
            anyhow!(
                "'{}' is neither a directory nor a regular file and cannot be bundled",
                path.display()
            )
        }
        other => anyhow::Error::from(other)
            .context(format!("failed to process include request '{request}'")),
    }
}

/// Adds include-request context to a core packing result.
pub fn add_request_context<T>(
    result: Result<T, BundleError>,
    request: &str,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_bundle_error(e, request))
}
