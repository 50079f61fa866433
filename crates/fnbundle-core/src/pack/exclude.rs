//! Source-file exclusion policy.
//!
//! Bundles carry a compiled program plus auxiliary data, and auxiliary
//! directories frequently sit next to the project's own source files.
//! The filter here keeps those sources out of the bundle unless the
//! caller explicitly asks for everything.

use std::path::Path;

/// Extensions treated as source code and excluded from bundles by
/// default: compiled-language sources, headers, assembly, SWIG
/// interfaces, and system object files.
///
/// `.s` and `.S` are both listed; matching is case-sensitive and the two
/// are distinct entries.
const SOURCE_EXTENSIONS: &[&str] = &[
    ".S", ".c", ".cc", ".cpp", ".cxx", ".go", ".h", ".hh", ".hpp", ".hxx", ".m", ".s", ".swig",
    ".swigcxx", ".syso",
];

/// Classifies file names as source-like by extension.
///
/// The filter is an immutable value: the extension set is fixed at
/// construction and never mutated. [`SourceFilter::default`] uses the
/// built-in source-extension set.
///
/// # Examples
///
/// ```
/// use fnbundle_core::SourceFilter;
/// use std::path::Path;
///
/// let filter = SourceFilter::default();
/// assert!(filter.is_excluded(Path::new("main.go")));
/// assert!(!filter.is_excluded(Path::new("index.html")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SourceFilter {
    extensions: &'static [&'static str],
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self {
            extensions: SOURCE_EXTENSIONS,
        }
    }
}

impl SourceFilter {
    /// Creates a filter over a caller-supplied extension list.
    ///
    /// Entries must include the leading dot (`".go"`, not `"go"`).
    #[must_use]
    pub const fn new(extensions: &'static [&'static str]) -> Self {
        Self { extensions }
    }

    /// Returns `true` if the file name's extension is in the exclusion
    /// set.
    ///
    /// The extension is the suffix starting at the last `.` of the file
    /// name, dot included; a name with no dot has no extension and is
    /// never excluded. Comparison is exact and case-sensitive. Only the
    /// final path component is inspected.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            return false;
        };
        match name.rfind('.') {
            Some(idx) => {
                let ext = &name[idx..];
                self.extensions.iter().any(|candidate| *candidate == ext)
            }
            None => false,
        }
    }
}
