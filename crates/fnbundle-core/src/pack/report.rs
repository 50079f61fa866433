//! Packing operation statistics.

/// Statistics for one or more packing operations.
///
/// Every packing operation returns a report; the assembler merges them
/// to summarize the whole bundle.
///
/// # Examples
///
/// ```
/// use fnbundle_core::PackReport;
///
/// let mut total = PackReport::default();
/// total.merge(PackReport {
///     files_added: 2,
///     files_skipped: 1,
///     bytes_written: 512,
/// });
/// assert_eq!(total.files_added, 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackReport {
    /// Number of archive entries written.
    pub files_added: usize,

    /// Number of enumerated files skipped by type or exclusion policy.
    pub files_skipped: usize,

    /// Uncompressed bytes streamed into the archive.
    pub bytes_written: u64,
}

impl PackReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds another report into this one.
    pub fn merge(&mut self, other: Self) {
        self.files_added += other.files_added;
        self.files_skipped += other.files_skipped;
        self.bytes_written += other.bytes_written;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_accumulates() {
        let mut total = PackReport::default();
        total.merge(PackReport {
            files_added: 3,
            files_skipped: 1,
            bytes_written: 100,
        });
        total.merge(PackReport {
            files_added: 2,
            files_skipped: 0,
            bytes_written: 50,
        });

        assert_eq!(
            total,
            PackReport {
                files_added: 5,
                files_skipped: 1,
                bytes_written: 150,
            }
        );
    }

    #[test]
    fn test_default_is_empty() {
        let report = PackReport::new();
        assert_eq!(report.files_added, 0);
        assert_eq!(report.files_skipped, 0);
        assert_eq!(report.bytes_written, 0);
    }
}
