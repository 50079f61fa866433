//! Tree packing: recursive directory mirroring.

use crate::BundleError;
use crate::Result;
use crate::pack::config::PackConfig;
use crate::pack::entry;
use crate::pack::report::PackReport;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;
use zip::ZipWriter;

/// Packs every regular file under `root` into `zip`, mirroring the
/// directory structure under `base`.
///
/// Each file's entry is named `base/<path relative to root>`,
/// forward-slash separated, so the layout under `root` is reproduced
/// under `base` in the archive. Directories produce no entries of their
/// own; the tree shape is carried entirely by file entry names. The
/// walk never follows symlinks, and symlinks and other non-regular
/// entries are skipped even when `config.all_files` is set. Mode bits
/// and modification times are preserved.
///
/// # Errors
///
/// - [`BundleError::SourceNotFound`] if `root` does not exist.
/// - [`BundleError::Walk`] if traversal fails (an unreadable
///   directory aborts the whole walk; it is not a per-entry skip).
/// - Any I/O failure while reading or writing an included file aborts
///   and propagates; nothing is retried.
pub fn pack_tree<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    root: &Path,
    base: &str,
    config: &PackConfig,
) -> Result<PackReport> {
    if !root.exists() {
        return Err(BundleError::SourceNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut report = PackReport::default();
    for dir_entry in WalkDir::new(root).min_depth(1).follow_links(false) {
        let dir_entry = dir_entry?;
        let file_type = dir_entry.file_type();
        if file_type.is_dir() {
            continue;
        }
        if !file_type.is_file() {
            report.files_skipped += 1;
            continue;
        }

        let path = dir_entry.path();
        if config.excludes(path) {
            report.files_skipped += 1;
            continue;
        }

        let relative = path.strip_prefix(root).map_err(|_| {
            BundleError::Io(std::io::Error::other(format!(
                "walked path {} is not under {}",
                path.display(),
                root.display()
            )))
        })?;
        let entry_name = entry::archive_name(base, relative)?;
        let metadata = dir_entry.metadata()?;
        report.bytes_written +=
            entry::write_file(zip, path, &entry_name, entry::entry_options(&metadata))?;
        report.files_added += 1;
    }
    Ok(report)
}
