//! Flat packing: a single named file or a directory's immediate
//! children.

use crate::BundleError;
use crate::Result;
use crate::pack::config::PackConfig;
use crate::pack::entry;
use crate::pack::report::PackReport;
use std::fs;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;

/// Packs `root` into `zip` under `base` without descending into
/// subdirectories.
///
/// A regular-file `root` produces exactly one entry named
/// `base/<file name>`. A directory `root` produces one entry per
/// immediate regular-file child, in whatever order the directory
/// listing returns; subdirectories and non-regular entries are skipped.
/// Mode bits and modification times are preserved on every entry.
///
/// # Errors
///
/// - [`BundleError::SourceNotFound`] if `root` does not exist.
/// - [`BundleError::NotRegularFile`] if `root` is neither a directory
///   nor a regular file.
/// - [`BundleError::ExcludedSource`] if `root` directly names a file
///   with an excluded extension while `config.all_files` is unset. This
///   is the one place exclusion is fatal: a caller who names a single
///   file wants to know why it was rejected. Excluded files found while
///   listing a directory are skipped without error.
/// - Any I/O failure while reading or writing an included entry aborts
///   the whole operation.
pub fn pack_flat<W: Write + Seek>(
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
    let metadata = fs::metadata(root)?;

    if !metadata.is_dir() {
        return pack_named_file(zip, root, base, config, &metadata);
    }

    let mut report = PackReport::default();
    for dir_entry in fs::read_dir(root)? {
        let dir_entry = dir_entry?;
        let file_type = dir_entry.file_type()?;
        if file_type.is_dir() {
            continue;
        }
        if !file_type.is_file() {
            report.files_skipped += 1;
            continue;
        }
        let name = dir_entry.file_name();
        if config.excludes(Path::new(&name)) {
            report.files_skipped += 1;
            continue;
        }

        let entry_name = entry::archive_name(base, Path::new(&name))?;
        let metadata = dir_entry.metadata()?;
        report.bytes_written += entry::write_file(
            zip,
            &dir_entry.path(),
            &entry_name,
            entry::entry_options(&metadata),
        )?;
        report.files_added += 1;
    }
    Ok(report)
}

/// Packs a directly named file. Exclusion here is a hard error rather
/// than a silent skip.
fn pack_named_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    root: &Path,
    base: &str,
    config: &PackConfig,
    metadata: &fs::Metadata,
) -> Result<PackReport> {
    if !metadata.is_file() {
        return Err(BundleError::NotRegularFile {
            path: root.to_path_buf(),
        });
    }
    if config.excludes(root) {
        return Err(BundleError::ExcludedSource {
            path: root.to_path_buf(),
        });
    }

    let file_name = root.file_name().ok_or_else(|| {
        BundleError::Io(std::io::Error::other(format!(
            "cannot determine file name for {}",
            root.display()
        )))
    })?;
    let entry_name = entry::archive_name(base, Path::new(file_name))?;
    let bytes_written =
        entry::write_file(zip, root, &entry_name, entry::entry_options(metadata))?;
    Ok(PackReport {
        files_added: 1,
        files_skipped: 0,
        bytes_written,
    })
}
