//! The program entry a bundle is assembled around.

use crate::BundleError;
use crate::Result;
use crate::pack::entry;
use crate::pack::report::PackReport;
use std::fs;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;

/// Mode bits applied to the program entry: executable, read-only.
const PROGRAM_MODE: u32 = 0o555;

/// Writes the compiled program as a single archive entry named `name`.
///
/// The entry's unix mode is forced to `0o555` so the program is
/// executable in the target environment no matter how the build left it
/// on disk; the modification time is preserved. No exclusion policy
/// applies here — the program is always included. Callers typically
/// write this entry first, at the archive root.
///
/// # Errors
///
/// - [`BundleError::SourceNotFound`] if `source` does not exist.
/// - [`BundleError::NotRegularFile`] if `source` is not a regular file.
/// - Any I/O failure while reading the program or writing the entry.
pub fn pack_program<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    source: &Path,
    name: &str,
) -> Result<PackReport> {
    if !source.exists() {
        return Err(BundleError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }
    let metadata = fs::metadata(source)?;
    if !metadata.is_file() {
        return Err(BundleError::NotRegularFile {
            path: source.to_path_buf(),
        });
    }

    let options = entry::entry_options(&metadata).unix_permissions(PROGRAM_MODE);
    let bytes_written = entry::write_file(zip, source, name, options)?;
    Ok(PackReport {
        files_added: 1,
        files_skipped: 0,
        bytes_written,
    })
}
