//! Shared entry naming and header construction.
//!
//! Archive entry names always follow one rule: forward-slash join of the
//! caller's base prefix and the file's name or relative path. Both
//! traversal strategies go through this module, so flat and tree packing
//! cannot drift apart in how they name or stamp entries.

use crate::BundleError;
use crate::Result;
use std::fs::File;
use std::fs::Metadata;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use time::OffsetDateTime;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Buffer size for streaming file contents into the archive.
const COPY_BUF_SIZE: usize = 64 * 1024;

/// Joins `base` and a relative path into an archive entry name.
///
/// The result always uses forward slashes regardless of host path
/// conventions. An empty `base` names the entry at the archive's top
/// level; a trailing `/` on `base` is ignored.
///
/// # Errors
///
/// Returns [`BundleError::NonUnicodePath`] if `relative` cannot be
/// represented as UTF-8.
///
/// # Examples
///
/// ```
/// use fnbundle_core::pack::entry::archive_name;
/// use std::path::Path;
///
/// assert_eq!(archive_name("static", Path::new("test1.txt"))?, "static/test1.txt");
/// assert_eq!(archive_name("", Path::new("html/index.html"))?, "html/index.html");
/// # Ok::<(), fnbundle_core::BundleError>(())
/// ```
pub fn archive_name(base: &str, relative: &Path) -> Result<String> {
    let rel = relative
        .to_str()
        .ok_or_else(|| BundleError::NonUnicodePath {
            path: relative.to_path_buf(),
        })?;

    #[cfg(windows)]
    let rel = rel.replace('\\', "/");
    #[cfg(not(windows))]
    let rel = rel.to_string();

    let base = base.trim_end_matches('/');
    if base.is_empty() {
        Ok(rel)
    } else {
        Ok(format!("{base}/{rel}"))
    }
}

/// Builds entry options carrying the source file's mode bits and
/// modification time.
///
/// A modification time that does not fit the archive format's range
/// falls back to the format default rather than failing the entry.
pub(crate) fn entry_options(metadata: &Metadata) -> SimpleFileOptions {
    let mut options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        options = options.unix_permissions(metadata.permissions().mode());
    }

    if let Ok(modified) = metadata.modified()
        && let Ok(mtime) = zip::DateTime::try_from(OffsetDateTime::from(modified))
    {
        options = options.last_modified_time(mtime);
    }

    options
}

/// Writes one regular file as an archive entry, streaming its contents.
///
/// The source handle is scoped to this call and released on every exit
/// path. Returns the number of bytes written.
pub(crate) fn write_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    source: &Path,
    name: &str,
    options: SimpleFileOptions,
) -> Result<u64> {
    let mut file = File::open(source)?;
    zip.start_file(name, options)?;

    let mut buffer = vec![0u8; COPY_BUF_SIZE];
    let mut bytes_written = 0u64;
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
        bytes_written += bytes_read as u64;
    }
    Ok(bytes_written)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Allow unwrap in tests for brevity
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_archive_name_with_base() {
        assert_eq!(
            archive_name("static", Path::new("test1.txt")).unwrap(),
            "static/test1.txt"
        );
        assert_eq!(
            archive_name("a/b", Path::new("c/d.txt")).unwrap(),
            "a/b/c/d.txt"
        );
    }

    #[test]
    fn test_archive_name_empty_base() {
        assert_eq!(archive_name("", Path::new("test1.txt")).unwrap(), "test1.txt");
        assert_eq!(
            archive_name("", Path::new("html/index.html")).unwrap(),
            "html/index.html"
        );
    }

    #[test]
    fn test_archive_name_trailing_slash_base() {
        assert_eq!(
            archive_name("static/", Path::new("test1.txt")).unwrap(),
            "static/test1.txt"
        );
    }

    #[test]
    fn test_write_file_streams_content() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("data.bin");
        fs::write(&source, b"bundle me").unwrap();
        let metadata = fs::metadata(&source).unwrap();

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let bytes = write_file(&mut zip, &source, "data.bin", entry_options(&metadata)).unwrap();
        assert_eq!(bytes, 9);

        let cursor = zip.finish().unwrap();
        let mut archive = zip::ZipArchive::new(cursor).unwrap();
        let mut entry = archive.by_name("data.bin").unwrap();
        let mut content = Vec::new();
        entry.read_to_end(&mut content).unwrap();
        assert_eq!(content, b"bundle me");
    }

    #[cfg(unix)]
    #[test]
    fn test_entry_options_preserve_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let source = temp.path().join("script.sh");
        fs::write(&source, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&source, fs::Permissions::from_mode(0o750)).unwrap();
        let metadata = fs::metadata(&source).unwrap();

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        write_file(&mut zip, &source, "script.sh", entry_options(&metadata)).unwrap();

        let cursor = zip.finish().unwrap();
        let mut archive = zip::ZipArchive::new(cursor).unwrap();
        let entry = archive.by_name("script.sh").unwrap();
        assert_eq!(entry.unix_mode().unwrap() & 0o777, 0o750);
    }
}
