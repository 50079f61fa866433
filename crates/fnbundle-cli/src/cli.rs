//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

/// Separator between the optional base and the path in an include
/// request: the platform path-list separator.
#[cfg(windows)]
const LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
const LIST_SEPARATOR: char = ':';

#[derive(Parser)]
#[command(name = "fnbundle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble a deployment bundle from a program and include requests
    Pack(PackArgs),
}

#[derive(clap::Args)]
pub struct PackArgs {
    /// Output bundle file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Compiled program placed at the bundle root
    #[arg(short, long, value_name = "FILE")]
    pub program: PathBuf,

    /// Entry name for the program (default: the program's file name)
    #[arg(long, value_name = "NAME")]
    pub entry_name: Option<String>,

    /// Do not exclude source files from included paths
    #[arg(long)]
    pub all_files: bool,

    /// Include requests of the form [base<SEP>]path, where <SEP> is the
    /// platform path-list separator. base is the directory inside the
    /// bundle; path is a local file or directory. A directory path with
    /// a trailing separator is included recursively, otherwise only its
    /// immediate files are included
    #[arg(value_name = "INCLUDE")]
    pub include: Vec<String>,

    /// Overwrite the output file if it exists
    #[arg(short = 'f', long)]
    pub force: bool,
}

/// One parsed `[base:]path` include request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeSpec {
    /// Directory prefix inside the bundle; empty means the bundle root.
    pub base: String,
    /// Local file or directory to include.
    pub path: String,
    /// Whether a trailing path separator selected recursive packing.
    pub recursive: bool,
}

impl IncludeSpec {
    /// Splits an include token into its base and path parts and reads
    /// the trailing-separator convention off the path.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let (base, path) = match token.split_once(LIST_SEPARATOR) {
            Some((base, path)) => (base.to_string(), path.to_string()),
            None => (String::new(), token.to_string()),
        };
        let recursive = path.chars().next_back().is_some_and(std::path::is_separator);
        Self {
            base,
            path,
            recursive,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_path() {
        let spec = IncludeSpec::parse("static");
        assert_eq!(spec.base, "");
        assert_eq!(spec.path, "static");
        assert!(!spec.recursive);
    }

    #[test]
    fn test_parse_trailing_separator_selects_recursive() {
        let spec = IncludeSpec::parse("static/");
        assert_eq!(spec.base, "");
        assert_eq!(spec.path, "static/");
        assert!(spec.recursive);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_parse_base_and_path() {
        let spec = IncludeSpec::parse("templates:assets/html");
        assert_eq!(spec.base, "templates");
        assert_eq!(spec.path, "assets/html");
        assert!(!spec.recursive);

        let spec = IncludeSpec::parse("templates:assets/html/");
        assert_eq!(spec.base, "templates");
        assert!(spec.recursive);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_parse_splits_on_first_separator_only() {
        let spec = IncludeSpec::parse("a:b:c");
        assert_eq!(spec.base, "a");
        assert_eq!(spec.path, "b:c");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_parse_empty_base() {
        let spec = IncludeSpec::parse(":config.toml");
        assert_eq!(spec.base, "");
        assert_eq!(spec.path, "config.toml");
    }
}
