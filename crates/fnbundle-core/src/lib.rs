//! Deployment bundle packaging for remote function platforms.
//!
//! `fnbundle-core` assembles a compiled program together with an arbitrary
//! set of auxiliary files into a single zip bundle. The caller owns the
//! archive writer; the operations here only append entries to it, so one
//! open writer can accumulate the program entry and any number of
//! packing requests before being finished.
//!
//! Two traversal strategies are exposed: [`pack_flat`] takes a single
//! named file or the immediate children of a directory, [`pack_tree`]
//! mirrors a whole directory tree. Both apply the same source-extension
//! exclusion policy and the same entry naming rule.
//!
//! # Examples
//!
//! ```no_run
//! use fnbundle_core::PackConfig;
//! use fnbundle_core::pack_flat;
//! use fnbundle_core::pack_program;
//! use fnbundle_core::pack_tree;
//! use std::fs::File;
//! use std::path::Path;
//! use zip::ZipWriter;
//!
//! # fn main() -> fnbundle_core::Result<()> {
//! let mut zip = ZipWriter::new(File::create("bundle.zip")?);
//! let config = PackConfig::default();
//!
//! pack_program(&mut zip, Path::new("target/release/handler"), "handler")?;
//! pack_flat(&mut zip, Path::new("config.toml"), "", &config)?;
//! pack_tree(&mut zip, Path::new("static"), "static", &config)?;
//!
//! zip.finish()?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod pack;

// Re-export main API types
pub use error::BundleError;
pub use error::Result;
pub use pack::PackConfig;
pub use pack::PackReport;
pub use pack::SourceFilter;
pub use pack::pack_flat;
pub use pack::pack_program;
pub use pack::pack_tree;
