//! Pack command implementation.
//!
//! Assembles the bundle: opens the output archive, writes the program
//! entry first, then feeds every include request into the same open
//! writer so all requests accumulate into one archive.

use crate::cli::IncludeSpec;
use crate::cli::PackArgs;
use crate::error::add_request_context;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use console::style;
use fnbundle_core::PackConfig;
use fnbundle_core::PackReport;
use fnbundle_core::pack_flat;
use fnbundle_core::pack_program;
use fnbundle_core::pack_tree;
use std::fs;
use std::fs::File;
use std::path::Path;
use zip::ZipWriter;

pub fn execute(args: &PackArgs, quiet: bool) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "output file {} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    let entry_name = match &args.entry_name {
        Some(name) => name.clone(),
        None => args
            .program
            .file_name()
            .and_then(|name| name.to_str())
            .map(String::from)
            .with_context(|| {
                format!("cannot derive an entry name from {}", args.program.display())
            })?,
    };

    let requests: Vec<IncludeSpec> = args.include.iter().map(|t| IncludeSpec::parse(t)).collect();

    let report = match assemble(args, &entry_name, &requests) {
        Ok(report) => report,
        Err(err) => {
            // The archive is in an undefined partial state; discard it.
            let _ = fs::remove_file(&args.output);
            return Err(err);
        }
    };

    if !quiet {
        println!(
            "{} {} ({} entries, {} bytes)",
            style("✓").green().bold(),
            args.output.display(),
            report.files_added,
            report.bytes_written
        );
    }
    Ok(())
}

fn assemble(args: &PackArgs, entry_name: &str, requests: &[IncludeSpec]) -> Result<PackReport> {
    let file = File::create(&args.output)
        .with_context(|| format!("cannot create {}", args.output.display()))?;
    let mut zip = ZipWriter::new(file);
    let config = PackConfig::default().with_all_files(args.all_files);

    let mut total = pack_program(&mut zip, &args.program, entry_name)
        .with_context(|| format!("cannot bundle program {}", args.program.display()))?;

    for request in requests {
        let root = Path::new(&request.path);
        let packed = if request.recursive {
            pack_tree(&mut zip, root, &request.base, &config)
        } else {
            pack_flat(&mut zip, root, &request.base, &config)
        };
        total.merge(add_request_context(packed, &request.path)?);
    }

    zip.finish().context("failed to finish bundle archive")?;
    Ok(total)
}
