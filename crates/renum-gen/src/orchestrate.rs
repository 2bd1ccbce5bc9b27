//! Batch orchestration across packages and requested types.
//!
//! Packages are processed in a fixed order (test-only packages last,
//! otherwise ascending file count) so derived output paths and the
//! single-output conflict check are deterministic across identical runs.
//! Files written for earlier packages are not rolled back on a later
//! failure.

use std::path::PathBuf;

use renum_core::Package;

use crate::format::{self, FormatOutcome};
use crate::{Error, Result, generate, scan};

/// One generation run over a loaded set of packages.
pub struct Config {
    /// Requested type names, in command-line order.
    pub types: Vec<String>,
    /// Explicit single output file. Setting this activates the
    /// cross-package conflict rule.
    pub output: Option<PathBuf>,
    /// Directory derived output files are placed in.
    pub dir: PathBuf,
    /// Arguments reproduced in the generated banner line.
    pub argv: String,
}

/// What a successful run produced.
#[derive(Debug, Default)]
pub struct RunReport {
    pub written: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

/// Generate lookup code for every requested type across `pkgs`.
///
/// Each package that matches at least one still-pending type gets one
/// output file holding a block per type found there; a type found in one
/// package is no longer pending for later ones. Fails if an explicit
/// output file would have to span packages, or if any type is found
/// nowhere.
pub fn generate_all(pkgs: &[Package], config: &Config) -> Result<RunReport> {
    let mut report = RunReport::default();
    let mut pending = config.types.clone();

    let mut ordered: Vec<&Package> = pkgs.iter().collect();
    ordered.sort_by_key(|pkg| (pkg.is_test_only(), pkg.files.len()));

    for pkg in ordered {
        let mut buf = String::new();
        generate::header(&mut buf, &config.argv, &pkg.name);

        let mut found = Vec::new();
        let mut remaining = Vec::new();
        for type_name in &pending {
            let values = scan::package_values(pkg, type_name)?;
            if values.is_empty() {
                remaining.push(type_name.clone());
                continue;
            }
            generate::lookup_block(&mut buf, type_name, &values);
            found.push(type_name.clone());
        }
        if found.is_empty() {
            continue;
        }
        if let Some(output) = &config.output {
            if !remaining.is_empty() {
                return Err(Error::OutputConflict {
                    output: output.clone(),
                });
            }
        }
        pending = remaining;

        let bytes = match format::gofmt(buf.as_bytes()) {
            FormatOutcome::Formatted(bytes) => bytes,
            FormatOutcome::Unformatted { raw, reason } => {
                report
                    .warnings
                    .push(format!("internal error: invalid Go generated: {reason}"));
                report
                    .warnings
                    .push("compile the output to analyze the error".to_string());
                raw
            }
        };

        let path = match &config.output {
            Some(output) => output.clone(),
            None => config.dir.join(derived_name(pkg, &found[0])),
        };
        std::fs::write(&path, &bytes).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        report.written.push(path);
    }

    if !pending.is_empty() {
        return Err(Error::TypesNotFound(pending));
    }
    Ok(report)
}

/// `<lowercased first found type>_enum.go`, with a `_test` suffix for
/// packages containing test files.
fn derived_name(pkg: &Package, type_name: &str) -> String {
    let suffix = if pkg.has_test_files {
        "enum_test.go"
    } else {
        "enum.go"
    };
    format!("{}_{suffix}", type_name.to_lowercase())
}
