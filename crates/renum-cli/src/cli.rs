//! Argument surface and top-level driver.
//!
//! All fatal conditions exit non-zero with a descriptive message; files
//! already written for earlier packages are left in place.

use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, value_parser};

use renum_gen::orchestrate::Config;

pub fn build_cli() -> Command {
    Command::new("renum")
        .about("Generate reverse lookup tables for Go enum-style constants")
        .override_usage("renum --type T[,U...] [--output FILE] [PATH]")
        .arg(
            Arg::new("type")
                .short('t')
                .long("type")
                .value_name("NAMES")
                .required(true)
                .help("Comma-separated list of type names"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Output file name; default <dir>/<type>_enum.go"),
        )
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Package directory or Go file (default: current directory)"),
        )
}

pub struct GenerateArgs {
    pub types: Vec<String>,
    pub output: Option<PathBuf>,
    pub path: PathBuf,
}

impl GenerateArgs {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let types = m
            .get_one::<String>("type")
            .map(|names| {
                names
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Self {
            types,
            output: m.get_one::<PathBuf>("output").cloned(),
            path: m
                .get_one::<PathBuf>("path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

pub fn run(args: GenerateArgs) {
    if args.types.is_empty() {
        eprintln!("error: --type requires at least one type name");
        std::process::exit(1);
    }

    // Derived outputs land next to the scanned package.
    let dir = if args.path.is_dir() {
        args.path.clone()
    } else {
        args.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    };

    let pkgs = match renum_loader::load(&args.path) {
        Ok(pkgs) => pkgs,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let config = Config {
        types: args.types,
        output: args.output,
        dir,
        argv: std::env::args().skip(1).collect::<Vec<_>>().join(" "),
    };

    match renum_gen::generate_all(&pkgs, &config) {
        Ok(report) => {
            for warning in &report.warnings {
                eprintln!("warning: {warning}");
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
