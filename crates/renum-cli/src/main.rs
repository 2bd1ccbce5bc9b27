mod cli;

#[cfg(test)]
mod cli_tests;

use cli::{GenerateArgs, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let args = GenerateArgs::from_matches(&matches);
    cli::run(args);
}
