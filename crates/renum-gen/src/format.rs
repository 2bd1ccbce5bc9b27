//! Canonicalization through an external formatter.
//!
//! Formatting is best-effort: callers always receive bytes. A formatter
//! that is missing or rejects the generated source degrades to the raw,
//! unformatted text plus a diagnostic the orchestrator surfaces as a
//! warning; generation never silently fails here.

use std::io::Write as _;
use std::process::{Command, Stdio};

pub const DEFAULT_PROGRAM: &str = "gofmt";

/// Result of a formatting attempt.
#[derive(Debug)]
pub enum FormatOutcome {
    /// Canonicalized source.
    Formatted(Vec<u8>),
    /// The formatter failed; `raw` is the input unchanged.
    Unformatted { raw: Vec<u8>, reason: String },
}

/// Format Go source with gofmt.
pub fn gofmt(src: &[u8]) -> FormatOutcome {
    run(DEFAULT_PROGRAM, src)
}

/// Format `src` by piping it through `program`.
pub fn run(program: &str, src: &[u8]) -> FormatOutcome {
    match pipe_through(program, src) {
        Ok(bytes) => FormatOutcome::Formatted(bytes),
        Err(reason) => FormatOutcome::Unformatted {
            raw: src.to_vec(),
            reason,
        },
    }
}

fn pipe_through(program: &str, src: &[u8]) -> std::result::Result<Vec<u8>, String> {
    let mut child = Command::new(program)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| format!("cannot run {program}: {e}"))?;

    let Some(mut stdin) = child.stdin.take() else {
        let _ = child.kill();
        let _ = child.wait();
        return Err(format!("{program}: no stdin handle"));
    };
    if let Err(e) = stdin.write_all(src) {
        // Reap the child before reporting, or it lingers as a zombie.
        drop(stdin);
        let _ = child.wait();
        return Err(format!("writing to {program}: {e}"));
    }
    drop(stdin);

    let output = child
        .wait_with_output()
        .map_err(|e| format!("waiting for {program}: {e}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!(
            "{program} rejected generated source: {}",
            stderr.trim()
        ));
    }
    Ok(output.stdout)
}
