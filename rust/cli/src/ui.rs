//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Report a refused game action without ending the session.
pub fn write_rejected(err: &mut dyn Write, reason: &dyn std::fmt::Display) -> std::io::Result<()> {
    writeln!(err, "Not allowed: {}", reason)
}
