use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::modal::DialogOutcome;

/// Process exit status for a positive answer
pub const EXIT_POSITIVE: i32 = 0;
/// Process exit status for a negative answer or a cancelled prompt
pub const EXIT_NEGATIVE: i32 = 1;
/// Process exit status for internal errors
pub const EXIT_ERROR: i32 = 2;

pub fn exit_code(outcome: &DialogOutcome) -> i32 {
    if outcome.is_affirmative() {
        EXIT_POSITIVE
    } else {
        EXIT_NEGATIVE
    }
}

/// Print an outcome: the submitted value in plain mode, or the tagged JSON
/// object for every outcome in JSON mode
pub fn write_outcome<W: Write>(out: &mut W, outcome: &DialogOutcome, json: bool) -> Result<()> {
    if json {
        return write_json(out, outcome);
    }
    if let DialogOutcome::Submitted(Some(value)) = outcome {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
