//! JSON I/O handling for CLI
//!
//! - Input: one JSON envelope via stdin
//! - Output: one JSON object via stdout
//! - UTF-8 only

use std::io::{self, Read, Write};

use serde_json::Value;

use super::errors::CliResult;
use crate::api::ApiError;

/// Read a whole JSON request from stdin
///
/// Envelopes may span several lines, so stdin is read to the end.
pub fn read_request() -> CliResult<String> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;

    if input.trim().is_empty() {
        return Err(ApiError::InvalidRequest("Empty input".to_string()).into());
    }

    Ok(input)
}

/// Write a JSON value as one line to stdout
pub fn write_response(data: &Value) -> CliResult<()> {
    write_line(&mut io::stdout(), data)
}

/// Write an error object as one line to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "error": message,
        "error_code": code,
    });
    write_line(&mut io::stdout(), &response)
}

fn write_line<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
