//! Line-oriented conversion of `id|activities|wkt` records into `activities|gpx` lines.

use std::io::{BufRead, Write};

use crate::algorithm::reproject::Transformer;
use crate::error::{Result, TrackError};
use crate::io::gpx::to_gpx;
use crate::io::wkt::read_wkt;

/// One input record, borrowed from its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub id: &'a str,
    /// Activity list with its surrounding brackets removed.
    pub activities: &'a str,
    pub wkt: &'a str,
}

impl<'a> Record<'a> {
    /// Split a `id|activities|wkt` line. Fields after the third are ignored.
    pub fn parse(line: &'a str) -> Result<Self> {
        let mut fields = line.split('|');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(id), Some(activities), Some(wkt)) => Ok(Self {
                id,
                activities: strip_brackets(activities),
                wkt,
            }),
            _ => Err(TrackError::InvalidRecord(line.to_string())),
        }
    }
}

/// Drop the first and last character.
fn strip_brackets(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// Counts reported by [process_lines].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Records written to the output.
    pub written: usize,
    /// Records whose geometry was `EMPTY`.
    pub empty: usize,
    /// Records that could not be converted.
    pub failed: usize,
}

/// Convert a single record line. Empty geometries produce `None`.
pub fn process_line(line: &str, transformer: &dyn Transformer) -> Result<Option<String>> {
    let record = Record::parse(line)?;
    let geometry = read_wkt(record.wkt)?;
    Ok(to_gpx(&geometry, transformer)?.map(|gpx| format!("{}|{gpx}", record.activities)))
}

/// Convert every record of `input`, writing one line per converted record to `output`.
///
/// A record that fails to convert, including a line that is not valid UTF-8, is logged and
/// counted, and processing moves on to the next line. Only I/O errors stop the loop.
pub fn process_lines<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    transformer: &dyn Transformer,
) -> Result<Summary> {
    let mut summary = Summary::default();
    let mut buf = Vec::new();
    let mut line_number = 0usize;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\n', '\r']),
            Err(err) => {
                summary.failed += 1;
                tracing::warn!(line = line_number, error = %err, "skipping record");
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match process_line(line, transformer) {
            Ok(Some(out)) => {
                writeln!(output, "{out}")?;
                summary.written += 1;
                tracing::debug!(line = line_number, "converted record");
            }
            Ok(None) => {
                summary.empty += 1;
                tracing::debug!(line = line_number, "skipping empty geometry");
            }
            Err(err) => {
                summary.failed += 1;
                tracing::warn!(line = line_number, error = %err, "skipping record");
            }
        }
    }

    output.flush()?;
    tracing::info!(
        written = summary.written,
        empty = summary.empty,
        failed = summary.failed,
        "finished converting records"
    );
    Ok(summary)
}
