//! Rebuild a corrected server database from a reviewed diff file
//!
//! The diff file holds `id,serverName,clientName` records; the third field is
//! the authoritative replacement, so rebuilding restores the client-side name
//! into the server database. Only the name field of a matched record is
//! rewritten; every other byte of the line passes through untouched.

use crate::diff::DiffMap;
use crate::error::{Error, Result};
use crate::itemdb::parse_item_line;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Counts from a rebuild run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebuildSummary {
    /// Lines written to the output database
    pub lines_written: usize,
    /// Records whose name field was replaced
    pub names_replaced: usize,
}

/// Load a diff file into a map of item ID to replacement name
///
/// Takes the third comma-field of each record as the replacement. Records
/// with a malformed ID or fewer than three fields are skipped.
pub fn load_diff_file<P: AsRef<Path>>(path: P) -> Result<DiffMap> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(parse_diff_str(&String::from_utf8_lossy(&bytes)))
}

/// Parse diff records from a string (useful for testing)
pub fn parse_diff_str(content: &str) -> DiffMap {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut diffs = DiffMap::new();
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(_) => continue,
        };

        let id: u32 = match record.get(0).and_then(|f| f.parse().ok()) {
            Some(id) => id,
            None => continue,
        };
        let replacement = match record.get(2) {
            Some(name) => name,
            None => continue,
        };

        diffs.insert(id, replacement.to_string());
    }

    diffs
}

/// Rebuild a server database file, substituting names from the diff map
pub fn rebuild_item_db<P: AsRef<Path>, Q: AsRef<Path>>(
    db_path: P,
    diffs: &DiffMap,
    output_path: Q,
) -> Result<RebuildSummary> {
    let db_path = db_path.as_ref();
    let output_path = output_path.as_ref();

    let input = File::open(db_path).map_err(|e| Error::FileRead {
        path: db_path.to_path_buf(),
        source: e,
    })?;
    let output = File::create(output_path).map_err(|e| Error::FileWrite {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    let mut writer = BufWriter::new(output);
    let summary = rebuild_to(BufReader::new(input), &mut writer, diffs)?;
    writer.flush().map_err(|e| Error::FileWrite {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(summary)
}

/// Stream a server database through the name substitution
///
/// Comment and blank lines pass through unchanged, as do records whose ID is
/// not in the diff map or whose fields cannot be extracted. For a matched
/// record the output line is the original up to and including the second
/// comma, the replacement name, then the original from the third comma on.
pub fn rebuild_to<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    diffs: &DiffMap,
) -> std::io::Result<RebuildSummary> {
    let mut summary = RebuildSummary::default();

    for line in reader.lines() {
        let line = line?;
        summary.lines_written += 1;

        if line.is_empty() || line.starts_with('/') {
            writeln!(writer, "{}", line)?;
            continue;
        }

        let record = match parse_item_line(&line) {
            Ok(r) => r,
            Err(_) => {
                writeln!(writer, "{}", line)?;
                continue;
            }
        };

        match diffs.get(&record.id) {
            Some(replacement) => {
                let mut patched =
                    String::with_capacity(line.len() + replacement.len());
                patched.push_str(&line[..record.name_span.start]);
                patched.push_str(replacement);
                patched.push_str(&line[record.name_span.end..]);
                writeln!(writer, "{}", patched)?;
                summary.names_replaced += 1;
            }
            None => writeln!(writer, "{}", line)?,
        }
    }

    Ok(summary)
}
