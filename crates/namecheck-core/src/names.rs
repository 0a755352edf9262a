//! Parser for the client-side item name table

use crate::error::{Error, LineError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Client-side ID/name map, ordered by item ID
pub type NameMap = BTreeMap<u32, String>;

/// Parse a client-side item name table file into a NameMap
///
/// The file has one `id#name#...` record per line. Blank lines and lines
/// starting with `/` are ignored, as are lines that fail to parse.
pub fn parse_name_table<P: AsRef<Path>>(path: P) -> Result<NameMap> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(parse_name_table_str(&String::from_utf8_lossy(&bytes)))
}

/// Parse a name table from a string (useful for testing)
pub fn parse_name_table_str(content: &str) -> NameMap {
    let mut names = NameMap::new();

    for line in content.lines() {
        if line.is_empty() || line.starts_with('/') {
            continue;
        }
        // malformed lines are skipped, last duplicate ID wins
        match parse_name_line(line) {
            Ok((id, name)) => {
                names.insert(id, name);
            }
            Err(_) => continue,
        }
    }

    names
}

/// Parse a single `id#name#...` record
///
/// The display name is the second `#`-delimited field with underscores
/// replaced by spaces and surrounding whitespace trimmed.
pub fn parse_name_line(line: &str) -> std::result::Result<(u32, String), LineError> {
    let mut fields = line.split('#');

    let raw_id = fields.next().unwrap_or_default();
    let id: u32 = raw_id
        .parse()
        .map_err(|_| LineError::InvalidId(raw_id.to_string()))?;

    let name = fields.next().ok_or(LineError::MissingDelimiter('#'))?;

    Ok((id, name.replace('_', " ").trim().to_string()))
}
