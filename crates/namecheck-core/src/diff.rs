//! Diff engine comparing server database names against client names

use crate::error::{Error, Result};
use crate::itemdb::parse_item_line;
use crate::names::NameMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Server-side ID/name map holding differences only, ordered by item ID
pub type DiffMap = BTreeMap<u32, String>;

/// One persisted diff line: `id,serverName,clientName`
///
/// This is the record format exchanged between the reporter and the
/// rebuilder, and the format users review and edit by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRecord {
    /// Item ID
    pub id: u32,
    /// Name currently in the server database
    pub server_name: String,
    /// Name in the client-side table
    pub client_name: String,
}

/// Diff a server-side item database file against the client name map
///
/// Returns a map of item ID to server-side name for every record whose name
/// differs (case-insensitively) from the client-side name. Records with IDs
/// not present in the client table are ignored.
pub fn diff_item_db<P: AsRef<Path>>(path: P, names: &NameMap) -> Result<DiffMap> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(diff_item_db_str(&String::from_utf8_lossy(&bytes), names))
}

/// Diff a server database from a string (useful for testing)
pub fn diff_item_db_str(content: &str, names: &NameMap) -> DiffMap {
    let mut diffs = DiffMap::new();

    for line in content.lines() {
        if line.is_empty() || line.starts_with('/') {
            continue;
        }

        let record = match parse_item_line(line) {
            Ok(r) => r,
            Err(_) => continue,
        };

        // not in the client-side table
        let client_name = match names.get(&record.id) {
            Some(n) => n,
            None => continue,
        };

        if !record.name.eq_ignore_ascii_case(client_name) {
            diffs.insert(record.id, record.name.to_string());
        }
    }

    diffs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::parse_name_table_str;

    #[test]
    fn test_diff_detects_mismatch() {
        let names = parse_name_table_str("501#Red_Potion#\n");
        let diffs = diff_item_db_str("501,RedPotion,RedPotion,0,50\n", &names);

        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs.get(&501).map(String::as_str), Some("RedPotion"));
    }

    #[test]
    fn test_diff_case_insensitive_match_excluded() {
        let names = parse_name_table_str("501#Red_Potion#\n");
        let diffs = diff_item_db_str("501,Red_Potion,RED POTION,0,50\n", &names);

        assert!(diffs.is_empty());
    }

    #[test]
    fn test_diff_ignores_ids_not_in_client_table() {
        let names = parse_name_table_str("501#Red_Potion#\n");
        let diffs = diff_item_db_str("999,Mystery,Mystery Item,0,50\n", &names);

        assert!(diffs.is_empty());
    }

    #[test]
    fn test_diff_skips_comments_and_blanks() {
        let names = parse_name_table_str("501#Red_Potion#\n");
        let content = "// item_db\n\n501,RedPotion,RedPotion,0,50\n";
        let diffs = diff_item_db_str(content, &names);

        assert_eq!(diffs.len(), 1);
    }

    #[test]
    fn test_diff_skips_malformed_line() {
        let names = parse_name_table_str("501#Red_Potion#\n502#Orange_Potion#\n");
        let content = "abc,Foo,Bar\n502,OrangePotion,OrangePotion,0,50\n";
        let diffs = diff_item_db_str(content, &names);

        // the malformed line is skipped, the following line still parses
        assert_eq!(diffs.len(), 1);
        assert!(diffs.contains_key(&502));
    }

    #[test]
    fn test_diff_ordered_by_id() {
        let names =
            parse_name_table_str("501#Red_Potion#\n502#Orange_Potion#\n503#Yellow_Potion#\n");
        let content = "503,C,c3,0\n501,A,a1,0\n502,B,b2,0\n";
        let diffs = diff_item_db_str(content, &names);

        let ids: Vec<u32> = diffs.keys().copied().collect();
        assert_eq!(ids, vec![501, 502, 503]);
    }

    #[test]
    fn test_diff_scenario_red_potion() {
        let names = parse_name_table_str("501#Red_Potion#\n");
        let diffs = diff_item_db_str("501,RedPotion,Red Potion,0,0\n", &names);

        // field 2 ("Red Potion") matches the client name, so no diff
        assert!(diffs.is_empty());

        let diffs = diff_item_db_str("501,Red Potion,RedPotion,0,0\n", &names);
        assert_eq!(diffs.get(&501).map(String::as_str), Some("RedPotion"));
    }
}
