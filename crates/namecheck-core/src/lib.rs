//! namecheck-core: Core library for reconciling Athena item databases
//!
//! This library provides functionality to:
//! - Parse client-side item name tables into an ordered ID/name map
//! - Diff server-side item databases against the client names
//! - Write human-readable and machine-readable difference reports
//! - Rebuild a corrected server database from a reviewed diff file

pub mod diff;
pub mod error;
pub mod itemdb;
pub mod names;
pub mod rebuild;
pub mod report;

pub use diff::{diff_item_db, diff_item_db_str, DiffMap, DiffRecord};
pub use error::{Error, LineError, Result};
pub use itemdb::{parse_item_line, ItemRecord};
pub use names::{parse_name_table, parse_name_table_str, NameMap};
pub use rebuild::{load_diff_file, parse_diff_str, rebuild_item_db, RebuildSummary};
pub use report::{write_diff_file, write_report};
