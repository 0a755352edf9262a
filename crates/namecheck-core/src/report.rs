//! Report writers for item name differences
//!
//! Two output formats:
//! - a human-readable report, one block per differing item
//! - a machine-readable diff file of `id,serverName,clientName` records,
//!   suitable for review and for feeding back into the rebuilder

use crate::diff::{DiffMap, DiffRecord};
use crate::error::{Error, Result};
use crate::names::NameMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the human-readable difference report to a file
pub fn write_report<P: AsRef<Path>>(path: P, diffs: &DiffMap, names: &NameMap) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    write_report_to(&mut writer, diffs, names).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write the human-readable report to any writer
pub fn write_report_to<W: Write>(
    mut writer: W,
    diffs: &DiffMap,
    names: &NameMap,
) -> std::io::Result<()> {
    if diffs.is_empty() {
        writeln!(writer, "No differences found.")?;
        return Ok(());
    }

    writeln!(writer, "Found {} differences.", diffs.len())?;
    writeln!(writer)?;
    for (id, server_name) in diffs {
        let client_name = names.get(id).map(String::as_str).unwrap_or_default();
        writeln!(writer, "Item {}:", id)?;
        writeln!(writer, "\t(server) {}", server_name)?;
        writeln!(writer, "\t(client) {}", client_name)?;
    }

    Ok(())
}

/// Write the machine-readable diff file
///
/// One `id,serverName,clientName` record per entry, in ID-ascending order.
/// An empty diff map still produces the file, holding a newline and no
/// records; zero records present means no differences.
pub fn write_diff_file<P: AsRef<Path>>(path: P, diffs: &DiffMap, names: &NameMap) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    write_diff_to(BufWriter::new(file), diffs, names).map_err(|e| Error::Csv {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write diff records to any writer
pub fn write_diff_to<W: Write>(
    writer: W,
    diffs: &DiffMap,
    names: &NameMap,
) -> std::result::Result<(), csv::Error> {
    if diffs.is_empty() {
        let mut writer = writer;
        writeln!(writer)?;
        return Ok(());
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for (&id, server_name) in diffs {
        let record = DiffRecord {
            id,
            server_name: server_name.clone(),
            client_name: names.get(&id).cloned().unwrap_or_default(),
        };
        csv_writer.serialize(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}
