//! Athena Item Name Checker CLI
//!
//! Command-line tool for diffing an Athena server-side item database against
//! a client-side item name table and rebuilding a corrected database from a
//! reviewed diff file.

use clap::Parser;
use namecheck_core::{
    diff_item_db, load_diff_file, parse_name_table, rebuild_item_db, write_diff_file,
    write_report, DiffMap, NameMap,
};

/// Default server-side item database file name
const DEFAULT_SERVER_DB: &str = "item_db.txt";
/// Default client-side item name table file name
const DEFAULT_CLIENT_TABLE: &str = "idnum2itemdisplaynametable.txt";
/// Default machine-readable diff output file name
const DEFAULT_DIFF_OUT: &str = "item_diff.txt";
/// Default human-readable report output file name
const DEFAULT_REPORT_OUT: &str = "item_diff_formatted.txt";
/// Default rebuilt database output file name
const DEFAULT_DB_OUT: &str = "item_db_new.txt";

#[derive(Parser)]
#[command(name = "namecheck-cli")]
#[command(about = "Athena Item Name Checker", long_about = None)]
#[command(version)]
struct Cli {
    /// Input and output file names; the argument count selects the mode
    /// (run with the single argument `help` for details)
    files: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    run(&cli.files);
}

/// Dispatch on argument count
///
/// Stage failures are reported on stderr; the process always exits 0.
fn run(args: &[String]) {
    match args.len() {
        0 => run_pipeline(
            DEFAULT_SERVER_DB,
            DEFAULT_CLIENT_TABLE,
            DEFAULT_DIFF_OUT,
            DEFAULT_REPORT_OUT,
            DEFAULT_DB_OUT,
        ),
        1 if args[0] == "help" => print_usage(),
        1 => run_pipeline(
            DEFAULT_SERVER_DB,
            &args[0],
            DEFAULT_DIFF_OUT,
            DEFAULT_REPORT_OUT,
            DEFAULT_DB_OUT,
        ),
        3 => run_rebuild(&args[0], &args[1], &args[2]),
        5 => run_pipeline(&args[0], &args[1], &args[2], &args[3], &args[4]),
        _ => print_usage(),
    }
}

/// Run the full pipeline: parse, diff, report, rebuild
fn run_pipeline(server_db: &str, client_table: &str, diff_out: &str, report_out: &str, db_out: &str) {
    let names = match parse_name_table(client_table) {
        Ok(names) => {
            println!("Parsed {} client-side names from {}", names.len(), client_table);
            names
        }
        Err(e) => {
            log_error(&e);
            NameMap::new()
        }
    };

    let diffs = match diff_item_db(server_db, &names) {
        Ok(diffs) => {
            println!("Found {} name differences in {}", diffs.len(), server_db);
            diffs
        }
        Err(e) => {
            log_error(&e);
            DiffMap::new()
        }
    };

    if let Err(e) = write_report(report_out, &diffs, &names) {
        log_error(&e);
    } else {
        println!("Wrote report to {}", report_out);
    }

    if let Err(e) = write_diff_file(diff_out, &diffs, &names) {
        log_error(&e);
    } else {
        println!("Wrote diff file to {}", diff_out);
    }

    run_rebuild(server_db, diff_out, db_out);
}

/// Rebuild the server database from a diff file
fn run_rebuild(server_db: &str, diff_file: &str, db_out: &str) {
    let diffs = match load_diff_file(diff_file) {
        Ok(diffs) => diffs,
        Err(e) => {
            log_error(&e);
            return;
        }
    };

    match rebuild_item_db(server_db, &diffs, db_out) {
        Ok(summary) => {
            println!(
                "Rebuilt {}: {} lines written, {} names replaced",
                db_out, summary.lines_written, summary.names_replaced
            );
        }
        Err(e) => log_error(&e),
    }
}

/// Report a stage failure with its cause chain and continue
fn log_error(err: &namecheck_core::Error) {
    eprintln!("Error: {}", err);
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}

fn print_usage() {
    println!("usage:");
    println!("    namecheck-cli");
    println!("    - runs the full pipeline using default names");
    println!("      ({}, {},", DEFAULT_SERVER_DB, DEFAULT_CLIENT_TABLE);
    println!(
        "       {}, {}, {})",
        DEFAULT_DIFF_OUT, DEFAULT_REPORT_OUT, DEFAULT_DB_OUT
    );
    println!();
    println!("    namecheck-cli client_file");
    println!("    - runs the full pipeline using the given client table and");
    println!("      default names for everything else");
    println!();
    println!("    namecheck-cli server_file diff_file output_db");
    println!("    - rebuilds the server database from a reviewed diff file");
    println!();
    println!("    namecheck-cli server_file client_file diff_output formatted_output output_db");
    println!("    - runs the full pipeline using the supplied file names");
}
