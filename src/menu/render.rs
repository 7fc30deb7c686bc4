//! Response rendering
//!
//! Human-readable output shared by the menu session and the CLI.

use std::io::Write;

use crate::error::Result;
use crate::protocol::Response;
use crate::record::{Record, DATE_FORMAT};

const LISTING_HEADER: &str = "Last name\tFirst name\tLast transaction\tBalance";
const LISTING_RULE: &str = "--------------------------------------------------------";

/// Write a response for display
pub fn write_response<W: Write>(out: &mut W, response: &Response) -> Result<()> {
    match response {
        Response::Added { .. } => writeln!(out, "Record added.")?,
        Response::Edited { .. } => writeln!(out, "Record updated.")?,
        Response::Deleted { .. } => writeln!(out, "Record deleted.")?,
        Response::NotFound { index } => {
            writeln!(out, "No record with number {} was found.", index + 1)?
        }
        Response::Listing { entries } => {
            writeln!(out, "{}", LISTING_HEADER)?;
            writeln!(out, "{}", LISTING_RULE)?;
            for (position, record) in entries {
                writeln!(
                    out,
                    "{}. {}\t{}\t{}\t{}",
                    position,
                    record.last_name(),
                    record.first_name(),
                    record.last_transaction_date().format(DATE_FORMAT),
                    record.balance()
                )?;
            }
        }
        Response::Matches { records, .. } if records.is_empty() => {
            writeln!(out, "No records found for the given date.")?
        }
        Response::Matches { records, .. } => {
            writeln!(out, "Search results:")?;
            for record in records {
                write_match(out, record)?;
            }
        }
        Response::Sorted { .. } => writeln!(out, "Database sorted by balance.")?,
    }

    Ok(())
}

fn write_match<W: Write>(out: &mut W, record: &Record) -> Result<()> {
    writeln!(
        out,
        "{}, {}, {}, {}",
        record.last_name(),
        record.first_name(),
        record.last_transaction_date().format(DATE_FORMAT),
        record.balance()
    )?;
    Ok(())
}
