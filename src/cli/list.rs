//! Listing commands (list, list-unread).
//!
//! Filenames go to stdout one per line, platform order, nothing else; the
//! output is meant to be piped.

use crate::core::client::Transfer;
use crate::error::Result;

/// List every file.
pub fn all(transfer: &Transfer) -> Result<()> {
    for file in transfer.files()? {
        println!("{file}");
    }
    Ok(())
}

/// List files never read through the platform.
pub fn unread(transfer: &Transfer) -> Result<()> {
    for file in transfer.unread_files()? {
        println!("{file}");
    }
    Ok(())
}
