//! Latest command.

use crate::core::client::Transfer;
use crate::error::Result;

/// Print the filename of the most recently delivered file.
pub fn execute(transfer: &Transfer) -> Result<()> {
    let file = transfer.latest_file()?;
    println!("{file}");
    Ok(())
}
