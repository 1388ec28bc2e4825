//! Download command.
//!
//! Fetches a file by its remote name and writes it to the destination,
//! piping the bytes through the gpg adapter unless decryption is disabled.

use std::path::Path;

use crate::cli::output;
use crate::core::client::Transfer;
use crate::core::gpg::Gpg;
use crate::error::Result;

/// Download a file, decrypting it unless disabled.
pub fn execute(
    transfer: &Transfer,
    filename: &str,
    destination: &Path,
    decrypt: bool,
) -> Result<()> {
    let file = transfer.find_file(filename)?;
    let mut content = transfer.content(&file)?;

    if decrypt {
        content = Gpg::new().decrypt(&content)?;
    }

    std::fs::write(destination, &content)?;
    output::success(&format!(
        "downloaded {} to {}",
        file.filename,
        destination.display()
    ));
    Ok(())
}
