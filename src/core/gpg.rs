//! GPG decryption adapter.
//!
//! Files on the platform are PGP-encrypted for the account's key, so
//! decryption shells out to the `gpg` CLI: ciphertext on stdin, plaintext on
//! stdout, using whatever keyring the environment provides (`GNUPGHOME`
//! applies as usual). Set `CORNERFT_GPG` to use a different binary.

use std::ffi::OsString;
use std::io::Write;
use std::process::{Command, Stdio};

use tracing::trace;

use crate::core::constants::ENV_GPG;
use crate::error::{Error, Result};

/// Decryption adapter around the gpg CLI.
pub struct Gpg {
    program: OsString,
}

impl Gpg {
    /// Adapter using the binary named by `CORNERFT_GPG`, falling back to
    /// `gpg`.
    pub fn new() -> Self {
        let program = std::env::var_os(ENV_GPG).unwrap_or_else(|| OsString::from("gpg"));
        Self { program }
    }

    /// Adapter using a specific binary.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Check that the decryption binary is available.
    fn check(&self) -> Result<()> {
        which::which(&self.program).map_err(|_| {
            Error::Decryption(format!(
                "{} not found in PATH. Install GnuPG from https://gnupg.org/download/",
                self.program_name()
            ))
        })?;
        Ok(())
    }

    /// Decrypt `ciphertext` through the external binary.
    ///
    /// A clean exit with empty output is still a failure: gpg can stop
    /// writing mid-stream on corrupted input without reporting an error.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        self.check()?;

        let mut cmd = Command::new(&self.program);
        cmd.args([
            "--decrypt",
            "--batch", // Non-interactive mode
            "--yes",   // Assume yes to all questions
            "--quiet", // Minimize output
        ]);

        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|e| {
            Error::Decryption(format!("failed to spawn {}: {e}", self.program_name()))
        })?;

        let stdin = child.stdin.take();
        let output = std::thread::scope(|scope| {
            // Feed stdin on its own thread so a large file cannot deadlock
            // the child against a full stdout pipe. A failed write means the
            // child exited first; its exit status is the real signal.
            let feeder = scope.spawn(move || {
                if let Some(mut stdin) = stdin {
                    let _ = stdin.write_all(ciphertext);
                }
            });
            let output = child.wait_with_output();
            let _ = feeder.join();
            output
        })
        .map_err(|e| Error::Decryption(format!("{} failed: {e}", self.program_name())))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Decryption(format!(
                "{} exited with {}: {}",
                self.program_name(),
                output.status,
                stderr.trim()
            )));
        }

        if output.stdout.is_empty() {
            return Err(Error::Decryption(format!(
                "{} produced no output",
                self.program_name()
            )));
        }

        trace!(plaintext_len = output.stdout.len(), "decrypted");
        Ok(output.stdout)
    }
}

impl Default for Gpg {
    fn default() -> Self {
        Self::new()
    }
}
