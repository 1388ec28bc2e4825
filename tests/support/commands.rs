//! Command helper methods for Test.

use std::path::Path;
use std::process::Output;

use assert_cmd::Command;

use super::platform::{PASSWORD, USERNAME};
use super::Test;

impl Test {
    /// Create a cornerft command pointed at the mock platform.
    ///
    /// Returns a Command configured with:
    /// - the standard fixture credentials
    /// - `--url` set to the wiremock server
    /// - `CORNERFT_*` variables cleared for isolation
    pub fn cmd(&self) -> Command {
        self.cmd_as(USERNAME, PASSWORD)
    }

    /// Same as `cmd` but with explicit credentials.
    pub fn cmd_as(&self, username: &str, password: &str) -> Command {
        let mut cmd = Self::bare_cmd();
        cmd.args(["-u", username, "-p", password, "--url", &self.platform.url()]);
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// The bare binary with the `CORNERFT_*` environment cleared, no args.
    pub fn bare_cmd() -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("cornerft").expect("failed to find cornerft binary");
        for var in [
            "CORNERFT_USERNAME",
            "CORNERFT_PASSWORD",
            "CORNERFT_URL",
            "CORNERFT_GPG",
            "CORNERFT_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Shortcut for `cornerft latest`.
    pub fn latest(&self) -> Output {
        self.cmd()
            .arg("latest")
            .output()
            .expect("failed to run cornerft latest")
    }

    /// Shortcut for `cornerft list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run cornerft list")
    }

    /// Shortcut for `cornerft list-unread`.
    pub fn list_unread(&self) -> Output {
        self.cmd()
            .arg("list-unread")
            .output()
            .expect("failed to run cornerft list-unread")
    }

    /// Shortcut for `cornerft download -n` (decryption disabled).
    pub fn download_raw(&self, filename: &str, destination: &Path) -> Output {
        self.cmd()
            .args(["download", "-n", filename])
            .arg(destination)
            .output()
            .expect("failed to run cornerft download")
    }
}
