//! Constants used throughout cornerft.
//!
//! Centralizes magic strings and configuration values.

/// Base URL of the production platform.
pub const DEFAULT_URL: &str = "https://ft.corner.ch/";

/// Directory the bank delivers outbound files to.
pub const DEFAULT_DIRECTORY: &str = "OUT";

/// Environment variable overriding the decryption binary (default: gpg).
pub const ENV_GPG: &str = "CORNERFT_GPG";

/// Environment variable controlling the tracing filter.
pub const ENV_LOG: &str = "CORNERFT_LOG";
