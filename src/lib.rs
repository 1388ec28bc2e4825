//! cornerft - client for the Cornèr Bank data transfer platform.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── latest        # Print the most recent file
//! │   ├── list          # List all / unread files
//! │   ├── download      # Download (and decrypt) a file
//! │   └── output        # Shared terminal output helpers
//! └── core/             # Platform client library
//!     ├── session       # Cookie-backed HTTP session, status mapping
//!     ├── client        # Credentials, Transfer (login, listings, content)
//!     ├── file          # DataFile metadata and attribute accessors
//!     ├── gpg           # External gpg decryption adapter
//!     └── constants     # Default URL, directory, env var names
//! ```
//!
//! The platform speaks plain session-cookie HTTP: `login` warms the cookie on
//! the static page and posts the credentials, listings come back as JSON, and
//! file bodies are PGP-encrypted blobs that `download` pipes through the
//! local `gpg` binary.

pub mod cli;
pub mod core;
pub mod error;
