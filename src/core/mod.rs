//! Core library components.
//!
//! This module contains the reusable client logic for the data transfer
//! platform: session handling, listings, file metadata and decryption.

pub mod client;
pub mod constants;
pub mod file;
pub mod gpg;
pub mod session;
