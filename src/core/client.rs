//! Platform API client.
//!
//! `Transfer` mirrors the operations the platform exposes: log in, list a
//! directory, pick out the unread or newest entries, and fetch raw file
//! content. Every operation is one blocking HTTP round trip, no retries.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::DEFAULT_DIRECTORY;
use crate::core::file::DataFile;
use crate::core::session::Session;
use crate::error::{Error, Result};

/// Platform login credentials, held in memory for one invocation.
pub struct Credentials {
    username: String,
    password: Zeroizing<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client for the data transfer platform.
///
/// `login` must succeed before any other call; the platform rejects
/// cookie-less requests.
pub struct Transfer {
    session: Session,
    credentials: Credentials,
}

/// Shape of the listing endpoint response.
#[derive(Debug, Deserialize)]
struct Listing {
    files: Vec<DataFile>,
}

impl Transfer {
    pub fn new(credentials: Credentials, url: &str) -> Result<Self> {
        Ok(Self {
            session: Session::new(url)?,
            credentials,
        })
    }

    /// Log in to the platform.
    ///
    /// The session cookie is issued on the static landing page and bound to
    /// the account by the login call.
    pub fn login(&self) -> Result<()> {
        self.session.get(&self.session.url_for("static"))?;
        self.session.post_form(
            &self.session.url_for("auth/login"),
            &[
                ("username", self.credentials.username.as_str()),
                ("password", self.credentials.password.as_str()),
            ],
        )?;
        debug!(username = %self.credentials.username, "logged in");
        Ok(())
    }

    /// All files in the outbound directory, in platform order.
    pub fn files(&self) -> Result<Vec<DataFile>> {
        self.files_in(DEFAULT_DIRECTORY)
    }

    /// All files in a directory, in platform order.
    pub fn files_in(&self, directory: &str) -> Result<Vec<DataFile>> {
        let url = self.session.url_for(&format!("files/{directory}?spcmd=splist"));
        let body = self.session.get(&url)?.text()?;
        let listing: Listing =
            serde_json::from_str(&body).map_err(|e| Error::Listing(e.to_string()))?;
        debug!(count = listing.files.len(), directory, "listed files");
        Ok(listing.files)
    }

    /// Files never read through the platform.
    pub fn unread_files(&self) -> Result<Vec<DataFile>> {
        let mut unread = Vec::new();
        for file in self.files()? {
            if file.last_read_date()?.is_none() {
                unread.push(file);
            }
        }
        Ok(unread)
    }

    /// The most recently delivered file.
    ///
    /// Ties on the put date go to the entry listed later.
    pub fn latest_file(&self) -> Result<DataFile> {
        let mut latest: Option<(DateTime<Utc>, DataFile)> = None;
        for file in self.files()? {
            let put = file.put_date()?;
            match &latest {
                Some((best, _)) if put < *best => {}
                _ => latest = Some((put, file)),
            }
        }
        latest
            .map(|(_, file)| file)
            .ok_or_else(|| Error::NotFound("no files available".to_string()))
    }

    /// Look up a file by its exact remote filename.
    pub fn find_file(&self, filename: &str) -> Result<DataFile> {
        self.files()?
            .into_iter()
            .find(|file| file.filename == filename)
            .ok_or_else(|| Error::NotFound(filename.to_string()))
    }

    /// Raw content of a file, exactly as stored on the platform.
    pub fn content(&self, file: &DataFile) -> Result<Vec<u8>> {
        // Download URIs are absolute in practice; resolve any relative ones
        // against the base URL.
        let url = if file.download_uri.starts_with("http://")
            || file.download_uri.starts_with("https://")
        {
            file.download_uri.clone()
        } else {
            self.session.url_for(&file.download_uri)
        };

        let bytes = self.session.get(&url)?.bytes()?;
        debug!(filename = %file.filename, len = bytes.len(), "fetched content");
        Ok(bytes.to_vec())
    }
}
