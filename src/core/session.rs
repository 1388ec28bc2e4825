//! Authenticated HTTP session against the platform.
//!
//! The platform authenticates with a session cookie rather than per-request
//! headers, so the wrapped client carries a cookie store. All status-to-error
//! mapping happens here.

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use tracing::debug;

use crate::error::{Error, Result};

/// Cookie-backed HTTP session bound to a base URL.
pub(crate) struct Session {
    http: Client,
    base_url: String,
}

impl Session {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for a platform path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn get(&self, url: &str) -> Result<Response> {
        debug!(%url, "GET");
        check(self.http.get(url).send()?)
    }

    pub fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<Response> {
        debug!(%url, "POST");
        check(self.http.post(url).form(form).send()?)
    }
}

/// Map a response status to the matching typed error.
fn check(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Auth(format!(
            "platform returned {}",
            response.status()
        ))),
        StatusCode::NOT_FOUND => Err(Error::NotFound(response.url().path().to_string())),
        _ => Ok(response.error_for_status()?),
    }
}
