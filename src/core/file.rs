//! File metadata as the platform reports it.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Attribute carrying the timestamp a file landed on the platform.
const PUT_DATE_ATTR: &str = "FSR_FILE_SYS_MD.START_PUT_DATE";

/// Attribute carrying the timestamp a file was last read; empty if never.
const LAST_READ_ATTR: &str = "FSR_FILE_SYS_MD.LAST_READ_DATE";

/// A single file of the data transfer platform.
///
/// Deserialized straight from the listing JSON. The interesting metadata
/// lives in the free-form `attributes` map and is exposed through typed
/// accessors.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataFile {
    pub id: String,
    pub filename: String,
    pub download_uri: String,
    #[serde(default)]
    attributes: BTreeMap<String, String>,
}

impl DataFile {
    fn attribute(&self, key: &str) -> Result<&str> {
        self.attributes
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| Error::Listing(format!("{}: missing attribute {key}", self.filename)))
    }

    /// When the file was put on the platform.
    pub fn put_date(&self) -> Result<DateTime<Utc>> {
        parse_platform_date(self.attribute(PUT_DATE_ATTR)?)
    }

    /// When the file was last read, or `None` if it was never read.
    pub fn last_read_date(&self) -> Result<Option<DateTime<Utc>>> {
        let raw = self.attribute(LAST_READ_ATTR)?;
        if raw.is_empty() {
            return Ok(None);
        }
        parse_platform_date(raw).map(Some)
    }
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.filename)
    }
}

/// Parse a platform timestamp.
///
/// The platform emits RFC 3339 with a trailing `Z`; older gateways emitted
/// naive timestamps without a zone, so both forms are accepted.
fn parse_platform_date(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| Error::Listing(format!("invalid timestamp {raw:?}: {e}")))
}
