//! Serializable configuration of validator header names.
//!
//! Every field is optional and falls back to the standard header name:
//!
//! ```yaml
//! etag: x-upstream-etag
//! last_modified: x-upstream-last-modified
//! ```

use http::HeaderName;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::headers::ValidatorHeaders;

/// Header name overrides for [`ValidatorHeaders`].
///
/// A missing field keeps the standard header. Unknown fields are rejected.
#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorHeadersConfig {
    /// Request header carrying `If-Modified-Since`.
    pub if_modified_since: Option<String>,
    /// Request header carrying `If-None-Match`.
    pub if_none_match: Option<String>,
    /// Request header carrying `Cache-Control`.
    pub cache_control: Option<String>,
    /// Response header carrying `Last-Modified`.
    pub last_modified: Option<String>,
    /// Response header carrying `ETag`.
    pub etag: Option<String>,
}

/// Parse a header name string into `HeaderName`.
pub fn parse_header_name(name: &str) -> Result<HeaderName, ConfigError> {
    name.parse()
        .map_err(|e| ConfigError::InvalidHeaderName(name.to_string(), e))
}

fn header_or(name: Option<String>, default: HeaderName) -> Result<HeaderName, ConfigError> {
    let Some(name) = name else {
        return Ok(default);
    };
    match parse_header_name(&name) {
        Ok(header) => {
            debug!(%default, %header, "validator header overridden");
            Ok(header)
        }
        Err(error) => {
            warn!(%default, %error, "rejected validator header name");
            Err(error)
        }
    }
}

impl TryFrom<ValidatorHeadersConfig> for ValidatorHeaders {
    type Error = ConfigError;

    fn try_from(config: ValidatorHeadersConfig) -> Result<Self, Self::Error> {
        let defaults = ValidatorHeaders::default();
        Ok(ValidatorHeaders {
            if_modified_since: header_or(config.if_modified_since, defaults.if_modified_since)?,
            if_none_match: header_or(config.if_none_match, defaults.if_none_match)?,
            cache_control: header_or(config.cache_control, defaults.cache_control)?,
            last_modified: header_or(config.last_modified, defaults.last_modified)?,
            etag: header_or(config.etag, defaults.etag)?,
        })
    }
}

impl ValidatorHeadersConfig {
    /// Validates the configured names, filling the gaps with standard headers.
    pub fn into_validator_headers(self) -> Result<ValidatorHeaders, ConfigError> {
        self.try_into()
    }
}
