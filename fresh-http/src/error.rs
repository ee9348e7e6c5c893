//! Configuration errors.

use http::header::InvalidHeaderName;
use thiserror::Error;

/// Errors raised while turning configuration into [`ValidatorHeaders`](crate::ValidatorHeaders).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configured header name is not a valid HTTP header name.
    #[error("Invalid header name '{0}': {1}")]
    InvalidHeaderName(String, #[source] InvalidHeaderName),
}
