//! Freshness checks for conditional requests on top of the `http` crate.
//!
//! Reads the validator headers from a request and a response and runs the
//! [`fresh_core`] evaluation on them.
//!
//! ```
//! use http::{Request, Response, header};
//!
//! let request = Request::builder()
//!     .header(header::IF_NONE_MATCH, r#"W/"v1""#)
//!     .body(())
//!     .unwrap();
//! let response = Response::builder()
//!     .header(header::ETAG, r#""v1""#)
//!     .body(())
//!     .unwrap();
//!
//! assert!(fresh_http::is_fresh(&request, &response));
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod headers;

pub use check::{FreshnessCheck, is_fresh};
pub use config::ValidatorHeadersConfig;
pub use error::ConfigError;
pub use fresh_core::{Freshness, StaleReason};
pub use headers::{HasHeaders, ValidatorHeaders};
