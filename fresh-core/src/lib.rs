#![warn(missing_docs)]
//! # fresh-core
//!
//! Decides whether a cached HTTP representation is still fresh given the
//! client's conditional request headers and the server's validators
//! ([RFC 7232](https://httpwg.org/specs/rfc7232.html)).
//!
//! This crate is **protocol-agnostic**: it works on raw header values and knows
//! nothing about header maps or request types. Integration with the `http`
//! crate lives in `fresh-http`.
//!
//! ## Decision order
//!
//! [`is_fresh`] evaluates the validators in a fixed order and the first failing
//! step makes the representation stale:
//!
//! 1. No `If-Modified-Since` and no `If-None-Match` - stale.
//! 2. `Cache-Control: no-cache` directive - stale.
//! 3. `If-None-Match` (unless it is exactly `*`) must match the response `ETag`
//!    using weak comparison.
//! 4. `If-Modified-Since` must not predate the response `Last-Modified`.
//!
//! Any malformed or missing counterpart validator resolves to stale.
//!
//! ```
//! use fresh_core::is_fresh;
//!
//! assert!(is_fresh(b"", br#""foo""#, b"", b"", br#"W/"foo""#));
//! assert!(!is_fresh(b"", br#""foo""#, b"no-cache", b"", br#""foo""#));
//! ```
//!
//! ## Feature Flags
//!
//! - `metrics` - Record fresh/stale verdict counters via the `metrics` crate
//!

pub mod date;
pub mod etag;
pub mod freshness;
pub mod metrics;
pub mod token;
pub mod validators;

pub use date::{HttpDateError, http_date_timestamp, parse_http_date};
pub use etag::{EntityTag, WEAK_PREFIX, weak_match};
pub use freshness::{Freshness, StaleReason, evaluate, has_no_cache, is_fresh};
pub use token::parse_token_list;
pub use validators::{RequestValidators, ResponseValidators};
