//! Freshness evaluation of conditional requests.
//!
//! [`evaluate`] returns a [`Freshness`] verdict that keeps the reason a
//! representation was found stale; [`is_fresh`] is the boolean shorthand used
//! by most callers.
//!
//! ## Example
//!
//! ```
//! use fresh_core::{Freshness, RequestValidators, ResponseValidators, StaleReason, evaluate};
//!
//! let request = RequestValidators::default()
//!     .with_if_modified_since(b"Sat, 01 Jan 2000 00:00:00 GMT");
//! let response = ResponseValidators::default()
//!     .with_last_modified(b"Sat, 01 Jan 2000 01:00:00 GMT");
//!
//! assert_eq!(
//!     evaluate(&request, &response),
//!     Freshness::Stale(StaleReason::ModifiedSince)
//! );
//! ```

use lazy_static::lazy_static;
use regex::bytes::Regex;
use tracing::{debug, trace};

use crate::date::http_date_timestamp;
use crate::etag::weak_match;
use crate::token::parse_token_list;
use crate::validators::{RequestValidators, ResponseValidators};

lazy_static! {
    static ref NO_CACHE: Regex =
        Regex::new(r"(?:^|,)(?-u:[\t\n\f\r ])*?no-cache(?-u:[\t\n\f\r ])*?(?:,|$)")
            .expect("no-cache pattern is valid");
}

const WILDCARD: &[u8] = b"*";

/// Why a cached representation was considered stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaleReason {
    /// Neither `If-Modified-Since` nor `If-None-Match` was sent.
    Unconditional,
    /// The request carries `Cache-Control: no-cache`.
    NoCache,
    /// `If-None-Match` was sent but the response has no `ETag`.
    MissingETag,
    /// No `If-None-Match` candidate matches the response `ETag`.
    ETagMismatch,
    /// `If-Modified-Since` was sent but the response has no `Last-Modified`.
    MissingLastModified,
    /// `If-Modified-Since` or `Last-Modified` is not a usable HTTP-date.
    InvalidDate,
    /// The representation changed after the client's `If-Modified-Since`.
    ModifiedSince,
}

impl StaleReason {
    /// Short label, suitable for logs and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            StaleReason::Unconditional => "unconditional",
            StaleReason::NoCache => "no_cache",
            StaleReason::MissingETag => "missing_etag",
            StaleReason::ETagMismatch => "etag_mismatch",
            StaleReason::MissingLastModified => "missing_last_modified",
            StaleReason::InvalidDate => "invalid_date",
            StaleReason::ModifiedSince => "modified_since",
        }
    }
}

/// Verdict of a freshness evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Freshness {
    /// The cached representation is still valid; a `304 Not Modified` can be sent.
    Fresh,
    /// The full representation must be sent.
    Stale(StaleReason),
}

impl Freshness {
    /// Returns `true` for [`Freshness::Fresh`].
    pub fn is_fresh(&self) -> bool {
        matches!(self, Freshness::Fresh)
    }

    /// The stale reason, if any.
    pub fn stale_reason(&self) -> Option<StaleReason> {
        match self {
            Freshness::Fresh => None,
            Freshness::Stale(reason) => Some(*reason),
        }
    }
}

/// Returns `true` if `Cache-Control` holds a standalone `no-cache` directive.
///
/// The directive must start the value or follow a comma, and must end the
/// value or be followed by a comma. `no-cache="set-cookie"` does not count.
pub fn has_no_cache(cache_control: &[u8]) -> bool {
    !cache_control.is_empty() && NO_CACHE.is_match(cache_control)
}

/// Checks whether a cached response is still fresh.
///
/// All arguments are raw header values; pass an empty slice for an absent
/// header. See [`evaluate`] for the verdict with the stale reason.
pub fn is_fresh(
    if_modified_since: &[u8],
    if_none_match: &[u8],
    cache_control: &[u8],
    last_modified: &[u8],
    etag: &[u8],
) -> bool {
    let request = RequestValidators {
        if_modified_since,
        if_none_match,
        cache_control,
    };
    let response = ResponseValidators {
        last_modified,
        etag,
    };
    evaluate(&request, &response).is_fresh()
}

/// Evaluates request validators against response validators.
///
/// Steps run in order and the first failing one decides:
///
/// 1. the request must be conditional;
/// 2. `Cache-Control` must not contain `no-cache`;
/// 3. unless it is exactly `*`, `If-None-Match` must list a tag matching the
///    response `ETag` (weak comparison);
/// 4. `If-Modified-Since` must not be earlier than `Last-Modified`.
pub fn evaluate(request: &RequestValidators<'_>, response: &ResponseValidators<'_>) -> Freshness {
    let verdict = match check(request, response) {
        Ok(()) => {
            trace!("cached representation is fresh");
            Freshness::Fresh
        }
        Err(reason) => {
            debug!(reason = reason.as_str(), "cached representation is stale");
            Freshness::Stale(reason)
        }
    };
    crate::metrics::record_verdict(&verdict);
    verdict
}

fn check(
    request: &RequestValidators<'_>,
    response: &ResponseValidators<'_>,
) -> Result<(), StaleReason> {
    if !request.is_conditional() {
        return Err(StaleReason::Unconditional);
    }
    if has_no_cache(request.cache_control) {
        return Err(StaleReason::NoCache);
    }
    check_none_match(request.if_none_match, response.etag)?;
    check_modified_since(request.if_modified_since, response.last_modified)
}

fn check_none_match(if_none_match: &[u8], etag: &[u8]) -> Result<(), StaleReason> {
    // Only a bare `*` is the wildcard; `*` inside a list is compared literally.
    if if_none_match.is_empty() || if_none_match == WILDCARD {
        return Ok(());
    }
    if etag.is_empty() {
        return Err(StaleReason::MissingETag);
    }
    if parse_token_list(if_none_match)
        .into_iter()
        .any(|candidate| weak_match(candidate, etag))
    {
        Ok(())
    } else {
        Err(StaleReason::ETagMismatch)
    }
}

fn check_modified_since(if_modified_since: &[u8], last_modified: &[u8]) -> Result<(), StaleReason> {
    if if_modified_since.is_empty() {
        return Ok(());
    }
    if last_modified.is_empty() {
        return Err(StaleReason::MissingLastModified);
    }
    let (Some(last_modified), Some(modified_since)) = (
        http_date_timestamp(last_modified),
        http_date_timestamp(if_modified_since),
    ) else {
        return Err(StaleReason::InvalidDate);
    };
    if modified_since < last_modified {
        return Err(StaleReason::ModifiedSince);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_cache_alone() {
        assert!(has_no_cache(b"no-cache"));
    }

    #[test]
    fn test_no_cache_in_directive_list() {
        assert!(has_no_cache(b"max-age=0, no-cache"));
        assert!(has_no_cache(b"no-cache, max-age=0"));
        assert!(has_no_cache(b"public,no-cache,max-age=10"));
        assert!(has_no_cache(b"max-age=0 ,  no-cache  , private"));
    }

    #[test]
    fn test_no_cache_must_be_standalone() {
        assert!(!has_no_cache(b""));
        assert!(!has_no_cache(b"no-cache=\"set-cookie\""));
        assert!(!has_no_cache(b"x-no-cache"));
        assert!(!has_no_cache(b"no-store"));
        assert!(!has_no_cache(b"max-age=0"));
    }

    #[test]
    fn test_no_cache_surrounding_whitespace_is_ascii_only() {
        assert!(has_no_cache(b"\tno-cache\r"));
        assert!(has_no_cache(b"private,\n no-cache"));
        assert!(!has_no_cache(b"\x0bno-cache"));
        assert!(!has_no_cache(b"\xc2\xa0no-cache"));
    }

    #[test]
    fn test_bare_wildcard_skips_etag_check() {
        assert_eq!(check_none_match(b"*", br#""foo""#), Ok(()));
        assert_eq!(check_none_match(b"*", b""), Ok(()));
        assert_eq!(check_none_match(b"", b""), Ok(()));
    }

    #[test]
    fn test_spaced_wildcard_is_a_literal_token() {
        assert_eq!(
            check_none_match(b" * ", br#""foo""#),
            Err(StaleReason::ETagMismatch)
        );
    }

    #[test]
    fn test_stale_reason_labels_are_distinct() {
        let reasons = [
            StaleReason::Unconditional,
            StaleReason::NoCache,
            StaleReason::MissingETag,
            StaleReason::ETagMismatch,
            StaleReason::MissingLastModified,
            StaleReason::InvalidDate,
            StaleReason::ModifiedSince,
        ];
        let labels: std::collections::HashSet<_> = reasons.iter().map(|r| r.as_str()).collect();
        assert_eq!(labels.len(), reasons.len());
    }
}
