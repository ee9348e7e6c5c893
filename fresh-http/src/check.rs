//! Request/response freshness check.

use fresh_core::{Freshness, evaluate};

use crate::headers::{HasHeaders, ValidatorHeaders};

/// Evaluates conditional requests against responses using a fixed set of
/// validator header names.
///
/// # Examples
///
/// ```
/// use fresh_http::{FreshnessCheck, Freshness, StaleReason};
/// use http::{HeaderMap, HeaderValue, header};
///
/// let mut request = HeaderMap::new();
/// request.insert(header::IF_NONE_MATCH, HeaderValue::from_static(r#""v1""#));
/// request.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
/// let mut response = HeaderMap::new();
/// response.insert(header::ETAG, HeaderValue::from_static(r#""v1""#));
///
/// let check = FreshnessCheck::default();
/// assert_eq!(
///     check.check(&request, &response),
///     Freshness::Stale(StaleReason::NoCache)
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct FreshnessCheck {
    headers: ValidatorHeaders,
}

impl FreshnessCheck {
    /// Creates a check reading validators from the given header names.
    pub fn new(headers: ValidatorHeaders) -> Self {
        Self { headers }
    }

    /// Header names used by this check.
    pub fn validator_headers(&self) -> &ValidatorHeaders {
        &self.headers
    }

    /// Returns the verdict, including why the response is stale.
    pub fn check<Req, Res>(&self, request: &Req, response: &Res) -> Freshness
    where
        Req: HasHeaders + ?Sized,
        Res: HasHeaders + ?Sized,
    {
        let request = self.headers.request(request.headers());
        let response = self.headers.response(response.headers());
        evaluate(&request, &response)
    }

    /// Returns `true` if the cached representation is still fresh.
    pub fn is_fresh<Req, Res>(&self, request: &Req, response: &Res) -> bool
    where
        Req: HasHeaders + ?Sized,
        Res: HasHeaders + ?Sized,
    {
        self.check(request, response).is_fresh()
    }
}

/// Checks freshness using the standard validator headers.
///
/// `true` means the client's copy is still valid and a `304 Not Modified` can
/// be sent instead of the full response.
pub fn is_fresh<Req, Res>(request: &Req, response: &Res) -> bool
where
    Req: HasHeaders + ?Sized,
    Res: HasHeaders + ?Sized,
{
    FreshnessCheck::default().is_fresh(request, response)
}
