//! Header access for validator values.

use fresh_core::{RequestValidators, ResponseValidators};
use http::{HeaderMap, HeaderName, header};

pub use http::header::{CACHE_CONTROL, ETAG, IF_MODIFIED_SINCE, IF_NONE_MATCH, LAST_MODIFIED};

/// Anything that carries an HTTP header map.
pub trait HasHeaders {
    fn headers(&self) -> &HeaderMap;
}

impl HasHeaders for HeaderMap {
    fn headers(&self) -> &HeaderMap {
        self
    }
}

impl<B> HasHeaders for http::Request<B> {
    fn headers(&self) -> &HeaderMap {
        http::Request::headers(self)
    }
}

impl<B> HasHeaders for http::Response<B> {
    fn headers(&self) -> &HeaderMap {
        http::Response::headers(self)
    }
}

impl HasHeaders for http::request::Parts {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl HasHeaders for http::response::Parts {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Names of the headers that carry validators.
///
/// Defaults to the standard names. Only the first value of a repeated header
/// is used; an absent header reads as an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorHeaders {
    pub if_modified_since: HeaderName,
    pub if_none_match: HeaderName,
    pub cache_control: HeaderName,
    pub last_modified: HeaderName,
    pub etag: HeaderName,
}

impl Default for ValidatorHeaders {
    fn default() -> Self {
        Self {
            if_modified_since: header::IF_MODIFIED_SINCE,
            if_none_match: header::IF_NONE_MATCH,
            cache_control: header::CACHE_CONTROL,
            last_modified: header::LAST_MODIFIED,
            etag: header::ETAG,
        }
    }
}

impl ValidatorHeaders {
    /// Reads the request side validators.
    pub fn request<'a>(&self, headers: &'a HeaderMap) -> RequestValidators<'a> {
        RequestValidators {
            if_modified_since: value(headers, &self.if_modified_since),
            if_none_match: value(headers, &self.if_none_match),
            cache_control: value(headers, &self.cache_control),
        }
    }

    /// Reads the response side validators.
    pub fn response<'a>(&self, headers: &'a HeaderMap) -> ResponseValidators<'a> {
        ResponseValidators {
            last_modified: value(headers, &self.last_modified),
            etag: value(headers, &self.etag),
        }
    }
}

fn value<'a>(headers: &'a HeaderMap, name: &HeaderName) -> &'a [u8] {
    headers
        .get(name)
        .map(|value| value.as_bytes())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_absent_header_reads_empty() {
        let headers = HeaderMap::new();
        let request = ValidatorHeaders::default().request(&headers);
        assert_eq!(request, RequestValidators::default());
    }

    #[test]
    fn test_first_value_wins() {
        let mut headers = HeaderMap::new();
        headers.append(ETAG, HeaderValue::from_static("\"a\""));
        headers.append(ETAG, HeaderValue::from_static("\"b\""));

        let response = ValidatorHeaders::default().response(&headers);
        assert_eq!(response.etag, b"\"a\"");
    }

    #[test]
    fn test_custom_names() {
        let mut headers = HeaderMap::new();
        headers.insert(ETAG, HeaderValue::from_static("\"a\""));
        headers.insert("x-upstream-etag", HeaderValue::from_static("\"b\""));

        let names = ValidatorHeaders {
            etag: HeaderName::from_static("x-upstream-etag"),
            ..ValidatorHeaders::default()
        };
        assert_eq!(names.response(&headers).etag, b"\"b\"");
    }
}
