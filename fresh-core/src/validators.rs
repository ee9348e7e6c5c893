//! Raw validator values taken from a request and a response.
//!
//! An absent header and an empty header value are the same thing here: both
//! are represented by an empty slice.

/// Conditional request headers sent by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestValidators<'a> {
    /// Raw `If-Modified-Since` value.
    pub if_modified_since: &'a [u8],
    /// Raw `If-None-Match` value.
    pub if_none_match: &'a [u8],
    /// Raw `Cache-Control` value.
    pub cache_control: &'a [u8],
}

impl<'a> RequestValidators<'a> {
    /// Sets `If-Modified-Since`.
    pub fn with_if_modified_since(mut self, value: &'a [u8]) -> Self {
        self.if_modified_since = value;
        self
    }

    /// Sets `If-None-Match`.
    pub fn with_if_none_match(mut self, value: &'a [u8]) -> Self {
        self.if_none_match = value;
        self
    }

    /// Sets `Cache-Control`.
    pub fn with_cache_control(mut self, value: &'a [u8]) -> Self {
        self.cache_control = value;
        self
    }

    /// Returns `true` if the request carries at least one validator.
    pub fn is_conditional(&self) -> bool {
        !self.if_modified_since.is_empty() || !self.if_none_match.is_empty()
    }
}

/// Validators of the current representation, sent by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseValidators<'a> {
    /// Raw `Last-Modified` value.
    pub last_modified: &'a [u8],
    /// Raw `ETag` value.
    pub etag: &'a [u8],
}

impl<'a> ResponseValidators<'a> {
    /// Sets `Last-Modified`.
    pub fn with_last_modified(mut self, value: &'a [u8]) -> Self {
        self.last_modified = value;
        self
    }

    /// Sets `ETag`.
    pub fn with_etag(mut self, value: &'a [u8]) -> Self {
        self.etag = value;
        self
    }
}
