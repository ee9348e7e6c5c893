//! Entity tags and weak comparison.

/// Prefix marking a weak entity tag.
pub const WEAK_PREFIX: &[u8] = b"W/";

/// Borrowed view of a raw entity tag, e.g. `"xyzzy"` or `W/"xyzzy"`.
///
/// The opaque part is kept as-is, quotes included. No validation of the
/// quoted-string syntax is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityTag<'a> {
    raw: &'a [u8],
}

impl<'a> EntityTag<'a> {
    /// Wraps a raw tag value.
    pub fn new(raw: &'a [u8]) -> Self {
        Self { raw }
    }

    /// Returns `true` if the tag carries the `W/` prefix.
    pub fn is_weak(&self) -> bool {
        self.raw.starts_with(WEAK_PREFIX)
    }

    /// The tag without its weak prefix.
    pub fn opaque(&self) -> &'a [u8] {
        self.raw.strip_prefix(WEAK_PREFIX).unwrap_or(self.raw)
    }

    /// The tag exactly as it was received.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }

    /// Weak comparison against another tag, see [`weak_match`].
    pub fn weak_eq(&self, other: &EntityTag<'_>) -> bool {
        weak_match(self.raw, other.raw)
    }
}

impl<'a> From<&'a [u8]> for EntityTag<'a> {
    fn from(raw: &'a [u8]) -> Self {
        Self::new(raw)
    }
}

/// Compares an `If-None-Match` candidate with the response `ETag`.
///
/// The tags match when they are byte-identical, or when removing a single `W/`
/// prefix from either side makes them identical. Strong and weak tags with the
/// same opaque value therefore match in both directions.
///
/// ```
/// use fresh_core::weak_match;
///
/// assert!(weak_match(br#"W/"foo""#, br#""foo""#));
/// assert!(weak_match(br#""foo""#, br#"W/"foo""#));
/// assert!(!weak_match(br#""foo""#, br#""bar""#));
/// ```
pub fn weak_match(candidate: &[u8], etag: &[u8]) -> bool {
    candidate == etag
        || candidate.strip_prefix(WEAK_PREFIX) == Some(etag)
        || etag.strip_prefix(WEAK_PREFIX) == Some(candidate)
}
