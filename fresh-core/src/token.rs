//! Comma-separated header token lists.

const SPACE: u8 = b' ';
const COMMA: u8 = b',';

/// Splits a raw header value such as `If-None-Match` into its tokens.
///
/// Tokens are separated by `,`. Only *leading* spaces of each token are
/// skipped: spaces inside a token or between its last byte and the next comma
/// stay part of the token. Empty tokens are kept, so an empty input yields a
/// single empty token.
///
/// The returned slices borrow from `buf`.
///
/// ```
/// use fresh_core::parse_token_list;
///
/// let tokens = parse_token_list(br#" "bar" , "foo""#);
/// assert_eq!(tokens, vec![&br#""bar" "#[..], &br#""foo""#[..]]);
/// ```
pub fn parse_token_list(buf: &[u8]) -> Vec<&[u8]> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut end = 0;

    for (index, byte) in buf.iter().enumerate() {
        match *byte {
            SPACE if start == end => {
                start = index + 1;
                end = start;
            }
            COMMA => {
                tokens.push(&buf[start..end]);
                start = index + 1;
                end = start;
            }
            _ => end = index + 1,
        }
    }
    tokens.push(&buf[start..end]);
    tokens
}
