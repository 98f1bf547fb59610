use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Protocol parameter names carried in every signed request.
/// `oauth_consumer_key` parameter name.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
/// `oauth_nonce` parameter name.
pub const OAUTH_NONCE: &str = "oauth_nonce";
/// `oauth_signature` parameter name.
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
/// `oauth_signature_method` parameter name.
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
/// `oauth_timestamp` parameter name.
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
/// `oauth_token` parameter name.
pub const OAUTH_TOKEN: &str = "oauth_token";
/// `oauth_version` parameter name.
pub const OAUTH_VERSION: &str = "oauth_version";

/// The only signature method this crate implements.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// Protocol version sent as `oauth_version`.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Nonce length used by [`generate_request_headers`][crate::generate_request_headers].
///
/// The platform's documentation uses a 42 character nonce; any length with
/// low per-request collision probability is acceptable.
pub const NONCE_LENGTH: usize = 42;

/// `User-Agent` header value identifying this library.
pub const USER_AGENT: &str = concat!("oauth1-sign/", env!("CARGO_PKG_VERSION"));

/// AsciiSet for [RFC 3986 percent-encoding](https://www.rfc-editor.org/rfc/rfc3986#section-2.3)
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
///
/// Stricter than form encoding: `/` and space are escaped, and space becomes
/// `%20`, never `+`.
pub static PERCENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
