//! Canonical strings for OAuth 1.0a signing.
//!
//! The server recomputes the signature from its own view of the request, so
//! every byte here is load-bearing: encoding, sort order and separators must
//! match the RFC 5849 rules exactly or the request is rejected as
//! unauthorized.

use crate::constants::PERCENT_ENCODE_SET;
use crate::request::ParamMap;
use crate::{Error, Result};
use percent_encoding::utf8_percent_encode;

/// Percent-encode a string per RFC 3986.
///
/// Every byte outside the unreserved set (`A-Z a-z 0-9 - . _ ~`) is escaped
/// with uppercase hex, including `/` and space (`%20`, never `+`).
pub fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, &PERCENT_ENCODE_SET).to_string()
}

/// Build the sorted parameter string over the merged parameter set.
///
/// Keys and values are percent-encoded, joined as `key=value` pairs sorted by
/// encoded key with ties broken by encoded value, and concatenated with `&`.
/// The input must not contain `oauth_signature`.
pub fn build_param_string(params: &ParamMap) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(&v.to_string())))
        .collect();
    pairs.sort();

    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the signature base string from method, base URL and parameter string.
///
/// The method is uppercased; URL and parameter string are percent-encoded and
/// the three parts joined with a literal `&`.
pub fn build_signature_base_string(
    method: &str,
    base_url: &str,
    param_string: &str,
) -> Result<String> {
    if method.is_empty() {
        return Err(Error::request_invalid("request method is empty"));
    }
    if base_url.is_empty() {
        return Err(Error::request_invalid("request base URL is empty"));
    }

    Ok(format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(base_url),
        percent_encode(param_string)
    ))
}
