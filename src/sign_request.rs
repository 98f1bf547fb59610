//! Request signing and header assembly.

use crate::canonical::{build_param_string, build_signature_base_string, percent_encode};
use crate::constants::{
    NONCE_LENGTH, OAUTH_CONSUMER_KEY, OAUTH_NONCE, OAUTH_SIGNATURE, OAUTH_SIGNATURE_METHOD,
    OAUTH_TIMESTAMP, OAUTH_TOKEN, OAUTH_VERSION, PROTOCOL_VERSION, SIGNATURE_METHOD, USER_AGENT,
};
use crate::credential::{AppCredential, ClientCredential};
use crate::hash::base64_hmac_sha1;
use crate::request::{ParamMap, Request};
use crate::{Error, Result};
use log::debug;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Headers authenticating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    /// `Authorization` header value, RFC 5849 `OAuth` scheme.
    pub authorization: String,
    /// `User-Agent` header value identifying this library.
    pub user_agent: String,
}

/// Generate an alphanumeric nonce of `length` characters.
///
/// Drawn from the thread-local PRNG; the protocol only needs low collision
/// probability per request, not unpredictability.
pub fn generate_nonce(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Current Unix time in whole seconds.
pub fn generate_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Derive the HMAC signing key from the two secrets.
///
/// The `&` separator is always present, even when a secret is empty.
pub fn build_signing_key(consumer_secret: &str, token_secret: &str) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    )
}

/// HMAC-SHA1 sign `base_string` with `signing_key`, base64 encoded.
///
/// Both inputs are percent-encoded ASCII by construction; anything else would
/// not key consistently across implementations and is rejected.
pub fn sign(base_string: &str, signing_key: &str) -> Result<String> {
    if !base_string.is_ascii() {
        return Err(Error::unexpected("signature base string is not ASCII"));
    }
    if !signing_key.is_ascii() {
        return Err(Error::unexpected("signing key is not ASCII"));
    }

    Ok(base64_hmac_sha1(
        signing_key.as_bytes(),
        base_string.as_bytes(),
    ))
}

/// Render the `Authorization` header value from the oauth_* parameter set.
fn build_header_string(oauth_params: &ParamMap) -> String {
    // BTreeMap iteration order is the required alphabetical key order.
    let entries = oauth_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, percent_encode(&v.to_string())))
        .collect::<Vec<_>>()
        .join(", ");

    format!("OAuth {entries}")
}

/// Generate the `Authorization` and `User-Agent` headers for `req`.
///
/// A fresh nonce and timestamp are sampled once and used for both the
/// signature and the final header.
pub fn generate_request_headers(
    req: &Request,
    app_cred: &AppCredential,
    client_cred: &ClientCredential,
) -> Result<RequestHeaders> {
    generate_request_headers_with(req, app_cred, client_cred, &ParamMap::new())
}

/// Like [`generate_request_headers`], with `overrides` replacing or extending
/// the oauth_* parameter set before signing.
///
/// Overriding `oauth_nonce` and `oauth_timestamp` makes the output
/// deterministic, which is how the tests reproduce the platform's published
/// signing example.
pub fn generate_request_headers_with(
    req: &Request,
    app_cred: &AppCredential,
    client_cred: &ClientCredential,
    overrides: &ParamMap,
) -> Result<RequestHeaders> {
    if !app_cred.is_valid() {
        return Err(Error::credential_invalid(
            "app credential is missing key or secret",
        ));
    }
    if !client_cred.is_valid() {
        return Err(Error::credential_invalid(
            "client credential is missing token or secret",
        ));
    }

    let mut oauth_params = ParamMap::new();
    oauth_params.insert(OAUTH_CONSUMER_KEY.into(), app_cred.key.clone().into());
    oauth_params.insert(OAUTH_NONCE.into(), generate_nonce(NONCE_LENGTH).into());
    oauth_params.insert(OAUTH_SIGNATURE_METHOD.into(), SIGNATURE_METHOD.into());
    oauth_params.insert(
        OAUTH_TIMESTAMP.into(),
        generate_timestamp().to_string().into(),
    );
    oauth_params.insert(OAUTH_TOKEN.into(), client_cred.token.clone().into());
    oauth_params.insert(OAUTH_VERSION.into(), PROTOCOL_VERSION.into());

    for (k, v) in overrides {
        oauth_params.insert(k.clone(), v.clone());
    }

    // One map drives the signature: oauth params as the base, the request's
    // own params overlaid on top.
    let mut signed_params = oauth_params.clone();
    for (k, v) in &req.params {
        signed_params.insert(k.clone(), v.clone());
    }

    let param_string = build_param_string(&signed_params);
    let base_string = build_signature_base_string(&req.method, &req.base_url, &param_string)?;
    debug!("signature base string: {base_string}");

    let signing_key = build_signing_key(&app_cred.secret, &client_cred.secret);
    let signature = sign(&base_string, &signing_key)?;
    oauth_params.insert(OAUTH_SIGNATURE.into(), signature.into());

    Ok(RequestHeaders {
        authorization: build_header_string(&oauth_params),
        user_agent: USER_AGENT.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ParamValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_nonce_length_and_alphabet() {
        let nonce = generate_nonce(100);
        assert_eq!(nonce.len(), 100);
        assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));

        assert_ne!(generate_nonce(42), generate_nonce(42));
    }

    #[test]
    fn test_generate_timestamp_is_current() {
        // 2020-01-01T00:00:00Z as a sanity floor.
        assert!(generate_timestamp() > 1_577_836_800);
    }

    #[test]
    fn test_build_signing_key_keeps_separator() {
        assert_eq!(build_signing_key("", ""), "&");
        assert_eq!(build_signing_key("abc", ""), "abc&");
        assert_eq!(build_signing_key("a b", "c&d"), "a%20b&c%26d");
    }

    #[test]
    fn test_sign_is_deterministic_and_sensitive() {
        let key = "secret&token";
        let sig = sign("base-string", key).expect("ascii input");
        assert_eq!(sig, sign("base-string", key).expect("ascii input"));
        assert_ne!(sig, sign("base-strinG", key).expect("ascii input"));
        assert_ne!(sig, sign("base-string", "secret&toke n").expect("ascii input"));
    }

    #[test]
    fn test_sign_rejects_non_ascii() {
        let err = sign("bäse", "key").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Unexpected);

        let err = sign("base", "kèy").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Unexpected);
    }

    #[test]
    fn test_build_header_string_sorted_and_quoted() {
        let mut params = ParamMap::new();
        params.insert("oauth_token".into(), ParamValue::from("t/t"));
        params.insert("oauth_consumer_key".into(), ParamValue::from("ck"));
        assert_eq!(
            build_header_string(&params),
            "OAuth oauth_consumer_key=\"ck\", oauth_token=\"t%2Ft\""
        );
    }

    #[test]
    fn test_missing_credential_fields_fail_at_signing() {
        let req = Request::new("GET", "https://api.example.com/1/test.json");
        let app = AppCredential::new("key", "");
        let client = ClientCredential::new("1", "token", "secret");
        let err = generate_request_headers(&req, &app, &client).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::CredentialInvalid);

        let app = AppCredential::new("key", "secret");
        let client = ClientCredential::new("1", "", "secret");
        let err = generate_request_headers(&req, &app, &client).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::CredentialInvalid);
    }

    #[test]
    fn test_malformed_request_fails_at_signing() {
        let req = Request::new("", "https://api.example.com/1/test.json");
        let app = AppCredential::new("key", "secret");
        let client = ClientCredential::new("1", "token", "secret");
        let err = generate_request_headers(&req, &app, &client).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::RequestInvalid);
    }
}
