//! OAuth 1.0a request signing with HMAC-SHA1.
//!
//! Given a request description and a pair of credentials (application-level
//! and user-level), this crate produces the `Authorization` header value that
//! authenticates the request, plus the matching `User-Agent` header. It never
//! performs network I/O: sending the request, retries and rate limiting are
//! the caller's business.
//!
//! ## Example
//!
//! ```
//! use oauth1_sign::{AppCredential, ClientCredential, Request};
//!
//! # fn main() -> oauth1_sign::Result<()> {
//! let app = AppCredential::new("consumer-key", "consumer-secret");
//! let user = ClientCredential::new("12345", "access-token", "token-secret");
//!
//! let req = Request::new("POST", "https://api.twitter.com/1.1/statuses/update.json")
//!     .with_param("status", "just setting up my crate");
//!
//! let headers = oauth1_sign::generate_request_headers(&req, &app, &user)?;
//! assert!(headers.authorization.starts_with("OAuth "));
//! # Ok(())
//! # }
//! ```
//!
//! ## Determinism
//!
//! Each signing call samples one fresh nonce and timestamp; both can be
//! pinned through [`generate_request_headers_with`] overrides, which is how
//! the tests reproduce published reference signatures.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod canonical;
pub mod constants;
pub mod hash;

mod credential;
pub use credential::{AppCredential, ClientCredential};
mod error;
pub use error::{Error, ErrorKind, Result};
mod request;
pub use request::{ParamMap, ParamValue, Request};
mod sign_request;
pub use sign_request::{
    build_signing_key, generate_nonce, generate_request_headers, generate_request_headers_with,
    generate_timestamp, sign, RequestHeaders,
};
mod store;
pub use store::CredentialStore;
