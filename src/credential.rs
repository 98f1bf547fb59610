use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

/// Hides a secret in Debug output.
struct Masked<'a>(&'a str);

impl Debug for Masked<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("EMPTY")
        } else {
            f.write_str("***")
        }
    }
}

/// Application credential: the consumer key/secret pair identifying the
/// calling application to the platform.
///
/// Equality and hashing cover the full pair. The secret never appears in
/// Debug output.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AppCredential {
    /// Consumer key.
    pub key: String,
    /// Consumer secret.
    pub secret: String,
}

impl AppCredential {
    /// Create an application credential.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Both fields must be present to sign a request.
    pub fn is_valid(&self) -> bool {
        !self.key.is_empty() && !self.secret.is_empty()
    }
}

impl Debug for AppCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppCredential")
            .field("key", &self.key)
            .field("secret", &Masked(&self.secret))
            .finish()
    }
}

/// Client credential: the user-level token pair identifying the authorizing
/// end user.
///
/// Identity is the `user_id` alone: equality, hashing and ordering ignore
/// token and secret, so collections keyed by credential dedup per user and
/// priority queues order by user id. Serializes to the plain
/// `{user_id, token, secret}` mapping used for persistence.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientCredential {
    /// Opaque user identifier, typically numeric-as-string.
    pub user_id: String,
    /// OAuth access token.
    pub token: String,
    /// OAuth token secret.
    pub secret: String,
}

impl ClientCredential {
    /// Create a client credential.
    pub fn new(
        user_id: impl Into<String>,
        token: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            token: token.into(),
            secret: secret.into(),
        }
    }

    /// Token and secret must be present to sign a request.
    pub fn is_valid(&self) -> bool {
        !self.token.is_empty() && !self.secret.is_empty()
    }
}

impl PartialEq for ClientCredential {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }
}

impl Eq for ClientCredential {}

impl Hash for ClientCredential {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user_id.hash(state);
    }
}

impl PartialOrd for ClientCredential {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClientCredential {
    fn cmp(&self, other: &Self) -> Ordering {
        self.user_id.cmp(&other.user_id)
    }
}

impl Debug for ClientCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredential")
            .field("user_id", &self.user_id)
            .field("token", &self.token)
            .field("secret", &Masked(&self.secret))
            .finish()
    }
}
