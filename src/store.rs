//! In-memory client credential registry.

use crate::credential::ClientCredential;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Client credentials keyed by user id.
///
/// Adding a credential for a user that is already present replaces the stored
/// one. Serializes as a plain list of credentials, the persistence form an
/// external storage layer consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<ClientCredential>", into = "Vec<ClientCredential>")]
pub struct CredentialStore {
    creds: BTreeMap<String, ClientCredential>,
}

impl CredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a credential, returning the previous one for the same user id.
    pub fn add(&mut self, cred: ClientCredential) -> Option<ClientCredential> {
        self.creds.insert(cred.user_id.clone(), cred)
    }

    /// Look up the credential stored for `user_id`.
    pub fn get(&self, user_id: &str) -> Option<&ClientCredential> {
        self.creds.get(user_id)
    }

    /// Remove and return the credential stored for `user_id`.
    pub fn remove(&mut self, user_id: &str) -> Option<ClientCredential> {
        self.creds.remove(user_id)
    }

    /// Any stored credential, for callers that do not care which user signs.
    ///
    /// Returns the credential with the smallest user id so repeated calls on
    /// an unchanged store are deterministic.
    pub fn any(&self) -> Option<&ClientCredential> {
        self.creds.values().next()
    }

    /// Number of stored credentials.
    pub fn len(&self) -> usize {
        self.creds.len()
    }

    /// Whether the store holds no credentials.
    pub fn is_empty(&self) -> bool {
        self.creds.is_empty()
    }

    /// Iterate over stored credentials in user id order.
    pub fn iter(&self) -> impl Iterator<Item = &ClientCredential> {
        self.creds.values()
    }
}

impl From<Vec<ClientCredential>> for CredentialStore {
    fn from(creds: Vec<ClientCredential>) -> Self {
        let mut store = Self::new();
        for cred in creds {
            store.add(cred);
        }
        store
    }
}

impl From<CredentialStore> for Vec<ClientCredential> {
    fn from(store: CredentialStore) -> Self {
        store.creds.into_values().collect()
    }
}
