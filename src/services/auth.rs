use crate::utils::storage;

const TOKEN_KEY: &str = "token";

/// Capability handle for the persisted auth token.
///
/// Token issuance (login) is an external collaborator: whoever obtains a
/// token writes it through [`AuthStore::set_token`] and every API request
/// reads it back from here. An absent token is not an error; requests are
/// simply sent without an Authorization header.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthStore {
    key: &'static str,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    pub fn new() -> Self {
        Self { key: TOKEN_KEY }
    }

    pub fn token(&self) -> Option<String> {
        storage::get_item(self.key)
    }

    pub fn set_token(&self, token: &str) -> Result<(), String> {
        storage::set_item(self.key, token)
    }

    pub fn clear(&self) -> Result<(), String> {
        storage::remove_item(self.key)
    }
}
