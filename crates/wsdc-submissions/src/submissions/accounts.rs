use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::domain::SubmitterIdentity;

/// API consumer allowed to submit results.
///
/// Keys are never stored in clear: `api_key_lookup` is an unsalted SHA-256 used to find the
/// account, `hashed_api_key` is the bcrypt hash the presented key must verify against.
#[derive(Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub hashed_api_key: String,
    pub api_key_lookup: String,
    pub is_active: bool,
}

impl Account {
    pub fn issue(
        id: Uuid,
        name: impl Into<String>,
        email: impl Into<String>,
        api_key: &str,
        cost: u32,
    ) -> Result<Self, AccountError> {
        Ok(Self {
            id,
            name: name.into(),
            email: email.into(),
            hashed_api_key: bcrypt::hash(api_key, cost)?,
            api_key_lookup: api_key_lookup_hash(api_key),
            is_active: true,
        })
    }

    pub fn identity(&self) -> SubmitterIdentity {
        SubmitterIdentity {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("is_active", &self.is_active)
            .finish_non_exhaustive()
    }
}

/// Lowercase hex SHA-256 of the raw key.
pub fn api_key_lookup_hash(api_key: &str) -> String {
    format!("{:x}", Sha256::digest(api_key.as_bytes()))
}

/// Extracts the key from an `Authorization: Bearer <key>` header value.
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    let header = header?.trim();
    let (scheme, token) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Account lookup abstraction so authentication can run against any store.
pub trait AccountRepository: Send + Sync {
    /// Returns the account registered under `lookup`, active or not.
    fn find_by_lookup_hash(&self, lookup: &str) -> Result<Option<Account>, AccountError>;
}

/// Resolves an API key to an active account, or `None` when the key is unknown, revoked,
/// or fails bcrypt verification.
pub fn authenticate<R>(repository: &R, api_key: &str) -> Result<Option<Account>, AccountError>
where
    R: AccountRepository + ?Sized,
{
    let lookup = api_key_lookup_hash(api_key);
    let Some(account) = repository.find_by_lookup_hash(&lookup)? else {
        tracing::debug!("no account found for api key lookup");
        return Ok(None);
    };
    if !account.is_active {
        tracing::debug!(account_id = %account.id, "account found but is not active");
        return Ok(None);
    }
    if bcrypt::verify(api_key, &account.hashed_api_key)? {
        Ok(Some(account))
    } else {
        tracing::warn!(
            account_id = %account.id,
            "api key lookup matched but bcrypt verification failed"
        );
        Ok(None)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("api key hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("account store unavailable: {0}")]
    Unavailable(String),
}
