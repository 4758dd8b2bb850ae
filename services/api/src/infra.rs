use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};
use uuid::Uuid;
use wsdc_submissions::submissions::{Account, AccountError, AccountRepository};

pub(crate) const TEST_USER_NAME: &str = "Test User";
pub(crate) const TEST_USER_EMAIL: &str = "testuser@wsdc.com";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Account store keyed by lookup hash. Reads vastly outnumber writes.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    /// Seeds the development account when a test key is configured.
    pub(crate) fn seeded(test_api_key: Option<&str>, cost: u32) -> Result<Self, AccountError> {
        let repository = Self::default();
        let Some(api_key) = test_api_key else {
            warn!("TEST_API_KEY is not set; no development account seeded");
            return Ok(repository);
        };

        let account = Account::issue(
            Uuid::from_u128(1),
            TEST_USER_NAME,
            TEST_USER_EMAIL,
            api_key,
            cost,
        )?;
        info!(
            user = TEST_USER_NAME,
            email = TEST_USER_EMAIL,
            "development account seeded"
        );
        repository.insert(account)?;
        Ok(repository)
    }

    pub(crate) fn insert(&self, account: Account) -> Result<(), AccountError> {
        let mut guard = self
            .accounts
            .write()
            .map_err(|_| AccountError::Unavailable("account store lock poisoned".to_string()))?;
        guard.insert(account.api_key_lookup.to_ascii_lowercase(), account);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.accounts.read().map(|guard| guard.len()).unwrap_or(0)
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn find_by_lookup_hash(&self, lookup: &str) -> Result<Option<Account>, AccountError> {
        if lookup.trim().is_empty() {
            return Ok(None);
        }
        let guard = self
            .accounts
            .read()
            .map_err(|_| AccountError::Unavailable("account store lock poisoned".to_string()))?;
        Ok(guard.get(&lookup.to_ascii_lowercase()).cloned())
    }
}
