use std::sync::{Arc, Mutex};

use uuid::Uuid;

use quitemap_domain::account::Account;
use quitemap_domain::registration::PendingRegistration;
use quitemap_web::domain::repository::{AccountRepository, PendingRepository};
use quitemap_web::error::WebServiceError;

// ── MockAccountRepo ──────────────────────────────────────────────────────────

pub struct MockAccountRepo {
    pub accounts: Arc<Mutex<Vec<Account>>>,
}

impl MockAccountRepo {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the account list for post-execution inspection.
    pub fn accounts_handle(&self) -> Arc<Mutex<Vec<Account>>> {
        Arc::clone(&self.accounts)
    }
}

impl AccountRepository for MockAccountRepo {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, WebServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn find_by_handle(&self, handle: &str) -> Result<Option<Account>, WebServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.telegram_handle == handle)
            .cloned())
    }

    async fn find_by_activation_token(
        &self,
        token: &str,
    ) -> Result<Option<Account>, WebServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.activation_token.as_deref() == Some(token))
            .cloned())
    }

    async fn activate(&self, id: Uuid) -> Result<(), WebServiceError> {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(account) = accounts.iter_mut().find(|a| a.id == id) {
            account.is_active = true;
            account.activation_token = None;
        }
        Ok(())
    }
}

// ── MockPendingRepo ──────────────────────────────────────────────────────────

pub struct MockPendingRepo {
    pub pendings: Arc<Mutex<Vec<PendingRegistration>>>,
}

impl MockPendingRepo {
    pub fn new(pendings: Vec<PendingRegistration>) -> Self {
        Self {
            pendings: Arc::new(Mutex::new(pendings)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the pending list for post-execution inspection.
    pub fn pendings_handle(&self) -> Arc<Mutex<Vec<PendingRegistration>>> {
        Arc::clone(&self.pendings)
    }
}

impl PendingRepository for MockPendingRepo {
    async fn find_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<PendingRegistration>, WebServiceError> {
        Ok(self
            .pendings
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.telegram_handle == handle)
            .cloned())
    }

    async fn upsert(&self, pending: &PendingRegistration) -> Result<(), WebServiceError> {
        // Mirrors the ON CONFLICT column list: an existing row for the
        // handle keeps its id, expires_at and reserved token.
        let mut pendings = self.pendings.lock().unwrap();
        match pendings
            .iter_mut()
            .find(|p| p.telegram_handle == pending.telegram_handle)
        {
            Some(existing) => {
                existing.username = pending.username.clone();
                existing.password_digest = pending.password_digest.clone();
            }
            None => pendings.push(pending.clone()),
        }
        Ok(())
    }

    async fn delete_by_handle(&self, handle: &str) -> Result<(), WebServiceError> {
        self.pendings
            .lock()
            .unwrap()
            .retain(|p| p.telegram_handle != handle);
        Ok(())
    }
}
