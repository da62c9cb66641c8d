#![allow(async_fn_in_trait)]

use uuid::Uuid;

use quitemap_domain::account::Account;
use quitemap_domain::registration::PendingRegistration;

use crate::error::WebServiceError;

/// Read/activate access to accounts. The web actor never creates accounts;
/// promotion is the bot's job.
pub trait AccountRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, WebServiceError>;

    async fn find_by_handle(&self, handle: &str) -> Result<Option<Account>, WebServiceError>;

    async fn find_by_activation_token(
        &self,
        token: &str,
    ) -> Result<Option<Account>, WebServiceError>;

    /// Mark an account active and clear its activation token, as one UPDATE.
    async fn activate(&self, id: Uuid) -> Result<(), WebServiceError>;
}

/// Write access to pending registrations from the intake side.
pub trait PendingRepository: Send + Sync {
    async fn find_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<PendingRegistration>, WebServiceError>;

    /// Insert, or on a handle collision overwrite only username and
    /// password digest in place (`expires_at` and the reserved token stay).
    /// Racing submissions for one handle serialize on the unique index.
    async fn upsert(&self, pending: &PendingRegistration) -> Result<(), WebServiceError>;

    async fn delete_by_handle(&self, handle: &str) -> Result<(), WebServiceError>;
}
