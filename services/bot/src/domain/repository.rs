#![allow(async_fn_in_trait)]

use quitemap_domain::account::Account;
use quitemap_domain::registration::PendingRegistration;

use crate::domain::types::PromoteResult;
use crate::error::BotServiceError;

/// Account access from the confirmation side.
pub trait AccountRepository: Send + Sync {
    async fn find_by_handle(&self, handle: &str) -> Result<Option<Account>, BotServiceError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, BotServiceError>;

    /// Promote: insert the account and delete the pending registration for
    /// its handle in one transaction, both or neither. Uniqueness races
    /// surface as [`PromoteResult`] variants, not errors.
    async fn create_consuming_pending(
        &self,
        account: &Account,
    ) -> Result<PromoteResult, BotServiceError>;
}

/// Pending registration access from the confirmation side.
pub trait PendingRepository: Send + Sync {
    async fn find_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<PendingRegistration>, BotServiceError>;

    async fn delete_by_handle(&self, handle: &str) -> Result<(), BotServiceError>;
}
