use quitemap_domain::account::Account;

use crate::domain::repository::AccountRepository;
use crate::error::WebServiceError;

pub struct ActivateUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> ActivateUseCase<A> {
    /// Consume an activation token: at most one request can ever succeed
    /// for a given token, because the winning UPDATE clears the value the
    /// lookup matches on.
    pub async fn execute(&self, token: &str) -> Result<Account, WebServiceError> {
        let account = self
            .accounts
            .find_by_activation_token(token)
            .await?
            .ok_or(WebServiceError::ActivationTokenNotFound)?;

        if account.is_active {
            return Err(WebServiceError::AlreadyActivated);
        }

        self.accounts.activate(account.id).await?;
        Ok(account)
    }
}
