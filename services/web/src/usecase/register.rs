use chrono::Utc;

use quitemap_domain::password;
use quitemap_domain::registration::{PendingRegistration, RegistrationRequest};
use quitemap_domain::token::generate_token;

use crate::domain::repository::{AccountRepository, PendingRepository};
use crate::error::WebServiceError;

pub struct RegisterInput {
    pub username: String,
    pub telegram_handle: String,
    pub password: String,
}

pub struct RegisterUseCase<A, P>
where
    A: AccountRepository,
    P: PendingRepository,
{
    pub accounts: A,
    pub pendings: P,
}

impl<A, P> RegisterUseCase<A, P>
where
    A: AccountRepository,
    P: PendingRepository,
{
    pub async fn execute(&self, input: RegisterInput) -> Result<(), WebServiceError> {
        // 1. Normalize + validate → 400 naming the first failing field
        let request =
            RegistrationRequest::parse(&input.username, &input.telegram_handle, &input.password)?;

        // 2. Uniqueness against accounts, username checked first
        if self
            .accounts
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(WebServiceError::UsernameTaken);
        }
        if self
            .accounts
            .find_by_handle(&request.telegram_handle)
            .await?
            .is_some()
        {
            return Err(WebServiceError::TelegramHandleTaken);
        }

        // 3. An expired pending is deleted, not overwritten; the
        //    replacement row starts a fresh TTL.
        let now = Utc::now();
        if let Some(existing) = self.pendings.find_by_handle(&request.telegram_handle).await? {
            if existing.is_expired(now) {
                self.pendings
                    .delete_by_handle(&request.telegram_handle)
                    .await?;
            }
        }

        // 4. Hash + upsert. On the overwrite path only username and
        //    password digest change; expires_at is not refreshed.
        let digest = password::hash_password(&request.password)
            .map_err(|e| WebServiceError::Internal(anyhow::anyhow!(e)))?;
        let pending = PendingRegistration::new(
            request.username,
            request.telegram_handle,
            digest,
            generate_token(),
            now,
        );
        self.pendings.upsert(&pending).await
    }
}
