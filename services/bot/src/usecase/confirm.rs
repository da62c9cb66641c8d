use chrono::Utc;

use quitemap_domain::account::Account;
use quitemap_domain::token::generate_token;

use crate::domain::repository::{AccountRepository, PendingRepository};
use crate::domain::types::{ConfirmOutcome, PromoteResult};
use crate::error::BotServiceError;

pub struct ConfirmRegistrationUseCase<A, P>
where
    A: AccountRepository,
    P: PendingRepository,
{
    pub accounts: A,
    pub pendings: P,
}

impl<A, P> ConfirmRegistrationUseCase<A, P>
where
    A: AccountRepository,
    P: PendingRepository,
{
    /// Resolve a confirmation signal for `handle`. Idempotent: repeated
    /// signals after a successful promotion report account status instead
    /// of writing anything.
    pub async fn execute(&self, handle: &str) -> Result<ConfirmOutcome, BotServiceError> {
        // 1. An account for this handle wins over any pending row.
        if let Some(account) = self.accounts.find_by_handle(handle).await? {
            return Ok(report_existing(account));
        }

        // 2. Resolve the pending handoff row.
        let Some(pending) = self.pendings.find_by_handle(handle).await? else {
            return Ok(ConfirmOutcome::NotRegistered);
        };

        // 3. Expiry re-check at confirmation time; arbitrary time may
        //    have passed since intake's lazy check.
        if pending.is_expired(Utc::now()) {
            self.pendings.delete_by_handle(handle).await?;
            return Ok(ConfirmOutcome::Expired);
        }

        // 4. The desired username may have been claimed since intake.
        if self
            .accounts
            .find_by_username(&pending.username)
            .await?
            .is_some()
        {
            self.pendings.delete_by_handle(handle).await?;
            return Ok(ConfirmOutcome::UsernameTaken {
                username: pending.username,
            });
        }

        // 5. Promote. Insert account + delete pending is one transaction;
        //    the unique indexes are the authority on races, not the checks
        //    above.
        let activation_token = generate_token();
        let account = Account::promoted(
            pending.username.clone(),
            pending.password_digest.clone(),
            pending.telegram_handle.clone(),
            activation_token.clone(),
            Utc::now(),
        );
        match self.accounts.create_consuming_pending(&account).await? {
            PromoteResult::Promoted => Ok(ConfirmOutcome::Promoted {
                username: account.username,
                telegram_handle: account.telegram_handle,
                activation_token,
            }),
            PromoteResult::PendingGone => {
                // A concurrent confirmation consumed the pending first;
                // report whatever state it left behind.
                match self.accounts.find_by_handle(handle).await? {
                    Some(account) => Ok(report_existing(account)),
                    None => Ok(ConfirmOutcome::NotRegistered),
                }
            }
            PromoteResult::Conflict => {
                // Either unique index may have fired. A handle conflict
                // means an account for this sender now exists; report it.
                // Otherwise it was the username.
                if let Some(account) = self.accounts.find_by_handle(handle).await? {
                    return Ok(report_existing(account));
                }
                self.pendings.delete_by_handle(handle).await?;
                Ok(ConfirmOutcome::UsernameTaken {
                    username: pending.username,
                })
            }
        }
    }
}

fn report_existing(account: Account) -> ConfirmOutcome {
    if account.is_active {
        return ConfirmOutcome::AlreadyActive {
            username: account.username,
        };
    }
    match account.activation_token {
        Some(activation_token) => ConfirmOutcome::AwaitingActivation {
            username: account.username,
            activation_token,
        },
        None => ConfirmOutcome::ActivationUnavailable {
            username: account.username,
        },
    }
}
