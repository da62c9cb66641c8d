use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr, TransactionError, TransactionTrait,
};

use quitemap_domain::account::Account;
use quitemap_domain::registration::PendingRegistration;
use quitemap_schema::{pending_registrations, users};

use crate::domain::repository::{AccountRepository, PendingRepository};
use crate::domain::types::PromoteResult;
use crate::error::BotServiceError;

// ── Account repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_handle(&self, handle: &str) -> Result<Option<Account>, BotServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::TelegramHandle.eq(handle))
            .one(&self.db)
            .await
            .context("find account by telegram handle")?;
        Ok(model.map(account_from_model))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, BotServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find account by username")?;
        Ok(model.map(account_from_model))
    }

    async fn create_consuming_pending(
        &self,
        account: &Account,
    ) -> Result<PromoteResult, BotServiceError> {
        let account = account.clone();
        let result = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    // Deleting first takes the row lock on the pending row;
                    // a second confirmer for the same handle blocks here and
                    // then sees zero rows.
                    let deleted = pending_registrations::Entity::delete_many()
                        .filter(
                            pending_registrations::Column::TelegramHandle
                                .eq(account.telegram_handle.clone()),
                        )
                        .exec(txn)
                        .await?;
                    if deleted.rows_affected == 0 {
                        return Ok(false);
                    }
                    users::ActiveModel {
                        id: Set(account.id),
                        username: Set(account.username.clone()),
                        password_digest: Set(account.password_digest.clone()),
                        telegram_handle: Set(account.telegram_handle.clone()),
                        is_active: Set(account.is_active),
                        activation_token: Set(account.activation_token.clone()),
                        created_at: Set(account.created_at),
                    }
                    .insert(txn)
                    .await?;
                    Ok(true)
                })
            })
            .await;

        match result {
            Ok(true) => Ok(PromoteResult::Promoted),
            Ok(false) => Ok(PromoteResult::PendingGone),
            Err(TransactionError::Transaction(ref e)) if is_unique_violation(e) => {
                Ok(PromoteResult::Conflict)
            }
            Err(e) => Err(BotServiceError::Internal(
                anyhow::Error::new(e).context("promote pending registration"),
            )),
        }
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

fn account_from_model(model: users::Model) -> Account {
    Account {
        id: model.id,
        username: model.username,
        password_digest: model.password_digest,
        telegram_handle: model.telegram_handle,
        is_active: model.is_active,
        activation_token: model.activation_token,
        created_at: model.created_at,
    }
}

// ── Pending repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPendingRepository {
    pub db: DatabaseConnection,
}

impl PendingRepository for DbPendingRepository {
    async fn find_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<PendingRegistration>, BotServiceError> {
        let model = pending_registrations::Entity::find()
            .filter(pending_registrations::Column::TelegramHandle.eq(handle))
            .one(&self.db)
            .await
            .context("find pending registration by handle")?;
        Ok(model.map(pending_from_model))
    }

    async fn delete_by_handle(&self, handle: &str) -> Result<(), BotServiceError> {
        pending_registrations::Entity::delete_many()
            .filter(pending_registrations::Column::TelegramHandle.eq(handle))
            .exec(&self.db)
            .await
            .context("delete pending registration")?;
        Ok(())
    }
}

fn pending_from_model(model: pending_registrations::Model) -> PendingRegistration {
    PendingRegistration {
        id: model.id,
        telegram_handle: model.telegram_handle,
        username: model.username,
        password_digest: model.password_digest,
        confirmation_token: model.confirmation_token,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}
