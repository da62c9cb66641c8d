use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::OnConflict,
};
use uuid::Uuid;

use quitemap_domain::account::Account;
use quitemap_domain::registration::PendingRegistration;
use quitemap_schema::{pending_registrations, users};

use crate::domain::repository::{AccountRepository, PendingRepository};
use crate::error::WebServiceError;

// ── Account repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, WebServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find account by username")?;
        Ok(model.map(account_from_model))
    }

    async fn find_by_handle(&self, handle: &str) -> Result<Option<Account>, WebServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::TelegramHandle.eq(handle))
            .one(&self.db)
            .await
            .context("find account by telegram handle")?;
        Ok(model.map(account_from_model))
    }

    async fn find_by_activation_token(
        &self,
        token: &str,
    ) -> Result<Option<Account>, WebServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::ActivationToken.eq(token))
            .one(&self.db)
            .await
            .context("find account by activation token")?;
        Ok(model.map(account_from_model))
    }

    async fn activate(&self, id: Uuid) -> Result<(), WebServiceError> {
        users::ActiveModel {
            id: Set(id),
            is_active: Set(true),
            activation_token: Set(None),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("activate account")?;
        Ok(())
    }
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
    ) -> Result<Option<PendingRegistration>, WebServiceError> {
        let model = pending_registrations::Entity::find()
            .filter(pending_registrations::Column::TelegramHandle.eq(handle))
            .one(&self.db)
            .await
            .context("find pending registration by handle")?;
        Ok(model.map(pending_from_model))
    }

    async fn upsert(&self, pending: &PendingRegistration) -> Result<(), WebServiceError> {
        // Single statement; the unique index on telegram_handle serializes
        // racing submissions. On conflict only username and password digest
        // are replaced; expires_at and the reserved token keep their
        // original values.
        let am = pending_registrations::ActiveModel {
            id: Set(pending.id),
            telegram_handle: Set(pending.telegram_handle.clone()),
            username: Set(pending.username.clone()),
            password_digest: Set(pending.password_digest.clone()),
            confirmation_token: Set(pending.confirmation_token.clone()),
            expires_at: Set(pending.expires_at),
            created_at: Set(pending.created_at),
        };
        pending_registrations::Entity::insert(am)
            .on_conflict(
                OnConflict::column(pending_registrations::Column::TelegramHandle)
                    .update_columns([
                        pending_registrations::Column::Username,
                        pending_registrations::Column::PasswordDigest,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .context("upsert pending registration")?;
        Ok(())
    }

    async fn delete_by_handle(&self, handle: &str) -> Result<(), WebServiceError> {
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
