use sea_orm::entity::prelude::*;

/// A web-submitted registration waiting for its Telegram confirmation.
/// Expires one hour after creation; at most one row per handle (the unique
/// index on `telegram_handle` is what serializes racing submissions).
///
/// `confirmation_token` is reserved for a future link-based confirmation
/// flow; the current flow correlates by sender handle and never reads it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pending_registrations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub telegram_handle: String,
    pub username: String,
    pub password_digest: String,
    pub confirmation_token: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
