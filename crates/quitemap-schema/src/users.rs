use sea_orm::entity::prelude::*;

/// A user account. Created inactive by the registration bot; the
/// activation endpoint flips `is_active` and clears `activation_token`.
///
/// `activation_token` is present only while the account is inactive.
/// Activation looks rows up by token value, so clearing it on use is what
/// makes the token single-shot.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub password_digest: String,
    #[sea_orm(unique)]
    pub telegram_handle: String,
    pub is_active: bool,
    #[sea_orm(unique)]
    pub activation_token: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
