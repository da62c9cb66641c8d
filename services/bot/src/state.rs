use sea_orm::DatabaseConnection;

use crate::infra::db::{DbAccountRepository, DbPendingRepository};
use crate::infra::telegram::TelegramClient;

/// Shared state for the poller and command handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub telegram: TelegramClient,
    pub base_url: String,
}

impl AppState {
    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn pending_repo(&self) -> DbPendingRepository {
        DbPendingRepository {
            db: self.db.clone(),
        }
    }
}
