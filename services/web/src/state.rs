use sea_orm::DatabaseConnection;

use crate::infra::db::{DbAccountRepository, DbPendingRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub cookie_domain: String,
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
