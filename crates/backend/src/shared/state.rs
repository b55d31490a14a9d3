use super::uploads::UploadStore;
use sea_orm::DatabaseConnection;

/// Shared state of all handlers; cheap to clone (pool + paths).
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(db: DatabaseConnection, uploads: UploadStore) -> Self {
        Self { db, uploads }
    }
}
