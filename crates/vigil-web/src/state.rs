//! Application state.

use std::sync::Arc;

use vigil_core::bus::NotificationBus;
use vigil_db::DbPool;

use crate::auth::AdminAuth;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
    pub bus: NotificationBus,
    pub auth: AdminAuth,
}

impl AppState {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self {
            db,
            bus: NotificationBus::new(),
            auth: AdminAuth::from_env(),
        }
    }
}
