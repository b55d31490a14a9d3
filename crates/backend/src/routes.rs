use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::path::PathBuf;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::state::AppState;
use crate::shared::uploads::UPLOADS_ROUTE;

/// Room for the text parts next to the largest allowed file
const FORM_OVERHEAD: usize = 64 * 1024;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let body_limit = state.uploads.max_file_size() + FORM_OVERHEAD;
    let uploads = ServeDir::new(state.uploads.dir());

    let router = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // RELATED ENTITIES (inline-create targets)
        // ========================================
        .route(
            "/api/customer",
            get(handlers::a001_customer::list_all).post(handlers::a001_customer::create),
        )
        .route(
            "/api/customer/options",
            get(handlers::a001_customer::list_options),
        )
        .route(
            "/api/tag",
            get(handlers::a002_tag::list_all).post(handlers::a002_tag::create),
        )
        .route("/api/tag/options", get(handlers::a002_tag::list_options))
        // ========================================
        // HOST FORM
        // ========================================
        .route(
            "/api/memo",
            get(handlers::a003_memo::list_all).post(handlers::a003_memo::create),
        )
        .nest_service(UPLOADS_ROUTE, uploads)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    match static_dir {
        Some(dir) => {
            let index = dir.join("index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    }
}
