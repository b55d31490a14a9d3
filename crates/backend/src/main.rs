pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use shared::config;
    use shared::state::AppState;
    use shared::uploads::UploadStore;

    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Отключаем логи SQL запросов, но оставляем логи приложения
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Простой middleware для логирования запросов
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let status = response.status();
        let duration = start.elapsed();
        if status.is_server_error() {
            tracing::warn!(
                "{:>5}ms | {} {:>6} {}",
                duration.as_millis(),
                status.as_u16(),
                method,
                uri.path()
            );
        } else {
            tracing::info!(
                "{:>5}ms | {} {:>6} {}",
                duration.as_millis(),
                status.as_u16(),
                method,
                uri.path()
            );
        }
        response
    }

    let config = config::load_config()?;

    let db = shared::data::db::connect(&config::get_database_path(&config))
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    let uploads = UploadStore::new(
        config::get_uploads_dir(&config),
        config.uploads.max_file_size,
    );
    let state = AppState::new(db, uploads);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static("x-requested-with"),
        ]);

    let static_dir = config
        .server
        .static_dir
        .as_deref()
        .map(config::resolve_path);

    let app = routes::configure_routes(state, static_dir)
        .layer(cors)
        .layer(middleware::from_fn(request_logger));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
