use crate::core::handler;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RequestRejection, Result};
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

impl IntoResponse for RequestRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

/// body 以原始位元組讀取，不檢查 `Content-Type`。
async fn validate_cpf(body: Bytes) -> std::result::Result<&'static str, RequestRejection> {
    handler::evaluate_body(&body)
}

/// 建立只有一條 `POST` 路由的 router。
pub fn router(route: &str) -> Router {
    Router::new()
        .route(route, post(validate_cpf))
        .layer(TraceLayer::new_for_http())
}

/// 在已綁定的 listener 上提供服務，直到收到 Ctrl-C。
pub async fn serve_on(listener: TcpListener, route: &str) -> Result<()> {
    let app = router(route);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        "🚀 CPF validation endpoint listening on http://{}{}",
        listener.local_addr()?,
        config.route()
    );

    serve_on(listener, config.route()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received, draining in-flight requests"),
        Err(e) => {
            // 無法監聽訊號時就一直服務下去
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await
        }
    }
}
