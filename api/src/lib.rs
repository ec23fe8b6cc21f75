//! Database Health API Library
//!
//! # Overview
//!
//! 데이터베이스 커넥션 풀의 상태 확인과 강제 재연결을 HTTP로 노출하는 서비스
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                         API                              │
//! │                                                          │
//! │  ┌─────────┐      ┌───────────────────┐     ┌────────┐  │
//! │  │ Routes  │ ───▶ │ ConnectionManager │ ◀── │   DB   │  │
//! │  └────┬────┘      └───────────────────┘     └───┬────┘  │
//! │       │                                         │       │
//! │  ┌────┴────┐                                    │       │
//! │  │  Types  │  (timestamp envelope)              │       │
//! │  └─────────┘                                    │       │
//! └─────────────────────────────────────────────────┼───────┘
//!                                                   ▼
//!                                          ┌────────────────┐
//!                                          │   PostgreSQL   │
//!                                          └────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: 환경 설정 관리
//! - `error`: 에러 타입 및 처리
//! - `routes`: HTTP 엔드포인트 핸들러
//! - `db`: 커넥션 매니저 (trait + PostgreSQL 구현)
//! - `types`: 응답 타입 정의
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use db_health_api::{create_router, AppState, Config, Database};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let db = Arc::new(Database::new(config.database.clone()));
//!     db.connect().await?;
//!
//!     let app = create_router(AppState::new(db, config));
//!     // ... 서버 시작
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use db::{ConnectionManager, Database};
pub use error::ApiError;

/// 애플리케이션 전역 상태
#[derive(Clone)]
pub struct AppState {
    pub connections: Arc<dyn ConnectionManager>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(connections: Arc<dyn ConnectionManager>, config: Config) -> Self {
        Self {
            connections,
            config: Arc::new(config),
        }
    }
}

/// 라우터 생성
///
/// # Route Structure
///
/// ```text
/// GET  /                           - Liveness ("Hello World!")
/// GET  /health/database            - 데이터베이스 상태
/// POST /health/database/reconnect  - 강제 재연결
/// GET  /api-docs/openapi.json      - OpenAPI 명세
/// ```
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // Health
        .route("/", get(routes::health::ping))
        .route("/health/database", get(routes::health::get_status))
        .route("/health/database/reconnect", post(routes::health::reconnect))

        // API 명세
        .route("/api-docs/openapi.json", get(routes::docs::openapi_document))

        .fallback(error::not_found)

        // 미들웨어
        .layer(TraceLayer::new_for_http())
        .layer(cors)

        // 상태 주입
        .with_state(state)
}

/// CORS 설정
///
/// - 프로덕션: `ALLOWED_ORIGINS`에 지정된 도메인만 허용
/// - 개발: localhost 허용
fn cors_layer(config: &Config) -> CorsLayer {
    if config.is_production() {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        CorsLayer::new()
            .allow_origin([
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("http://localhost:5173"),
                HeaderValue::from_static("http://127.0.0.1:5173"),
            ])
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
