//! Health Check Endpoints
//!
//! # Interview Q&A
//!
//! Q: Health check 엔드포인트는 왜 필요한가?
//! A: 3가지 용도
//!    1. 로드밸런서 헬스체크 (ALB, nginx)
//!    2. Kubernetes liveness/readiness probe
//!    3. 모니터링 시스템 연동
//!
//! Q: DB 연결 상태도 체크하는 이유는?
//! A: "깊은 헬스체크"(deep health check) 패턴
//!    - `GET /`: 프로세스 살아있음 (liveness)
//!    - `GET /health/database`: 실제 서비스 가능 상태 (readiness)
//!    - 장애 시에도 500 + 구조화된 body 반환 → 프로브가 원인 파악 가능
//!
//! Q: 재연결 요청 중 클라이언트가 끊기면?
//! A: 재연결은 별도 task에서 실행 → 핸들러 future가 drop되어도 끝까지 진행
//!    - 커넥션 매니저 panic도 JoinError로 잡혀 `success = false`로 응답

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    types::{DatabaseStatus, Envelope, ReconnectBody, ReconnectResult, StatusReport},
    AppState,
};

pub const GREETING: &str = "Hello World!";

/// GET /
///
/// Liveness 확인 (항상 고정 문자열)
pub async fn ping() -> &'static str {
    GREETING
}

/// GET /health/database
///
/// 커넥션 풀 상태 조회. 연결되지 않은 경우 500
#[tracing::instrument(skip(state))]
pub async fn get_status(State(state): State<AppState>) -> (StatusCode, Json<StatusReport>) {
    let payload = match state.connections.status().await {
        Ok(status) => DatabaseStatus::reported(status),
        Err(e) => {
            tracing::warn!(error = %e, "Database status check failed");
            DatabaseStatus::degraded()
        }
    };

    let code = if payload.connected {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (code, Json(Envelope::now(payload)))
}

/// POST /health/database/reconnect
///
/// 강제 재연결. 완료될 때까지 대기 후 응답
#[tracing::instrument(skip(state))]
pub async fn reconnect(State(state): State<AppState>) -> (StatusCode, Json<ReconnectResult>) {
    tracing::info!("Database reconnect requested");

    let connections = Arc::clone(&state.connections);
    let task = tokio::spawn(async move { connections.reconnect().await });

    let body = match task.await {
        Ok(Ok(outcome)) => ReconnectBody::from(outcome),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Database reconnect errored");
            ReconnectBody::failed(e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Database reconnect task failed");
            ReconnectBody::failed(format!("Reconnect task failed: {e}"))
        }
    };

    let code = if body.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (code, Json(Envelope::now(body)))
}
