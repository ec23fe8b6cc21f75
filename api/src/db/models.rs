//! Database Models
//!
//! Values reported by a connection manager. Transient, never persisted.

use thiserror::Error;

/// 커넥션 풀 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    /// `SELECT 1` 성공 여부
    pub connected: bool,

    /// 풀 생성 여부
    pub initialized: bool,

    /// 현재 풀에 열려 있는 커넥션 수
    pub pool_size: u32,

    /// 사용 중인 커넥션 수 (항상 `pool_size` 이하)
    pub active_connections: u32,
}

/// 재연결 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconnectOutcome {
    pub success: bool,
    pub message: String,
}

impl ReconnectOutcome {
    pub const SUCCESS_MESSAGE: &'static str = "Database reconnection successful";

    pub fn succeeded() -> Self {
        Self {
            success: true,
            message: Self::SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: format!("Database reconnection failed: {reason}"),
        }
    }
}

/// 커넥션 매니저 에러
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database pool is not initialized")]
    NotInitialized,

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Database unavailable: {0}")]
    Unavailable(String),
}
