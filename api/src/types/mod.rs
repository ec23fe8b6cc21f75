//! Common Types Module
//!
//! 헬스 엔드포인트 응답 타입 정의
//!
//! 모든 JSON 응답은 `Envelope`로 감싸짐: 응답 시점의 `timestamp` + payload 필드

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::db::{PoolStatus, ReconnectOutcome};

/// `GET /health/database` 응답의 고정 status 라벨
pub const STATUS_LABEL: &str = "Database Status Check";

/// 타임스탬프 + payload 래퍼
///
/// payload 필드는 `timestamp`와 같은 레벨로 flatten됨
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// ISO-8601 UTC (예: `2026-10-16T09:30:00.123Z`)
    pub timestamp: String,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> Envelope<T> {
    /// 현재 시각으로 stamp
    pub fn now(payload: T) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            payload,
        }
    }
}

/// 데이터베이스 상태 payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStatus {
    pub status: String,
    pub connected: bool,
    pub initialized: bool,
    /// 커넥션 매니저 장애 시 생략
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_connections: Option<u32>,
}

impl DatabaseStatus {
    /// 커넥션 매니저 응답 그대로 반영
    pub fn reported(status: PoolStatus) -> Self {
        Self {
            status: STATUS_LABEL.to_string(),
            connected: status.connected,
            initialized: status.initialized,
            pool_size: Some(status.pool_size),
            active_connections: Some(status.active_connections),
        }
    }

    /// 상태 조회 실패 시 degraded 응답 (pool metrics 없음)
    pub fn degraded() -> Self {
        Self {
            status: STATUS_LABEL.to_string(),
            connected: false,
            initialized: false,
            pool_size: None,
            active_connections: None,
        }
    }
}

/// 재연결 결과 payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconnectBody {
    pub success: bool,
    pub message: String,
}

impl ReconnectBody {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<ReconnectOutcome> for ReconnectBody {
    fn from(outcome: ReconnectOutcome) -> Self {
        Self {
            success: outcome.success,
            message: outcome.message,
        }
    }
}

pub type StatusReport = Envelope<DatabaseStatus>;
pub type ReconnectResult = Envelope<ReconnectBody>;
