//! Database Module
//!
//! # Interview Q&A
//!
//! Q: 커넥션 풀은 어떻게 관리하는가?
//! A: SQLx의 PgPool 사용
//!    - 최소/최대 커넥션 수 설정
//!    - 커넥션 재사용 (오버헤드 감소)
//!    - 획득 타임아웃으로 장애 시 응답 지연 제한
//!
//! Q: 재연결은 왜 풀을 통째로 다시 만드는가?
//! A: DB 재시작/페일오버 후 풀에 남은 커넥션은 모두 끊어진 상태
//!    - 기존 풀 close → 대기 → 새 풀 생성
//!    - 풀 교체 중에는 `initialized = false`로 보고
//!    - 동시 재연결 요청은 내부 Mutex로 직렬화
//!
//! Q: 서버 시작 시 DB 연결이 실패하면?
//! A: 시작은 계속 진행 (degraded 상태)
//!    - `/health/database`가 500으로 장애를 알림
//!    - `/health/database/reconnect`로 복구 가능

mod manager;
mod models;

pub use manager::ConnectionManager;
pub use models::*;

#[cfg(test)]
pub use manager::mock;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tokio::sync::{Mutex, RwLock};

use crate::config::DatabaseSettings;

/// PostgreSQL 커넥션 풀 관리
pub struct Database {
    settings: DatabaseSettings,
    pool: RwLock<Option<PgPool>>,
    /// 재연결 직렬화
    reconnect_lock: Mutex<()>,
}

impl Database {
    /// 풀 없이 생성 (`connect()` 전까지 initialized = false)
    pub fn new(settings: DatabaseSettings) -> Self {
        Self {
            settings,
            pool: RwLock::new(None),
            reconnect_lock: Mutex::new(()),
        }
    }

    /// 데이터베이스 연결
    ///
    /// # Connection Pool Settings
    ///
    /// - max_connections: `DB_MAX_CONNECTIONS` (기본 10)
    /// - min_connections: `DB_MIN_CONNECTIONS` (기본 1)
    /// - acquire_timeout: `DB_ACQUIRE_TIMEOUT_SECS` (기본 3초)
    ///
    /// 진행 중인 재연결이 있으면 끝날 때까지 대기
    pub async fn connect(&self) -> Result<(), DbError> {
        let _guard = self.reconnect_lock.lock().await;

        let pool = self.open_pool().await?;
        let previous = self.pool.write().await.replace(pool);
        if let Some(old) = previous {
            old.close().await;
        }
        Ok(())
    }

    /// 풀 종료 (서버 종료 시)
    pub async fn close(&self) {
        let current = self.pool.write().await.take();
        if let Some(pool) = current {
            pool.close().await;
            tracing::info!("Database pool closed");
        }
    }

    async fn open_pool(&self) -> Result<PgPool, DbError> {
        let pool = PgPoolOptions::new()
            .max_connections(self.settings.max_connections)
            .min_connections(self.settings.min_connections)
            .acquire_timeout(self.settings.acquire_timeout)
            .connect(&self.settings.url)
            .await?;

        ping(&pool).await?;
        Ok(pool)
    }

    async fn current_pool(&self) -> Option<PgPool> {
        self.pool.read().await.clone()
    }
}

async fn ping(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[async_trait]
impl ConnectionManager for Database {
    async fn status(&self) -> Result<PoolStatus, DbError> {
        let pool = self.current_pool().await.ok_or(DbError::NotInitialized)?;

        let connected = !pool.is_closed() && ping(&pool).await.is_ok();
        let pool_size = pool.size();
        let idle = u32::try_from(pool.num_idle()).unwrap_or(u32::MAX);

        Ok(PoolStatus {
            connected,
            initialized: true,
            pool_size,
            active_connections: pool_size.saturating_sub(idle),
        })
    }

    async fn reconnect(&self) -> Result<ReconnectOutcome, DbError> {
        let _guard = self.reconnect_lock.lock().await;

        let previous = self.pool.write().await.take();
        if let Some(pool) = previous {
            tracing::info!("Closing existing database pool");
            pool.close().await;
        }

        tokio::time::sleep(self.settings.reconnect_delay).await;

        match self.open_pool().await {
            Ok(pool) => {
                *self.pool.write().await = Some(pool);
                tracing::info!("Database reconnected");
                Ok(ReconnectOutcome::succeeded())
            }
            Err(e) => {
                tracing::error!(error = %e, "Database reconnection failed");
                Ok(ReconnectOutcome::failed(e))
            }
        }
    }
}
