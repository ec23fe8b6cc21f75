//! Connection Manager Capability
//!
//! # Interview Q&A
//!
//! Q: 왜 헬스 엔드포인트가 `Database`를 직접 쓰지 않고 trait을 거치는가?
//! A: 엔드포인트는 풀 상태 조회/재연결 두 가지 기능만 필요
//!
//!    ```text
//!    // Handler
//!    let status = state.connections.status().await;
//!
//!    // PostgreSQL 구현
//!    impl ConnectionManager for Database { ... }
//!
//!    // 테스트용 Mock
//!    impl ConnectionManager for MockConnectionManager { ... }
//!    ```
//!
//!    - DB 없이 핸들러 테스트 가능
//!    - 생성자에서 `Arc<dyn ConnectionManager>` 주입 (DI 컨테이너 불필요)

use async_trait::async_trait;

use super::models::{DbError, PoolStatus, ReconnectOutcome};

/// 커넥션 매니저 인터페이스
///
/// 재연결 동시성 제어는 구현체 책임
#[async_trait]
pub trait ConnectionManager: Send + Sync {
    /// 현재 풀 상태 (부작용 없음)
    async fn status(&self) -> Result<PoolStatus, DbError>;

    /// 기존 커넥션 종료 → 잠시 대기 → 새 커넥션 생성
    ///
    /// 처리된 실패는 `Ok(ReconnectOutcome { success: false, .. })`
    async fn reconnect(&self) -> Result<ReconnectOutcome, DbError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Mock reconnect 동작
    pub enum ReconnectBehavior {
        Resolve(ReconnectOutcome),
        Reject(String),
        Panic,
    }

    pub struct MockConnectionManager {
        status: Mutex<Option<PoolStatus>>,
        reconnect: ReconnectBehavior,
        delay: Duration,
        status_calls: AtomicUsize,
        reconnect_calls: AtomicUsize,
    }

    impl MockConnectionManager {
        /// 정상 풀 (10개 중 2개 사용 중)
        pub fn healthy() -> Self {
            Self {
                status: Mutex::new(Some(PoolStatus {
                    connected: true,
                    initialized: true,
                    pool_size: 10,
                    active_connections: 2,
                })),
                reconnect: ReconnectBehavior::Resolve(ReconnectOutcome::succeeded()),
                delay: Duration::ZERO,
                status_calls: AtomicUsize::new(0),
                reconnect_calls: AtomicUsize::new(0),
            }
        }

        /// status() 호출 시 항상 실패
        pub fn faulty() -> Self {
            let mock = Self::healthy();
            *mock.status.lock().unwrap() = None;
            mock
        }

        pub fn with_status(self, status: PoolStatus) -> Self {
            *self.status.lock().unwrap() = Some(status);
            self
        }

        pub fn with_reconnect(mut self, behavior: ReconnectBehavior) -> Self {
            self.reconnect = behavior;
            self
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        pub fn status_calls(&self) -> usize {
            self.status_calls.load(Ordering::SeqCst)
        }

        pub fn reconnect_calls(&self) -> usize {
            self.reconnect_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ConnectionManager for MockConnectionManager {
        async fn status(&self) -> Result<PoolStatus, DbError> {
            self.status_calls.fetch_add(1, Ordering::SeqCst);
            let status = *self.status.lock().unwrap();
            status.ok_or_else(|| DbError::Unavailable("connection refused".to_string()))
        }

        async fn reconnect(&self) -> Result<ReconnectOutcome, DbError> {
            self.reconnect_calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;

            match &self.reconnect {
                ReconnectBehavior::Resolve(outcome) => Ok(outcome.clone()),
                ReconnectBehavior::Reject(reason) => Err(DbError::Unavailable(reason.clone())),
                ReconnectBehavior::Panic => panic!("mock reconnect panicked"),
            }
        }
    }
}
