//! API Routes Module
//!
//! 모든 HTTP 엔드포인트 정의
//!
//! # Routes
//! - `/` - Liveness
//! - `/health/database` - 데이터베이스 상태
//! - `/health/database/reconnect` - 강제 재연결
//! - `/api-docs/openapi.json` - API 명세

pub mod docs;
pub mod health;
