//! API Description Endpoint
//!
//! OpenAPI 명세는 핸들러 코드와 분리된 `openapi.json` 파일로 관리
//! 빌드 시 바이너리에 포함되어 그대로 제공됨

use axum::Json;
use serde_json::Value;

use crate::error::ApiError;

/// `api/openapi.json`
pub const OPENAPI_DOCUMENT: &str = include_str!("../../openapi.json");

/// GET /api-docs/openapi.json
pub async fn openapi_document() -> Result<Json<Value>, ApiError> {
    let document: Value = serde_json::from_str(OPENAPI_DOCUMENT)?;
    Ok(Json(document))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_document_lists_health_paths() {
        let Json(document) = openapi_document().await.unwrap();

        assert!(document["openapi"].as_str().unwrap().starts_with("3."));
        let paths = document["paths"].as_object().unwrap();
        assert!(paths["/"].get("get").is_some());
        assert!(paths["/health/database"].get("get").is_some());
        assert!(paths["/health/database/reconnect"].get("post").is_some());
    }

    #[test]
    fn test_document_version_matches_crate() {
        let document: Value = serde_json::from_str(OPENAPI_DOCUMENT).unwrap();
        assert_eq!(document["info"]["version"], env!("CARGO_PKG_VERSION"));
    }
}
