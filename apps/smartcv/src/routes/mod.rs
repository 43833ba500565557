pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::library::handlers as library;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate library
        .route("/api/v1/candidates", get(library::handle_list_candidates))
        .route("/api/v1/candidates/:id", get(library::handle_get_candidate))
        .route(
            "/api/v1/candidates/parse",
            post(library::handle_parse_resume),
        )
        // Matching
        .route("/api/v1/search", post(matching::handle_search))
        .route("/api/v1/analyze", post(matching::handle_analyze))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::state::test_state;

    async fn send(
        router: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(build_router(test_state()), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["candidates"], 10);
    }

    #[tokio::test]
    async fn test_list_and_get_candidate() {
        let state = test_state();
        let id = state.library.candidates()[0].id();

        let (status, body) =
            send(build_router(state.clone()), Method::GET, "/api/v1/candidates", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 10);
        assert_eq!(body["candidates"].as_array().unwrap().len(), 10);

        let uri = format!("/api/v1/candidates/{id}");
        let (status, body) = send(build_router(state), Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "John Smith");
    }

    #[tokio::test]
    async fn test_unknown_candidate_is_404() {
        let uri = format!("/api/v1/candidates/{}", uuid::Uuid::new_v4());
        let (status, body) = send(build_router(test_state()), Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_parse_resume() {
        let request = json!({
            "raw_text": "Name: Ada Lovelace\nEmail: ada@example.com\nSkills: Rust, Math\nExperience: 9 years"
        });
        let (status, body) = send(
            build_router(test_state()),
            Method::POST,
            "/api/v1/candidates/parse",
            Some(request),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ada Lovelace");
        assert_eq!(body["years_experience"], 9);
        assert_eq!(body["skills"], json!(["math", "rust"]));
    }

    #[tokio::test]
    async fn test_parse_resume_without_email_is_422() {
        let request = json!({ "raw_text": "Name: Ada Lovelace" });
        let (status, body) = send(
            build_router(test_state()),
            Method::POST,
            "/api/v1/candidates/parse",
            Some(request),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_search_ranks_and_limits() {
        let request = json!({
            "title": "Platform Engineer",
            "required_skills": ["Go", "Kubernetes"],
            "limit": 3
        });
        let (status, body) =
            send(build_router(test_state()), Method::POST, "/api/v1/search", Some(request)).await;
        assert_eq!(status, StatusCode::OK);

        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0]["candidate"]["name"], "Mia Wilson");
        assert_eq!(body["job"]["required_skills"], json!(["go", "kubernetes"]));
    }

    #[tokio::test]
    async fn test_search_blank_title_is_400() {
        let request = json!({ "title": "  " });
        let (status, body) =
            send(build_router(test_state()), Method::POST, "/api/v1/search", Some(request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_search_inverted_range_is_400() {
        let request = json!({ "title": "Lead", "min_years": 8, "max_years": 3 });
        let (status, _) =
            send(build_router(test_state()), Method::POST, "/api/v1/search", Some(request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_reports_missing_skills() {
        let request = json!({
            "title": "Frontend Engineer",
            "required_skills": ["React", "CSS"],
            "required_education": [{ "degree_type": "Bachelor's" }]
        });
        let (status, body) =
            send(build_router(test_state()), Method::POST, "/api/v1/analyze", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job_title"], "Frontend Engineer");

        let entries = body["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0]["name"], "William Jones");
        assert_eq!(entries[0]["missing_skills"], json!([]));
        assert_eq!(entries[0]["rank"], 1);
    }
}
