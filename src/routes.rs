//! REST endpoints for recommendations, chat, and admin counts.
//!
//! The API is stateless: each request carries the full profile or message,
//! so no session store is needed behind it.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::admin::CatalogSummary;
use crate::catalog::Catalog;
use crate::classifier::identify_primary_issue;
use crate::profile::UserProfile;
use crate::recommend::{AdviceGenerator, Resolver};

/// Shared state for the API routes.
#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<Catalog>,
    pub resolver: Arc<Resolver>,
    pub advice: Arc<AdviceGenerator>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub profile: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: Option<String>,
}

/// POST /api/recommendation
///
/// Classifies the submitted profile, resolves the product pair, and
/// enriches the advice. Enrichment failures degrade to the static
/// explanation, so this endpoint never fails on LLM trouble.
async fn post_recommendation(
    State(state): State<ApiState>,
    Json(request): Json<RecommendationRequest>,
) -> impl IntoResponse {
    let primary_issue = identify_primary_issue(&request.profile);
    let mut recommendation = state.resolver.resolve(&primary_issue, &request.profile);
    let outcome = state.advice.advise(&recommendation).await;
    recommendation.advice = outcome.text().to_string();
    Json(serde_json::json!({
        "success": true,
        "recommendation": recommendation,
    }))
}

/// POST /api/chat
///
/// Free-form question answering, limited to the advisor's scope.
async fn post_chat(
    State(state): State<ApiState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    match state
        .advice
        .chat_reply(&request.message, request.context.as_deref())
        .await
    {
        Ok(reply) => Json(serde_json::json!({ "reply": reply })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "chat completion failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to process request" })),
            )
                .into_response()
        }
    }
}

/// GET /api/admin/summary
///
/// Catalog counts for the admin dashboard.
async fn get_admin_summary(State(state): State<ApiState>) -> impl IntoResponse {
    Json(CatalogSummary::from_catalog(&state.catalog))
}

/// Build the API router.
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/api/recommendation", post(post_recommendation))
        .route("/api/chat", post(post_chat))
        .route("/api/admin/summary", get(get_admin_summary))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::config::AdvisorConfig;
    use crate::error::LlmError;
    use crate::llm::{CompletionRequest, CompletionResponse, LlmProvider};

    struct OfflineProvider;

    #[async_trait]
    impl LlmProvider for OfflineProvider {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::RequestFailed {
                provider: "test".to_string(),
                reason: "offline".to_string(),
            })
        }

        fn model_name(&self) -> &str {
            "offline-test"
        }
    }

    fn state() -> ApiState {
        let catalog = Arc::new(Catalog::verident());
        let resolver = Arc::new(Resolver::new(Arc::clone(&catalog)).unwrap());
        let advice = Arc::new(AdviceGenerator::new(
            Arc::new(OfflineProvider),
            &AdvisorConfig::default(),
        ));
        ApiState {
            catalog,
            resolver,
            advice,
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn recommendation_endpoint_resolves_profile() {
        let app = api_routes(state());
        let payload = serde_json::json!({
            "profile": {
                "plaque": 10,
                "answers": { "q1": "plaque", "q2": "daily" }
            }
        });
        let response = app
            .oneshot(
                Request::post("/api/recommendation")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["recommendation"]["primaryIssue"], "plaque");
        assert_eq!(json["recommendation"]["toothpaste"]["id"], "tp-plaque");
        // The offline provider forces the static explanation.
        assert_eq!(
            json["recommendation"]["advice"],
            json["recommendation"]["explanation"]
        );
    }

    #[tokio::test]
    async fn recommendation_endpoint_degrades_on_empty_profile() {
        let app = api_routes(state());
        let response = app
            .oneshot(
                Request::post("/api/recommendation")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"profile": {}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        // No q1 answer and all scores zero: first issue wins the tie.
        assert_eq!(json["recommendation"]["primaryIssue"], "sensitivity");
    }

    #[tokio::test]
    async fn chat_endpoint_reports_provider_failure() {
        let app = api_routes(state());
        let response = app
            .oneshot(
                Request::post("/api/chat")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"message": "what causes plaque?"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Failed to process request");
    }

    #[tokio::test]
    async fn admin_summary_returns_catalog_counts() {
        let app = api_routes(state());
        let response = app
            .oneshot(
                Request::get("/api/admin/summary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["questions"], 5);
        assert_eq!(json["products"], 7);
        assert_eq!(json["rules"], 4);
        assert_eq!(json["categories"], 5);
    }
}
