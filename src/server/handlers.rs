//! Handlers mapping JSON requests onto the page analyzer

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::types::*;
use crate::analyzer::PageAnalyzer;
use crate::recommend::{Recommender, recommend_or_fallback};
use crate::results::{ChartData, ComparisonChartData};

/// Message returned when a comparison fails for any reason
pub const PLAN_FAILED: &str =
    "Failed to generate SEO plan. One or both URLs may be invalid, unreachable, or blocking our bot.";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<PageAnalyzer>,
    pub recommender: Arc<dyn Recommender>,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// Unwrap a JSON body, treating a malformed body like an empty one
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            ::log::debug!("Rejected request body: {}", rejection.body_text());
            T::default()
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `POST /analyze`
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let Some(url) = non_empty(body_or_default(payload).url) else {
        return error_response(StatusCode::BAD_REQUEST, "URL is required");
    };

    match state.analyzer.analyze(&url).await {
        Ok(analysis) => {
            let chart_data = ChartData::from_analysis(&analysis);
            Json(AnalyzeResponse {
                analysis,
                chart_data,
            })
            .into_response()
        }
        Err(e) => {
            ::log::error!("Error analyzing URL {}: {}", url, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// `POST /generate-plan`
pub async fn generate_plan(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Response {
    let request = body_or_default(payload);
    let (Some(user_url), Some(competitor_url)) = (
        non_empty(request.user_url),
        non_empty(request.competitor_url),
    ) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Both userUrl and competitorUrl are required",
        );
    };

    let (user_analysis, competitor_analysis) =
        match state.analyzer.analyze_pair(&user_url, &competitor_url).await {
            Ok(pair) => pair,
            Err(e) => {
                ::log::error!(
                    "Error generating SEO plan for {} vs {}: {}",
                    user_url,
                    competitor_url,
                    e
                );
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, PLAN_FAILED);
            }
        };

    let ai_plan = recommend_or_fallback(
        state.recommender.as_ref(),
        &user_analysis,
        &competitor_analysis,
    )
    .await;
    let chart_data = ComparisonChartData::from_analyses(&user_analysis, &competitor_analysis);

    Json(PlanResponse {
        user_analysis,
        competitor_analysis,
        raw_plan: ai_plan.clone(),
        ai_plan,
        chart_data,
    })
    .into_response()
}

/// `POST /insights`: plan for two analyses the client already has
pub async fn insights(
    State(state): State<AppState>,
    payload: Result<Json<InsightsRequest>, JsonRejection>,
) -> Response {
    let request = body_or_default(payload);
    let (Some(user_analysis), Some(competitor_analysis)) =
        (request.user_analysis, request.competitor_analysis)
    else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Both userAnalysis and competitorAnalysis are required",
        );
    };

    let ai_plan = recommend_or_fallback(
        state.recommender.as_ref(),
        &user_analysis,
        &competitor_analysis,
    )
    .await;

    Json(InsightsResponse { ai_plan }).into_response()
}
