//! Request and response bodies of the JSON API

use crate::results::{AnalysisResult, ChartData, ComparisonChartData};
use serde::{Deserialize, Serialize};

/// Body of `POST /analyze`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of `POST /generate-plan`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[serde(default)]
    pub user_url: Option<String>,
    #[serde(default)]
    pub competitor_url: Option<String>,
}

/// Body of `POST /insights`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsRequest {
    #[serde(default)]
    pub user_analysis: Option<AnalysisResult>,
    #[serde(default)]
    pub competitor_analysis: Option<AnalysisResult>,
}

/// Single-site analysis plus its chart summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub chart_data: ChartData,
}

/// Both analyses, the generated plan and the comparison chart
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub user_analysis: AnalysisResult,
    pub competitor_analysis: AnalysisResult,
    pub ai_plan: String,
    pub raw_plan: String,
    pub chart_data: ComparisonChartData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResponse {
    pub ai_plan: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Every failure is reported as `{ "error": "..." }`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
