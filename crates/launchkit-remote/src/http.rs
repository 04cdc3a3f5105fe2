//! HTTP implementation of the facade.
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::facade::{FacadeError, LaunchFacade};
use crate::types::{
    AnalysisResult, BusinessProfile, CheckoutSession, CompetitorSummary, DifferentiationStrategy,
    ExportDocument, RadarData, Refinement, RefinementKind,
};

/// Facade client over the backend function endpoints.
pub struct HttpFacade {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFacade {
    /// `base_url` like `https://functions.example.com` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, FacadeError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| FacadeError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FacadeError::Rejected(format!(
                "service returned {status}: {body}"
            )));
        }

        resp.json()
            .await
            .map_err(|e| FacadeError::Transport(e.to_string()))
    }
}

/// Backend responses share a success/error envelope; each call carries its
/// payload under a call-specific key.
fn unwrap_envelope<T>(success: bool, error: Option<String>, payload: Option<T>) -> Result<T, FacadeError> {
    if !success {
        return Err(FacadeError::Rejected(
            error.unwrap_or_else(|| "request failed".to_string()),
        ));
    }
    payload.ok_or_else(|| FacadeError::Rejected("empty response payload".to_string()))
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    competitor: Option<AnalysisResult>,
}

#[derive(Deserialize)]
struct StrategyResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    strategy: Option<DifferentiationStrategy>,
}

#[derive(Deserialize)]
struct RadarResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    radar: Option<RadarData>,
}

#[derive(Deserialize)]
struct SuggestionsResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    suggestions: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct RefineResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    refinement: Option<Refinement>,
}

#[derive(Deserialize)]
struct CheckoutResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default, rename = "checkoutUrl")]
    checkout_url: Option<String>,
}

#[async_trait]
impl LaunchFacade for HttpFacade {
    async fn analyze_competitor(&self, url: &str) -> Result<AnalysisResult, FacadeError> {
        info!(competitor_url = %url, "analyzing competitor");
        let resp: AnalyzeResponse = self
            .post_json(
                "/v1/competitive",
                &json!({ "action": "crawl", "competitorUrl": url }),
            )
            .await?;
        unwrap_envelope(resp.success, resp.error, resp.competitor)
    }

    async fn differentiation_strategy(
        &self,
        user_product: &BusinessProfile,
        competitor: &AnalysisResult,
        differentiation: &str,
    ) -> Result<DifferentiationStrategy, FacadeError> {
        let resp: StrategyResponse = self
            .post_json(
                "/v1/competitive",
                &json!({
                    "action": "generate",
                    "userProduct": user_product,
                    "competitor": competitor,
                    "differentiation": differentiation,
                }),
            )
            .await?;
        unwrap_envelope(resp.success, resp.error, resp.strategy)
    }

    async fn competitor_radar(
        &self,
        user_business: &BusinessProfile,
        competitors: &[CompetitorSummary],
        user_differentiators: &str,
    ) -> Result<RadarData, FacadeError> {
        info!(competitors = competitors.len(), "requesting radar");
        let resp: RadarResponse = self
            .post_json(
                "/v1/radar",
                &json!({
                    "userBusiness": user_business,
                    "competitors": competitors,
                    "userDifferentiators": user_differentiators,
                }),
            )
            .await?;
        unwrap_envelope(resp.success, resp.error, resp.radar)
    }

    async fn differentiator_suggestions(
        &self,
        user_business: &BusinessProfile,
        competitors: &[CompetitorSummary],
        existing_differentiators: &str,
    ) -> Result<Vec<String>, FacadeError> {
        let resp: SuggestionsResponse = self
            .post_json(
                "/v1/suggestions",
                &json!({
                    "userBusiness": user_business,
                    "competitors": competitors,
                    "existingDifferentiators": existing_differentiators,
                }),
            )
            .await?;
        unwrap_envelope(resp.success, resp.error, resp.suggestions)
    }

    async fn refine_text(
        &self,
        field_name: &str,
        current_value: &str,
        context: &str,
        kind: RefinementKind,
    ) -> Result<Refinement, FacadeError> {
        let resp: RefineResponse = self
            .post_json(
                "/v1/refine",
                &json!({
                    "fieldName": field_name,
                    "currentValue": current_value,
                    "context": context,
                    "refinementType": kind,
                }),
            )
            .await?;
        unwrap_envelope(resp.success, resp.error, resp.refinement)
    }

    async fn create_checkout(
        &self,
        return_url: &str,
        business_name: &str,
        email: &str,
    ) -> Result<CheckoutSession, FacadeError> {
        let resp: CheckoutResponse = self
            .post_json(
                "/v1/checkout",
                &json!({
                    "returnUrl": return_url,
                    "businessName": business_name,
                    "email": email,
                }),
            )
            .await?;
        let checkout_url = unwrap_envelope(resp.success, resp.error, resp.checkout_url)?;
        Ok(CheckoutSession { checkout_url })
    }

    async fn export_documents(
        &self,
        documents: &[ExportDocument],
        product_name: &str,
        with_watermark: bool,
    ) -> Result<Vec<u8>, FacadeError> {
        let url = format!("{}/v1/export", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&json!({
                "documents": documents,
                "productName": product_name,
                "withWatermark": with_watermark,
            }))
            .send()
            .await
            .map_err(|e| FacadeError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FacadeError::Rejected(format!(
                "export failed with {status}: {body}"
            )));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FacadeError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let facade = HttpFacade::new("https://functions.example.com/".to_string());
        assert_eq!(facade.base_url(), "https://functions.example.com");
    }

    #[test]
    fn envelope_failure_carries_the_backend_message() {
        let err = unwrap_envelope::<()>(false, Some("timeout".to_string()), None).unwrap_err();
        assert_eq!(err.message(), "timeout");

        let err = unwrap_envelope::<()>(false, None, None).unwrap_err();
        assert_eq!(err.message(), "request failed");
    }

    #[test]
    fn envelope_success_without_payload_is_rejected() {
        let err = unwrap_envelope::<AnalysisResult>(true, None, None).unwrap_err();
        assert!(err.message().contains("empty response"));
    }

    #[test]
    fn analyze_response_parses_both_wire_shapes() {
        let ok: AnalyzeResponse =
            serde_json::from_str(r#"{"success":true,"competitor":{"productName":"Acme"}}"#)
                .unwrap();
        assert!(ok.success);
        assert_eq!(
            ok.competitor.unwrap().product_name.as_deref(),
            Some("Acme")
        );

        let failed: AnalyzeResponse =
            serde_json::from_str(r#"{"success":false,"error":"timeout"}"#).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("timeout"));
    }
}
