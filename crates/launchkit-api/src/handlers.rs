//! API Handlers
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

use launchkit_core::{completion_map, fields, DocumentType, FormData, KIT_VERSION};
use launchkit_docs::{DeriveOptions, DocumentEngine};
use launchkit_remote::{ExportDocument, LaunchFacade, RefinementKind};
use launchkit_tier::{current_tier, KvStore};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<DocumentEngine>,
    pub facade: Arc<dyn LaunchFacade>,
    pub store: Arc<dyn KvStore>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderBody {
    pub doc_type: DocumentType,
    #[serde(default)]
    pub form: FormData,
    #[serde(default)]
    pub intro_override: Option<String>,
    /// Injected render date; omit for today. Tests and draft diffing pass a
    /// fixed date so output is reproducible.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub differentiators: Vec<String>,
}

pub async fn render_document(
    State(state): State<AppState>,
    Json(body): Json<RenderBody>,
) -> (StatusCode, Json<Value>) {
    let opts = DeriveOptions {
        intro_override: body.intro_override,
        render_date: body.date,
        // Tier is read fresh per render pass, never cached.
        tier: current_tier(state.store.as_ref()),
        differentiators: body.differentiators,
    };

    match state.engine.render(body.doc_type, &body.form, &opts) {
        Ok(doc) => {
            crate::metrics::RENDER_COUNT.inc();
            (
                StatusCode::OK,
                Json(json!({
                    "docType": doc.doc_type,
                    "markdown": doc.markdown,
                    "fingerprint": doc.fingerprint,
                    "completion": doc.completion,
                })),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        ),
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionBody {
    #[serde(default)]
    pub form: FormData,
}

pub async fn completion(Json(body): Json<CompletionBody>) -> (StatusCode, Json<Value>) {
    let scores: HashMap<&'static str, _> = completion_map(&body.form)
        .into_iter()
        .map(|(doc, report)| (doc.as_str(), report))
        .collect();
    (StatusCode::OK, Json(json!(scores)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineBody {
    pub field_name: String,
    #[serde(default)]
    pub current_value: String,
    #[serde(default)]
    pub context: String,
    pub refinement_type: RefinementKind,
}

pub async fn refine(
    State(state): State<AppState>,
    Json(body): Json<RefineBody>,
) -> (StatusCode, Json<Value>) {
    let result = state
        .facade
        .refine_text(
            &body.field_name,
            &body.current_value,
            &body.context,
            body.refinement_type,
        )
        .await;

    match result {
        Ok(refinement) => (
            StatusCode::OK,
            Json(json!({
                "refined": refinement.refined,
                "rationale": refinement.rationale,
                "alternatives": refinement.alternatives,
            })),
        ),
        Err(e) => (StatusCode::BAD_GATEWAY, Json(json!({ "error": e.message() }))),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutBody {
    pub return_url: String,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub email: String,
}

pub async fn checkout(
    State(state): State<AppState>,
    Json(body): Json<CheckoutBody>,
) -> (StatusCode, Json<Value>) {
    let result = state
        .facade
        .create_checkout(&body.return_url, &body.business_name, &body.email)
        .await;

    match result {
        Ok(session) => (
            StatusCode::OK,
            Json(json!({ "checkoutUrl": session.checkout_url })),
        ),
        Err(e) => (StatusCode::BAD_GATEWAY, Json(json!({ "error": e.message() }))),
    }
}

fn all_doc_types() -> Vec<DocumentType> {
    DocumentType::ALL.to_vec()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBody {
    #[serde(default = "all_doc_types")]
    pub doc_types: Vec<DocumentType>,
    #[serde(default)]
    pub form: FormData,
    #[serde(default)]
    pub intro_override: Option<String>,
}

pub async fn export(State(state): State<AppState>, Json(body): Json<ExportBody>) -> Response {
    let tier = current_tier(state.store.as_ref());
    let opts = DeriveOptions {
        intro_override: body.intro_override,
        tier,
        ..Default::default()
    };

    let mut documents = Vec::new();
    for doc_type in &body.doc_types {
        match state.engine.render(*doc_type, &body.form, &opts) {
            Ok(doc) => documents.push(ExportDocument {
                doc_type: doc_type.as_str().to_string(),
                markdown: doc.markdown,
            }),
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": e.to_string() })),
                )
                    .into_response();
            }
        }
    }

    let product = body
        .form
        .trimmed(fields::COMPANY_NAME)
        .unwrap_or("launchkit")
        .to_string();

    // Clean export is the premium branch; the free tier always ships with
    // the watermark.
    let with_watermark = !tier.is_edge();

    match state
        .facade
        .export_documents(&documents, &product, with_watermark)
        .await
    {
        Ok(bytes) => (StatusCode::OK, bytes).into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": e.message() })),
        )
            .into_response(),
    }
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": KIT_VERSION })),
    )
}

pub async fn metrics() -> (StatusCode, String) {
    match crate::metrics::encode() {
        Ok(text) => (StatusCode::OK, text),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
