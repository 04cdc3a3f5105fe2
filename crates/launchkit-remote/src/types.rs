//! Wire contracts for the remote facade.
//!
//! Field names follow the backend's camelCase convention. Every payload
//! field is optional or defaulted: the core never validates the backend's
//! internal structure, and absence of a field renders as "no data" rather
//! than raising an error.
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the crawl collaborator knows about one competitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub product_name: Option<String>,
    pub positioning: Option<String>,
    pub target_audience: Option<String>,
    pub key_features: Vec<String>,
    pub seo_keywords: Vec<String>,
    pub description: Option<String>,
}

/// The user's own product, as the aggregate calls describe it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessProfile {
    pub name: String,
    pub description: String,
}

/// One competitor, summarised for the radar call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompetitorSummary {
    pub name: String,
    pub url: String,
    pub positioning: Option<String>,
    pub audience: Option<String>,
    pub focus: Option<String>,
    pub keywords: Vec<String>,
}

impl CompetitorSummary {
    /// Build a summary from a slot's analysis and URL.
    pub fn from_analysis(url: &str, analysis: &AnalysisResult) -> Self {
        Self {
            name: analysis
                .product_name
                .clone()
                .unwrap_or_else(|| "Unnamed competitor".to_string()),
            url: url.to_string(),
            positioning: analysis.positioning.clone(),
            audience: analysis.target_audience.clone(),
            focus: analysis.description.clone(),
            keywords: analysis.seo_keywords.clone(),
        }
    }
}

/// Differentiation strategy for one competitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DifferentiationStrategy {
    pub search_terms: Vec<String>,
    pub recommendations: Recommendations,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendations {
    pub recommend_when: Vec<String>,
    pub do_not_recommend_when: Vec<String>,
}

/// Multi-competitor radar payload. Opaque to the core: stored for render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RadarData {
    pub axes: Vec<String>,
    pub user_scores: Vec<f64>,
    pub competitor_scores: Vec<Vec<f64>>,
    pub competitor_names: Vec<String>,
    pub insights: RadarInsights,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarInsights {
    pub strengths: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

/// AI refinement flavors for free-text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefinementKind {
    Clarify,
    Expand,
    Simplify,
    Align,
}

impl fmt::Display for RefinementKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RefinementKind::Clarify => write!(f, "clarify"),
            RefinementKind::Expand => write!(f, "expand"),
            RefinementKind::Simplify => write!(f, "simplify"),
            RefinementKind::Align => write!(f, "align"),
        }
    }
}

/// A refined field value with optional rationale and alternatives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Refinement {
    pub refined: String,
    pub rationale: Option<String>,
    pub alternatives: Vec<String>,
}

/// A created checkout session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutSession {
    pub checkout_url: String,
}

/// One document submitted for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub doc_type: String,
    pub markdown: String,
}
