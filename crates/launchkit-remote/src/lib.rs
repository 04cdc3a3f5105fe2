//! Launchkit Remote: the Remote Service Facade
//!
//! Typed contracts for every backend call the wizard makes (competitor
//! crawling, differentiation copy, radar generation, text refinement,
//! checkout, export), plus the HTTP client that speaks them and a scripted
//! fake for tests. The backend itself is an external collaborator; this
//! crate only owns the request/response contract.

pub mod facade;
pub mod fake;
pub mod http;
pub mod types;

pub use facade::{FacadeError, LaunchFacade};
pub use fake::FakeFacade;
pub use http::HttpFacade;
pub use types::{
    AnalysisResult, BusinessProfile, CheckoutSession, CompetitorSummary, DifferentiationStrategy,
    ExportDocument, RadarData, RadarInsights, Recommendations, Refinement, RefinementKind,
};
