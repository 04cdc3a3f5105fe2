//! Integration tests for the competitive workflow: orchestrator + fake
//! facade + in-memory tier store.
use std::sync::atomic::Ordering;
use std::sync::Arc;

use launchkit_compete::{business_from_form, AnalyzeOutcome, Orchestrator, OrchestratorError};
use launchkit_core::{fields, FormData};
use launchkit_remote::{AnalysisResult, BusinessProfile, FacadeError, FakeFacade, RadarData};
use launchkit_tier::{debug_override, MemoryStore, Tier, TierGate};

fn acme_analysis() -> AnalysisResult {
    AnalysisResult {
        product_name: Some("Acme".to_string()),
        ..Default::default()
    }
}

struct Fixture {
    facade: Arc<FakeFacade>,
    store: Arc<MemoryStore>,
    orchestrator: Orchestrator,
}

fn fixture(tier: Tier) -> Fixture {
    let facade = Arc::new(FakeFacade::new());
    let store = Arc::new(MemoryStore::new());
    if tier.is_edge() {
        debug_override(store.as_ref(), Tier::Edge, chrono::Utc::now());
    }
    let orchestrator = Orchestrator::new(facade.clone(), TierGate::new(store.clone()));
    Fixture {
        facade,
        store,
        orchestrator,
    }
}

// Scenario 7: free tier, 1 slot, valid URL. Analyze surfaces the upgrade
// prompt, the slot stays empty, and no network call happens.
#[tokio::test]
async fn free_tier_analyze_prompts_upgrade_without_calling() {
    let fx = fixture(Tier::Free);
    fx.orchestrator.set_url(1, "https://acme.com").await.unwrap();

    let outcome = fx.orchestrator.analyze(1).await;

    assert_eq!(outcome, AnalyzeOutcome::UpgradeRequired);
    let board = fx.orchestrator.board().await;
    let slot = board.slot(1).unwrap();
    assert!(!slot.is_analyzing());
    assert!(slot.data().is_none());
    assert!(slot.error().is_none());
    assert_eq!(fx.facade.analyze_calls.load(Ordering::SeqCst), 0);
}

// Scenario 8: edge tier, success response. Slot lands analyzed with data.
#[tokio::test]
async fn edge_tier_analyze_stores_the_result() {
    let fx = fixture(Tier::Edge);
    fx.facade.push_analysis(Ok(acme_analysis()));
    fx.orchestrator.set_url(1, "https://acme.com").await.unwrap();

    let outcome = fx.orchestrator.analyze(1).await;

    assert_eq!(outcome, AnalyzeOutcome::Analyzed);
    let board = fx.orchestrator.board().await;
    let slot = board.slot(1).unwrap();
    assert_eq!(slot.data().unwrap().product_name.as_deref(), Some("Acme"));
    assert!(!slot.is_analyzing());
    assert!(slot.error().is_none());
    assert_eq!(fx.facade.analyze_calls.load(Ordering::SeqCst), 1);
}

// Scenario 9: edge tier, failure response. Slot lands errored, no data.
#[tokio::test]
async fn edge_tier_analyze_failure_stores_the_message() {
    let fx = fixture(Tier::Edge);
    fx.facade
        .push_analysis(Err(FacadeError::Rejected("timeout".to_string())));
    fx.orchestrator.set_url(1, "https://acme.com").await.unwrap();

    let outcome = fx.orchestrator.analyze(1).await;

    assert_eq!(outcome, AnalyzeOutcome::Errored);
    let board = fx.orchestrator.board().await;
    let slot = board.slot(1).unwrap();
    assert_eq!(slot.error(), Some("timeout"));
    assert!(slot.data().is_none());
}

#[tokio::test]
async fn errored_slot_can_be_analyzed_again() {
    let fx = fixture(Tier::Edge);
    fx.facade
        .push_analysis(Err(FacadeError::Rejected("timeout".to_string())));
    fx.facade.push_analysis(Ok(acme_analysis()));
    fx.orchestrator.set_url(1, "https://acme.com").await.unwrap();

    assert_eq!(fx.orchestrator.analyze(1).await, AnalyzeOutcome::Errored);
    assert_eq!(fx.orchestrator.analyze(1).await, AnalyzeOutcome::Analyzed);
}

#[tokio::test]
async fn blank_url_is_a_silent_no_op() {
    let fx = fixture(Tier::Edge);
    fx.orchestrator.set_url(1, "   ").await.unwrap();

    let outcome = fx.orchestrator.analyze(1).await;

    assert_eq!(outcome, AnalyzeOutcome::SkippedBlankUrl);
    assert_eq!(fx.facade.analyze_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn reset_mid_flight_discards_the_resolution() {
    let fx = fixture(Tier::Edge);
    let release = fx.facade.hold_analyses();
    fx.facade.push_analysis(Ok(acme_analysis()));
    fx.orchestrator.set_url(1, "https://acme.com").await.unwrap();

    let task = tokio::spawn({
        let orchestrator = fx.orchestrator.clone();
        async move { orchestrator.analyze(1).await }
    });

    // Wait until the call is actually in flight.
    while fx.facade.analyze_calls.load(Ordering::SeqCst) == 0 {
        tokio::task::yield_now().await;
    }

    // The user resets the slot while the call is pending, then the call
    // resolves: the stale resolution must be discarded by the epoch guard.
    fx.orchestrator.reset_slot(1).await.unwrap();
    release.notify_one();

    assert_eq!(task.await.unwrap(), AnalyzeOutcome::Superseded);
    let board = fx.orchestrator.board().await;
    let slot = board.slot(1).unwrap();
    assert!(slot.data().is_none());
    assert!(!slot.is_analyzing());
}

#[tokio::test]
async fn upgrade_mid_session_unlocks_analyze() {
    let fx = fixture(Tier::Free);
    fx.orchestrator.set_url(1, "https://acme.com").await.unwrap();
    assert_eq!(fx.orchestrator.analyze(1).await, AnalyzeOutcome::UpgradeRequired);

    debug_override(fx.store.as_ref(), Tier::Edge, chrono::Utc::now());
    fx.facade.push_analysis(Ok(acme_analysis()));
    assert_eq!(fx.orchestrator.analyze(1).await, AnalyzeOutcome::Analyzed);
}

// A successful analyze fires a suggestions refresh on its own; the test
// scripts the response up front and waits for the spawned task to land it.
#[tokio::test]
async fn successful_analyze_triggers_a_suggestions_refresh() {
    let fx = fixture(Tier::Edge);
    fx.orchestrator
        .set_business(BusinessProfile {
            name: "Mine".to_string(),
            description: "my product".to_string(),
        })
        .await;

    let expected = vec!["Lean into self-serve onboarding".to_string()];
    fx.facade.push_suggestions(Ok(expected.clone()));
    fx.facade.push_analysis(Ok(acme_analysis()));
    fx.orchestrator.set_url(1, "https://acme.com").await.unwrap();

    assert_eq!(fx.orchestrator.analyze(1).await, AnalyzeOutcome::Analyzed);

    for _ in 0..1000 {
        if fx.orchestrator.suggestions().await.is_some() {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert_eq!(fx.orchestrator.suggestions().await, Some(expected));
    assert_eq!(fx.facade.suggestion_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn manual_suggestions_refresh_covers_all_analyzed_slots() {
    let fx = fixture(Tier::Edge);
    fx.facade.push_analysis(Ok(acme_analysis()));
    fx.orchestrator.set_url(1, "https://acme.com").await.unwrap();
    fx.orchestrator.analyze(1).await;

    // Script the same response for both the post-analyze refresh and the
    // manual one: last write wins either way, so ordering cannot matter.
    let expected = vec!["Undercut on pricing".to_string()];
    fx.facade.push_suggestions(Ok(expected.clone()));
    fx.facade.push_suggestions(Ok(expected.clone()));

    let suggestions = fx.orchestrator.refresh_suggestions().await.unwrap();
    assert_eq!(suggestions, expected);
    assert_eq!(fx.orchestrator.suggestions().await, Some(expected));
}

#[tokio::test]
async fn suggestions_refresh_without_analyzed_slots_refuses() {
    let fx = fixture(Tier::Edge);
    let err = fx.orchestrator.refresh_suggestions().await.unwrap_err();
    assert!(matches!(err, OrchestratorError::NoAnalyzedCompetitors));
}

#[tokio::test]
async fn radar_requires_an_analyzed_slot() {
    let fx = fixture(Tier::Edge);
    let err = fx.orchestrator.radar().await.unwrap_err();
    assert!(matches!(err, OrchestratorError::NoAnalyzedCompetitors));
    assert_eq!(fx.facade.radar_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn radar_is_gated_on_the_edge_tier() {
    let fx = fixture(Tier::Free);
    let err = fx.orchestrator.radar().await.unwrap_err();
    assert!(matches!(err, OrchestratorError::UpgradeRequired { .. }));
    assert_eq!(fx.facade.radar_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn radar_snapshots_analyzed_slots_at_call_time() {
    let fx = fixture(Tier::Edge);
    fx.facade.push_analysis(Ok(acme_analysis()));
    fx.orchestrator.set_url(1, "https://acme.com").await.unwrap();
    fx.orchestrator.analyze(1).await;

    let radar = RadarData {
        axes: vec!["pricing".to_string(), "features".to_string()],
        competitor_names: vec!["Acme".to_string()],
        ..Default::default()
    };
    fx.facade.push_radar(Ok(radar.clone()));

    let result = fx.orchestrator.radar().await.unwrap();
    assert_eq!(result, radar);
    assert_eq!(fx.orchestrator.current_radar().await, Some(radar));
    assert_eq!(fx.facade.radar_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn strategy_requires_the_slot_to_be_analyzed() {
    let fx = fixture(Tier::Edge);
    let err = fx.orchestrator.differentiation_strategy(1).await.unwrap_err();
    assert!(matches!(err, OrchestratorError::SlotNotAnalyzed(1)));

    fx.facade.push_analysis(Ok(acme_analysis()));
    fx.orchestrator.set_url(1, "https://acme.com").await.unwrap();
    fx.orchestrator.analyze(1).await;

    assert!(fx.orchestrator.differentiation_strategy(1).await.is_ok());
    assert_eq!(fx.facade.strategy_calls.load(Ordering::SeqCst), 1);
}

// Property 6, exercised through the orchestrator surface.
#[tokio::test]
async fn board_invariants_hold_through_the_orchestrator() {
    let fx = fixture(Tier::Edge);
    assert_eq!(fx.orchestrator.add_slot().await.unwrap(), 2);
    assert_eq!(fx.orchestrator.add_slot().await.unwrap(), 3);
    assert!(fx.orchestrator.add_slot().await.is_err());

    fx.orchestrator.remove_slot(3).await.unwrap();
    fx.orchestrator.remove_slot(2).await.unwrap();
    assert!(fx.orchestrator.remove_slot(1).await.is_err());

    let board = fx.orchestrator.board().await;
    assert_eq!(board.len(), 1);
}

#[test]
fn business_profile_comes_from_the_form() {
    let form = FormData::new()
        .with(fields::COMPANY_NAME, "  Mine  ")
        .with(fields::PRODUCT_DESCRIPTION, "my product");

    let business = business_from_form(&form);
    assert_eq!(business.name, "Mine");
    assert_eq!(business.description, "my product");

    let empty = business_from_form(&FormData::new());
    assert!(empty.name.is_empty());
}

#[tokio::test]
async fn slots_progress_independently() {
    let fx = fixture(Tier::Edge);
    fx.orchestrator.add_slot().await.unwrap();

    fx.facade
        .push_analysis(Err(FacadeError::Rejected("unreachable".to_string())));
    fx.facade.push_analysis(Ok(acme_analysis()));

    fx.orchestrator.set_url(1, "https://one.com").await.unwrap();
    fx.orchestrator.set_url(2, "https://two.com").await.unwrap();

    assert_eq!(fx.orchestrator.analyze(1).await, AnalyzeOutcome::Errored);
    assert_eq!(fx.orchestrator.analyze(2).await, AnalyzeOutcome::Analyzed);

    let board = fx.orchestrator.board().await;
    assert_eq!(board.analyzed_count(), 1);
    assert_eq!(board.slot(1).unwrap().error(), Some("unreachable"));
    assert!(board.slot(2).unwrap().data().is_some());
}
