// E2E Test 2: Remote-first client with local fallback
// Tests the caller policy: bounded remote attempt, local engine on failure

mod e2e;

use e2e::helpers::{spawn_server, wait_for_health, SCAM_SAMPLE};
use shield_rs::client::RemoteAnalyzer;
use shield_rs::scoring::ScamScorer;
use std::time::Duration;

#[tokio::test]
async fn test_e2e_client_uses_live_remote() {
    let base = spawn_server().await;
    wait_for_health(&base).await;

    let analyzer = RemoteAnalyzer::new(&base);
    let verdict = analyzer.analyze(SCAM_SAMPLE).await.unwrap();

    // Remote and local are the same algorithm; the answer is identical
    // whichever side computed it.
    let local = ScamScorer::default().score(SCAM_SAMPLE).unwrap();
    assert_eq!(verdict, local);
}

#[tokio::test]
async fn test_e2e_client_falls_back_when_remote_is_down() {
    // Nothing listens here; the connection is refused immediately.
    let analyzer =
        RemoteAnalyzer::with_timeout("http://127.0.0.1:1", Duration::from_millis(500));

    let verdict = analyzer.analyze(SCAM_SAMPLE).await.unwrap();
    let local = ScamScorer::default().score(SCAM_SAMPLE).unwrap();
    assert_eq!(verdict, local);
    assert!(verdict.is_scam());
}

#[tokio::test]
async fn test_e2e_client_falls_back_on_error_status() {
    let base = spawn_server().await;
    wait_for_health(&base).await;

    // Point the client at a path that yields 404s; any non-success status
    // triggers the same fallback as a network failure.
    let analyzer = RemoteAnalyzer::new(format!("{}/nowhere", base));
    let verdict = analyzer.analyze(SCAM_SAMPLE).await.unwrap();

    let local = ScamScorer::default().score(SCAM_SAMPLE).unwrap();
    assert_eq!(verdict, local);
}
