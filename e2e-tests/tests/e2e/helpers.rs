//! Shared helpers for end-to-end tests

use shield_rs::api::ApiServer;
use shield_rs::config::ShieldConfig;

/// Demo solicitation carrying heavy scam signals
pub const SCAM_SAMPLE: &str = "URGENT! Help my cousin's surgery TODAY. Send gift cards \
    or wire money to this account. We cannot show receipts due to privacy.";

/// Demo solicitation with mild pressure signals, below the threshold
pub const PRESSURE_SAMPLE: &str = "Limited-time fundraiser! If you donate in the next \
    30 minutes we will match 500%. Click this short link and DM your credit card details.";

/// Demo solicitation from a legitimate nonprofit
pub const LEGIT_SAMPLE: &str = "Our 501(c)(3) after-school program is raising funds for \
    laptops. EIN 12-3456789. Donate via our verified portal; receipts are automatically sent.";

/// Spawn the analyze API on an ephemeral port; returns its base URL
pub async fn spawn_server() -> String {
    let config = ShieldConfig::development();
    let server = ApiServer::new(&config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, server.router()).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Wait until the health endpoint answers
pub async fn wait_for_health(base_url: &str) {
    let client = reqwest::Client::new();
    for _ in 0..50 {
        if let Ok(resp) = client.get(format!("{}/health", base_url)).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    panic!("analyze API did not become healthy at {}", base_url);
}
