//! Smoke tests against a live Tribuna backend.
//!
//! Disabled by default; they need a running backend and a real account.
//!
//! ```bash
//! RUN_EXTERNAL_TESTS=1 \
//! TRIBUNA_BASE_URL=http://localhost:8000 \
//! TRIBUNA_EMAIL=ana@exemplo.com \
//! TRIBUNA_PASSWORD=senha \
//! cargo test --package tribuna-client --features integration --test live_backend_test -- --nocapture
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | RUN_EXTERNAL_TESTS | (unset) | Set to "1" or "true" to enable tests |
//! | TRIBUNA_BASE_URL | http://127.0.0.1:8000 | Backend base URL |
//! | TRIBUNA_EMAIL | (none) | Account email |
//! | TRIBUNA_PASSWORD | (none) | Account password |

#![cfg(feature = "integration")]

use tribuna_client::{AnalysisClient, ClientConfig, JurisClient, JurisFilter, Session};

/// Check if external integration tests should run.
/// Set RUN_EXTERNAL_TESTS=1 or RUN_EXTERNAL_TESTS=true to enable.
fn should_run_external_tests() -> bool {
    std::env::var("RUN_EXTERNAL_TESTS")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false)
}

/// Skip test with message if external tests are not enabled.
/// Returns true if the test should be skipped.
fn skip_if_external_tests_disabled(test_name: &str) -> bool {
    if !should_run_external_tests() {
        println!(
            "⏭️  Skipping {} - set RUN_EXTERNAL_TESTS=1 to enable live backend tests",
            test_name
        );
        return true;
    }
    false
}

fn credentials() -> Option<(String, String)> {
    let email = std::env::var("TRIBUNA_EMAIL").ok()?;
    let password = std::env::var("TRIBUNA_PASSWORD").ok()?;
    Some((email, password))
}

async fn logged_in_session(test_name: &str) -> Option<Session> {
    let (email, password) = match credentials() {
        Some(c) => c,
        None => {
            println!(
                "⏭️  Skipping {} - set TRIBUNA_EMAIL and TRIBUNA_PASSWORD",
                test_name
            );
            return None;
        }
    };

    let config = ClientConfig::from_env();
    println!("\n=== Tribuna Backend Configuration ===");
    println!("  Base URL: {}", config.base_url);
    println!("  Timeout: {:?}", config.timeout);
    println!("=====================================\n");

    let session = Session::new(config).expect("Failed to create session");
    session
        .login(&email, &password)
        .await
        .expect("Login against the live backend failed");
    Some(session)
}

#[tokio::test]
async fn test_live_menu_fetch() {
    if skip_if_external_tests_disabled("test_live_menu_fetch") {
        return;
    }
    let session = match logged_in_session("test_live_menu_fetch").await {
        Some(s) => s,
        None => return,
    };

    let menu = AnalysisClient::new(session).menu().await.expect("Menu fetch failed");
    println!("Selectable blocks: {:?}", menu.selectable_blocks());
    assert!(
        !menu.selectable_blocks().is_empty(),
        "Menu should have at least one selectable block"
    );
}

#[tokio::test]
async fn test_live_suggest_smoke() {
    if skip_if_external_tests_disabled("test_live_suggest_smoke") {
        return;
    }
    let session = match logged_in_session("test_live_suggest_smoke").await {
        Some(s) => s,
        None => return,
    };

    let filter = JurisFilter::new().tema("nulidade").topk(3);
    let envelope = JurisClient::new(session)
        .suggest(&filter)
        .await
        .expect("Suggestion query failed");

    println!("Provider used: {}", envelope.provider_used);
    println!("Trace id: {}", envelope.trace_id);
    println!("Items: {}", envelope.items.len());
    for item in &envelope.items {
        println!("  [{}] {}", item.id, item.titulo);
    }
    assert!(!envelope.trace_id.is_empty(), "Backend should issue a trace id");
}

#[tokio::test]
async fn test_live_health() {
    if skip_if_external_tests_disabled("test_live_health") {
        return;
    }
    let session = match logged_in_session("test_live_health").await {
        Some(s) => s,
        None => return,
    };

    let health = JurisClient::new(session).health().await.expect("Health fetch failed");
    println!("Retrieval health: {}", health);
}
