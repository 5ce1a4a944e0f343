//! Config echo endpoint tests.

mod common;

use common::spawn_app;

#[tokio::test]
async fn config_endpoint_echoes_startup_configuration() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/api/config", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["app_name"], "AI TradeMaestro API");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(
        body["description"],
        "Backend API for the AI TradeMaestro trading assistant"
    );
}

#[tokio::test]
async fn config_endpoint_is_stable_across_requests() {
    let app = spawn_app().await;

    let first: serde_json::Value = app
        .client
        .get(format!("{}/api/config", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    let second: serde_json::Value = app
        .client
        .get(format!("{}/api/config", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(first, second);
}
