//! Shared harness for integration tests.

use trademaestro_api::config::get_configuration;
use trademaestro_api::startup::Application;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

/// Spawn the application on a random port and return its base address.
pub async fn spawn_app() -> TestApp {
    std::env::set_var("APP_SERVER__HOST", "127.0.0.1");
    std::env::set_var("APP_SERVER__PORT", "0");

    let settings = get_configuration().expect("Failed to load configuration");
    let app = Application::build(settings)
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
    }
}
