use once_cell::sync::Lazy;
use secrecy::Secret;
use wiremock::MockServer;

use portfolio::config::{get_configuration, EmailClientSettings};
use portfolio::startup::AppServer;
use portfolio::telemetry::{get_subscriber, init_subscriber};

// `TEST_LOG=true cargo test` prints the bunyan output, otherwise it is discarded.
static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(
            "test".into(),
            "debug".into(),
            std::io::stdout,
        ))
        .expect("Failed to initialise tracing");
    } else {
        init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::sink))
            .expect("Failed to initialise tracing");
    }
});

pub struct TestApp {
    pub addr: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", &self.addr))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_raw(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", &self.addr))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn json_body(response: reqwest::Response) -> serde_json::Value {
    response
        .json()
        .await
        .expect("Response body was not valid JSON")
}

/// App that delivers accepted messages to a mock email API.
pub async fn spawn_app() -> TestApp {
    build_app(true).await
}

/// App with no email API configured, messages are only logged.
pub async fn spawn_log_only_app() -> TestApp {
    build_app(false).await
}

async fn build_app(with_email_client: bool) -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("should load configuration");
        c.app.port = 0;
        c.email_client = with_email_client.then(|| EmailClientSettings {
            base_url: email_server.uri(),
            sender_email: "noreply@portfolio.dev".into(),
            authorization_token: Secret::new("test-token".into()),
            timeout_milliseconds: 2000,
        });
        c
    };

    let server = AppServer::build(configuration)
        .await
        .expect("should have created server");

    let addr = format!("http://{}", server.to_server_address());
    let _ = tokio::spawn(server.run_until_stopped());

    TestApp {
        addr,
        email_server,
        api_client: reqwest::Client::new(),
    }
}
