use std::sync::Arc;

use api_service::domain::user::service::UserService;
use api_service::inbound::http::router::create_router;
use api_service::outbound::repositories::SqliteUserRepository;
use auth::Authenticator;
use auth::PasswordHasher;
use auth::TokenService;
use chrono::Duration;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over an in-memory store
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Single connection keeps the in-memory database alive and shared
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // Low hashing cost keeps the suite fast; parameters are still valid
        let password_hasher =
            PasswordHasher::with_cost(8192, 1).expect("Failed to create password hasher");
        let token_service = TokenService::new(TEST_SECRET, Duration::hours(24))
            .expect("Failed to create token service");
        let authenticator = Arc::new(Authenticator::new(password_hasher.clone(), token_service));

        let user_repository = Arc::new(SqliteUserRepository::new(pool));
        let user_service = Arc::new(UserService::new(user_repository, password_hasher));

        let router = create_router(user_service, authenticator);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register a user and return the raw response
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> reqwest::Response {
        self.post("/auth/register")
            .json(&json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register and log in, returning a valid bearer token
    pub async fn register_and_login(&self, username: &str, email: &str, password: &str) -> String {
        let response = self.register(username, email, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = self
            .post("/auth/login")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Login response missing token")
            .to_string()
    }

    /// Forge a token that is correctly signed but already expired
    pub fn issue_expired_token(&self, subject: &str) -> String {
        TokenService::new(TEST_SECRET, Duration::seconds(-1))
            .expect("Failed to create token service")
            .issue(subject)
            .expect("Failed to issue token")
    }
}
