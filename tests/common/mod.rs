use axum_test::TestServer;
use blog_server::core::{AppState, Config};
use sqlx::MySqlPool;
use std::sync::Arc;

pub const JWT_SECRET_DI_TEST: &str = "segreto-solo-per-i-test-da-non-riusare";

/// Config fissa per i test: il pool arriva da `#[sqlx::test]`, quindi
/// `database_url` non viene mai usata.
pub fn create_test_config() -> Config {
    Config {
        database_url: String::new(),
        jwt_secret: JWT_SECRET_DI_TEST.to_string(),
        jwt_expires_hours: 24,
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
        max_connections: 10,
        min_connections: 0,
        idle_timeout_secs: 30,
        app_env: "test".to_string(),
    }
}

/// Crea un AppState per i test
pub fn create_test_state(pool: MySqlPool) -> Arc<AppState> {
    Arc::new(AppState::new(pool, create_test_config()))
}

/// Crea un TestServer con il router reale dell'applicazione
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = blog_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Genera un JWT valido per 24 ore, firmato con il secret fornito
pub fn create_test_jwt(id_usuario: i32, jwt_secret: &str) -> String {
    jwt_con_durata(id_usuario, 24, jwt_secret)
}

/// Genera un JWT già scaduto (oltre la leeway di validazione)
pub fn create_expired_jwt(id_usuario: i32, jwt_secret: &str) -> String {
    jwt_con_durata(id_usuario, -2, jwt_secret)
}

fn jwt_con_durata(id_usuario: i32, ore: i64, jwt_secret: &str) -> String {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Claims {
        id_usuario: i32,
        exp: usize,
        iat: usize,
    }

    let now = Utc::now();
    let claims = Claims {
        id_usuario,
        exp: (now + Duration::hours(ore)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Failed to create JWT token")
}
