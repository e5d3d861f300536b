use crate::core::{AppError, AppState};
use axum::{body::Body, extract::Request, extract::State, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

// struct che codifica il contenuto del token jwt
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id_usuario: i32,
    pub exp: usize, // Expiry time of the token
    pub iat: usize, // Issued at time of the token
}

/// Identità ricavata dal token, inserita nelle Extension della request
/// dal middleware e letta dagli handler protetti.
#[derive(Debug, Clone, Copy)]
pub struct UsuarioAutenticado {
    pub id_usuario: i32,
}

#[instrument(skip(secret), fields(id_usuario = %id_usuario))]
pub fn encode_jwt(
    id_usuario: i32,
    duracion: Duration,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    debug!("Encoding JWT token for user");
    let now = Utc::now();
    let claim = Claims {
        id_usuario,
        exp: (now + duracion).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(
    jwt_token: &str,
    secret: &str,
) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
    debug!("Decoding JWT token");
    decode(
        jwt_token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
}

/// Gate di autorizzazione: richiede `Authorization: Bearer <token>`.
/// Header o prefisso assenti -> 403; firma non valida o token
/// scaduto -> 401. In caso di successo l'id del soggetto viene
/// inserito nelle Extension, senza round-trip verso il database.
#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|valor| valor.to_str().ok())
        .ok_or_else(|| {
            warn!("Missing or malformed authorization header");
            AppError::forbidden("Token no proporcionado.")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Authorization header without Bearer prefix");
        AppError::forbidden("Token no proporcionado.")
    })?;

    let token_data = decode_jwt(token, &state.config.jwt_secret).map_err(|e| {
        warn!("Failed to decode JWT token: {:?}", e.kind());
        AppError::unauthorized("Token inválido.")
    })?;

    info!(id_usuario = token_data.claims.id_usuario, "Token verified");
    req.extensions_mut().insert(UsuarioAutenticado {
        id_usuario: token_data.claims.id_usuario,
    });
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_encode_decode() {
        let token = encode_jwt(7, Duration::hours(1), "segreto-di-test").unwrap();
        let data = decode_jwt(&token, "segreto-di-test").unwrap();
        assert_eq!(data.claims.id_usuario, 7);
        assert!(data.claims.exp > data.claims.iat);
    }

    #[test]
    fn test_decode_con_segreto_sbagliato() {
        let token = encode_jwt(7, Duration::hours(1), "segreto-di-test").unwrap();
        assert!(decode_jwt(&token, "altro-segreto").is_err());
    }

    #[test]
    fn test_decode_token_scaduto() {
        let token = encode_jwt(7, Duration::hours(-2), "segreto-di-test").unwrap();
        assert!(decode_jwt(&token, "segreto-di-test").is_err());
    }
}
