//! Auth services - Registrazione, login e profilo dell'utente autenticato

use crate::core::{AppError, AppState, UsuarioAutenticado, encode_jwt};
use crate::dtos::{PerfilDTO, RegistroUsuarioDTO};
use crate::entities::Usuario;
use crate::repositories::Create;
use axum::{
    Extension,
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_macros::debug_handler;
use chrono::Duration;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

/// Ruolo assegnato automaticamente ad ogni utente registrato.
pub const ROL_POR_DEFECTO: i32 = 2;

/// DTO per il login: il campo `login` accetta nickname o correo.
#[derive(serde::Deserialize)]
pub struct LoginDTO {
    pub login: String,
    pub contrasenia: String,
}

#[instrument(skip(state, body), fields(nickname = %body.nickname))]
pub async fn register_usuario(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegistroUsuarioDTO>, // JSON body
) -> Result<impl IntoResponse, AppError> {
    // 1. Validare il DTO (nombre/nickname/correo/contrasenia: formato e lunghezza)
    // 2. Rifiutare con CONFLICT se nickname o correo sono già in uso
    // 3. Hashare la contrasenia con bcrypt (costo 10) prima di persistere
    // 4. Inserire l'utente e assegnargli il ruolo di default
    // 5. Emettere un token da un'ora e rispondere 201 con i soli campi non sensibili

    body.validate()?;

    if state
        .usuario
        .nickname_o_correo_en_uso(&body.nickname, &body.correo)
        .await?
    {
        warn!("Nickname or correo already taken");
        return Err(AppError::conflict("El nickname o correo ya están en uso."));
    }

    let hash = Usuario::hash_password(&body.contrasenia)?;
    let datos = RegistroUsuarioDTO {
        contrasenia: hash,
        ..body
    };

    let usuario = state.usuario.create(&datos).await?;
    state
        .usuario
        .asignar_rol(&usuario.id_usuario, &ROL_POR_DEFECTO)
        .await?;

    let token = encode_jwt(
        usuario.id_usuario,
        Duration::hours(1),
        &state.config.jwt_secret,
    )?;

    info!(id_usuario = usuario.id_usuario, "User registered");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "mensaje": "Usuario registrado exitosamente.",
            "token": token,
            "usuario": {
                "id_usuario": usuario.id_usuario,
                "nombre": usuario.nombre,
                "nickname": usuario.nickname,
                "correo": usuario.correo,
            }
        })),
    ))
}

#[debug_handler]
#[instrument(skip(state, body), fields(login = %body.login))]
pub async fn login_usuario(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>, // JSON body
) -> Result<impl IntoResponse, AppError> {
    // 1. Cercare l'utente per nickname O correo, NOT_FOUND se assente
    // 2. Verificare la contrasenia contro l'hash memorizzato (bcrypt, tempo costante)
    // 3. Emettere un token con la durata presa dalla configurazione
    // 4. Rispondere con token + profilo (ruolo e permessi inclusi, mai l'hash)

    let usuario = state
        .usuario
        .find_by_login(&body.login)
        .await?
        .ok_or_else(|| {
            warn!("Login attempt for unknown user");
            AppError::not_found("Usuario no encontrado.")
        })?;

    if !usuario.verify_password(&body.contrasenia) {
        warn!(id_usuario = usuario.id_usuario, "Wrong password");
        return Err(AppError::unauthorized("Contraseña incorrecta."));
    }

    let token = encode_jwt(
        usuario.id_usuario,
        Duration::hours(state.config.jwt_expires_hours),
        &state.config.jwt_secret,
    )?;

    let filas = state.usuario.find_perfil(&usuario.id_usuario).await?;
    let perfil = PerfilDTO::from_filas(filas)
        .ok_or_else(|| AppError::not_found("Usuario no encontrado."))?;

    info!(id_usuario = perfil.id_usuario, "Login successful");
    Ok(Json(json!({ "token": token, "usuario": perfil })))
}

#[instrument(skip(state, auth), fields(id_usuario = %auth.id_usuario))]
pub async fn get_perfil(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<UsuarioAutenticado>, // inserito dal middleware
) -> Result<impl IntoResponse, AppError> {
    // Il soggetto arriva dal token: join su ruoli e permessi, con la
    // lista permessi deduplicata rispetto al fan-out della join.
    let filas = state.usuario.find_perfil(&auth.id_usuario).await?;
    let perfil = PerfilDTO::from_filas(filas)
        .ok_or_else(|| AppError::not_found("Usuario no encontrado."))?;

    Ok(Json(json!({ "usuario": perfil })))
}
