//! Usuario services - Gestione utenti e assegnazione ruoli

use crate::core::{AppError, AppState};
use crate::dtos::{AsignarRolDTO, UpdateUsuarioDTO, UsuarioDTO};
use crate::entities::Usuario;
use crate::repositories::{Delete, ReadAll, Update};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

pub async fn get_usuarios(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UsuarioDTO>>, AppError> {
    let usuarios = state.usuario.read_all().await?;
    let usuarios_dto = usuarios.into_iter().map(UsuarioDTO::from).collect::<Vec<_>>();
    Ok(Json(usuarios_dto))
}

#[instrument(skip(state, body), fields(id_usuario = %id_usuario))]
pub async fn update_usuario(
    State(state): State<Arc<AppState>>,
    Path(id_usuario): Path<i32>,
    Json(body): Json<UpdateUsuarioDTO>,
) -> Result<impl IntoResponse, AppError> {
    // 1. Validare il DTO
    // 2. Nickname e correo devono restare unici rispetto agli ALTRI utenti
    // 3. Rihashare la contrasenia e riscrivere l'intera riga
    body.validate()?;

    if state
        .usuario
        .nickname_en_uso_por_otro(&body.nickname, &id_usuario)
        .await?
    {
        return Err(AppError::conflict("El nickname ya existe. Elige uno diferente."));
    }

    if state
        .usuario
        .correo_en_uso_por_otro(&body.correo, &id_usuario)
        .await?
    {
        return Err(AppError::conflict("El correo ya está registrado. Utiliza otro."));
    }

    let hash = Usuario::hash_password(&body.contrasenia)?;
    let datos = UpdateUsuarioDTO {
        contrasenia: hash,
        ..body
    };

    state
        .usuario
        .update(&id_usuario, &datos)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("Usuario no encontrado."),
            otro => otro.into(),
        })?;

    info!("User updated");
    Ok(Json(json!({ "mensaje": "Usuario actualizado exitosamente." })))
}

#[instrument(skip(state), fields(id_usuario = %id_usuario))]
pub async fn delete_usuario(
    State(state): State<Arc<AppState>>,
    Path(id_usuario): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state
        .usuario
        .delete(&id_usuario)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("Usuario no encontrado."),
            otro => otro.into(),
        })?;

    info!("User deleted");
    Ok(Json(json!({ "mensaje": "Usuario eliminado exitosamente." })))
}

#[instrument(skip(state, body), fields(id_usuario = %body.id_usuario, id_rol = %body.id_rol))]
pub async fn asignar_rol_a_usuario(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AsignarRolDTO>,
) -> Result<impl IntoResponse, AppError> {
    // Controlli di esistenza separati: nessun insert se uno dei due
    // id non corrisponde a una riga.
    if !state.usuario.exists(&body.id_usuario).await? {
        warn!("Role assignment to unknown user");
        return Err(AppError::not_found("Usuario no encontrado."));
    }

    if !state.rol.exists(&body.id_rol).await? {
        warn!("Assignment of unknown role");
        return Err(AppError::not_found("Rol no encontrado."));
    }

    state.usuario.asignar_rol(&body.id_usuario, &body.id_rol).await?;

    info!("Role assigned to user");
    Ok(Json(json!({ "mensaje": "Rol asignado al usuario exitosamente." })))
}
