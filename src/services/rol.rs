//! Rol services - CRUD dei ruoli e assegnazione permessi

use crate::core::{AppError, AppState};
use crate::dtos::{AsignarPermisoDTO, CreateRolDTO, UpdateRolDTO};
use crate::entities::Rol;
use crate::repositories::{Create, Delete, Read, ReadAll, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

pub async fn get_roles(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Rol>>, AppError> {
    let roles = state.rol.read_all().await?;
    Ok(Json(roles))
}

pub async fn get_rol_por_id(
    State(state): State<Arc<AppState>>,
    Path(id_rol): Path<i32>,
) -> Result<Json<Rol>, AppError> {
    let rol = state
        .rol
        .read(&id_rol)
        .await?
        .ok_or_else(|| AppError::not_found("Rol no encontrado."))?;
    Ok(Json(rol))
}

pub async fn create_rol(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateRolDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let rol = state.rol.create(&body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id_rol": rol.id_rol, "mensaje": "Rol creado exitosamente." })),
    ))
}

pub async fn update_rol(
    State(state): State<Arc<AppState>>,
    Path(id_rol): Path<i32>,
    Json(body): Json<UpdateRolDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    state.rol.update(&id_rol, &body).await.map_err(|e| match e {
        sqlx::Error::RowNotFound => AppError::not_found("Rol no encontrado."),
        otro => otro.into(),
    })?;
    Ok(Json(json!({ "mensaje": "Rol actualizado exitosamente." })))
}

pub async fn delete_rol(
    State(state): State<Arc<AppState>>,
    Path(id_rol): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.rol.delete(&id_rol).await.map_err(|e| match e {
        sqlx::Error::RowNotFound => AppError::not_found("Rol no encontrado."),
        otro => otro.into(),
    })?;
    Ok(Json(json!({ "mensaje": "Rol eliminado exitosamente." })))
}

#[instrument(skip(state, body), fields(id_rol = %body.id_rol, id_permiso = %body.id_permiso))]
pub async fn asignar_permiso_a_rol(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AsignarPermisoDTO>,
) -> Result<impl IntoResponse, AppError> {
    // Controlli di esistenza separati: nessun insert se uno dei due
    // id non corrisponde a una riga.
    if !state.rol.exists(&body.id_rol).await? {
        warn!("Permission assignment to unknown role");
        return Err(AppError::not_found("Rol no encontrado."));
    }

    if !state.permiso.exists(&body.id_permiso).await? {
        warn!("Assignment of unknown permission");
        return Err(AppError::not_found("Permiso no encontrado."));
    }

    state.rol.asignar_permiso(&body.id_rol, &body.id_permiso).await?;

    info!("Permission assigned to role");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "mensaje": "Permiso asignado exitosamente al rol." })),
    ))
}
