//! Permiso services - CRUD dei permessi

use crate::core::{AppError, AppState};
use crate::dtos::{CreatePermisoDTO, UpdatePermisoDTO};
use crate::entities::Permiso;
use crate::repositories::{Create, Delete, Read, ReadAll, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

pub async fn get_permisos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Permiso>>, AppError> {
    let permisos = state.permiso.read_all().await?;
    Ok(Json(permisos))
}

pub async fn get_permiso_por_id(
    State(state): State<Arc<AppState>>,
    Path(id_permiso): Path<i32>,
) -> Result<Json<Permiso>, AppError> {
    let permiso = state
        .permiso
        .read(&id_permiso)
        .await?
        .ok_or_else(|| AppError::not_found("Permiso no encontrado."))?;
    Ok(Json(permiso))
}

pub async fn create_permiso(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePermisoDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let permiso = state.permiso.create(&body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id_permiso": permiso.id_permiso, "mensaje": "Permiso creado exitosamente." })),
    ))
}

pub async fn update_permiso(
    State(state): State<Arc<AppState>>,
    Path(id_permiso): Path<i32>,
    Json(body): Json<UpdatePermisoDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    state
        .permiso
        .update(&id_permiso, &body)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("Permiso no encontrado para actualizar."),
            otro => otro.into(),
        })?;
    Ok(Json(json!({ "mensaje": "Permiso actualizado exitosamente." })))
}

pub async fn delete_permiso(
    State(state): State<Arc<AppState>>,
    Path(id_permiso): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state
        .permiso
        .delete(&id_permiso)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("Permiso no encontrado para eliminar."),
            otro => otro.into(),
        })?;
    Ok(Json(json!({ "mensaje": "Permiso eliminado exitosamente." })))
}
