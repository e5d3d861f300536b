//! Etiqueta services - CRUD delle etichette (rotte pubbliche)

use crate::core::{AppError, AppState};
use crate::dtos::{CreateEtiquetaDTO, UpdateEtiquetaDTO};
use crate::entities::Etiqueta;
use crate::repositories::{Create, Delete, Read, ReadAll, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

pub async fn get_etiquetas(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Etiqueta>>, AppError> {
    let etiquetas = state.etiqueta.read_all().await?;
    Ok(Json(etiquetas))
}

pub async fn get_etiqueta_por_id(
    State(state): State<Arc<AppState>>,
    Path(id_etiqueta): Path<i32>,
) -> Result<Json<Etiqueta>, AppError> {
    let etiqueta = state
        .etiqueta
        .read(&id_etiqueta)
        .await?
        .ok_or_else(|| AppError::not_found("Etiqueta no encontrada."))?;
    Ok(Json(etiqueta))
}

pub async fn create_etiqueta(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateEtiquetaDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let etiqueta = state.etiqueta.create(&body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id_etiqueta": etiqueta.id_etiqueta,
            "mensaje": "Etiqueta creada exitosamente."
        })),
    ))
}

pub async fn update_etiqueta(
    State(state): State<Arc<AppState>>,
    Path(id_etiqueta): Path<i32>,
    Json(body): Json<UpdateEtiquetaDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    state
        .etiqueta
        .update(&id_etiqueta, &body)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("Etiqueta no encontrada."),
            otro => otro.into(),
        })?;
    Ok(Json(json!({ "mensaje": "Etiqueta actualizada exitosamente." })))
}

pub async fn delete_etiqueta(
    State(state): State<Arc<AppState>>,
    Path(id_etiqueta): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state
        .etiqueta
        .delete(&id_etiqueta)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("Etiqueta no encontrada."),
            otro => otro.into(),
        })?;
    Ok(Json(json!({ "mensaje": "Etiqueta eliminada exitosamente." })))
}
