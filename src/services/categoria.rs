//! Categoria services - CRUD delle categorie (rotte pubbliche)

use crate::core::{AppError, AppState};
use crate::dtos::{CreateCategoriaDTO, UpdateCategoriaDTO};
use crate::entities::Categoria;
use crate::repositories::{Create, Delete, Read, ReadAll, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

pub async fn get_categorias(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Categoria>>, AppError> {
    let categorias = state.categoria.read_all().await?;
    Ok(Json(categorias))
}

pub async fn get_categoria_por_id(
    State(state): State<Arc<AppState>>,
    Path(id_categoria): Path<i32>,
) -> Result<Json<Categoria>, AppError> {
    let categoria = state
        .categoria
        .read(&id_categoria)
        .await?
        .ok_or_else(|| AppError::not_found("Categoría no encontrada."))?;
    Ok(Json(categoria))
}

pub async fn create_categoria(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateCategoriaDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let categoria = state.categoria.create(&body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id_categoria": categoria.id_categoria,
            "mensaje": "Categoría creada exitosamente."
        })),
    ))
}

pub async fn update_categoria(
    State(state): State<Arc<AppState>>,
    Path(id_categoria): Path<i32>,
    Json(body): Json<UpdateCategoriaDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    state
        .categoria
        .update(&id_categoria, &body)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("Categoría no encontrada."),
            otro => otro.into(),
        })?;
    Ok(Json(json!({ "mensaje": "Categoría actualizada exitosamente." })))
}

pub async fn delete_categoria(
    State(state): State<Arc<AppState>>,
    Path(id_categoria): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state
        .categoria
        .delete(&id_categoria)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("Categoría no encontrada."),
            otro => otro.into(),
        })?;
    Ok(Json(json!({ "mensaje": "Categoría eliminada exitosamente." })))
}
