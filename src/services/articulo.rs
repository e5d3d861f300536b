//! Articulo services - CRUD degli articoli con fan-out sulle join
//! (tutte le rotte richiedono il bearer token)

use crate::core::{AppError, AppState};
use crate::dtos::{
    ArticuloDetalleDTO, ArticuloResumenDTO, CreateArticuloDTO, UpdateArticuloDTO,
};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use futures::future::try_join;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

pub async fn get_articulos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ArticuloResumenDTO>>, AppError> {
    let articulos = state.articulo.find_all_con_autor().await?;
    Ok(Json(articulos))
}

#[instrument(skip(state), fields(id_articulo = %id_articulo))]
pub async fn get_articulo_por_id(
    State(state): State<Arc<AppState>>,
    Path(id_articulo): Path<i32>,
) -> Result<Json<ArticuloDetalleDTO>, AppError> {
    let articulo = state
        .articulo
        .find_con_autor(&id_articulo)
        .await?
        .ok_or_else(|| AppError::not_found("Artículo no encontrado."))?;

    // Le due liste annidate sono indipendenti: un round-trip ciascuna,
    // in parallelo sul pool.
    let (categorias, etiquetas) = try_join(
        state.articulo.categorias_de(&id_articulo),
        state.articulo.etiquetas_de(&id_articulo),
    )
    .await?;

    Ok(Json(ArticuloDetalleDTO::new(articulo, categorias, etiquetas)))
}

#[instrument(skip(state, body), fields(id_usuario = %body.id_usuario))]
pub async fn create_articulo(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateArticuloDTO>,
) -> Result<impl IntoResponse, AppError> {
    // 1. Validare titolo e contenuto
    // 2. Inserire articolo + join in una transazione (rollback su errore)
    body.validate()?;

    let id_articulo = state.articulo.create(&body).await?;

    info!(id_articulo, "Article created");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id_articulo": id_articulo, "mensaje": "Artículo creado exitosamente." })),
    ))
}

#[instrument(skip(state, body), fields(id_articulo = %id_articulo))]
pub async fn update_articulo(
    State(state): State<Arc<AppState>>,
    Path(id_articulo): Path<i32>,
    Json(body): Json<UpdateArticuloDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;

    state
        .articulo
        .update(&id_articulo, &body)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("Artículo no encontrado."),
            otro => otro.into(),
        })?;

    Ok(Json(json!({ "mensaje": "Artículo actualizado exitosamente." })))
}

#[instrument(skip(state), fields(id_articulo = %id_articulo))]
pub async fn delete_articulo(
    State(state): State<Arc<AppState>>,
    Path(id_articulo): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state
        .articulo
        .delete(&id_articulo)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("Artículo no encontrado."),
            otro => otro.into(),
        })?;

    Ok(Json(json!({ "mensaje": "Artículo eliminado exitosamente." })))
}
