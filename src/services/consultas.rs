//! Consultas services - Query di aggregazione in sola lettura
//! (tutte le rotte richiedono il bearer token)

use crate::core::{AppError, AppState};
use crate::dtos::{ArticuloDeUsuarioDTO, ArticuloEnCategoriaDTO, UsuarioInfoDTO};
use crate::entities::{Articulo, Etiqueta};
use axum::extract::{Json, Path, State};
use std::sync::Arc;

/// GET /articulos/usuario/{id_usuario} - articoli con i dati dell'autore
pub async fn get_articulos_por_usuario(
    State(state): State<Arc<AppState>>,
    Path(id_usuario): Path<i32>,
) -> Result<Json<Vec<ArticuloDeUsuarioDTO>>, AppError> {
    let articulos = state.articulo.find_por_usuario(&id_usuario).await?;
    Ok(Json(articulos))
}

/// GET /articulos/{id_articulo}/etiquetas - etichette di un articolo
pub async fn get_etiquetas_de_articulo(
    State(state): State<Arc<AppState>>,
    Path(id_articulo): Path<i32>,
) -> Result<Json<Vec<Etiqueta>>, AppError> {
    let etiquetas = state.articulo.etiquetas_de(&id_articulo).await?;
    Ok(Json(etiquetas))
}

/// GET /usuarios/{id_usuario} - dati pubblici di un utente
pub async fn get_usuario_info(
    State(state): State<Arc<AppState>>,
    Path(id_usuario): Path<i32>,
) -> Result<Json<UsuarioInfoDTO>, AppError> {
    let info = state
        .usuario
        .find_info(&id_usuario)
        .await?
        .ok_or_else(|| AppError::not_found("Usuario no encontrado."))?;
    Ok(Json(info))
}

/// GET /articulos/usuario/todos/{id_usuario} - tutti gli articoli di un
/// utente, soli campi scalari
pub async fn get_todos_articulos_por_usuario(
    State(state): State<Arc<AppState>>,
    Path(id_usuario): Path<i32>,
) -> Result<Json<Vec<Articulo>>, AppError> {
    let articulos = state.articulo.find_todos_por_usuario(&id_usuario).await?;
    Ok(Json(articulos))
}

/// GET /articulos/categoria/{id_categoria} - articoli di una categoria
pub async fn get_articulos_por_categoria(
    State(state): State<Arc<AppState>>,
    Path(id_categoria): Path<i32>,
) -> Result<Json<Vec<ArticuloEnCategoriaDTO>>, AppError> {
    let articulos = state.articulo.find_por_categoria(&id_categoria).await?;
    Ok(Json(articulos))
}
