//! Consulta DTOs - Righe delle query di aggregazione (viste denormalizzate)

use crate::entities::EstadoArticulo;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Articolo con autore, per GET /articulos/usuario/{id_usuario}.
#[derive(Serialize, Debug, sqlx::FromRow)]
pub struct ArticuloDeUsuarioDTO {
    pub id_articulo: i32,
    pub titulo: String,
    pub contenido: String,
    pub imagen_cover: Option<String>,
    pub estado: EstadoArticulo,
    pub fecha_publicacion: DateTime<Utc>,
    pub id_usuario: i32,
    pub nombre: String,
    pub nickname: String,
}

/// Dati pubblici di un utente, per GET /usuarios/{id_usuario}.
#[derive(Serialize, Debug, sqlx::FromRow)]
pub struct UsuarioInfoDTO {
    pub id_usuario: i32,
    pub nombre: String,
    pub correo: String,
    pub fecha_registro: DateTime<Utc>,
}

/// Articolo con il nome della categoria, per
/// GET /articulos/categoria/{id_categoria}.
#[derive(Serialize, Debug, sqlx::FromRow)]
pub struct ArticuloEnCategoriaDTO {
    pub id_articulo: i32,
    pub titulo: String,
    pub contenido: String,
    pub imagen_cover: Option<String>,
    pub estado: EstadoArticulo,
    pub nombre_categoria: String,
}
