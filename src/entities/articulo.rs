//! Articulo entity - Entità articolo del blog

use super::enums::EstadoArticulo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Articulo {
    pub id_articulo: i32,
    pub id_usuario: i32,
    pub titulo: String,
    pub contenido: String,
    pub imagen_cover: Option<String>,
    pub estado: EstadoArticulo,
    pub fecha_publicacion: DateTime<Utc>,
}
