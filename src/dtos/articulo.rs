//! Articulo DTOs - Data Transfer Objects per articoli

use crate::entities::{Categoria, EstadoArticulo, Etiqueta};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO per creare un nuovo articolo. `estado` assente -> 'borrador'.
/// Le liste di id etichette/categorie sono opzionali e producono le
/// righe di join corrispondenti.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateArticuloDTO {
    pub id_usuario: i32,
    #[validate(length(min = 1, max = 255, message = "El título debe tener entre 1 y 255 caracteres"))]
    pub titulo: String,
    #[validate(length(min = 1, message = "El contenido no puede estar vacío"))]
    pub contenido: String,
    pub imagen_cover: Option<String>,
    pub estado: Option<EstadoArticulo>,
    pub etiquetas: Option<Vec<i32>>,
    pub categorias: Option<Vec<i32>>,
}

/// DTO per l'aggiornamento full-row di un articolo.
///
/// Semantica delle liste: `Some(lista)` (anche vuota) rimpiazza per
/// intero le associazioni di quella relazione; campo omesso -> le
/// associazioni esistenti restano intatte.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateArticuloDTO {
    pub id_usuario: i32,
    #[validate(length(min = 1, max = 255, message = "El título debe tener entre 1 y 255 caracteres"))]
    pub titulo: String,
    #[validate(length(min = 1, message = "El contenido no puede estar vacío"))]
    pub contenido: String,
    pub imagen_cover: Option<String>,
    pub estado: EstadoArticulo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etiquetas: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categorias: Option<Vec<i32>>,
}

/// Riga della lista articoli: articolo + nome dell'autore (LEFT JOIN,
/// quindi il nome può mancare).
#[derive(Serialize, Debug, sqlx::FromRow)]
pub struct ArticuloResumenDTO {
    pub id_articulo: i32,
    pub fecha_publicacion: DateTime<Utc>,
    pub titulo: String,
    pub contenido: String,
    pub nombre_usuario: Option<String>,
}

/// Articolo con i dati dell'autore (INNER JOIN usuarios).
#[derive(Serialize, Debug, sqlx::FromRow)]
pub struct ArticuloConAutorDTO {
    pub id_usuario: i32,
    pub nombre: String,
    pub id_articulo: i32,
    pub titulo: String,
    pub contenido: String,
    pub imagen_cover: Option<String>,
    pub estado: EstadoArticulo,
    pub fecha_publicacion: DateTime<Utc>,
}

/// Dettaglio completo: articolo + autore + categorie ed etichette
/// annidate come array di coppie `{id, nombre}`.
#[derive(Serialize, Debug)]
pub struct ArticuloDetalleDTO {
    pub id_usuario: i32,
    pub nombre: String,
    pub id_articulo: i32,
    pub titulo: String,
    pub contenido: String,
    pub imagen_cover: Option<String>,
    pub estado: EstadoArticulo,
    pub fecha_publicacion: DateTime<Utc>,
    pub categorias: Vec<Categoria>,
    pub etiquetas: Vec<Etiqueta>,
}

impl ArticuloDetalleDTO {
    pub fn new(
        articulo: ArticuloConAutorDTO,
        categorias: Vec<Categoria>,
        etiquetas: Vec<Etiqueta>,
    ) -> Self {
        Self {
            id_usuario: articulo.id_usuario,
            nombre: articulo.nombre,
            id_articulo: articulo.id_articulo,
            titulo: articulo.titulo,
            contenido: articulo.contenido,
            imagen_cover: articulo.imagen_cover,
            estado: articulo.estado,
            fecha_publicacion: articulo.fecha_publicacion,
            categorias,
            etiquetas,
        }
    }
}
