//! Enumerazioni - Tipi enumerati utilizzati nelle entità

use serde::{Deserialize, Serialize};

/// Stato editoriale di un articolo. Sul database viaggia come stringa
/// minuscola ('borrador', 'publicado', 'archivado').
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EstadoArticulo {
    #[default]
    Borrador,
    Publicado,
    Archivado,
}
