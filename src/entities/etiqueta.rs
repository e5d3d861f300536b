use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Etiqueta {
    pub id_etiqueta: i32,
    pub nombre_etiqueta: String,
}
