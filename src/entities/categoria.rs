use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Categoria {
    pub id_categoria: i32,
    pub nombre_categoria: String,
}
