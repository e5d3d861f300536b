use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Permiso {
    pub id_permiso: i32,
    pub nombre_permiso: String,
}
