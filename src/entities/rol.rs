use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Rol {
    pub id_rol: i32,
    pub nombre_rol: String,
}
