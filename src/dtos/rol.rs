use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateRolDTO {
    #[validate(length(min = 1, max = 50, message = "El nombre del rol es requerido"))]
    pub nombre_rol: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateRolDTO {
    #[validate(length(min = 1, max = 50, message = "El nombre del rol es requerido"))]
    pub nombre_rol: String,
}

/// Corpo di POST /asignar-permiso
#[derive(Serialize, Deserialize, Debug)]
pub struct AsignarPermisoDTO {
    pub id_rol: i32,
    pub id_permiso: i32,
}
