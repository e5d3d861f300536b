use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreatePermisoDTO {
    #[validate(length(min = 1, max = 50, message = "El nombre del permiso es requerido"))]
    pub nombre_permiso: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdatePermisoDTO {
    #[validate(length(min = 1, max = 50, message = "El nombre del permiso es requerido"))]
    pub nombre_permiso: String,
}
