use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateCategoriaDTO {
    #[validate(length(min = 1, max = 100, message = "El nombre de la categoría es requerido"))]
    pub nombre_categoria: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateCategoriaDTO {
    #[validate(length(min = 1, max = 100, message = "El nombre de la categoría es requerido"))]
    pub nombre_categoria: String,
}
