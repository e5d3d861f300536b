use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateEtiquetaDTO {
    #[validate(length(min = 1, max = 100, message = "El nombre de la etiqueta es requerido"))]
    pub nombre_etiqueta: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateEtiquetaDTO {
    #[validate(length(min = 1, max = 100, message = "El nombre de la etiqueta es requerido"))]
    pub nombre_etiqueta: String,
}
