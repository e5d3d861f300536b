//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod articulo;
pub mod auth;
pub mod categoria;
pub mod consultas;
pub mod etiqueta;
pub mod permiso;
pub mod rol;
pub mod usuario;

// Re-exports per facilitare l'import
pub use articulo::{
    create_articulo, delete_articulo, get_articulo_por_id, get_articulos, update_articulo,
};
pub use auth::{get_perfil, login_usuario, register_usuario};
pub use categoria::{
    create_categoria, delete_categoria, get_categoria_por_id, get_categorias, update_categoria,
};
pub use consultas::{
    get_articulos_por_categoria, get_articulos_por_usuario, get_etiquetas_de_articulo,
    get_todos_articulos_por_usuario, get_usuario_info,
};
pub use etiqueta::{
    create_etiqueta, delete_etiqueta, get_etiqueta_por_id, get_etiquetas, update_etiqueta,
};
pub use permiso::{
    create_permiso, delete_permiso, get_permiso_por_id, get_permisos, update_permiso,
};
pub use rol::{
    asignar_permiso_a_rol, create_rol, delete_rol, get_rol_por_id, get_roles, update_rol,
};
pub use usuario::{asignar_rol_a_usuario, delete_usuario, get_usuarios, update_usuario};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
