//! Blog server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState};
pub use crate::services::root;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(configure_auth_routes(state.clone()))
        .merge(configure_usuario_routes())
        .merge(configure_rol_routes())
        .merge(configure_permiso_routes())
        .merge(configure_categoria_routes())
        .merge(configure_etiqueta_routes())
        .merge(configure_articulo_routes(state.clone()))
        .merge(configure_consulta_routes(state.clone()))
        // il frontend gira su un'altra origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes di autenticazione (register, login, profile)
fn configure_auth_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::*;

    let publicas = Router::new()
        .route("/register", post(register_usuario))
        .route("/login", post(login_usuario));

    let protegidas = Router::new()
        .route("/profile", get(get_perfil))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ));

    publicas.merge(protegidas)
}

/// Configura le routes per la gestione degli utenti
fn configure_usuario_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/usuarios", get(get_usuarios))
        .route(
            "/usuarios/{id_usuario}",
            put(update_usuario).delete(delete_usuario),
        )
        .route("/usuarios/asignar-rol", post(asignar_rol_a_usuario))
}

/// Configura le routes per la gestione dei ruoli
fn configure_rol_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/rol", get(get_roles).post(create_rol))
        .route(
            "/rol/{id_rol}",
            get(get_rol_por_id).put(update_rol).delete(delete_rol),
        )
        .route("/asignar-permiso", post(asignar_permiso_a_rol))
}

/// Configura le routes per la gestione dei permessi
fn configure_permiso_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/permiso", get(get_permisos).post(create_permiso))
        .route(
            "/permiso/{id_permiso}",
            get(get_permiso_por_id)
                .put(update_permiso)
                .delete(delete_permiso),
        )
}

/// Configura le routes per la gestione delle categorie (pubbliche)
fn configure_categoria_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/categorias", get(get_categorias).post(create_categoria))
        .route(
            "/categorias/{id_categoria}",
            get(get_categoria_por_id)
                .put(update_categoria)
                .delete(delete_categoria),
        )
}

/// Configura le routes per la gestione delle etichette (pubbliche)
fn configure_etiqueta_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/etiquetas", get(get_etiquetas).post(create_etiqueta))
        .route(
            "/etiquetas/{id_etiqueta}",
            get(get_etiqueta_por_id)
                .put(update_etiqueta)
                .delete(delete_etiqueta),
        )
}

/// Configura le routes degli articoli: tutte dietro il gate di
/// autenticazione
fn configure_articulo_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::*;

    Router::new()
        .route("/articulos", get(get_articulos).post(create_articulo))
        .route(
            "/articulos/{id_articulo}",
            get(get_articulo_por_id)
                .put(update_articulo)
                .delete(delete_articulo),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Configura le routes delle query di aggregazione (tutte protette)
fn configure_consulta_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::*;

    Router::new()
        .route(
            "/articulos/usuario/{id_usuario}",
            get(get_articulos_por_usuario),
        )
        .route(
            "/articulos/{id_articulo}/etiquetas",
            get(get_etiquetas_de_articulo),
        )
        .route("/usuarios/{id_usuario}", get(get_usuario_info))
        .route(
            "/articulos/usuario/todos/{id_usuario}",
            get(get_todos_articulos_por_usuario),
        )
        .route(
            "/articulos/categoria/{id_categoria}",
            get(get_articulos_por_categoria),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
