use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Corpo JSON di ogni risposta d'errore: `{mensaje, error?}`.
#[derive(Serialize)]
struct ErrorResponse {
    mensaje: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Errore applicativo unico: ogni handler lo propaga con `?` e la
/// conversione in risposta HTTP avviene in un punto solo.
pub struct AppError {
    status: StatusCode,
    mensaje: &'static str,
    detalle: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, mensaje: &'static str) -> Self {
        Self {
            status,
            mensaje,
            detalle: None,
        }
    }

    pub fn with_details(mut self, detalle: impl Into<String>) -> Self {
        self.detalle = Some(detalle.into());
        self
    }

    // Common error constructors
    pub fn not_found(mensaje: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, mensaje)
    }

    pub fn bad_request(mensaje: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, mensaje)
    }

    pub fn unauthorized(mensaje: &'static str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, mensaje)
    }

    pub fn forbidden(mensaje: &'static str) -> Self {
        Self::new(StatusCode::FORBIDDEN, mensaje)
    }

    pub fn conflict(mensaje: &'static str) -> Self {
        Self::new(StatusCode::CONFLICT, mensaje)
    }

    pub fn internal_server_error(mensaje: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, mensaje)
    }

    pub fn service_unavailable(mensaje: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, mensaje)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("Recurso no encontrado."),

            // Il testo dell'errore del driver non arriva mai al client.
            sqlx::Error::Database(e) if e.is_unique_violation() => {
                Self::conflict("El valor ya está en uso.")
            }

            sqlx::Error::Database(e) if e.is_foreign_key_violation() => {
                Self::bad_request("La operación viola una referencia entre tablas.")
            }

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::service_unavailable("Base de datos no disponible.")
            }

            _ => Self::internal_server_error("Error interno del servidor."),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::bad_request("Datos de entrada inválidos.").with_details(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(_: bcrypt::BcryptError) -> Self {
        Self::internal_server_error("No se pudo procesar la contraseña.")
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(_: jsonwebtoken::errors::Error) -> Self {
        Self::internal_server_error("No se pudo generar el token.")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            mensaje: self.mensaje,
            error: self.detalle,
        });
        (self.status, body).into_response()
    }
}
