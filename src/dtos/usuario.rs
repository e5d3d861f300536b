//! Usuario DTOs - Data Transfer Objects per utenti

use crate::entities::Usuario;
use chrono::{DateTime, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    // lettere, cifre, punto, trattino e underscore; 3-50 caratteri
    static ref NICKNAME_VALIDO: Regex = Regex::new(r"^[A-Za-z0-9_.-]{3,50}$").unwrap();
}

/// Rappresentazione dell'utente verso il client: mai la password.
#[derive(Serialize, Deserialize, Debug)]
pub struct UsuarioDTO {
    pub id_usuario: i32,
    pub nombre: String,
    pub nickname: String,
    pub correo: String,
    pub imagen_perfil: Option<String>,
    pub numero_telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub fecha_registro: DateTime<Utc>,
}

impl From<Usuario> for UsuarioDTO {
    fn from(value: Usuario) -> Self {
        Self {
            id_usuario: value.id_usuario,
            nombre: value.nombre,
            nickname: value.nickname,
            correo: value.correo,
            imagen_perfil: value.imagen_perfil,
            numero_telefono: value.numero_telefono,
            fecha_nacimiento: value.fecha_nacimiento,
            fecha_registro: value.fecha_registro,
        }
    }
}

/// DTO per la registrazione di un nuovo utente. La contrasenia arriva
/// in chiaro e viene hashata dal service prima di toccare il repository.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct RegistroUsuarioDTO {
    #[validate(length(min = 1, max = 50, message = "El nombre debe tener entre 1 y 50 caracteres"))]
    pub nombre: String,
    #[validate(regex(
        path = *NICKNAME_VALIDO,
        message = "El nickname solo admite letras, números, punto, guion y guion bajo"
    ))]
    pub nickname: String,
    #[validate(email(message = "El correo no es válido"))]
    pub correo: String,
    #[validate(length(min = 6, max = 72, message = "La contraseña debe tener entre 6 y 72 caracteres"))]
    pub contrasenia: String,
    pub imagen_perfil: Option<String>,
    pub numero_telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
}

/// DTO per l'aggiornamento full-row di un utente (nessun PATCH parziale:
/// tutti i campi scalari vengono riscritti, password inclusa).
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateUsuarioDTO {
    #[validate(length(min = 1, max = 50, message = "El nombre debe tener entre 1 y 50 caracteres"))]
    pub nombre: String,
    #[validate(regex(
        path = *NICKNAME_VALIDO,
        message = "El nickname solo admite letras, números, punto, guion y guion bajo"
    ))]
    pub nickname: String,
    #[validate(email(message = "El correo no es válido"))]
    pub correo: String,
    #[validate(length(min = 6, max = 72, message = "La contraseña debe tener entre 6 y 72 caracteres"))]
    pub contrasenia: String,
    pub imagen_perfil: Option<String>,
    pub numero_telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
}

/// Riga prodotta dalla join usuario -> roles -> permisos. L'hash non
/// viene nemmeno selezionato dalla query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PerfilRow {
    pub id_usuario: i32,
    pub nombre: String,
    pub nickname: String,
    pub correo: String,
    pub imagen_perfil: Option<String>,
    pub numero_telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub fecha_registro: DateTime<Utc>,
    pub rol: Option<String>,
    pub id_permiso: Option<i32>,
}

/// Profilo completo: utente + ruolo + lista permessi deduplicata.
#[derive(Serialize, Debug)]
pub struct PerfilDTO {
    pub id_usuario: i32,
    pub nombre: String,
    pub nickname: String,
    pub correo: String,
    pub imagen_perfil: Option<String>,
    pub numero_telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub fecha_registro: DateTime<Utc>,
    pub rol: Option<String>,
    pub permisos: Vec<i32>,
}

impl PerfilDTO {
    /// Collassa il fan-out della join in un unico oggetto. `None` se la
    /// query non ha prodotto righe (utente inesistente).
    pub fn from_filas(filas: Vec<PerfilRow>) -> Option<Self> {
        let primera = filas.first()?.clone();
        let mut permisos: Vec<i32> = filas.into_iter().filter_map(|f| f.id_permiso).collect();
        permisos.sort_unstable();
        permisos.dedup();
        Some(Self {
            id_usuario: primera.id_usuario,
            nombre: primera.nombre,
            nickname: primera.nickname,
            correo: primera.correo,
            imagen_perfil: primera.imagen_perfil,
            numero_telefono: primera.numero_telefono,
            fecha_nacimiento: primera.fecha_nacimiento,
            fecha_registro: primera.fecha_registro,
            rol: primera.rol,
            permisos,
        })
    }
}

/// Corpo di POST /usuarios/asignar-rol
#[derive(Serialize, Deserialize, Debug)]
pub struct AsignarRolDTO {
    pub id_usuario: i32,
    pub id_rol: i32,
}
