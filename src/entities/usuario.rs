//! Usuario entity - Entità utente con metodi per gestione password

use bcrypt::{hash, verify};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Fattore di costo bcrypt usato per tutte le password persistite.
pub const COSTO_BCRYPT: u32 = 10;

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Usuario {
    pub id_usuario: i32,
    pub nombre: String,
    pub nickname: String,
    pub correo: String,
    // l'hash non lascia mai il processo: escluso dalla serializzazione
    #[serde(skip_serializing)]
    pub contrasenia: String,
    pub imagen_perfil: Option<String>,
    pub numero_telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub fecha_registro: DateTime<Utc>,
}

impl Usuario {
    /// Verify if target_password matches the stored hashed password
    pub fn verify_password(&self, target_password: &str) -> bool {
        verify(target_password, &self.contrasenia).unwrap_or(false)
    }

    /// Hash a password using bcrypt with the configured cost
    pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
        hash(password, COSTO_BCRYPT)
    }
}
