//! Application State - Stato globale dell'applicazione
//!
//! Contiene tutti i repository e la configurazione condivisa
//! necessaria per gestire l'applicazione.

use crate::core::Config;
use crate::repositories::{
    ArticuloRepository, CategoriaRepository, EtiquetaRepository, PermisoRepository, RolRepository,
    UsuarioRepository,
};
use sqlx::MySqlPool;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione degli utenti
    pub usuario: UsuarioRepository,

    /// Repository per la gestione dei ruoli
    pub rol: RolRepository,

    /// Repository per la gestione dei permessi
    pub permiso: PermisoRepository,

    /// Repository per la gestione degli articoli e delle loro join
    pub articulo: ArticuloRepository,

    /// Repository per la gestione delle categorie
    pub categoria: CategoriaRepository,

    /// Repository per la gestione delle etichette
    pub etiqueta: EtiquetaRepository,

    /// Configurazione costruita una volta sola all'avvio
    pub config: Config,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito e la configurazione.
    pub fn new(pool: MySqlPool, config: Config) -> Self {
        Self {
            usuario: UsuarioRepository::new(pool.clone()),
            rol: RolRepository::new(pool.clone()),
            permiso: PermisoRepository::new(pool.clone()),
            articulo: ArticuloRepository::new(pool.clone()),
            categoria: CategoriaRepository::new(pool.clone()),
            etiqueta: EtiquetaRepository::new(pool),
            config,
        }
    }
}
