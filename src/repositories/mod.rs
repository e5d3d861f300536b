//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Un repository per tabella, tutti sopra lo stesso `MySqlPool`. Le query
//! usano l'API runtime di sqlx (`query_as::<_, T>` + `bind`) con le
//! entità che derivano `FromRow`: il crate compila anche senza un
//! database raggiungibile, la verifica dello schema avviene nei test
//! di integrazione con `#[sqlx::test]`.
//!
//! Promemoria sulle fetch:
//! * `.execute(...)`        -> INSERT/UPDATE/DELETE, ritorna rows_affected
//! * `.fetch_optional(...)` -> zero o una riga
//! * `.fetch_one(...)`      -> esattamente una riga (aggregati)
//! * `.fetch_all(...)`      -> tutte le righe

pub mod articulo;
pub mod categoria;
pub mod etiqueta;
pub mod permiso;
pub mod rol;
pub mod traits;
pub mod usuario;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadAll, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use articulo::ArticuloRepository;
pub use categoria::CategoriaRepository;
pub use etiqueta::EtiquetaRepository;
pub use permiso::PermisoRepository;
pub use rol::RolRepository;
pub use usuario::UsuarioRepository;
