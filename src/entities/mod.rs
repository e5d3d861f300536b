//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod articulo;
pub mod categoria;
pub mod enums;
pub mod etiqueta;
pub mod permiso;
pub mod rol;
pub mod usuario;

// Re-exports per facilitare l'import
pub use articulo::Articulo;
pub use categoria::Categoria;
pub use enums::EstadoArticulo;
pub use etiqueta::Etiqueta;
pub use permiso::Permiso;
pub use rol::Rol;
pub use usuario::Usuario;
