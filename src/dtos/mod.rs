//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod articulo;
pub mod categoria;
pub mod consulta;
pub mod etiqueta;
pub mod permiso;
pub mod rol;
pub mod usuario;

// Re-exports per facilitare l'import
pub use articulo::{
    ArticuloConAutorDTO, ArticuloDetalleDTO, ArticuloResumenDTO, CreateArticuloDTO,
    UpdateArticuloDTO,
};
pub use categoria::{CreateCategoriaDTO, UpdateCategoriaDTO};
pub use consulta::{ArticuloDeUsuarioDTO, ArticuloEnCategoriaDTO, UsuarioInfoDTO};
pub use etiqueta::{CreateEtiquetaDTO, UpdateEtiquetaDTO};
pub use permiso::{CreatePermisoDTO, UpdatePermisoDTO};
pub use rol::{AsignarPermisoDTO, CreateRolDTO, UpdateRolDTO};
pub use usuario::{AsignarRolDTO, PerfilDTO, PerfilRow, RegistroUsuarioDTO, UpdateUsuarioDTO, UsuarioDTO};
