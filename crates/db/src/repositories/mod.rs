//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument.

pub mod inscricao_repo;
pub mod usuario_repo;

pub use inscricao_repo::InscricaoRepo;
pub use usuario_repo::UsuarioRepo;
