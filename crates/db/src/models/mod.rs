//! Row structs and DTOs.
//!
//! Each submodule holds a `FromRow` entity matching the table row and a
//! create DTO for inserts.

pub mod inscricao;
pub mod usuario;
