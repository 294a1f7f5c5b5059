//! Administrator account model.

use painel_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full row from the `usuarios` table. `senha` is the SHA-256 hex digest.
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: DbId,
    pub email: String,
    pub senha: String,
    pub nome: String,
    pub created_at: Timestamp,
}

/// DTO for inserting an administrator. `senha` must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateUsuario {
    pub email: String,
    pub senha: String,
    pub nome: String,
}
