//! Repository for the `usuarios` table.

use painel_core::types::DbId;

use crate::models::usuario::{CreateUsuario, Usuario};
use crate::DbPool;

const COLUMNS: &str = "id, email, senha, nome, created_at";

pub struct UsuarioRepo;

impl UsuarioRepo {
    /// Insert a new administrator. A duplicate email fails with a
    /// unique-constraint database error.
    pub async fn create(pool: &DbPool, input: &CreateUsuario) -> Result<Usuario, sqlx::Error> {
        let query = format!(
            "INSERT INTO usuarios (email, senha, nome, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Usuario>(&query)
            .bind(&input.email)
            .bind(&input.senha)
            .bind(&input.nome)
            .bind(chrono::Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuarios WHERE id = ?");
        sqlx::query_as::<_, Usuario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an administrator by email (case-sensitive).
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuarios WHERE email = ?");
        sqlx::query_as::<_, Usuario>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find the administrator matching both email and password digest.
    pub async fn find_by_credentials(
        pool: &DbPool,
        email: &str,
        senha_hash: &str,
    ) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuarios WHERE email = ? AND senha = ?");
        sqlx::query_as::<_, Usuario>(&query)
            .bind(email)
            .bind(senha_hash)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM usuarios")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
