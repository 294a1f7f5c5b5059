//! Administrator login and self-registration.

use painel_core::error::CoreError;
use painel_core::hashing::{hash_password, validate_password_length};
use painel_core::types::DbId;
use painel_db::models::usuario::{CreateUsuario, Usuario};
use painel_db::repositories::UsuarioRepo;
use painel_db::DbPool;

use crate::error::AppResult;

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const MSG_FILL_ALL: &str = "Por favor, preencha todos os campos";
pub const MSG_BAD_CREDENTIALS: &str = "Email ou senha incorretos";
pub const MSG_PASSWORD_MISMATCH: &str = "As senhas não coincidem";
pub const MSG_PASSWORD_SHORT: &str = "A senha deve ter pelo menos 6 caracteres";
pub const MSG_REGISTERED: &str = "Usuário cadastrado com sucesso!";

/// The logged-in administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub usuario_id: DbId,
    pub nome: String,
    pub email: String,
}

impl From<Usuario> for Session {
    fn from(usuario: Usuario) -> Self {
        Self {
            usuario_id: usuario.id,
            nome: usuario.nome,
            email: usuario.email,
        }
    }
}

pub async fn login(pool: &DbPool, email: &str, senha: &str) -> AppResult<Session> {
    if email.is_empty() || senha.is_empty() {
        return Err(CoreError::Validation(MSG_FILL_ALL.into()).into());
    }
    let usuario = UsuarioRepo::find_by_credentials(pool, email, &hash_password(senha))
        .await?
        .ok_or_else(|| CoreError::Unauthorized(MSG_BAD_CREDENTIALS.into()))?;
    tracing::info!(usuario_id = usuario.id, "Administrator logged in");
    Ok(usuario.into())
}

/// Create an administrator account.
///
/// Checks run in order: any empty field, confirmation mismatch, short
/// password. A duplicate email surfaces as a unique-constraint error.
pub async fn register(
    pool: &DbPool,
    nome: &str,
    email: &str,
    senha: &str,
    confirma: &str,
) -> AppResult<Usuario> {
    if [nome, email, senha, confirma].iter().any(|v| v.is_empty()) {
        return Err(CoreError::Validation(MSG_FILL_ALL.into()).into());
    }
    if senha != confirma {
        return Err(CoreError::Validation(MSG_PASSWORD_MISMATCH.into()).into());
    }
    validate_password_length(senha, MIN_PASSWORD_LENGTH)
        .map_err(|_| CoreError::Validation(MSG_PASSWORD_SHORT.into()))?;

    let input = CreateUsuario {
        email: email.to_string(),
        senha: hash_password(senha),
        nome: nome.to_string(),
    };
    let usuario = UsuarioRepo::create(pool, &input).await?;
    tracing::info!(usuario_id = usuario.id, "Administrator registered");
    Ok(usuario)
}
