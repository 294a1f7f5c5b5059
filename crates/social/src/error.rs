use painel_core::error::CoreError;

use crate::pdf::ReportError;

pub const MSG_EMAIL_TAKEN: &str = "Este email já está cadastrado";
pub const MSG_DATABASE: &str = "Erro no banco de dados";
pub const MSG_NOT_FOUND: &str = "Inscrição não encontrada";

/// Application-level error for the social program panel.
///
/// Wraps [`CoreError`] for domain errors and adds the persistence and
/// report-writing failures an action can hit. [`AppError::user_message`]
/// turns any of them into the text shown in the status bar.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `painel_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Message for the status bar. Internal details are logged, not shown.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => MSG_NOT_FOUND.to_string(),
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                "Ocorreu um erro interno".to_string()
            }
            AppError::Core(core) => core.user_message(),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Report(err) => err.to_string(),
            AppError::Io(err) => {
                tracing::error!(error = %err, "I/O error");
                format!("Erro de arquivo: {err}")
            }
        }
    }
}

/// Classify a sqlx error into a user message.
///
/// - Unique constraint violations (only `usuarios.email` has one) map to
///   the duplicate-email message.
/// - `RowNotFound` maps to the not-found message.
/// - Everything else is logged and reported generically.
fn classify_sqlx_error(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::RowNotFound => MSG_NOT_FOUND.to_string(),
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => MSG_EMAIL_TAKEN.to_string(),
        other => {
            tracing::error!(error = %other, "Database error");
            MSG_DATABASE.to_string()
        }
    }
}
