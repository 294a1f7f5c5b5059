//! Repository for the `inscricoes` table and its status audit trail.

use painel_core::types::DbId;

use crate::models::inscricao::{
    CreateInscricao, DetailedStatistics, Inscricao, InscricaoStatus, StatusCounts, StatusFilter,
    StatusHistorico,
};
use crate::DbPool;

const COLUMNS: &str = "id, nome_completo, idade, genero, cpf, endereco, telefone, email, \
                       renda_familiar, membros_familia, despesas_mensais, escolaridade, \
                       situacao_moradia, observacoes, status, created_at, updated_at";

const HISTORY_COLUMNS: &str =
    "id, inscricao_id, status_anterior, status_novo, alterado_por, created_at";

/// Newest first; `id` breaks ties between rows created in the same instant.
const ORDER: &str = "ORDER BY created_at DESC, id DESC";

pub struct InscricaoRepo;

impl InscricaoRepo {
    /// Insert a new inscrição with status `Pendente`, returning the row.
    pub async fn create(pool: &DbPool, input: &CreateInscricao) -> Result<Inscricao, sqlx::Error> {
        let now = chrono::Utc::now();
        let query = format!(
            "INSERT INTO inscricoes (
                nome_completo, idade, genero, cpf, endereco, telefone, email,
                renda_familiar, membros_familia, despesas_mensais, escolaridade,
                situacao_moradia, observacoes, status, created_at, updated_at
             )
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inscricao>(&query)
            .bind(&input.nome_completo)
            .bind(input.idade)
            .bind(&input.genero)
            .bind(&input.cpf)
            .bind(&input.endereco)
            .bind(&input.telefone)
            .bind(&input.email)
            .bind(input.renda_familiar)
            .bind(input.membros_familia)
            .bind(input.despesas_mensais)
            .bind(&input.escolaridade)
            .bind(&input.situacao_moradia)
            .bind(&input.observacoes)
            .bind(InscricaoStatus::Pendente.as_str())
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Inscricao>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inscricoes WHERE id = ?");
        sqlx::query_as::<_, Inscricao>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List inscrições matching `filter`, newest first.
    pub async fn list(pool: &DbPool, filter: StatusFilter) -> Result<Vec<Inscricao>, sqlx::Error> {
        match filter {
            StatusFilter::Todos => Self::list_all(pool).await,
            StatusFilter::Only(status) => {
                let query = format!("SELECT {COLUMNS} FROM inscricoes WHERE status = ? {ORDER}");
                sqlx::query_as::<_, Inscricao>(&query)
                    .bind(status.as_str())
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// List every inscrição, newest first.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Inscricao>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inscricoes {ORDER}");
        sqlx::query_as::<_, Inscricao>(&query).fetch_all(pool).await
    }

    /// Change the status and record the change in the audit trail.
    ///
    /// Both statements run in one transaction; if either fails neither is
    /// applied. Returns `None` (and writes nothing) if `id` does not exist.
    pub async fn update_status(
        pool: &DbPool,
        id: DbId,
        status: InscricaoStatus,
        alterado_por: Option<DbId>,
    ) -> Result<Option<Inscricao>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let previous: Option<(String,)> =
            sqlx::query_as("SELECT status FROM inscricoes WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((previous,)) = previous else {
            return Ok(None);
        };

        let now = chrono::Utc::now();
        let query = format!(
            "UPDATE inscricoes SET status = ?, updated_at = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Inscricao>(&query)
            .bind(status.as_str())
            .bind(now)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO inscricao_status_historico
                (inscricao_id, status_anterior, status_novo, alterado_por, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&previous)
        .bind(status.as_str())
        .bind(alterado_por)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            inscricao_id = id,
            from = %previous,
            to = %status,
            "Inscrição status changed"
        );
        Ok(Some(updated))
    }

    /// Audit trail for one inscrição, oldest change first.
    pub async fn status_history(
        pool: &DbPool,
        inscricao_id: DbId,
    ) -> Result<Vec<StatusHistorico>, sqlx::Error> {
        let query = format!(
            "SELECT {HISTORY_COLUMNS} FROM inscricao_status_historico
             WHERE inscricao_id = ?
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, StatusHistorico>(&query)
            .bind(inscricao_id)
            .fetch_all(pool)
            .await
    }

    pub async fn statistics(pool: &DbPool) -> Result<StatusCounts, sqlx::Error> {
        sqlx::query_as::<_, StatusCounts>(
            "SELECT
                COUNT(*) AS total,
                COALESCE(SUM(CASE WHEN status = 'Pendente' THEN 1 ELSE 0 END), 0) AS pendentes,
                COALESCE(SUM(CASE WHEN status = 'Aprovada' THEN 1 ELSE 0 END), 0) AS aprovadas,
                COALESCE(SUM(CASE WHEN status = 'Rejeitada' THEN 1 ELSE 0 END), 0) AS rejeitadas
             FROM inscricoes",
        )
        .fetch_one(pool)
        .await
    }

    /// Status counts plus average family income and household size.
    pub async fn detailed_statistics(pool: &DbPool) -> Result<DetailedStatistics, sqlx::Error> {
        let counts = Self::statistics(pool).await?;
        let (media_renda, media_membros): (f64, f64) = sqlx::query_as(
            "SELECT
                COALESCE(AVG(renda_familiar), 0.0),
                COALESCE(AVG(membros_familia), 0.0)
             FROM inscricoes",
        )
        .fetch_one(pool)
        .await?;
        Ok(DetailedStatistics {
            counts,
            media_renda,
            media_membros,
        })
    }
}
