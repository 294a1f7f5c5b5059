//! Inscrição (applicant registration) model, status enum and aggregates.

use std::fmt;

use painel_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Registration status. Any value may change to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InscricaoStatus {
    Pendente,
    Aprovada,
    Rejeitada,
}

impl InscricaoStatus {
    pub const ALL: [InscricaoStatus; 3] = [Self::Pendente, Self::Aprovada, Self::Rejeitada];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pendente => "Pendente",
            Self::Aprovada => "Aprovada",
            Self::Rejeitada => "Rejeitada",
        }
    }

    pub fn from_str_db(s: &str) -> Option<Self> {
        match s {
            "Pendente" => Some(Self::Pendente),
            "Aprovada" => Some(Self::Aprovada),
            "Rejeitada" => Some(Self::Rejeitada),
            _ => None,
        }
    }

    /// Position inside [`Self::ALL`], used by option lists.
    pub fn index(self) -> usize {
        match self {
            Self::Pendente => 0,
            Self::Aprovada => 1,
            Self::Rejeitada => 2,
        }
    }
}

impl fmt::Display for InscricaoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// List filter: everything, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Todos,
    Only(InscricaoStatus),
}

impl StatusFilter {
    pub const LABELS: [&'static str; 4] = ["Todos", "Pendente", "Aprovada", "Rejeitada"];

    pub fn label(self) -> &'static str {
        match self {
            Self::Todos => "Todos",
            Self::Only(status) => status.as_str(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if label == "Todos" {
            return Some(Self::Todos);
        }
        InscricaoStatus::from_str_db(label).map(Self::Only)
    }
}

/// Full row from the `inscricoes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Inscricao {
    pub id: DbId,
    pub nome_completo: String,
    pub idade: i64,
    pub genero: String,
    pub cpf: Option<String>,
    pub endereco: String,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub renda_familiar: f64,
    pub membros_familia: i64,
    pub despesas_mensais: f64,
    pub escolaridade: String,
    pub situacao_moradia: String,
    pub observacoes: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Inscricao {
    /// Parsed status; `None` only if the row was written outside this crate.
    pub fn status(&self) -> Option<InscricaoStatus> {
        InscricaoStatus::from_str_db(&self.status)
    }
}

/// DTO for inserting an inscrição. New rows always start as `Pendente`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateInscricao {
    pub nome_completo: String,
    pub idade: i64,
    pub genero: String,
    pub cpf: Option<String>,
    pub endereco: String,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub renda_familiar: f64,
    pub membros_familia: i64,
    pub despesas_mensais: f64,
    pub escolaridade: String,
    pub situacao_moradia: String,
    pub observacoes: Option<String>,
}

/// One entry of the status audit trail.
#[derive(Debug, Clone, FromRow)]
pub struct StatusHistorico {
    pub id: DbId,
    pub inscricao_id: DbId,
    pub status_anterior: String,
    pub status_novo: String,
    pub alterado_por: Option<DbId>,
    pub created_at: Timestamp,
}

/// Row counts per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, FromRow, Serialize)]
pub struct StatusCounts {
    pub total: i64,
    pub pendentes: i64,
    pub aprovadas: i64,
    pub rejeitadas: i64,
}

impl StatusCounts {
    pub fn count(&self, status: InscricaoStatus) -> i64 {
        match status {
            InscricaoStatus::Pendente => self.pendentes,
            InscricaoStatus::Aprovada => self.aprovadas,
            InscricaoStatus::Rejeitada => self.rejeitadas,
        }
    }

    /// Share of `status` in percent; an empty table counts as total 1.
    pub fn percentage(&self, status: InscricaoStatus) -> f64 {
        self.count(status) as f64 / self.total.max(1) as f64 * 100.0
    }

    /// Largest per-status count, at least 1, for scaling bar charts.
    pub fn max_count(&self) -> i64 {
        self.pendentes.max(self.aprovadas).max(self.rejeitadas).max(1)
    }
}

/// Status counts plus socioeconomic averages (0 when the table is empty).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DetailedStatistics {
    pub counts: StatusCounts,
    pub media_renda: f64,
    pub media_membros: f64,
}
