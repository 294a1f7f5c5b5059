//! Report documents built from inscrições.
//!
//! A [`ReportDocument`] is a title, optional lines of body text, one table
//! and a footer line. [`crate::pdf`] lays it out on US Letter pages.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use painel_db::models::inscricao::Inscricao;

use crate::currency::format_currency;

pub const FICHA_TITLE: &str = "PROGRAMA SOCIAL - FICHA DE INSCRIÇÃO";
pub const RELATORIO_TITLE: &str = "PROGRAMA SOCIAL - RELATÓRIO COMPLETO";
pub const NOT_INFORMED: &str = "Não informado";
pub const NO_NOTES: &str = "Nenhuma";

/// Names longer than this are cut in the aggregate table.
pub const NAME_LIMIT: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlign {
    Left,
    Center,
}

/// A table with a bold header row. Widths are in inches.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub column_widths: Vec<f32>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub align: CellAlign,
    pub header_font_size: f32,
    pub body_font_size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub body: Vec<String>,
    pub table: Table,
    pub footer: String,
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or(default)
}

fn registered_at(inscricao: &Inscricao) -> String {
    inscricao.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `dd/mm/YYYY às HH:MM`.
pub fn generated_stamp(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y às %H:%M").to_string()
}

/// First 25 characters plus `...` for longer names.
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_LIMIT {
        let head: String = name.chars().take(NAME_LIMIT).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Single-record sheet with every field in a Campo/Informação table.
pub fn ficha(inscricao: &Inscricao, generated_at: NaiveDateTime) -> ReportDocument {
    let rows: Vec<(&str, String)> = vec![
        ("Nome Completo", inscricao.nome_completo.clone()),
        ("Idade", format!("{} anos", inscricao.idade)),
        ("Gênero", inscricao.genero.clone()),
        ("CPF", or_default(&inscricao.cpf, NOT_INFORMED).to_string()),
        ("Endereço", inscricao.endereco.clone()),
        ("Telefone", or_default(&inscricao.telefone, NOT_INFORMED).to_string()),
        ("Email", or_default(&inscricao.email, NOT_INFORMED).to_string()),
        ("Renda Familiar", format_currency(inscricao.renda_familiar)),
        ("Membros da Família", inscricao.membros_familia.to_string()),
        ("Despesas Mensais", format_currency(inscricao.despesas_mensais)),
        ("Escolaridade", inscricao.escolaridade.clone()),
        ("Situação de Moradia", inscricao.situacao_moradia.clone()),
        ("Observações", or_default(&inscricao.observacoes, NO_NOTES).to_string()),
        ("Status", inscricao.status.clone()),
        ("Data de Cadastro", registered_at(inscricao)),
    ];

    ReportDocument {
        title: FICHA_TITLE.to_string(),
        body: Vec::new(),
        table: Table {
            column_widths: vec![2.0, 4.0],
            header: vec!["Campo".into(), "Informação".into()],
            rows: rows
                .into_iter()
                .map(|(field, value)| vec![field.to_string(), value])
                .collect(),
            align: CellAlign::Left,
            header_font_size: 12.0,
            body_font_size: 10.0,
        },
        footer: format!("Documento gerado em {}", generated_stamp(generated_at)),
    }
}

/// Summary of every inscrição, one row each.
pub fn relatorio_completo(inscricoes: &[Inscricao], generated_at: NaiveDateTime) -> ReportDocument {
    let rows = inscricoes
        .iter()
        .map(|i| {
            vec![
                i.id.to_string(),
                truncate_name(&i.nome_completo),
                i.idade.to_string(),
                format_currency(i.renda_familiar),
                i.status.clone(),
                i.created_at.format("%Y-%m-%d").to_string(),
            ]
        })
        .collect();

    ReportDocument {
        title: RELATORIO_TITLE.to_string(),
        body: vec![format!("Total de Inscrições: {}", inscricoes.len())],
        table: Table {
            column_widths: vec![0.5, 2.0, 0.7, 1.0, 1.0, 1.0],
            header: ["ID", "Nome", "Idade", "Renda Familiar", "Status", "Data Cadastro"]
                .map(String::from)
                .to_vec(),
            rows,
            align: CellAlign::Center,
            header_font_size: 10.0,
            body_font_size: 8.0,
        },
        footer: format!("Relatório gerado em {}", generated_stamp(generated_at)),
    }
}

/// `<dir>/inscricao_<id>_<name with spaces as underscores>.pdf`.
pub fn ficha_path(dir: &Path, inscricao: &Inscricao) -> PathBuf {
    let name = inscricao.nome_completo.replace(' ', "_");
    dir.join(format!("inscricao_{}_{name}.pdf", inscricao.id))
}

/// `<dir>/relatorio_completo_<YYYYmmdd_HHMMSS>.pdf`.
pub fn relatorio_path(dir: &Path, at: NaiveDateTime) -> PathBuf {
    dir.join(format!("relatorio_completo_{}.pdf", at.format("%Y%m%d_%H%M%S")))
}
