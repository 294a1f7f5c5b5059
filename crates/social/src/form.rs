//! The inscrição form: fields, option lists and submission parsing.

use painel_core::error::CoreError;
use painel_db::models::inscricao::CreateInscricao;

use crate::currency::parse_currency;

pub const GENERO_OPTIONS: [&str; 4] = ["Masculino", "Feminino", "Outro", "Prefiro não informar"];

pub const ESCOLARIDADE_OPTIONS: [&str; 8] = [
    "Sem escolaridade",
    "Ensino Fundamental Incompleto",
    "Ensino Fundamental Completo",
    "Ensino Médio Incompleto",
    "Ensino Médio Completo",
    "Ensino Superior Incompleto",
    "Ensino Superior Completo",
    "Pós-graduação",
];

pub const MORADIA_OPTIONS: [&str; 6] = [
    "Casa Própria",
    "Casa Alugada",
    "Casa Cedida",
    "Ocupação",
    "Situação de Rua",
    "Outro",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    NomeCompleto,
    Idade,
    Genero,
    Cpf,
    Endereco,
    Telefone,
    Email,
    RendaFamiliar,
    MembrosFamilia,
    DespesasMensais,
    Escolaridade,
    SituacaoMoradia,
    Observacoes,
}

impl FormField {
    pub const ALL: [FormField; 13] = [
        Self::NomeCompleto,
        Self::Idade,
        Self::Genero,
        Self::Cpf,
        Self::Endereco,
        Self::Telefone,
        Self::Email,
        Self::RendaFamiliar,
        Self::MembrosFamilia,
        Self::DespesasMensais,
        Self::Escolaridade,
        Self::SituacaoMoradia,
        Self::Observacoes,
    ];

    /// Checked in this order; the first empty one is reported.
    pub const REQUIRED: [FormField; 9] = [
        Self::NomeCompleto,
        Self::Idade,
        Self::Genero,
        Self::Endereco,
        Self::RendaFamiliar,
        Self::MembrosFamilia,
        Self::DespesasMensais,
        Self::Escolaridade,
        Self::SituacaoMoradia,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::NomeCompleto => "Nome Completo *",
            Self::Idade => "Idade *",
            Self::Genero => "Gênero *",
            Self::Cpf => "CPF",
            Self::Endereco => "Endereço Completo *",
            Self::Telefone => "Telefone",
            Self::Email => "Email",
            Self::RendaFamiliar => "Renda Familiar (R$) *",
            Self::MembrosFamilia => "Membros da Família *",
            Self::DespesasMensais => "Despesas Mensais (R$) *",
            Self::Escolaridade => "Escolaridade *",
            Self::SituacaoMoradia => "Situação de Moradia *",
            Self::Observacoes => "Observações Adicionais",
        }
    }

    /// Choices for dropdown fields; `None` for free text.
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Genero => Some(&GENERO_OPTIONS),
            Self::Escolaridade => Some(&ESCOLARIDADE_OPTIONS),
            Self::SituacaoMoradia => Some(&MORADIA_OPTIONS),
            _ => None,
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

pub fn required_message(field: FormField) -> String {
    format!("Campo '{}' é obrigatório", field.label())
}

pub fn invalid_number_message(field: FormField) -> String {
    format!("Valor inválido no campo '{}'", field.label())
}

/// Validate and convert the form's current values.
///
/// `value` returns the raw text of a field, empty when unset. Nothing is
/// written anywhere; the caller inserts the returned DTO.
pub fn parse_form(value: impl Fn(FormField) -> String) -> Result<CreateInscricao, CoreError> {
    for field in FormField::REQUIRED {
        if value(field).trim().is_empty() {
            return Err(CoreError::Validation(required_message(field)));
        }
    }

    let integer = |field: FormField| {
        value(field)
            .trim()
            .parse::<i64>()
            .map_err(|_| CoreError::Validation(invalid_number_message(field)))
    };
    let currency = |field: FormField| {
        parse_currency(&value(field)).ok_or_else(|| CoreError::Validation(invalid_number_message(field)))
    };
    let optional = |field: FormField| Some(value(field)).filter(|v| !v.trim().is_empty());

    Ok(CreateInscricao {
        nome_completo: value(FormField::NomeCompleto),
        idade: integer(FormField::Idade)?,
        genero: value(FormField::Genero),
        cpf: optional(FormField::Cpf),
        endereco: value(FormField::Endereco),
        telefone: optional(FormField::Telefone),
        email: optional(FormField::Email),
        renda_familiar: currency(FormField::RendaFamiliar)?,
        membros_familia: integer(FormField::MembrosFamilia)?,
        despesas_mensais: currency(FormField::DespesasMensais)?,
        escolaridade: value(FormField::Escolaridade),
        situacao_moradia: value(FormField::SituacaoMoradia),
        observacoes: optional(FormField::Observacoes),
    })
}
