//! Views, widget ids and their layout.

use painel_core::geometry::{Rect, Size};
use painel_core::registry::WidgetRegistry;
use painel_core::theme::{ButtonStyle, Theme};
use painel_core::widgets::{Button, Dropdown, InputBox};
use painel_db::models::inscricao::{Inscricao, InscricaoStatus, StatusFilter};

use crate::form::FormField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Register,
    Dashboard,
    Form,
    List,
    Reports,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetId {
    LoginEmail,
    LoginSenha,
    LoginSubmit,
    GoToRegister,
    RegisterNome,
    RegisterEmail,
    RegisterSenha,
    RegisterConfirma,
    RegisterSubmit,
    RegisterBack,
    Logout,
    NavForm,
    NavList,
    NavReports,
    /// Header back arrow on the inner views.
    Back,
    Field(FormField),
    SaveForm,
    ClearForm,
    StatusFilter,
    Refresh,
    ExportAll,
    PrevPage,
    NextPage,
    /// Per-row controls, by position on the current page.
    RowDetails(usize),
    RowPdf(usize),
    RowStatus(usize),
    ReportExport,
    ReportByStatus,
    ReportDetailed,
}

impl WidgetId {
    pub fn is_row(self) -> bool {
        matches!(self, Self::RowDetails(_) | Self::RowPdf(_) | Self::RowStatus(_))
    }
}

pub type Widgets = WidgetRegistry<View, WidgetId>;

pub const LIST_TOP: f32 = 170.0;
pub const ROW_HEIGHT: f32 = 130.0;
pub const CARD_HEIGHT: f32 = 120.0;
const PAGER_SPACE: f32 = 70.0;

/// Rows that fit between the list header and the pager.
pub fn page_size(size: Size) -> usize {
    let room = size.height as f32 - LIST_TOP - PAGER_SPACE;
    ((room / ROW_HEIGHT).floor() as usize).max(1)
}

pub fn row_rect(size: Size, slot: usize) -> Rect {
    let y = LIST_TOP + slot as f32 * ROW_HEIGHT;
    Rect::new(40.0, y, size.width as f32 - 80.0, CARD_HEIGHT)
}

/// Top-left of the four statistic cards, centred on the window.
pub fn stat_card_rects(size: Size, y: f32) -> [Rect; 4] {
    let (width, gap) = (180.0, 20.0);
    let x0 = size.width as f32 / 2.0 - (4.0 * width + 3.0 * gap) / 2.0;
    std::array::from_fn(|i| Rect::new(x0 + i as f32 * (width + gap), y, width, 90.0))
}

pub fn dialog_rect(size: Size) -> Rect {
    let cx = size.width as f32 / 2.0;
    Rect::new(cx - 300.0, 80.0, 600.0, size.height as f32 - 160.0)
}

pub fn close_button(size: Size, theme: Theme) -> Button {
    let dialog = dialog_rect(size);
    Button::new(
        Rect::new(dialog.right() - 140.0, dialog.bottom() - 60.0, 120.0, 40.0),
        "Fechar",
        ButtonStyle::Secondary,
    )
    .with_theme(theme)
}

/// Where each form field sits, in the order the form reads.
pub fn field_rect(field: FormField) -> Rect {
    let (x, y, width) = match field {
        FormField::NomeCompleto => (40.0, 135.0, 400.0),
        FormField::Idade => (40.0, 200.0, 200.0),
        FormField::Genero => (260.0, 200.0, 200.0),
        FormField::Cpf => (480.0, 200.0, 200.0),
        FormField::Endereco => (40.0, 265.0, 400.0),
        FormField::Telefone => (40.0, 330.0, 200.0),
        FormField::Email => (260.0, 330.0, 300.0),
        FormField::RendaFamiliar => (40.0, 430.0, 200.0),
        FormField::MembrosFamilia => (260.0, 430.0, 200.0),
        FormField::DespesasMensais => (480.0, 430.0, 200.0),
        FormField::Escolaridade => (40.0, 495.0, 250.0),
        FormField::SituacaoMoradia => (310.0, 495.0, 250.0),
        FormField::Observacoes => (40.0, 560.0, 400.0),
    };
    Rect::new(x, y, width, 40.0)
}

/// Build the fixed widgets of every view. List rows are added per page by
/// [`register_rows`].
pub fn build_widgets(size: Size, theme: Theme) -> Widgets {
    let w = size.width as f32;
    let h = size.height as f32;
    let cx = w / 2.0;
    let mut reg = Widgets::new();

    let button = |rect: Rect, label: &str, style: ButtonStyle| Button::new(rect, label, style).with_theme(theme);
    let input = |y: f32, placeholder: &str| InputBox::new(Rect::new(cx - 150.0, y, 300.0, 44.0), placeholder).with_theme(theme);

    reg.register(View::Login, WidgetId::LoginEmail, input(260.0, "Email").with_focus());
    reg.register(View::Login, WidgetId::LoginSenha, input(320.0, "Senha").password());
    reg.register(
        View::Login,
        WidgetId::LoginSubmit,
        button(Rect::new(cx - 150.0, 390.0, 300.0, 50.0), "Entrar", ButtonStyle::Primary),
    );
    reg.register(
        View::Login,
        WidgetId::GoToRegister,
        button(Rect::new(cx - 150.0, 455.0, 300.0, 40.0), "Criar nova conta", ButtonStyle::Secondary),
    );

    reg.register(View::Register, WidgetId::RegisterNome, input(200.0, "Nome Completo"));
    reg.register(View::Register, WidgetId::RegisterEmail, input(260.0, "Email"));
    reg.register(View::Register, WidgetId::RegisterSenha, input(320.0, "Senha").password());
    reg.register(
        View::Register,
        WidgetId::RegisterConfirma,
        input(380.0, "Confirmar Senha").password(),
    );
    reg.register(
        View::Register,
        WidgetId::RegisterSubmit,
        button(Rect::new(cx - 150.0, 450.0, 300.0, 50.0), "Cadastrar", ButtonStyle::Success),
    );
    reg.register(
        View::Register,
        WidgetId::RegisterBack,
        button(Rect::new(cx - 150.0, 515.0, 300.0, 40.0), "Voltar ao Login", ButtonStyle::Secondary),
    );

    reg.register(
        View::Dashboard,
        WidgetId::Logout,
        button(Rect::new(w - 160.0, 45.0, 100.0, 40.0), "Sair", ButtonStyle::Danger),
    );
    let nav = [
        (WidgetId::NavForm, "Nova Inscrição"),
        (WidgetId::NavList, "Gerenciar Inscrições"),
        (WidgetId::NavReports, "Relatórios"),
    ];
    let (nav_width, nav_gap) = (240.0, 30.0);
    let nav_x0 = cx - (3.0 * nav_width + 2.0 * nav_gap) / 2.0;
    for (i, (id, label)) in nav.into_iter().enumerate() {
        let rect = Rect::new(nav_x0 + i as f32 * (nav_width + nav_gap), 320.0, nav_width, 120.0);
        reg.register(View::Dashboard, id, button(rect, label, ButtonStyle::Secondary));
    }

    for view in [View::Form, View::List, View::Reports] {
        reg.register(
            view,
            WidgetId::Back,
            button(Rect::new(40.0, 30.0, 120.0, 40.0), "< Voltar", ButtonStyle::Secondary),
        );
    }

    for field in FormField::ALL {
        let rect = field_rect(field);
        let id = WidgetId::Field(field);
        match field.options() {
            Some(options) => reg.register(
                View::Form,
                id,
                Dropdown::new(rect, field.label(), options.iter().copied()).with_theme(theme),
            ),
            None => reg.register(View::Form, id, InputBox::new(rect, field.label()).with_theme(theme)),
        }
    }
    reg.register(
        View::Form,
        WidgetId::SaveForm,
        button(Rect::new(40.0, 630.0, 200.0, 50.0), "Salvar Inscrição", ButtonStyle::Success),
    );
    reg.register(
        View::Form,
        WidgetId::ClearForm,
        button(Rect::new(260.0, 630.0, 200.0, 50.0), "Limpar Formulário", ButtonStyle::Secondary),
    );

    reg.register(
        View::List,
        WidgetId::Refresh,
        button(Rect::new(w - 160.0, 30.0, 120.0, 40.0), "Atualizar", ButtonStyle::Primary),
    );
    reg.register(
        View::List,
        WidgetId::StatusFilter,
        Dropdown::new(
            Rect::new(40.0, 100.0, 200.0, 40.0),
            "Filtrar por Status",
            StatusFilter::LABELS,
        )
        .with_selected(0)
        .with_theme(theme),
    );
    reg.register(
        View::List,
        WidgetId::ExportAll,
        button(Rect::new(260.0, 100.0, 240.0, 40.0), "Exportar Todas (PDF)", ButtonStyle::Danger),
    );
    reg.register(
        View::List,
        WidgetId::PrevPage,
        button(Rect::new(40.0, h - 60.0, 140.0, 40.0), "< Anterior", ButtonStyle::Secondary),
    );
    reg.register(
        View::List,
        WidgetId::NextPage,
        button(Rect::new(w - 180.0, h - 60.0, 140.0, 40.0), "Próxima >", ButtonStyle::Secondary),
    );

    let reports = [
        (WidgetId::ReportExport, "Exportar Relatório Completo", ButtonStyle::Danger, 310.0),
        (WidgetId::ReportByStatus, "Relatório por Status", ButtonStyle::Primary, 375.0),
        (WidgetId::ReportDetailed, "Estatísticas Detalhadas", ButtonStyle::Primary, 440.0),
    ];
    for (id, label, style, y) in reports {
        reg.register(
            View::Reports,
            id,
            button(Rect::new(cx - 150.0, y, 300.0, 50.0), label, style),
        );
    }

    reg
}

/// Replace the list's per-row widgets with controls for `rows`.
pub fn register_rows(reg: &mut Widgets, size: Size, theme: Theme, rows: &[Inscricao]) {
    reg.remove_where(View::List, |id| id.is_row());
    for (slot, inscricao) in rows.iter().enumerate() {
        let card = row_rect(size, slot);
        let y = card.y + 85.0;
        reg.register(
            View::List,
            WidgetId::RowDetails(slot),
            Button::new(Rect::new(60.0, y, 150.0, 30.0), "Ver Detalhes", ButtonStyle::Primary).with_theme(theme),
        );
        reg.register(
            View::List,
            WidgetId::RowPdf(slot),
            Button::new(Rect::new(220.0, y, 130.0, 30.0), "Gerar PDF", ButtonStyle::Danger).with_theme(theme),
        );
        let mut status = Dropdown::new(
            Rect::new(360.0, y, 140.0, 30.0),
            "Status",
            InscricaoStatus::ALL.map(InscricaoStatus::as_str),
        )
        .with_theme(theme);
        if let Some(current) = inscricao.status() {
            status = status.with_selected(current.index());
        }
        reg.register(View::List, WidgetId::RowStatus(slot), status);
    }
}
