//! View controller for the social program panel.
//!
//! [`SocialApp`] owns the current [`View`], an optional modal [`Dialog`],
//! the logged-in [`Session`] and every widget. Data is fetched when a view
//! is entered and after each mutation; nothing is cached beyond that.

use std::path::{Path, PathBuf};

use chrono::Local;
use painel_core::error::CoreError;
use painel_core::event::{InputEvent, KeyCode, PointerTracker};
use painel_core::geometry::Size;
use painel_core::status::{StatusLine, StatusMessage, Tone};
use painel_core::theme::Theme;
use painel_core::types::DbId;
use painel_core::widgets::{Button, InputAction, Widget, WidgetOutcome};
use painel_db::models::inscricao::{
    DetailedStatistics, Inscricao, InscricaoStatus, StatusCounts, StatusFilter,
};
use painel_db::repositories::InscricaoRepo;
use painel_db::DbPool;

use crate::auth::{self, Session, MSG_REGISTERED};
use crate::error::{AppError, MSG_NOT_FOUND};
use crate::form::{parse_form, FormField};
use crate::pdf::write_report;
use crate::reports::{ficha, ficha_path, relatorio_completo, relatorio_path};
use crate::views::{build_widgets, close_button, page_size, register_rows, View, WidgetId, Widgets};

pub const MSG_SAVED: &str = "Inscrição salva com sucesso!";
pub const MSG_LIST_REFRESHED: &str = "Lista atualizada";
pub const MSG_NOTHING_TO_EXPORT: &str = "Nenhuma inscrição para exportar";
pub const MSG_EMPTY_LIST: &str = "Nenhuma inscrição encontrada";

/// Modal overlay on top of the current view, closed by "Fechar".
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Details(Box<Inscricao>),
    StatusReport(StatusCounts),
    DetailedStats(DetailedStatistics),
}

pub struct SocialApp {
    pub(crate) pool: DbPool,
    pub(crate) pdf_dir: PathBuf,
    pub(crate) size: Size,
    pub(crate) theme: Theme,
    pub(crate) view: View,
    pub(crate) dialog: Option<Dialog>,
    pub(crate) close_button: Button,
    pub(crate) session: Option<Session>,
    pub(crate) widgets: Widgets,
    pub(crate) counts: StatusCounts,
    pub(crate) detailed: DetailedStatistics,
    pub(crate) inscricoes: Vec<Inscricao>,
    pub(crate) filter: StatusFilter,
    pub(crate) page: usize,
    pub(crate) status: StatusLine,
    pointer: PointerTracker,
}

/// The slice of `rows` shown on `page`.
pub(crate) fn page_slice(rows: &[Inscricao], page: usize, per_page: usize) -> &[Inscricao] {
    let start = (page * per_page).min(rows.len());
    let end = (start + per_page).min(rows.len());
    &rows[start..end]
}

impl SocialApp {
    pub fn new(pool: DbPool, pdf_dir: impl Into<PathBuf>, size: Size) -> Self {
        let theme = Theme::LIGHT;
        Self {
            pool,
            pdf_dir: pdf_dir.into(),
            size,
            theme,
            view: View::Login,
            dialog: None,
            close_button: close_button(size, theme),
            session: None,
            widgets: build_widgets(size, theme),
            counts: StatusCounts::default(),
            detailed: DetailedStatistics::default(),
            inscricoes: Vec::new(),
            filter: StatusFilter::Todos,
            page: 0,
            status: StatusLine::default(),
            pointer: PointerTracker::default(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn pdf_dir(&self) -> &Path {
        &self.pdf_dir
    }

    pub fn counts(&self) -> StatusCounts {
        self.counts
    }

    pub fn detailed(&self) -> DetailedStatistics {
        self.detailed
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn inscricoes(&self) -> &[Inscricao] {
        &self.inscricoes
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.inscricoes.len().div_ceil(page_size(self.size)).max(1)
    }

    pub fn visible_rows(&self) -> &[Inscricao] {
        page_slice(&self.inscricoes, self.page, page_size(self.size))
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.text()
    }

    pub fn widgets(&self) -> &Widgets {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut Widgets {
        &mut self.widgets
    }

    /// Consume one frame's events. Returns `false` on a quit request.
    pub async fn handle_events(&mut self, events: &[InputEvent]) -> bool {
        for event in events {
            if matches!(event, InputEvent::Quit) {
                return false;
            }
            let pointer = self.pointer.observe(event);

            if self.dialog.is_some() {
                let escape = matches!(event, InputEvent::Key(k) if k.code == KeyCode::Escape);
                if self.close_button.handle_event(event, pointer) || escape {
                    self.close_dialog();
                }
                continue;
            }

            let view = self.view;
            let outcomes = self.widgets.dispatch(view, event, pointer);
            for (id, outcome) in outcomes {
                if self.view != view || self.dialog.is_some() {
                    break;
                }
                self.on_outcome(id, outcome).await;
            }
        }
        true
    }

    async fn on_outcome(&mut self, id: WidgetId, outcome: WidgetOutcome) {
        use WidgetOutcome::{Clicked, Input, Selected};

        match (self.view, id, outcome) {
            (view, _, Input(InputAction::Tab)) => self.widgets.focus_next(view),

            (View::Login, _, Input(InputAction::Enter)) | (View::Login, WidgetId::LoginSubmit, Clicked) => {
                self.submit_login().await;
            }
            (View::Login, WidgetId::GoToRegister, Clicked) => self.show(View::Register).await,

            (View::Register, _, Input(InputAction::Enter))
            | (View::Register, WidgetId::RegisterSubmit, Clicked) => self.submit_register().await,
            (View::Register, WidgetId::RegisterBack, Clicked) => self.show(View::Login).await,

            (View::Dashboard, WidgetId::Logout, Clicked) => self.logout().await,
            (View::Dashboard, WidgetId::NavForm, Clicked) => self.show(View::Form).await,
            (View::Dashboard, WidgetId::NavList, Clicked) => self.show(View::List).await,
            (View::Dashboard, WidgetId::NavReports, Clicked) => self.show(View::Reports).await,
            (View::Form | View::List | View::Reports, WidgetId::Back, Clicked) => {
                self.show(View::Dashboard).await;
            }

            (View::Form, WidgetId::SaveForm, Clicked) => self.save_inscricao().await,
            (View::Form, WidgetId::ClearForm, Clicked) => self.clear_form(),

            (View::List, WidgetId::StatusFilter, Selected(index)) => {
                let filter = StatusFilter::LABELS
                    .get(index)
                    .and_then(|label| StatusFilter::from_label(label))
                    .unwrap_or_default();
                self.set_filter(filter).await;
            }
            (View::List, WidgetId::Refresh, Clicked) => self.refresh().await,
            (View::List, WidgetId::ExportAll, Clicked) | (View::Reports, WidgetId::ReportExport, Clicked) => {
                self.export_all().await;
            }
            (View::List, WidgetId::PrevPage, Clicked) => self.go_to_page(self.page.saturating_sub(1)),
            (View::List, WidgetId::NextPage, Clicked) => self.go_to_page(self.page + 1),
            (View::List, WidgetId::RowDetails(slot), Clicked) => {
                if let Some(id) = self.row_id(slot) {
                    self.open_details(id).await;
                }
            }
            (View::List, WidgetId::RowPdf(slot), Clicked) => {
                if let Some(id) = self.row_id(slot) {
                    self.generate_pdf(id).await;
                }
            }
            (View::List, WidgetId::RowStatus(slot), Selected(index)) => {
                if let (Some(id), Some(status)) = (self.row_id(slot), InscricaoStatus::ALL.get(index)) {
                    self.change_status(id, *status).await;
                }
            }

            (View::Reports, WidgetId::ReportByStatus, Clicked) => self.open_status_report().await,
            (View::Reports, WidgetId::ReportDetailed, Clicked) => self.open_detailed_stats().await,

            _ => {}
        }
    }

    /// Show an error in the status bar. With an `action`, database and file
    /// failures are prefixed by it; validation and report messages stand alone.
    fn fail(&mut self, action: Option<&str>, err: AppError) {
        tracing::warn!(error = %err, action, "Action failed");
        let message = match (action, &err) {
            (Some(action), AppError::Database(_) | AppError::Io(_)) => {
                format!("{action}: {}", err.user_message())
            }
            _ => err.user_message(),
        };
        self.status.show(StatusMessage::error(message));
    }

    /// Enter `view`, loading whatever it displays.
    pub async fn show(&mut self, view: View) {
        self.dialog = None;
        match view {
            View::Login => self.widgets.clear_inputs(View::Login),
            View::Register => self.widgets.clear_inputs(View::Register),
            View::Form => self.widgets.clear_inputs(View::Form),
            View::Dashboard => match InscricaoRepo::statistics(&self.pool).await {
                Ok(counts) => self.counts = counts,
                Err(e) => self.fail(Some("Erro ao carregar dashboard"), e.into()),
            },
            View::List => {
                self.filter = StatusFilter::Todos;
                if let Some(dropdown) = self.widgets.dropdown_mut(View::List, WidgetId::StatusFilter) {
                    dropdown.set_selected(Some(0));
                }
                self.page = 0;
                self.load_list().await;
            }
            View::Reports => match InscricaoRepo::detailed_statistics(&self.pool).await {
                Ok(detailed) => self.detailed = detailed,
                Err(e) => self.fail(Some("Erro ao carregar estatísticas"), e.into()),
            },
        }
        tracing::debug!(?view, "View entered");
        self.view = view;
    }

    pub async fn submit_login(&mut self) {
        let email = self.widgets.input_text(View::Login, WidgetId::LoginEmail).to_string();
        let senha = self.widgets.input_text(View::Login, WidgetId::LoginSenha).to_string();
        match auth::login(&self.pool, &email, &senha).await {
            Ok(session) => {
                self.session = Some(session);
                self.show(View::Dashboard).await;
            }
            Err(e) => self.fail(None, e),
        }
    }

    pub async fn submit_register(&mut self) {
        let text = |id| self.widgets.input_text(View::Register, id).to_string();
        let nome = text(WidgetId::RegisterNome);
        let email = text(WidgetId::RegisterEmail);
        let senha = text(WidgetId::RegisterSenha);
        let confirma = text(WidgetId::RegisterConfirma);

        match auth::register(&self.pool, &nome, &email, &senha, &confirma).await {
            Ok(_) => {
                self.show(View::Login).await;
                self.status.show(StatusMessage::success(MSG_REGISTERED));
            }
            Err(e) => self.fail(None, e),
        }
    }

    pub async fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(usuario_id = session.usuario_id, "Administrator logged out");
        }
        self.show(View::Login).await;
    }

    /// Current raw value of a form field; empty when unset.
    pub fn field_value(&self, field: FormField) -> String {
        let id = WidgetId::Field(field);
        match field.options() {
            Some(_) => self
                .widgets
                .dropdown(View::Form, id)
                .and_then(|d| d.selected_label())
                .unwrap_or_default()
                .to_string(),
            None => self.widgets.input_text(View::Form, id).to_string(),
        }
    }

    pub fn clear_form(&mut self) {
        self.widgets.clear_inputs(View::Form);
    }

    pub async fn save_inscricao(&mut self) {
        let input = match parse_form(|field| self.field_value(field)) {
            Ok(input) => input,
            Err(e) => return self.fail(Some("Erro ao salvar"), e.into()),
        };
        match InscricaoRepo::create(&self.pool, &input).await {
            Ok(inscricao) => {
                tracing::info!(inscricao_id = inscricao.id, "Inscrição saved");
                self.clear_form();
                self.show(View::Dashboard).await;
                self.status.show(StatusMessage::success(MSG_SAVED));
            }
            Err(e) => self.fail(Some("Erro ao salvar"), e.into()),
        }
    }

    async fn load_list(&mut self) {
        match InscricaoRepo::list(&self.pool, self.filter).await {
            Ok(rows) => self.inscricoes = rows,
            Err(e) => {
                self.inscricoes.clear();
                self.fail(Some("Erro ao carregar inscrições"), e.into());
            }
        }
        self.page = self.page.min(self.page_count() - 1);
        self.sync_rows();
        tracing::debug!(count = self.inscricoes.len(), filter = self.filter.label(), "Inscrições loaded");
    }

    fn sync_rows(&mut self) {
        let rows = page_slice(&self.inscricoes, self.page, page_size(self.size));
        register_rows(&mut self.widgets, self.size, self.theme, rows);
    }

    fn row_id(&self, slot: usize) -> Option<DbId> {
        self.visible_rows().get(slot).map(|i| i.id)
    }

    pub async fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.page = 0;
        self.load_list().await;
    }

    pub async fn refresh(&mut self) {
        self.load_list().await;
        self.status.show(StatusMessage::info(MSG_LIST_REFRESHED));
    }

    pub fn go_to_page(&mut self, page: usize) {
        let page = page.min(self.page_count() - 1);
        if page != self.page {
            self.page = page;
            self.sync_rows();
        }
    }

    /// Move an inscrição to `status`, recording who changed it, and reload
    /// the list under the current filter.
    pub async fn change_status(&mut self, id: DbId, status: InscricaoStatus) {
        let alterado_por = self.session.as_ref().map(|s| s.usuario_id);
        match InscricaoRepo::update_status(&self.pool, id, status, alterado_por).await {
            Ok(Some(_)) => {
                self.status
                    .show(StatusMessage::success(format!("Status atualizado para: {status}")));
            }
            Ok(None) => self.status.show(StatusMessage::error(MSG_NOT_FOUND)),
            Err(e) => self.fail(Some("Erro ao atualizar status"), e.into()),
        }
        self.load_list().await;
    }

    async fn find(&self, id: DbId) -> Result<Inscricao, AppError> {
        InscricaoRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: "Inscricao", id }.into())
    }

    pub async fn open_details(&mut self, id: DbId) {
        match self.find(id).await {
            Ok(inscricao) => self.dialog = Some(Dialog::Details(Box::new(inscricao))),
            Err(e) => self.fail(Some("Erro ao exibir detalhes"), e),
        }
    }

    pub async fn open_status_report(&mut self) {
        match InscricaoRepo::statistics(&self.pool).await {
            Ok(counts) => self.dialog = Some(Dialog::StatusReport(counts)),
            Err(e) => self.fail(Some("Erro ao gerar relatório"), e.into()),
        }
    }

    pub async fn open_detailed_stats(&mut self) {
        match InscricaoRepo::detailed_statistics(&self.pool).await {
            Ok(detailed) => self.dialog = Some(Dialog::DetailedStats(detailed)),
            Err(e) => self.fail(Some("Erro ao gerar estatísticas"), e.into()),
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Write the single-record sheet for `id`. Returns the file written.
    pub async fn generate_pdf(&mut self, id: DbId) -> Option<PathBuf> {
        let result = async {
            let inscricao = self.find(id).await?;
            let path = ficha_path(&self.pdf_dir, &inscricao);
            write_report(&ficha(&inscricao, Local::now().naive_local()), &path)?;
            Ok::<_, AppError>(path)
        }
        .await;

        match result {
            Ok(path) => {
                self.status
                    .show(StatusMessage::success(format!("PDF gerado: {}", path.display())));
                Some(path)
            }
            Err(e) => {
                self.fail(Some("Erro ao gerar PDF"), e);
                None
            }
        }
    }

    /// Write the aggregate report of every inscrição, newest first.
    pub async fn export_all(&mut self) -> Option<PathBuf> {
        let inscricoes = match InscricaoRepo::list_all(&self.pool).await {
            Ok(rows) => rows,
            Err(e) => {
                self.fail(Some("Erro ao exportar relatório"), e.into());
                return None;
            }
        };
        if inscricoes.is_empty() {
            self.status
                .show(StatusMessage::new(MSG_NOTHING_TO_EXPORT, Tone::Warning));
            return None;
        }

        let now = Local::now().naive_local();
        let path = relatorio_path(&self.pdf_dir, now);
        match write_report(&relatorio_completo(&inscricoes, now), &path) {
            Ok(()) => {
                self.status.show(StatusMessage::success(format!(
                    "Relatório exportado: {}",
                    path.display()
                )));
                Some(path)
            }
            Err(e) => {
                self.fail(Some("Erro ao exportar relatório"), e.into());
                None
            }
        }
    }

    /// Advance widget animations and the status bar.
    pub fn update(&mut self, dt: f32) {
        self.widgets.update(self.view, dt);
        if self.dialog.is_some() {
            self.close_button.update(dt);
        }
        self.status.update(dt);
    }
}
