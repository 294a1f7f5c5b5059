mod common;

use assert_matches::assert_matches;
use painel_core::canvas::Canvas;
use painel_core::event::{InputEvent, KeyCode};
use painel_core::geometry::Point;
use painel_db::models::inscricao::{InscricaoStatus, StatusFilter};
use painel_db::repositories::{InscricaoRepo, UsuarioRepo};
use painel_db::{ADMIN_EMAIL, ADMIN_NAME};
use painel_social::app::{Dialog, MSG_NOTHING_TO_EXPORT, MSG_SAVED};
use painel_social::auth::{MSG_BAD_CREDENTIALS, MSG_FILL_ALL, MSG_PASSWORD_SHORT, MSG_REGISTERED};
use painel_social::error::MSG_EMAIL_TAKEN;
use painel_social::form::{required_message, FormField, ESCOLARIDADE_OPTIONS, GENERO_OPTIONS, MORADIA_OPTIONS};
use painel_social::views::{View, WidgetId};
use painel_social::SocialApp;

use common::*;

fn fill_register(app: &mut SocialApp, nome: &str, email: &str, senha: &str, confirma: &str) {
    set_input(app, View::Register, WidgetId::RegisterNome, nome);
    set_input(app, View::Register, WidgetId::RegisterEmail, email);
    set_input(app, View::Register, WidgetId::RegisterSenha, senha);
    set_input(app, View::Register, WidgetId::RegisterConfirma, confirma);
}

fn fill_form(app: &mut SocialApp) {
    let text = [
        (FormField::NomeCompleto, "Maria da Silva"),
        (FormField::Idade, "29"),
        (FormField::Endereco, "Rua A, 1"),
        (FormField::RendaFamiliar, "R$ 1250,75"),
        (FormField::MembrosFamilia, "5"),
        (FormField::DespesasMensais, "980"),
    ];
    for (field, value) in text {
        set_input(app, View::Form, WidgetId::Field(field), value);
    }
    let choices = [
        (FormField::Genero, GENERO_OPTIONS[1]),
        (FormField::Escolaridade, ESCOLARIDADE_OPTIONS[4]),
        (FormField::SituacaoMoradia, MORADIA_OPTIONS[1]),
    ];
    for (field, label) in choices {
        let dropdown = app
            .widgets_mut()
            .dropdown_mut(View::Form, WidgetId::Field(field))
            .unwrap();
        assert!(dropdown.select_label(label));
    }
}

#[tokio::test]
async fn admin_login_opens_dashboard() {
    let mut h = harness().await;
    login_as_admin(&mut h.app).await;

    let session = h.app.session().unwrap();
    assert_eq!(session.email, ADMIN_EMAIL);
    assert_eq!(session.nome, ADMIN_NAME);
    assert_eq!(h.app.counts().total, 0);

    let mut canvas = Canvas::new();
    h.app.draw(&mut canvas);
    assert!(canvas.contains_text("Bem-vindo, Administrador"));
    assert!(canvas.contains_text("Painel de Controle"));
}

#[tokio::test]
async fn bad_credentials_stay_on_login() {
    let mut h = harness().await;
    set_input(&mut h.app, View::Login, WidgetId::LoginEmail, ADMIN_EMAIL);
    set_input(&mut h.app, View::Login, WidgetId::LoginSenha, "wrong-password");
    click(&mut h.app, LOGIN_SUBMIT).await;

    assert_eq!(h.app.view(), View::Login);
    assert!(h.app.session().is_none());
    assert_eq!(h.app.status_text(), Some(MSG_BAD_CREDENTIALS));
}

#[tokio::test]
async fn enter_with_empty_fields_asks_to_fill_them() {
    let mut h = harness().await;
    assert!(h.app.handle_events(&[InputEvent::key(KeyCode::Enter)]).await);

    assert_eq!(h.app.view(), View::Login);
    assert_eq!(h.app.status_text(), Some(MSG_FILL_ALL));
}

#[tokio::test]
async fn register_then_log_in_and_reject_duplicates() {
    let mut h = harness().await;
    click(&mut h.app, GO_TO_REGISTER).await;
    assert_eq!(h.app.view(), View::Register);

    fill_register(&mut h.app, "Joana", "joana@example.org", "12345", "12345");
    click(&mut h.app, REGISTER_SUBMIT).await;
    assert_eq!(h.app.view(), View::Register);
    assert_eq!(h.app.status_text(), Some(MSG_PASSWORD_SHORT));

    fill_register(&mut h.app, "Joana", "joana@example.org", "segredo1", "segredo1");
    click(&mut h.app, REGISTER_SUBMIT).await;
    assert_eq!(h.app.view(), View::Login);
    assert_eq!(h.app.status_text(), Some(MSG_REGISTERED));
    assert_eq!(UsuarioRepo::count(h.app.pool()).await.unwrap(), 2);

    click(&mut h.app, GO_TO_REGISTER).await;
    assert_eq!(
        h.app.widgets().input_text(View::Register, WidgetId::RegisterEmail),
        "",
        "register form is cleared on entry"
    );
    fill_register(&mut h.app, "Outra", "joana@example.org", "segredo2", "segredo2");
    click(&mut h.app, REGISTER_SUBMIT).await;
    assert_eq!(h.app.view(), View::Register);
    assert_eq!(h.app.status_text(), Some(MSG_EMAIL_TAKEN));
    assert_eq!(UsuarioRepo::count(h.app.pool()).await.unwrap(), 2);

    click(&mut h.app, Point::new(600.0, 535.0)).await;
    assert_eq!(h.app.view(), View::Login);
    set_input(&mut h.app, View::Login, WidgetId::LoginEmail, "joana@example.org");
    set_input(&mut h.app, View::Login, WidgetId::LoginSenha, "segredo1");
    click(&mut h.app, LOGIN_SUBMIT).await;
    assert_eq!(h.app.view(), View::Dashboard);
}

#[tokio::test]
async fn saving_the_form_creates_a_pending_inscricao() {
    let mut h = harness().await;
    login_as_admin(&mut h.app).await;
    click(&mut h.app, NAV_FORM).await;
    assert_eq!(h.app.view(), View::Form);

    fill_form(&mut h.app);
    click(&mut h.app, SAVE_FORM).await;

    assert_eq!(h.app.view(), View::Dashboard);
    assert_eq!(h.app.status_text(), Some(MSG_SAVED));
    assert_eq!(h.app.counts().total, 1);
    assert_eq!(h.app.counts().pendentes, 1);

    let rows = InscricaoRepo::list_all(h.app.pool()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].nome_completo, "Maria da Silva");
    assert_eq!(rows[0].renda_familiar, 1250.75);
    assert_eq!(rows[0].genero, GENERO_OPTIONS[1]);
    assert_eq!(rows[0].cpf, None);
    assert_eq!(rows[0].status(), Some(InscricaoStatus::Pendente));

    click(&mut h.app, NAV_FORM).await;
    assert_eq!(h.app.field_value(FormField::NomeCompleto), "");
    assert_eq!(h.app.field_value(FormField::Genero), "");
}

#[tokio::test]
async fn incomplete_form_reports_first_missing_field() {
    let mut h = harness().await;
    login_as_admin(&mut h.app).await;
    click(&mut h.app, NAV_FORM).await;

    fill_form(&mut h.app);
    set_input(&mut h.app, View::Form, WidgetId::Field(FormField::Endereco), "  ");
    click(&mut h.app, SAVE_FORM).await;

    assert_eq!(h.app.view(), View::Form);
    let expected = required_message(FormField::Endereco);
    assert_eq!(h.app.status_text(), Some(expected.as_str()));
    assert!(InscricaoRepo::list_all(h.app.pool()).await.unwrap().is_empty());
}

#[tokio::test]
async fn status_changes_are_recorded_and_filterable() {
    let mut h = harness().await;
    let first = InscricaoRepo::create(h.app.pool(), &new_inscricao("Carlos Lima")).await.unwrap();
    InscricaoRepo::create(h.app.pool(), &new_inscricao("Beatriz Rocha")).await.unwrap();

    login_as_admin(&mut h.app).await;
    click(&mut h.app, NAV_LIST).await;
    assert_eq!(h.app.view(), View::List);
    assert_eq!(h.app.inscricoes().len(), 2);

    h.app.change_status(first.id, InscricaoStatus::Aprovada).await;
    assert_eq!(h.app.status_text(), Some("Status atualizado para: Aprovada"));

    let admin = UsuarioRepo::find_by_email(h.app.pool(), ADMIN_EMAIL).await.unwrap().unwrap();
    let history = InscricaoRepo::status_history(h.app.pool(), first.id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status_anterior, "Pendente");
    assert_eq!(history[0].status_novo, "Aprovada");
    assert_eq!(history[0].alterado_por, Some(admin.id));

    h.app.set_filter(StatusFilter::Only(InscricaoStatus::Aprovada)).await;
    assert_eq!(h.app.inscricoes().len(), 1);
    assert_eq!(h.app.inscricoes()[0].id, first.id);

    h.app.set_filter(StatusFilter::Only(InscricaoStatus::Rejeitada)).await;
    assert!(h.app.inscricoes().is_empty());
    let mut canvas = Canvas::new();
    h.app.draw(&mut canvas);
    assert!(canvas.contains_text("Nenhuma inscrição encontrada"));

    click(&mut h.app, BACK).await;
    click(&mut h.app, NAV_LIST).await;
    assert_eq!(h.app.filter(), StatusFilter::Todos);
    assert_eq!(h.app.inscricoes().len(), 2);
}

#[tokio::test]
async fn row_and_filter_dropdowns_drive_status_changes() {
    let mut h = harness().await;
    InscricaoRepo::create(h.app.pool(), &new_inscricao("Carlos Lima")).await.unwrap();
    let newest = InscricaoRepo::create(h.app.pool(), &new_inscricao("Beatriz Rocha")).await.unwrap();
    login_as_admin(&mut h.app).await;
    click(&mut h.app, NAV_LIST).await;
    assert_eq!(h.app.visible_rows()[0].id, newest.id);

    click(&mut h.app, ROW0_STATUS).await;
    let rejeitada = InscricaoStatus::Rejeitada.index();
    click(&mut h.app, row0_status_option(rejeitada)).await;

    assert_eq!(h.app.status_text(), Some("Status atualizado para: Rejeitada"));
    let stored = InscricaoRepo::find_by_id(h.app.pool(), newest.id).await.unwrap().unwrap();
    assert_eq!(stored.status(), Some(InscricaoStatus::Rejeitada));
    let row_status = h.app.widgets().dropdown(View::List, WidgetId::RowStatus(0)).unwrap();
    assert_eq!(row_status.selected_label(), Some("Rejeitada"));

    let label = StatusFilter::LABELS.iter().position(|l| *l == "Rejeitada").unwrap();
    click(&mut h.app, STATUS_FILTER).await;
    click(&mut h.app, filter_option(label)).await;

    assert_eq!(h.app.filter(), StatusFilter::Only(InscricaoStatus::Rejeitada));
    assert_eq!(h.app.inscricoes().len(), 1);
    assert_eq!(h.app.inscricoes()[0].id, newest.id);
}

#[tokio::test]
async fn list_pages_through_rows() {
    let mut h = harness().await;
    for i in 0..6 {
        InscricaoRepo::create(h.app.pool(), &new_inscricao(&format!("Pessoa {i}")))
            .await
            .unwrap();
    }
    login_as_admin(&mut h.app).await;
    click(&mut h.app, NAV_LIST).await;

    assert_eq!(h.app.page_count(), 2);
    assert_eq!(h.app.visible_rows().len(), 4);
    assert_eq!(h.app.visible_rows()[0].nome_completo, "Pessoa 5");

    click(&mut h.app, NEXT_PAGE).await;
    assert_eq!(h.app.page(), 1);
    assert_eq!(h.app.visible_rows().len(), 2);
    assert!(h.app.widgets().button(View::List, WidgetId::RowDetails(1)).is_some());
    assert!(h.app.widgets().button(View::List, WidgetId::RowDetails(2)).is_none());

    click(&mut h.app, NEXT_PAGE).await;
    assert_eq!(h.app.page(), 1);
}

#[tokio::test]
async fn details_dialog_is_modal_until_closed() {
    let mut h = harness().await;
    let row = InscricaoRepo::create(h.app.pool(), &new_inscricao("Daniela Alves")).await.unwrap();
    login_as_admin(&mut h.app).await;
    click(&mut h.app, NAV_LIST).await;

    click(&mut h.app, ROW0_DETAILS).await;
    assert_matches!(h.app.dialog(), Some(Dialog::Details(d)) if d.id == row.id);

    let mut canvas = Canvas::new();
    h.app.draw(&mut canvas);
    assert!(canvas.contains_text("CPF: 123.456.789-00"));
    assert!(canvas.contains_text("Telefone: Não informado"));

    click(&mut h.app, BACK).await;
    assert_eq!(h.app.view(), View::List);
    assert!(h.app.dialog().is_some());

    click(&mut h.app, CLOSE_DIALOG).await;
    assert!(h.app.dialog().is_none());
}

#[tokio::test]
async fn reports_view_opens_statistics_dialogs() {
    let mut h = harness().await;
    let row = InscricaoRepo::create(h.app.pool(), &new_inscricao("Eduardo Reis")).await.unwrap();
    InscricaoRepo::create(h.app.pool(), &new_inscricao("Fernanda Dias")).await.unwrap();
    InscricaoRepo::update_status(h.app.pool(), row.id, InscricaoStatus::Rejeitada, None)
        .await
        .unwrap();

    login_as_admin(&mut h.app).await;
    click(&mut h.app, NAV_REPORTS).await;
    assert_eq!(h.app.view(), View::Reports);
    assert_eq!(h.app.detailed().counts.total, 2);

    click(&mut h.app, REPORT_BY_STATUS).await;
    assert_matches!(h.app.dialog(), Some(Dialog::StatusReport(c)) if c.rejeitadas == 1);
    let mut canvas = Canvas::new();
    h.app.draw(&mut canvas);
    assert!(canvas.contains_text("Rejeitada: 1 (50.0%)"));
    click(&mut h.app, CLOSE_DIALOG).await;

    click(&mut h.app, REPORT_DETAILED).await;
    assert_matches!(h.app.dialog(), Some(Dialog::DetailedStats(s)) if s.media_membros == 3.0);
    let mut canvas = Canvas::new();
    h.app.draw(&mut canvas);
    assert!(canvas.contains_text("Renda Familiar Média: R$ 2100.00"));
}

#[tokio::test]
async fn row_pdf_and_full_export_write_files() {
    let mut h = harness().await;
    let row = InscricaoRepo::create(h.app.pool(), &new_inscricao("Gabriel Nunes")).await.unwrap();
    login_as_admin(&mut h.app).await;
    click(&mut h.app, NAV_LIST).await;

    click(&mut h.app, ROW0_PDF).await;
    let ficha = h.dir.path().join("pdfs").join(format!("inscricao_{}_Gabriel_Nunes.pdf", row.id));
    let bytes = std::fs::read(&ficha).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(h.app.status_text().unwrap().starts_with("PDF gerado: "));

    let report = h.app.export_all().await.unwrap();
    assert!(report
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("relatorio_completo_"));
    assert!(std::fs::read(&report).unwrap().starts_with(b"%PDF"));
    assert!(h.app.status_text().unwrap().starts_with("Relatório exportado: "));
}

#[tokio::test]
async fn exporting_nothing_writes_nothing() {
    let mut h = harness().await;
    login_as_admin(&mut h.app).await;

    assert_eq!(h.app.export_all().await, None);
    assert_eq!(h.app.status_text(), Some(MSG_NOTHING_TO_EXPORT));
    assert!(!h.dir.path().join("pdfs").exists());
}

#[tokio::test]
async fn logout_returns_to_login() {
    let mut h = harness().await;
    login_as_admin(&mut h.app).await;
    click(&mut h.app, LOGOUT).await;

    assert_eq!(h.app.view(), View::Login);
    assert!(h.app.session().is_none());
    assert_eq!(h.app.widgets().input_text(View::Login, WidgetId::LoginSenha), "");
}

#[tokio::test]
async fn quit_ends_the_loop() {
    let mut h = harness().await;
    assert!(!h.app.handle_events(&[InputEvent::Quit]).await);
}
