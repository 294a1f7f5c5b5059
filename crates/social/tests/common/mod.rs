use painel_core::event::InputEvent;
use painel_core::geometry::{Point, Size};
use painel_db::models::inscricao::CreateInscricao;
use painel_db::{DbPool, ADMIN_EMAIL, ADMIN_PASSWORD};
use painel_social::views::{View, WidgetId};
use painel_social::SocialApp;

// Widget centres for a 1200x800 window.
pub const LOGIN_SUBMIT: Point = Point::new(600.0, 415.0);
pub const GO_TO_REGISTER: Point = Point::new(600.0, 475.0);
pub const REGISTER_SUBMIT: Point = Point::new(600.0, 475.0);
pub const NAV_FORM: Point = Point::new(330.0, 380.0);
pub const NAV_LIST: Point = Point::new(600.0, 380.0);
pub const NAV_REPORTS: Point = Point::new(870.0, 380.0);
pub const LOGOUT: Point = Point::new(1090.0, 65.0);
pub const BACK: Point = Point::new(100.0, 50.0);
pub const SAVE_FORM: Point = Point::new(140.0, 655.0);
pub const NEXT_PAGE: Point = Point::new(1090.0, 760.0);
pub const ROW0_DETAILS: Point = Point::new(135.0, 270.0);
pub const ROW0_PDF: Point = Point::new(285.0, 270.0);
pub const STATUS_FILTER: Point = Point::new(140.0, 120.0);
pub const ROW0_STATUS: Point = Point::new(430.0, 270.0);
pub const REPORT_BY_STATUS: Point = Point::new(600.0, 400.0);
pub const REPORT_DETAILED: Point = Point::new(600.0, 465.0);
pub const CLOSE_DIALOG: Point = Point::new(820.0, 680.0);

/// Centre of option `index` in the expanded filter dropdown.
pub fn filter_option(index: usize) -> Point {
    Point::new(140.0, 140.0 + index as f32 * 40.0 + 20.0)
}

/// Centre of option `index` in the first row's expanded status dropdown.
pub fn row0_status_option(index: usize) -> Point {
    Point::new(430.0, 285.0 + index as f32 * 30.0 + 15.0)
}

pub struct Harness {
    pub dir: tempfile::TempDir,
    pub app: SocialApp,
}

pub async fn test_pool() -> DbPool {
    let pool = painel_db::create_memory_pool().await.unwrap();
    painel_db::prepare(&pool).await.unwrap();
    pool
}

pub async fn harness() -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let app = SocialApp::new(test_pool().await, dir.path().join("pdfs"), Size::new(1200, 800));
    Harness { dir, app }
}

pub async fn click(app: &mut SocialApp, at: Point) {
    assert!(
        app.handle_events(&[InputEvent::primary_down(at), InputEvent::primary_up(at)])
            .await
    );
}

pub fn set_input(app: &mut SocialApp, view: View, id: WidgetId, text: &str) {
    app.widgets_mut()
        .input_mut(view, id)
        .unwrap_or_else(|| panic!("no input {id:?} on {view:?}"))
        .set_text(text);
}

pub async fn login_as_admin(app: &mut SocialApp) {
    set_input(app, View::Login, WidgetId::LoginEmail, ADMIN_EMAIL);
    set_input(app, View::Login, WidgetId::LoginSenha, ADMIN_PASSWORD);
    click(app, LOGIN_SUBMIT).await;
    assert_eq!(app.view(), View::Dashboard);
}

#[allow(dead_code)]
pub fn new_inscricao(nome: &str) -> CreateInscricao {
    CreateInscricao {
        nome_completo: nome.to_string(),
        idade: 41,
        genero: "Masculino".to_string(),
        cpf: Some("123.456.789-00".to_string()),
        endereco: "Av. Central, 200".to_string(),
        telefone: None,
        email: None,
        renda_familiar: 2100.0,
        membros_familia: 3,
        despesas_mensais: 1200.0,
        escolaridade: "Ensino Superior Completo".to_string(),
        situacao_moradia: "Casa Própria".to_string(),
        observacoes: Some("Prioridade".to_string()),
    }
}
