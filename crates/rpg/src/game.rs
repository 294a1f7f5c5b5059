//! Screen controller for the character creator.
//!
//! [`RpgGame`] owns the current [`Screen`], the logged-in session and every
//! widget. The run loop calls [`RpgGame::handle_events`],
//! [`RpgGame::update`] and [`RpgGame::draw`] once per frame.

use painel_core::canvas::{Canvas, FontSize};
use painel_core::error::CoreError;
use painel_core::event::{InputEvent, PointerTracker};
use painel_core::geometry::{Point, Rect, Rgb, Size};
use painel_core::particles::ParticleSystem;
use painel_core::status::{StatusLine, StatusMessage};
use painel_core::theme::Theme;
use painel_core::widgets::{InputAction, WidgetOutcome};

use crate::account::{AccountBook, MSG_ACCOUNT_CREATED, MSG_LOGIN_OK};
use crate::character::{Attribute, Character};
use crate::renderer::{draw_background, draw_panel, CharacterRenderer};
use crate::screens::{build_widgets, Screen, WidgetId, Widgets};

pub const MSG_CHARACTER_SAVED: &str = "Character saved!";

#[derive(Debug, Clone)]
struct Session {
    username: String,
    /// Logged-in time not yet credited to the account.
    unbilled_seconds: f64,
}

pub struct RpgGame {
    screen: Screen,
    session: Option<Session>,
    accounts: AccountBook,
    character: Character,
    widgets: Widgets,
    renderer: CharacterRenderer,
    particles: ParticleSystem,
    status: StatusLine,
    pointer: PointerTracker,
    theme: Theme,
    size: Size,
    elapsed: f32,
}

impl RpgGame {
    pub fn new(accounts: AccountBook, size: Size) -> Self {
        let theme = Theme::DARK;
        Self {
            screen: Screen::Login,
            session: None,
            accounts,
            character: Character::default(),
            widgets: build_widgets(size, theme),
            renderer: CharacterRenderer::default(),
            particles: ParticleSystem::new(),
            status: StatusLine::default(),
            pointer: PointerTracker::default(),
            theme,
            size,
            elapsed: 0.0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn accounts(&self) -> &AccountBook {
        &self.accounts
    }

    pub fn widgets(&self) -> &Widgets {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut Widgets {
        &mut self.widgets
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.text()
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    fn center(&self) -> Point {
        Point::new(self.size.width as f32 / 2.0, self.size.height as f32 / 2.0)
    }

    /// Consume one frame's events. Returns `false` on a quit request.
    pub fn handle_events(&mut self, events: &[InputEvent]) -> bool {
        for event in events {
            if matches!(event, InputEvent::Quit) {
                return false;
            }
            let pointer = self.pointer.observe(event);
            let screen = self.screen;
            let outcomes = self.widgets.dispatch(screen, event, pointer);
            for (id, outcome) in outcomes {
                // A handler may have switched screens; later outcomes of the
                // same event belong to the old screen and are dropped.
                if self.screen != screen {
                    break;
                }
                self.on_outcome(id, outcome, pointer);
            }
        }
        true
    }

    fn on_outcome(&mut self, id: WidgetId, outcome: WidgetOutcome, pointer: Point) {
        match (self.screen, id, outcome) {
            (_, _, WidgetOutcome::Input(InputAction::Tab)) => self.widgets.focus_next(self.screen),

            (Screen::Login, _, WidgetOutcome::Input(InputAction::Enter))
            | (Screen::Login, WidgetId::LoginSubmit, WidgetOutcome::Clicked) => self.attempt_login(),
            (Screen::Login, WidgetId::GoToRegister, WidgetOutcome::Clicked) => {
                self.screen = Screen::Register;
            }

            (Screen::Register, _, WidgetOutcome::Input(InputAction::Enter))
            | (Screen::Register, WidgetId::RegisterSubmit, WidgetOutcome::Clicked) => {
                self.attempt_register();
            }
            (Screen::Register, WidgetId::RegisterBack, WidgetOutcome::Clicked) => {
                self.screen = Screen::Login;
            }

            (Screen::MainMenu, WidgetId::Customize, WidgetOutcome::Clicked) => self.enter_customize(),
            (Screen::MainMenu, WidgetId::Inventory, WidgetOutcome::Clicked) => {
                self.particles.burst(pointer, 15, self.theme.warning);
                self.screen = Screen::Inventory;
            }
            (Screen::MainMenu, WidgetId::Battle, WidgetOutcome::Clicked) => {
                self.particles.burst(pointer, 15, self.theme.danger);
                self.screen = Screen::Battle;
            }
            (Screen::MainMenu, WidgetId::Logout, WidgetOutcome::Clicked) => self.logout(),

            (Screen::Customize, WidgetId::AttributeSlider(attribute), WidgetOutcome::SliderReleased(value)) => {
                self.character.set_attribute(attribute, value);
                self.particles.burst(pointer, 5, self.theme.primary);
            }
            (Screen::Customize, WidgetId::PaletteStep(palette, step), WidgetOutcome::Clicked) => {
                self.character.cycle_color(palette, step.delta());
            }
            (Screen::Customize, WidgetId::SaveCharacter, WidgetOutcome::Clicked) => self.save_character(),
            (Screen::Customize, WidgetId::BackToMenu, WidgetOutcome::Clicked)
            | (Screen::Inventory | Screen::Battle, WidgetId::StubBack, WidgetOutcome::Clicked) => {
                self.enter_main_menu();
            }

            _ => {}
        }
    }

    fn attempt_login(&mut self) {
        let username = self.widgets.input_text(Screen::Login, WidgetId::LoginUsername).to_string();
        let password = self.widgets.input_text(Screen::Login, WidgetId::LoginPassword).to_string();
        let center = self.center();

        match self.accounts.login(&username, &password) {
            Ok(character) => {
                self.character = character;
                self.session = Some(Session {
                    username,
                    unbilled_seconds: 0.0,
                });
                self.status.show(StatusMessage::success(MSG_LOGIN_OK));
                self.particles
                    .burst(Point::new(center.x, center.y - 50.0), 20, self.theme.success);
                self.screen = Screen::MainMenu;
            }
            Err(e) => self.fail(e),
        }
    }

    fn attempt_register(&mut self) {
        let field = |id| self.widgets.input_text(Screen::Register, id).to_string();
        let username = field(WidgetId::RegisterUsername);
        let password = field(WidgetId::RegisterPassword);
        let confirm = field(WidgetId::RegisterConfirm);

        match self.accounts.register(&username, &password, &confirm) {
            Ok(()) => {
                self.widgets.clear_inputs(Screen::Register);
                self.status.show(StatusMessage::success(MSG_ACCOUNT_CREATED));
                self.particles.burst(self.center(), 20, self.theme.success);
                self.screen = Screen::Login;
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: CoreError) {
        let center = self.center();
        self.status.show(StatusMessage::error(error.user_message()));
        self.particles
            .burst(Point::new(center.x, center.y + 80.0), 10, self.theme.danger);
    }

    /// Reload the owned character from the account book and show the menu.
    fn enter_main_menu(&mut self) {
        if let Some(saved) = self.username().and_then(|u| self.accounts.character(u)).cloned() {
            self.character = saved;
        }
        self.screen = Screen::MainMenu;
    }

    fn enter_customize(&mut self) {
        for attribute in Attribute::ALL {
            let value = self.character.attribute(attribute);
            if let Some(slider) = self
                .widgets
                .slider_mut(Screen::Customize, WidgetId::AttributeSlider(attribute))
            {
                slider.set_value(value);
            }
        }
        self.screen = Screen::Customize;
    }

    fn save_character(&mut self) {
        for attribute in Attribute::ALL {
            if let Some(slider) = self
                .widgets
                .slider(Screen::Customize, WidgetId::AttributeSlider(attribute))
            {
                self.character.set_attribute(attribute, slider.value());
            }
        }
        let Some(username) = self.username().map(str::to_string) else {
            return;
        };
        self.bill_playtime();
        match self.accounts.save_character(&username, &self.character) {
            Ok(()) => {
                let at = Point::new(self.center().x, self.size.height as f32 - 150.0);
                self.particles.burst(at, 25, self.theme.success);
                self.status.show(StatusMessage::success(MSG_CHARACTER_SAVED));
            }
            Err(e) => {
                tracing::error!(error = %e, "Character save failed");
                self.fail(e);
            }
        }
    }

    fn logout(&mut self) {
        self.bill_playtime();
        if let Some(session) = self.session.take() {
            tracing::info!(username = %session.username, "Logged out");
        }
        if let Some(password) = self.widgets.input_mut(Screen::Login, WidgetId::LoginPassword) {
            password.clear();
        }
        self.character = Character::default();
        self.screen = Screen::Login;
    }

    /// Credit whole seconds of the running session to the account.
    fn bill_playtime(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let whole = session.unbilled_seconds.floor();
        session.unbilled_seconds -= whole;
        let username = session.username.clone();
        self.accounts.add_playtime(&username, whole as u64);
    }

    /// Persist anything pending before the process exits.
    pub fn shutdown(&mut self) {
        self.bill_playtime();
    }

    /// Advance animations for the active screen only.
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        self.renderer.update(dt);
        self.particles.update(dt);
        self.status.update(dt);
        self.widgets.update(self.screen, dt);
        if let Some(session) = self.session.as_mut() {
            session.unbilled_seconds += f64::from(dt);
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        draw_background(canvas, &self.theme, self.size, self.elapsed);
        match self.screen {
            Screen::Login => self.draw_login(canvas),
            Screen::Register => self.draw_register(canvas),
            Screen::MainMenu => self.draw_main_menu(canvas),
            Screen::Customize => self.draw_customize(canvas),
            Screen::Inventory => self.draw_stub(canvas, "Inventory"),
            Screen::Battle => self.draw_stub(canvas, "Battle Arena"),
            Screen::CharacterSelect => self.draw_stub(canvas, "Character Select"),
        }
        self.widgets.draw(self.screen, canvas);
        self.particles.draw(canvas, self.theme.background);
        self.status
            .draw(canvas, &self.theme, self.size.width as f32, self.size.height as f32 - 40.0);
    }

    fn draw_login(&self, canvas: &mut Canvas) {
        let t = &self.theme;
        let c = self.center();
        canvas.text_centered("EPIC RPG", Point::new(c.x, 150.0), FontSize::Title, t.primary);
        canvas.text_centered(
            "Character Creator v2.0",
            Point::new(c.x, 190.0),
            FontSize::Header,
            t.text_secondary,
        );
        draw_panel(canvas, t, Rect::new(c.x - 200.0, c.y - 150.0, 400.0, 350.0), "Login");
        canvas.text("Username", Point::new(c.x - 150.0, c.y - 70.0), FontSize::Body, t.text_primary);
        canvas.text("Password", Point::new(c.x - 150.0, c.y + 1.0), FontSize::Body, t.text_primary);
    }

    fn draw_register(&self, canvas: &mut Canvas) {
        let t = &self.theme;
        let c = self.center();
        canvas.text_centered("Create Account", Point::new(c.x, 120.0), FontSize::Title, t.success);
        draw_panel(canvas, t, Rect::new(c.x - 200.0, c.y - 200.0, 400.0, 450.0), "Registration");
        for (label, dy) in [("Username", -140.0), ("Password", -80.0), ("Confirm Password", -20.0)] {
            canvas.text(label, Point::new(c.x - 150.0, c.y + dy), FontSize::Body, t.text_primary);
        }
    }

    fn draw_main_menu(&self, canvas: &mut Canvas) {
        let t = &self.theme;
        let c = self.center();
        let ch = &self.character;
        canvas.text_centered(
            format!("Welcome back, {}!", ch.name),
            Point::new(c.x, 100.0),
            FontSize::Header,
            t.text_primary,
        );
        self.renderer
            .draw(canvas, t, ch, Point::new(c.x - 60.0, 150.0), 1.5);
        self.draw_stats(canvas, Point::new(50.0, 200.0));

        let info_y = self.size.height as f32 - 100.0;
        canvas.text(
            format!("Class: {}", ch.class_type.title()),
            Point::new(c.x - 100.0, info_y),
            FontSize::Body,
            t.text_secondary,
        );
        canvas.text(
            format!("Level {} | {} Gold", ch.level, ch.gold),
            Point::new(c.x - 100.0, info_y + 25.0),
            FontSize::Body,
            t.text_secondary,
        );
    }

    fn draw_stats(&self, canvas: &mut Canvas, at: Point) {
        let t = &self.theme;
        let ch = &self.character;
        draw_panel(canvas, t, Rect::new(at.x, at.y, 300.0, 400.0), "Character Stats");

        let mut rows = vec![
            ("Level".to_string(), ch.level.to_string()),
            ("Experience".to_string(), format!("{}/100", ch.experience)),
            ("Health".to_string(), format!("{}/{}", ch.health, ch.max_health())),
            ("Mana".to_string(), format!("{}/{}", ch.mana, ch.max_mana())),
            ("Gold".to_string(), ch.gold.to_string()),
            (String::new(), String::new()),
        ];
        rows.extend(
            Attribute::ALL
                .iter()
                .map(|a| (a.label().to_string(), ch.attribute(*a).to_string())),
        );

        for (i, (name, value)) in rows.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            let y = at.y + 80.0 + i as f32 * 25.0;
            canvas.text(format!("{name}:"), Point::new(at.x + 25.0, y), FontSize::Body, t.text_secondary);
            canvas.text(value, Point::new(at.x + 200.0, y), FontSize::Body, t.text_primary);
        }
    }

    fn draw_customize(&self, canvas: &mut Canvas) {
        let t = &self.theme;
        let c = self.center();
        let ch = &self.character;
        canvas.text_centered("Character Customization", Point::new(c.x, 50.0), FontSize::Header, t.primary);
        self.renderer.draw(canvas, t, ch, Point::new(100.0, 150.0), 2.0);
        draw_panel(canvas, t, Rect::new(c.x + 50.0, 100.0, 500.0, 450.0), "Attributes");

        let remaining = ch.remaining_skill_points();
        let tone = if remaining >= 0 { t.success } else { t.danger };
        canvas.text(
            format!("Skill Points Remaining: {remaining}"),
            Point::new(c.x + 70.0, 130.0),
            FontSize::Body,
            tone,
        );

        canvas.text("Appearance", Point::new(c.x + 70.0, 462.0), FontSize::Body, t.text_primary);
        let swatches: [(Rgb, f32); 3] = [(ch.skin_color, 485.0), (ch.hair_color, 535.0), (ch.eye_color, 585.0)];
        for (color, y) in swatches {
            let swatch = Rect::new(c.x + 300.0, y, 30.0, 30.0);
            canvas.fill_rect(swatch, color, 0.0);
            canvas.stroke_rect(swatch, t.border, 2.0, 0.0);
        }
    }

    fn draw_stub(&self, canvas: &mut Canvas, title: &str) {
        let t = &self.theme;
        let c = self.center();
        draw_panel(canvas, t, Rect::new(c.x - 250.0, c.y - 150.0, 500.0, 250.0), title);
        canvas.text_centered("Coming soon", c, FontSize::Header, t.text_secondary);
    }
}
