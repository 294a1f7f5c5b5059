//! Screen states and the widget layout of each screen.

use painel_core::geometry::{Rect, Size};
use painel_core::registry::WidgetRegistry;
use painel_core::theme::{ButtonStyle, Theme};
use painel_core::widgets::{Button, InputBox, Slider};

use crate::character::{Attribute, Palette, ATTRIBUTE_MAX, ATTRIBUTE_MIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Register,
    MainMenu,
    /// Reserved; nothing navigates here yet.
    CharacterSelect,
    Customize,
    Inventory,
    Battle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetId {
    LoginUsername,
    LoginPassword,
    LoginSubmit,
    GoToRegister,

    RegisterUsername,
    RegisterPassword,
    RegisterConfirm,
    RegisterSubmit,
    RegisterBack,

    Customize,
    Inventory,
    Battle,
    Logout,

    AttributeSlider(Attribute),
    PaletteStep(Palette, Step),
    SaveCharacter,
    BackToMenu,

    StubBack,
}

/// Direction of an appearance palette button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Prev,
    Next,
}

impl Step {
    pub fn delta(self) -> isize {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }
}

pub type Widgets = WidgetRegistry<Screen, WidgetId>;

/// Build every screen's widgets for a window of `size`.
pub fn build_widgets(size: Size, theme: Theme) -> Widgets {
    let w = size.width as f32;
    let h = size.height as f32;
    let (cx, cy) = (w / 2.0, h / 2.0);
    let mut reg = Widgets::new();

    let button = |x: f32, y: f32, width: f32, height: f32, label: &str, style: ButtonStyle| {
        Button::new(Rect::new(x, y, width, height), label, style).with_theme(theme)
    };
    let input = |y: f32, placeholder: &str| {
        InputBox::new(Rect::new(cx - 150.0, y, 300.0, 50.0), placeholder).with_theme(theme)
    };

    reg.register(Screen::Login, WidgetId::LoginUsername, input(cy - 60.0, "Username"));
    reg.register(
        Screen::Login,
        WidgetId::LoginPassword,
        input(cy + 10.0, "Password").password(),
    );
    reg.register(
        Screen::Login,
        WidgetId::LoginSubmit,
        button(cx - 100.0, cy + 80.0, 200.0, 50.0, "Login", ButtonStyle::Primary),
    );
    reg.register(
        Screen::Login,
        WidgetId::GoToRegister,
        button(cx - 100.0, cy + 140.0, 200.0, 50.0, "Register", ButtonStyle::Secondary),
    );

    reg.register(Screen::Register, WidgetId::RegisterUsername, input(cy - 120.0, "Username"));
    reg.register(
        Screen::Register,
        WidgetId::RegisterPassword,
        input(cy - 60.0, "Password").password(),
    );
    reg.register(
        Screen::Register,
        WidgetId::RegisterConfirm,
        input(cy, "Confirm Password").password(),
    );
    reg.register(
        Screen::Register,
        WidgetId::RegisterSubmit,
        button(cx - 100.0, cy + 80.0, 200.0, 50.0, "Create Account", ButtonStyle::Success),
    );
    reg.register(
        Screen::Register,
        WidgetId::RegisterBack,
        button(cx - 100.0, cy + 140.0, 200.0, 50.0, "Back", ButtonStyle::Secondary),
    );

    let menu = [
        (WidgetId::Customize, "Customize Character", ButtonStyle::Primary, -100.0),
        (WidgetId::Inventory, "Inventory", ButtonStyle::Secondary, -30.0),
        (WidgetId::Battle, "Battle Arena", ButtonStyle::Danger, 40.0),
        (WidgetId::Logout, "Logout", ButtonStyle::Secondary, 110.0),
    ];
    for (id, label, style, dy) in menu {
        reg.register(
            Screen::MainMenu,
            id,
            button(cx - 120.0, cy + dy, 240.0, 60.0, label, style),
        );
    }

    let slider_x = cx + 200.0;
    for (i, attribute) in Attribute::ALL.into_iter().enumerate() {
        let y = 150.0 + i as f32 * 50.0;
        let slider = Slider::new(slider_x, y, 200.0, ATTRIBUTE_MIN..=ATTRIBUTE_MAX, 10)
            .with_label(attribute.label())
            .with_theme(theme);
        reg.register(Screen::Customize, WidgetId::AttributeSlider(attribute), slider);
    }

    let palettes = [
        (Palette::Skin, "Skin", 480.0),
        (Palette::Hair, "Hair", 530.0),
        (Palette::Eyes, "Eyes", 580.0),
    ];
    for (palette, name, y) in palettes {
        let prev = format!("< {name}");
        let next = format!("{name} >");
        reg.register(
            Screen::Customize,
            WidgetId::PaletteStep(palette, Step::Prev),
            button(slider_x, y, 80.0, 40.0, &prev, ButtonStyle::Secondary),
        );
        reg.register(
            Screen::Customize,
            WidgetId::PaletteStep(palette, Step::Next),
            button(slider_x + 100.0, y, 80.0, 40.0, &next, ButtonStyle::Secondary),
        );
    }
    reg.register(
        Screen::Customize,
        WidgetId::SaveCharacter,
        button(cx - 100.0, h - 150.0, 200.0, 50.0, "Save Character", ButtonStyle::Success),
    );
    reg.register(
        Screen::Customize,
        WidgetId::BackToMenu,
        button(cx - 100.0, h - 90.0, 200.0, 50.0, "Back to Menu", ButtonStyle::Secondary),
    );

    for stub in [Screen::Inventory, Screen::Battle] {
        reg.register(
            stub,
            WidgetId::StubBack,
            button(cx - 100.0, h - 120.0, 200.0, 50.0, "Back", ButtonStyle::Secondary),
        );
    }

    reg
}
