//! Character figure, background and panel drawing.

use painel_core::canvas::{Canvas, FontSize};
use painel_core::geometry::{Point, Rect, Rgb, Size};
use painel_core::theme::Theme;

use crate::character::{Character, WeaponType};

const IDLE_SPEED: f32 = 2.0;
const STAR_COUNT: u32 = 50;
const GRADIENT_BANDS: u32 = 40;

const WOOD: Rgb = Rgb::new(139, 69, 19);
const STEEL: Rgb = Rgb::new(192, 192, 192);
const MOUTH: Rgb = Rgb::new(255, 100, 100);
const SHADOW: Rgb = Rgb::new(8, 8, 8);

/// Draws the idle-animated character figure.
#[derive(Debug, Clone, Default)]
pub struct CharacterRenderer {
    animation_time: f32,
}

impl CharacterRenderer {
    pub fn update(&mut self, dt: f32) {
        self.animation_time += dt * IDLE_SPEED;
    }

    /// Vertical idle offset in pixels, within `-2.0..=2.0`.
    pub fn bob_offset(&self) -> f32 {
        self.animation_time.sin() * 2.0
    }

    pub fn draw(&self, canvas: &mut Canvas, theme: &Theme, character: &Character, origin: Point, scale: f32) {
        let (x, y) = (origin.x, origin.y);
        let char_y = y + self.bob_offset();
        let s = |v: f32| v * scale;

        let head = s(60.0);
        let body_w = s(40.0);
        let body_h = s(80.0);

        canvas.ellipse(Rect::new(x + 10.0, y + s(200.0), s(80.0), s(20.0)), SHADOW);

        canvas.fill_rect(
            Rect::new(x + 20.0, char_y + head, body_w, body_h),
            character.armor_color,
            s(5.0),
        );

        let (arm_w, arm_h) = (s(15.0), s(50.0));
        for arm_x in [x + 5.0, x + 60.0] {
            canvas.fill_rect(
                Rect::new(arm_x, char_y + head + 10.0, arm_w, arm_h),
                character.skin_color,
                s(7.0),
            );
        }

        let (leg_w, leg_h) = (s(18.0), s(60.0));
        for leg_x in [x + 22.0, x + 42.0] {
            canvas.fill_rect(
                Rect::new(leg_x, char_y + head + body_h - 10.0, leg_w, leg_h),
                character.armor_color,
                s(5.0),
            );
        }

        canvas.ellipse(Rect::new(x + 15.0, char_y, head, head), character.skin_color);

        match character.hair_style {
            0 => canvas.ellipse(
                Rect::new(x + 10.0, char_y - 5.0, head + 10.0, head / 2.0),
                character.hair_color,
            ),
            1 => canvas.ellipse(
                Rect::new(x + 8.0, char_y - 10.0, head + 14.0, head + 20.0),
                character.hair_color,
            ),
            2 => {
                for i in 0..4 {
                    let base = x + 20.0 + i as f32 * 10.0;
                    let tip = Point::new(base + 5.0, char_y - 18.0);
                    canvas.line(Point::new(base, char_y - 8.0), tip, character.hair_color, 2.0);
                    canvas.line(tip, Point::new(base + 10.0, char_y - 8.0), character.hair_color, 2.0);
                }
            }
            _ => {}
        }

        let eye = s(8.0);
        let eye_y = char_y + head / 3.0;
        for eye_x in [x + 25.0, x + 45.0] {
            canvas.ellipse(Rect::new(eye_x, eye_y, eye, eye), theme.text_primary);
            canvas.ellipse(
                Rect::new(eye_x + 2.0, eye_y + 2.0, eye - 4.0, eye - 4.0),
                character.eye_color,
            );
        }

        canvas.ellipse(Rect::new(x + 35.0, char_y + head / 2.0, s(10.0), s(4.0)), MOUTH);

        self.draw_weapon(canvas, theme, character.weapon_type, Point::new(x + 85.0, char_y + 80.0), scale);
    }

    fn draw_weapon(&self, canvas: &mut Canvas, theme: &Theme, weapon: WeaponType, at: Point, scale: f32) {
        let s = |v: f32| v * scale;
        match weapon {
            WeaponType::Sword => {
                canvas.fill_rect(Rect::new(at.x, at.y, s(8.0), s(60.0)), STEEL, 0.0);
                canvas.fill_rect(Rect::new(at.x + 2.0, at.y + 50.0, s(4.0), s(20.0)), WOOD, 0.0);
            }
            WeaponType::Staff => {
                canvas.fill_rect(Rect::new(at.x + 3.0, at.y - 10.0, s(3.0), s(80.0)), WOOD, 0.0);
                canvas.ellipse(Rect::new(at.x, at.y - 15.0, s(10.0), s(10.0)), theme.primary);
            }
            WeaponType::Bow => {
                let top = Point::new(at.x + s(7.5), at.y);
                let bottom = Point::new(at.x + s(7.5), at.y + s(50.0));
                let belly = Point::new(at.x + s(15.0), at.y + s(25.0));
                canvas.line(top, belly, WOOD, s(3.0));
                canvas.line(belly, bottom, WOOD, s(3.0));
                canvas.line(top, bottom, theme.text_secondary, 1.0);
            }
        }
    }
}

/// Vertical gradient from `background` to `surface`, plus twinkling stars.
pub fn draw_background(canvas: &mut Canvas, theme: &Theme, size: Size, elapsed: f32) {
    canvas.clear(theme.background);
    let band = size.height as f32 / GRADIENT_BANDS as f32;
    for i in 0..GRADIENT_BANDS {
        let ratio = i as f32 / GRADIENT_BANDS as f32;
        let color = theme.background.lerp(theme.surface, ratio);
        canvas.fill_rect(Rect::new(0.0, i as f32 * band, size.width as f32, band + 1.0), color, 0.0);
    }

    for i in 0..STAR_COUNT {
        let x = (i * 47) % size.width.max(1);
        let y = (i * 31) % size.height.max(1);
        let brightness = ((elapsed + i as f32 * 0.5).sin().abs() * 100.0 + 50.0) as u8;
        canvas.circle(
            Point::new(x as f32, y as f32),
            1.0,
            Rgb::new(brightness, brightness, brightness),
        );
    }
}

/// Rounded card with an optional header title and underline.
pub fn draw_panel(canvas: &mut Canvas, theme: &Theme, rect: Rect, title: &str) {
    canvas.fill_rect(rect, theme.card, 12.0);
    canvas.stroke_rect(rect, theme.border, 2.0, 12.0);
    if !title.is_empty() {
        canvas.text(title, Point::new(rect.x + 20.0, rect.y + 30.0), FontSize::Header, theme.text_primary);
        let line_y = rect.y + 50.0;
        canvas.line(
            Point::new(rect.x + 20.0, line_y),
            Point::new(rect.right() - 20.0, line_y),
            theme.primary,
            2.0,
        );
    }
}
