//! Single-choice dropdown.
//!
//! Collapsed it shows the selected option (or a placeholder). A click on
//! the header opens the option list below it; a click on a row selects that
//! option, any other click closes the list.

use crate::canvas::{Canvas, FontSize};
use crate::event::InputEvent;
use crate::geometry::{Point, Rect};
use crate::theme::Theme;

use super::Widget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Armed {
    Header,
    Row(usize),
    Outside,
}

#[derive(Debug, Clone)]
pub struct Dropdown {
    rect: Rect,
    options: Vec<String>,
    placeholder: String,
    selected: Option<usize>,
    open: bool,
    armed: Option<Armed>,
    hovered_row: Option<usize>,
    theme: Theme,
}

impl Dropdown {
    pub fn new<I, T>(rect: Rect, placeholder: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            rect,
            options: options.into_iter().map(Into::into).collect(),
            placeholder: placeholder.into(),
            selected: None,
            open: false,
            armed: None,
            hovered_row: None,
            theme: Theme::default(),
        }
    }

    /// Preselect `index` (builder). Out-of-range indices are ignored.
    pub fn with_selected(mut self, index: usize) -> Self {
        self.set_selected(Some(index));
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    pub fn set_selected(&mut self, index: Option<usize>) {
        self.selected = index.filter(|i| *i < self.options.len());
    }

    /// Select the option whose label equals `label`. Returns whether one matched.
    pub fn select_label(&mut self, label: &str) -> bool {
        match self.options.iter().position(|o| o == label) {
            Some(i) => {
                self.selected = Some(i);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.open = false;
        self.armed = None;
    }

    fn row_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.rect.x,
            self.rect.bottom() + index as f32 * self.rect.height,
            self.rect.width,
            self.rect.height,
        )
    }

    /// Bounds of the expanded option list, if open.
    pub fn list_rect(&self) -> Option<Rect> {
        self.open.then(|| {
            Rect::new(
                self.rect.x,
                self.rect.bottom(),
                self.rect.width,
                self.rect.height * self.options.len() as f32,
            )
        })
    }

    fn hit(&self, position: Point) -> Armed {
        if self.rect.contains(position) {
            return Armed::Header;
        }
        if self.open {
            if let Some(i) = (0..self.options.len()).find(|i| self.row_rect(*i).contains(position)) {
                return Armed::Row(i);
            }
        }
        Armed::Outside
    }
}

impl Widget for Dropdown {
    /// `Some(index)` once, when a row click changes the selection.
    type Outcome = Option<usize>;

    fn update(&mut self, _dt: f32) {}

    fn handle_event(&mut self, event: &InputEvent, pointer: Point) -> Option<usize> {
        let position = event.position().unwrap_or(pointer);
        let target = self.hit(position);
        self.hovered_row = match target {
            Armed::Row(i) => Some(i),
            _ => None,
        };

        if event.is_primary_down() {
            self.armed = Some(target);
            return None;
        }
        if !event.is_primary_up() {
            return None;
        }

        let armed = self.armed.take();
        match (armed, target) {
            (Some(Armed::Header), Armed::Header) => {
                self.open = !self.open;
                None
            }
            (Some(Armed::Row(a)), Armed::Row(b)) if a == b => {
                self.open = false;
                if self.selected == Some(b) {
                    None
                } else {
                    self.selected = Some(b);
                    Some(b)
                }
            }
            _ => {
                self.open = false;
                None
            }
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        let theme = &self.theme;
        canvas.fill_rect(self.rect, theme.surface, 6.0);
        let border = if self.open { theme.primary } else { theme.border };
        canvas.stroke_rect(self.rect, border, 2.0, 6.0);

        let text_pos = Point::new(self.rect.x + 10.0, self.rect.center_y());
        match self.selected_label() {
            Some(label) => canvas.text(label, text_pos, FontSize::Small, theme.text_primary),
            None => canvas.text(&self.placeholder, text_pos, FontSize::Small, theme.text_secondary),
        }
        let marker = if self.open { "^" } else { "v" };
        canvas.text(
            marker,
            Point::new(self.rect.right() - 20.0, self.rect.center_y()),
            FontSize::Small,
            theme.text_secondary,
        );

        if !self.open {
            return;
        }
        for (i, option) in self.options.iter().enumerate() {
            let row = self.row_rect(i);
            let background = if self.hovered_row == Some(i) {
                theme.surface.lerp(theme.primary, 0.25)
            } else {
                theme.card
            };
            canvas.fill_rect(row, background, 0.0);
            canvas.stroke_rect(row, theme.border, 1.0, 0.0);
            canvas.text(
                option,
                Point::new(row.x + 10.0, row.center_y()),
                FontSize::Small,
                theme.text_primary,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> Dropdown {
        Dropdown::new(
            Rect::new(0.0, 0.0, 200.0, 40.0),
            "Status",
            ["Todos", "Pendente", "Aprovada", "Rejeitada"],
        )
        .with_selected(0)
    }

    fn click(d: &mut Dropdown, at: Point) -> Option<usize> {
        d.handle_event(&InputEvent::primary_down(at), at);
        d.handle_event(&InputEvent::primary_up(at), at)
    }

    const HEADER: Point = Point::new(50.0, 20.0);

    fn row(i: usize) -> Point {
        Point::new(50.0, 40.0 + i as f32 * 40.0 + 20.0)
    }

    #[test]
    fn header_click_toggles_list() {
        let mut d = filter();
        assert_eq!(click(&mut d, HEADER), None);
        assert!(d.is_open());
        assert_eq!(click(&mut d, HEADER), None);
        assert!(!d.is_open());
    }

    #[test]
    fn row_click_selects_and_reports_once() {
        let mut d = filter();
        click(&mut d, HEADER);
        assert_eq!(click(&mut d, row(2)), Some(2));
        assert_eq!(d.selected_label(), Some("Aprovada"));
        assert!(!d.is_open());
    }

    #[test]
    fn reselecting_current_option_reports_nothing() {
        let mut d = filter();
        click(&mut d, HEADER);
        assert_eq!(click(&mut d, row(0)), None);
        assert!(!d.is_open());
    }

    #[test]
    fn rows_are_inert_while_closed() {
        let mut d = filter();
        assert_eq!(click(&mut d, row(1)), None);
        assert_eq!(d.selected(), Some(0));
    }

    #[test]
    fn click_elsewhere_closes_without_selection() {
        let mut d = filter();
        click(&mut d, HEADER);
        assert_eq!(click(&mut d, Point::new(500.0, 500.0)), None);
        assert!(!d.is_open());
        assert_eq!(d.selected(), Some(0));
    }

    #[test]
    fn press_on_row_release_on_other_row_does_not_select() {
        let mut d = filter();
        click(&mut d, HEADER);
        d.handle_event(&InputEvent::primary_down(row(1)), row(1));
        assert_eq!(d.handle_event(&InputEvent::primary_up(row(3)), row(3)), None);
        assert_eq!(d.selected(), Some(0));
    }

    #[test]
    fn clear_and_placeholder() {
        let mut d = filter();
        d.clear();
        assert_eq!(d.selected(), None);
        let mut canvas = Canvas::new();
        d.draw(&mut canvas);
        assert!(canvas.contains_text("Status"));
        assert!(d.select_label("Rejeitada"));
        assert!(!d.select_label("Arquivada"));
        assert_eq!(d.selected(), Some(3));
    }

    #[test]
    fn out_of_range_preselection_is_ignored() {
        let d = Dropdown::new(Rect::new(0.0, 0.0, 10.0, 10.0), "x", ["a"]).with_selected(5);
        assert_eq!(d.selected(), None);
    }
}
