//! Raw-mode terminal session.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self as cte, DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use painel_core::canvas::Canvas;
use painel_core::event::InputEvent;
use painel_core::geometry::{Rgb, Size};

use crate::input::map_event;
use crate::raster::rasterize;
use crate::scale::CellScale;

/// Owns the terminal while an app runs. Dropping it restores the terminal,
/// including when the run loop exits with an error.
pub struct TerminalBackend {
    out: Stdout,
    scale: CellScale,
    active: bool,
}

impl TerminalBackend {
    /// Enter raw mode on the alternate screen with mouse capture enabled.
    pub fn enter(logical: Size) -> io::Result<Self> {
        let (cols, rows) = crossterm::terminal::size().unwrap_or((120, 40));
        enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        tracing::debug!(cols, rows, "Terminal backend active");
        Ok(Self {
            out,
            scale: CellScale::new(logical, cols, rows),
            active: true,
        })
    }

    pub fn scale(&self) -> CellScale {
        self.scale
    }

    /// Collect input for one frame: waits up to `timeout` for the first
    /// event, then drains whatever else is already queued.
    pub fn poll_events(&mut self, timeout: Duration) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        let mut wait = timeout;
        while cte::poll(wait)? {
            let event = cte::read()?;
            if let cte::Event::Resize(cols, rows) = event {
                self.scale = CellScale::new(self.scale.logical(), cols, rows);
                continue;
            }
            if let Some(mapped) = map_event(event, &self.scale) {
                events.push(mapped);
            }
            wait = Duration::ZERO;
        }
        Ok(events)
    }

    /// Rasterise and draw one frame.
    pub fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        let buffer = rasterize(canvas, &self.scale);
        let mut current: Option<(Rgb, Rgb)> = None;
        for row in 0..buffer.rows() {
            queue!(self.out, MoveTo(0, row))?;
            for col in 0..buffer.cols() {
                let Some(cell) = buffer.get(col, row) else {
                    continue;
                };
                if current != Some((cell.fg, cell.bg)) {
                    queue!(
                        self.out,
                        SetForegroundColor(to_color(cell.fg)),
                        SetBackgroundColor(to_color(cell.bg))
                    )?;
                    current = Some((cell.fg, cell.bg));
                }
                queue!(self.out, Print(cell.glyph))?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Leave the alternate screen and raw mode. Idempotent.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, ResetColor, Show, DisableMouseCapture, LeaveAlternateScreen)?;
        disable_raw_mode()
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::error!(error = %e, "Failed to restore terminal");
        }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r(),
        g: rgb.g(),
        b: rgb.b(),
    }
}
