//! Frame-rate independent interpolation helpers for widget visuals.

/// Move `current` towards `target` by `(target - current) * dt * rate`.
///
/// The step is clamped so a long frame never overshoots the target.
pub fn smooth_toward(current: f32, target: f32, dt: f32, rate: f32) -> f32 {
    let factor = (dt * rate).clamp(0.0, 1.0);
    current + (target - current) * factor
}

/// Blink timer toggling visibility every `period` seconds.
#[derive(Debug, Clone, Copy)]
pub struct Blink {
    visible: bool,
    elapsed: f32,
    period: f32,
}

impl Blink {
    pub fn new(period: f32) -> Self {
        Self {
            visible: true,
            elapsed: 0.0,
            period,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.elapsed >= self.period {
            self.visible = !self.visible;
            self.elapsed = 0.0;
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn reset(&mut self) {
        self.visible = true;
        self.elapsed = 0.0;
    }
}
