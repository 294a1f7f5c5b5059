//! Short-lived particle bursts used as click/success/failure feedback.

use rand::Rng;

use crate::canvas::Canvas;
use crate::geometry::{Point, Rgb};

const JITTER: i32 = 20;
const GRAVITY: f32 = 100.0;
const DECAY: f32 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    /// Remaining life in `0.0..=1.0`; also the draw opacity.
    pub life: f32,
    pub size: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `count` particles around `origin` using the thread-local RNG.
    pub fn burst(&mut self, origin: Point, count: usize, color: Rgb) {
        self.burst_with(&mut rand::rng(), origin, count, color);
    }

    pub fn burst_with<R: Rng + ?Sized>(&mut self, rng: &mut R, origin: Point, count: usize, color: Rgb) {
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle {
                position: Point::new(
                    origin.x + rng.random_range(-JITTER..=JITTER) as f32,
                    origin.y + rng.random_range(-JITTER..=JITTER) as f32,
                ),
                velocity: Point::new(
                    rng.random_range(-50..=50) as f32,
                    rng.random_range(-50..=-20) as f32,
                ),
                life: 1.0,
                size: rng.random_range(2..=6) as f32,
                color,
            });
        }
    }

    /// Integrate motion and gravity, then drop expired particles.
    pub fn update(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.position.x += p.velocity.x * dt;
            p.position.y += p.velocity.y * dt;
            p.velocity.y += GRAVITY * dt;
            p.life -= dt * DECAY;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    /// Particles fade by blending toward `background` as life runs out.
    pub fn draw(&self, canvas: &mut Canvas, background: Rgb) {
        for p in &self.particles {
            let color = background.lerp(p.color, p.life.clamp(0.0, 1.0));
            canvas.circle(p.position, p.size, color);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
