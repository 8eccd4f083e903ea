use rand::Rng;

use crate::colors::CONFETTI_COLORS;

const PARTICLE_COUNT: usize = 100;
const LIFETIME_SECS: f32 = 3.0;
const SPREAD_DEGREES: f32 = 70.0;
/// Burst origin as a fraction of the painted area.
const ORIGIN: egui::Pos2 = egui::pos2(0.5, 0.6);
/// Positions and velocities are in fractions of the painted area per second.
const GRAVITY: f32 = 0.9;

#[derive(Debug, Clone)]
struct Particle {
    pos: egui::Pos2,
    vel: egui::Vec2,
    color: egui::Color32,
    radius: f32,
    age: f32,
}

#[derive(Debug, Default)]
pub struct Confetti {
    particles: Vec<Particle>,
}

impl Confetti {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn burst(&mut self) {
        let mut rng = rand::rng();
        let half_spread = SPREAD_DEGREES / 2.0;

        self.particles.extend((0..PARTICLE_COUNT).map(|_| {
            let angle = (-90.0 + rng.random_range(-half_spread..half_spread)).to_radians();
            let speed = rng.random_range(0.6..1.3);
            Particle {
                pos: ORIGIN,
                vel: egui::vec2(angle.cos(), angle.sin()) * speed,
                color: CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
                radius: rng.random_range(3.0..6.0),
                age: 0.0,
            }
        }));
    }

    pub fn step(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.vel.y += GRAVITY * dt;
            particle.pos += particle.vel * dt;
            particle.age += dt;
        }
        self.particles
            .retain(|particle| particle.age < LIFETIME_SECS && particle.pos.y < 1.2);
    }

    pub fn paint(&self, painter: &egui::Painter, area: egui::Rect) {
        for particle in &self.particles {
            let center = area.min
                + egui::vec2(particle.pos.x * area.width(), particle.pos.y * area.height());
            let fade = 1.0 - particle.age / LIFETIME_SECS;
            painter.circle_filled(center, particle.radius, particle.color.gamma_multiply(fade));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_spawns_particles_from_origin() {
        let mut confetti = Confetti::new();
        assert!(!confetti.is_active());

        confetti.burst();
        assert_eq!(confetti.particles.len(), PARTICLE_COUNT);
        assert!(confetti.particles.iter().all(|p| p.pos == ORIGIN));
        assert!(confetti.particles.iter().all(|p| p.vel.y < 0.0));
        assert!(
            confetti
                .particles
                .iter()
                .all(|p| CONFETTI_COLORS.contains(&p.color))
        );
    }

    #[test]
    fn test_particles_expire() {
        let mut confetti = Confetti::new();
        confetti.burst();

        confetti.step(0.1);
        assert!(confetti.is_active());

        for _ in 0..40 {
            confetti.step(0.1);
        }
        assert!(!confetti.is_active());
    }
}
