//! Ambient drifting particles behind the page content.

use super::config::AmbientConfig;
use super::frame::{Animation, FrameStatus};
use super::surface::Surface;
use super::theme::{Color, ThemeMode};

/// A single floating particle.
#[derive(Clone, Debug)]
pub struct AmbientParticle {
	/// Position in surface pixels.
	pub x: f64,
	#[allow(missing_docs)]
	pub y: f64,
	/// Velocity in px/frame.
	pub vx: f64,
	#[allow(missing_docs)]
	pub vy: f64,
	/// Also the wrap margin at the edges.
	pub radius: f64,
	/// Set from the theme when the batch is built.
	pub color: Color,
}

/// Full-viewport particle field. Every resize or theme change rebuilds the
/// whole batch; existing particles are never repositioned.
pub struct AmbientField<S> {
	surface: S,
	config: AmbientConfig,
	rng: fastrand::Rng,
	particles: Vec<AmbientParticle>,
}

impl<S: Surface> AmbientField<S> {
	/// Creates an empty field. Nothing is drawn until [`setup`](Self::setup).
	pub fn new(surface: S, config: AmbientConfig, seed: u64) -> Self {
		Self {
			surface,
			config,
			rng: fastrand::Rng::with_seed(seed),
			particles: Vec::new(),
		}
	}

	/// Resizes the surface and replaces the particle batch.
	pub fn setup(&mut self, width: f64, height: f64, mode: ThemeMode) {
		self.surface.resize(width, height);

		let color = mode.particle_color();
		let AmbientConfig {
			count,
			radius_min,
			radius_max,
			max_speed,
		} = self.config;
		let rng = &mut self.rng;

		self.particles = (0..count)
			.map(|_| AmbientParticle {
				x: rng.f64() * width,
				y: rng.f64() * height,
				radius: radius_min + rng.f64() * (radius_max - radius_min),
				vx: (rng.f64() - 0.5) * 2.0 * max_speed,
				vy: (rng.f64() - 0.5) * 2.0 * max_speed,
				color,
			})
			.collect();
	}

	/// Moves every particle one step, wrapping at the edges with the radius as margin.
	pub fn update(&mut self) {
		let (width, height) = self.surface.size();

		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x > width + p.radius {
				p.x = -p.radius;
			} else if p.x < -p.radius {
				p.x = width + p.radius;
			}
			if p.y > height + p.radius {
				p.y = -p.radius;
			} else if p.y < -p.radius {
				p.y = height + p.radius;
			}
		}
	}

	/// Clears the surface and draws every particle.
	pub fn render(&mut self) {
		self.surface.clear();
		for p in &self.particles {
			self.surface.fill_circle(p.x, p.y, p.radius, p.color);
		}
	}

	/// The current batch.
	pub fn particles(&self) -> &[AmbientParticle] {
		&self.particles
	}

	/// The surface this field draws on.
	pub fn surface(&self) -> &S {
		&self.surface
	}
}

impl<S: Surface> Animation for AmbientField<S> {
	fn frame(&mut self) -> FrameStatus {
		self.update();
		self.render();
		FrameStatus::Continue
	}
}
