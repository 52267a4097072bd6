//! One-shot confetti bursts.
//!
//! Each [`Burst`] owns its surface and particle batch, so any number of them
//! can animate at once without touching each other. A burst runs until every
//! particle has faded out or fallen off the bottom, then detaches its surface.

use std::f64::consts::PI;

use log::debug;

use super::config::BurstConfig;
use super::frame::{Animation, FrameStatus};
use super::surface::Surface;
use super::theme::Color;

/// Confetti piece outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum BurstShape {
	Square,
	Circle,
	Triangle,
}

impl BurstShape {
	const ALL: [BurstShape; 3] = [BurstShape::Square, BurstShape::Circle, BurstShape::Triangle];
}

/// A single confetti piece.
#[derive(Clone, Debug)]
pub struct BurstParticle {
	/// Position in surface pixels.
	pub x: f64,
	#[allow(missing_docs)]
	pub y: f64,
	/// Velocity in px/frame. Gravity is added to `vy` every frame.
	pub vx: f64,
	#[allow(missing_docs)]
	pub vy: f64,
	/// Edge length, diameter or triangle width, depending on `shape`.
	pub size: f64,
	#[allow(missing_docs)]
	pub color: Color,
	#[allow(missing_docs)]
	pub shape: BurstShape,
	/// Degrees.
	pub rotation: f64,
	/// `1 - age * decay`, never below zero.
	pub opacity: f64,
	age: u32,
	spent: bool,
}

impl BurstParticle {
	/// Faded out or fell off the bottom. Spent particles are no longer moved or drawn.
	pub fn is_spent(&self) -> bool {
		self.spent
	}
}

/// Where a burst originates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
	/// Pointer click at client coordinates.
	#[allow(missing_docs)]
	Pointer { x: f64, y: f64 },
	/// Keyboard dismissal, which bursts from the middle of the viewport.
	Keyboard,
}

impl Trigger {
	/// Burst origin in client coordinates.
	pub fn origin(self, viewport_width: f64, viewport_height: f64) -> (f64, f64) {
		match self {
			Trigger::Pointer { x, y } => (x, y),
			Trigger::Keyboard => (viewport_width / 2.0, viewport_height / 2.0),
		}
	}
}

/// One confetti burst and the overlay it draws on.
pub struct Burst<S: Surface> {
	surface: S,
	config: BurstConfig,
	particles: Vec<BurstParticle>,
	detached: bool,
}

impl<S: Surface> Burst<S> {
	/// Launches `config.count` particles from `(origin_x, origin_y)`.
	pub fn emit(surface: S, config: BurstConfig, origin_x: f64, origin_y: f64, seed: u64) -> Self {
		let mut rng = fastrand::Rng::with_seed(seed);
		let palette = config.colors();

		let particles = (0..config.count)
			.map(|_| BurstParticle {
				x: origin_x,
				y: origin_y,
				vx: (rng.f64() - 0.5) * 2.0 * config.spread,
				vy: config.launch_velocity,
				size: config.size_min + rng.f64() * (config.size_max - config.size_min),
				color: palette[rng.usize(..palette.len())],
				shape: BurstShape::ALL[rng.usize(..BurstShape::ALL.len())],
				rotation: rng.f64() * 360.0,
				opacity: 1.0,
				age: 0,
				spent: false,
			})
			.collect();

		debug!(
			"burst: {} particles from ({:.0}, {:.0})",
			config.count, origin_x, origin_y
		);

		Self {
			surface,
			config,
			particles,
			detached: false,
		}
	}

	/// Every particle, spent or not.
	pub fn particles(&self) -> &[BurstParticle] {
		&self.particles
	}

	/// Particles that are not yet spent.
	pub fn active_count(&self) -> usize {
		self.particles.iter().filter(|p| !p.spent).count()
	}

	/// True once the surface has been torn down.
	pub fn is_finished(&self) -> bool {
		self.detached
	}

	/// The overlay this burst draws on.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Advances every live particle one frame. Returns how many are still live.
	pub fn update(&mut self) -> usize {
		let (_, height) = self.surface.size();
		let BurstConfig {
			gravity,
			opacity_decay,
			spin,
			..
		} = self.config;

		let mut live = 0;
		for p in self.particles.iter_mut().filter(|p| !p.spent) {
			p.vy += gravity;
			p.x += p.vx;
			p.y += p.vy;
			p.age += 1;
			// Derived from age so the decay does not accumulate rounding error.
			p.opacity = 1.0 - f64::from(p.age) * opacity_decay;
			p.rotation += p.vx * spin;

			p.spent = p.opacity <= 0.0 || p.y > height;
			if !p.spent {
				live += 1;
			}
		}
		live
	}

	/// Draws every live particle with its own alpha, rotation and shape.
	pub fn render(&mut self) {
		self.surface.clear();
		for p in self.particles.iter().filter(|p| !p.spent) {
			self.surface.save();
			self.surface.set_global_alpha(p.opacity);
			self.surface.translate(p.x, p.y);
			self.surface.rotate(p.rotation * PI / 180.0);
			draw_shape(&mut self.surface, p);
			self.surface.restore();
		}
	}

	fn detach(&mut self) {
		if !self.detached {
			self.detached = true;
			self.surface.detach();
			debug!("burst: finished, overlay removed");
		}
	}
}

/// Draws a particle centred on the current origin.
fn draw_shape(surface: &mut impl Surface, p: &BurstParticle) {
	let s = p.size;
	match p.shape {
		BurstShape::Circle => surface.fill_circle(0.0, 0.0, s, p.color),
		BurstShape::Triangle => {
			surface.fill_polygon(&[(0.0, 0.0), (s, s * 2.0), (-s, s * 2.0)], p.color)
		}
		BurstShape::Square => surface.fill_rect(-s / 2.0, -s / 2.0, s, s, p.color),
	}
}

impl<S: Surface> Animation for Burst<S> {
	fn frame(&mut self) -> FrameStatus {
		if self.detached {
			return FrameStatus::Finished;
		}
		let live = self.update();
		self.render();
		if live == 0 {
			self.detach();
			FrameStatus::Finished
		} else {
			FrameStatus::Continue
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::frame::run_to_completion;
	use super::super::surface::recording::{DrawCall, RecordingSurface};
	use super::*;

	fn burst(width: f64, height: f64, x: f64, y: f64, seed: u64) -> Burst<RecordingSurface> {
		Burst::emit(
			RecordingSurface::new(width, height),
			BurstConfig::default(),
			x,
			y,
			seed,
		)
	}

	#[test]
	fn emit_randomizes_within_configured_ranges() {
		let b = burst(800.0, 600.0, 120.0, 340.0, 1);
		assert_eq!(b.particles().len(), 100);

		for p in b.particles() {
			assert_eq!((p.x, p.y), (120.0, 340.0));
			assert!((3.0..8.0).contains(&p.size));
			assert!((-4.0..4.0).contains(&p.vx));
			assert_eq!(p.vy, -6.0);
			assert!((0.0..360.0).contains(&p.rotation));
			assert_eq!(p.opacity, 1.0);
			assert!(CONFETTI.contains(&p.color));
		}
		for shape in BurstShape::ALL {
			assert!(b.particles().iter().any(|p| p.shape == shape));
		}
	}

	const CONFETTI: [Color; 7] = super::super::theme::CONFETTI_PALETTE;

	#[test]
	fn decay_alone_ends_burst_within_200_frames() {
		// Tall viewport so nothing falls off the bottom first.
		let mut b = burst(800.0, 1.0e9, 400.0, 300.0, 2);
		assert_eq!(run_to_completion(&mut b, 200), Some(200));
		assert!(b.particles().iter().all(|p| p.opacity <= 0.0));
	}

	#[test]
	fn falling_off_screen_ends_burst_early() {
		let mut b = burst(800.0, 600.0, 400.0, 590.0, 3);
		let frames = run_to_completion(&mut b, 200).expect("burst never finished");
		assert!(frames < 200);
		assert!(b.particles().iter().all(|p| p.opacity <= 0.0 || p.y > 600.0));
	}

	#[test]
	fn physics_step_matches_constants() {
		let mut b = burst(800.0, 600.0, 100.0, 100.0, 4);
		let before = b.particles()[0].clone();
		b.update();
		let after = &b.particles()[0];

		assert!((after.vy - (-6.0 + 0.08)).abs() < 1e-12);
		assert!((after.x - (before.x + before.vx)).abs() < 1e-12);
		assert!((after.y - (100.0 - 6.0 + 0.08)).abs() < 1e-12);
		assert!((after.opacity - 0.995).abs() < 1e-12);
		assert!((after.rotation - (before.rotation + before.vx * 2.0)).abs() < 1e-9);
	}

	#[test]
	fn surface_detached_exactly_once() {
		let mut b = burst(800.0, 600.0, 400.0, 300.0, 5);
		run_to_completion(&mut b, 500).expect("burst never finished");
		assert!(b.is_finished());

		// Extra frames after completion are no-ops.
		assert_eq!(b.frame(), FrameStatus::Finished);
		assert_eq!(b.frame(), FrameStatus::Finished);
		assert_eq!(b.surface().count(|c| *c == DrawCall::Detach), 1);
	}

	#[test]
	fn spent_particles_are_never_drawn() {
		let mut b = burst(800.0, 600.0, 400.0, 300.0, 6);
		b.particles[0].spent = true;
		b.particles[1].spent = true;
		b.surface().take_calls();

		b.frame();
		let live = b.active_count();
		let shapes = b.surface().count(|c| {
			matches!(
				c,
				DrawCall::Circle { .. } | DrawCall::Rect { .. } | DrawCall::Polygon { .. }
			)
		});
		assert_eq!(shapes, live);
		assert!(live <= 98);
	}

	#[test]
	fn final_frame_draws_nothing() {
		let mut b = burst(800.0, 1.0e9, 400.0, 300.0, 8);
		for _ in 0..199 {
			b.frame();
		}
		b.surface().take_calls();
		assert_eq!(b.frame(), FrameStatus::Finished);

		let calls = b.surface().take_calls();
		assert_eq!(calls, vec![DrawCall::ClearRect(0.0, 0.0, 800.0, 1.0e9), DrawCall::Detach]);
	}

	#[test]
	fn falling_below_overlay_height_ends_burst() {
		let config = BurstConfig {
			launch_velocity: 0.0,
			spread: 0.0,
			gravity: 1.0,
			..BurstConfig::default()
		};
		let mut b = Burst::emit(RecordingSurface::new(800.0, 100.0), config, 400.0, 90.0, 4);

		// y: 91, 93, 96, 100 (still on the floor), then 105.
		assert_eq!(run_to_completion(&mut b, 200), Some(5));
		assert!(b.particles().iter().all(|p| p.opacity > 0.9));
	}

	#[test]
	fn concurrent_bursts_are_independent() {
		let mut first = burst(800.0, 600.0, 100.0, 300.0, 9);
		for _ in 0..30 {
			first.frame();
		}
		let count = first.active_count();
		let snapshot: Vec<(f64, f64)> = first.particles().iter().map(|p| (p.x, p.y)).collect();

		let mut second = burst(800.0, 600.0, 700.0, 300.0, 10);
		for _ in 0..30 {
			second.frame();
		}

		assert_eq!(first.active_count(), count);
		let now: Vec<(f64, f64)> = first.particles().iter().map(|p| (p.x, p.y)).collect();
		assert_eq!(snapshot, now);
		assert!(!first.is_finished());
		assert_eq!(first.surface().count(|c| *c == DrawCall::Detach), 0);
	}

	#[test]
	fn keyboard_trigger_bursts_from_center() {
		assert_eq!(Trigger::Keyboard.origin(1000.0, 600.0), (500.0, 300.0));
		assert_eq!(
			Trigger::Pointer { x: 12.0, y: 34.0 }.origin(1000.0, 600.0),
			(12.0, 34.0)
		);
	}

	#[test]
	fn shapes_are_drawn_around_the_translated_origin() {
		let mut b = burst(800.0, 600.0, 50.0, 50.0, 11);
		b.particles.truncate(1);
		b.particles[0].shape = BurstShape::Triangle;
		b.particles[0].size = 4.0;
		b.surface().take_calls();

		b.frame();
		let p = b.particles()[0].clone();
		let calls = b.surface().take_calls();
		assert_eq!(calls[1], DrawCall::Save);
		assert_eq!(calls[2], DrawCall::Alpha(p.opacity));
		assert_eq!(calls[3], DrawCall::Translate(p.x, p.y));
		assert_eq!(calls[4], DrawCall::Rotate(p.rotation * PI / 180.0));
		assert_eq!(
			calls[5],
			DrawCall::Polygon {
				points: vec![(0.0, 0.0), (4.0, 8.0), (-4.0, 8.0)],
				color: p.color,
			}
		);
		assert_eq!(calls[6], DrawCall::Restore);
	}
}
