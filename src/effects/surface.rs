//! The 2D drawing contract the effects render through.
//!
//! The browser implementation wraps a `CanvasRenderingContext2d`; tests use
//! [`recording::RecordingSurface`], which keeps a log of every call.

use super::theme::Color;

/// A resizable 2D render target.
///
/// Drawing is fire-and-forget: implementations swallow host errors since a
/// failed draw only costs a frame of visuals.
pub trait Surface {
	/// Current pixel dimensions `(width, height)`.
	fn size(&self) -> (f64, f64);
	fn resize(&mut self, width: f64, height: f64);
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);
	/// Fills the closed polygon through `points`.
	fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color);
	fn set_global_alpha(&mut self, alpha: f64);
	fn save(&mut self);
	fn restore(&mut self);
	fn translate(&mut self, x: f64, y: f64);
	/// Rotates subsequent drawing by `radians`.
	fn rotate(&mut self, radians: f64);
	/// Removes the surface from the page. Only overlays own their element.
	fn detach(&mut self) {}

	/// Clears the whole surface.
	fn clear(&mut self) {
		let (w, h) = self.size();
		self.clear_rect(0.0, 0.0, w, h);
	}
}
