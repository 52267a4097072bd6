//! [`Surface`] over an HTML canvas 2D context.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::effects::{Color, Surface};

/// A canvas element and its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wraps an existing canvas. Fails if it has no 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or("2d canvas context not supported")?
			.dyn_into()?;
		Ok(Self { canvas, ctx })
	}

	/// Appends a fixed, click-through canvas covering the viewport on top of
	/// the page. [`Surface::detach`] removes it again.
	pub fn overlay(document: &Document, width: f64, height: f64) -> Result<Self, JsValue> {
		let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
		canvas.set_class_name("confetti-canvas");
		let style = canvas.style();
		style.set_property("position", "fixed")?;
		style.set_property("top", "0")?;
		style.set_property("left", "0")?;
		style.set_property("pointer-events", "none")?;
		style.set_property("z-index", "1000")?;
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		document
			.body()
			.ok_or("document has no body")?
			.append_child(&canvas)?;

		Self::new(canvas)
	}

	fn fill_style(&self, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
	}
}

impl Surface for CanvasSurface {
	fn size(&self) -> (f64, f64) {
		(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn resize(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
	}

	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		self.ctx.clear_rect(x, y, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill_style(color);
		self.ctx.fill();
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
		self.fill_style(color);
		self.ctx.fill_rect(x, y, width, height);
	}

	fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color) {
		let Some((&(x0, y0), rest)) = points.split_first() else {
			return;
		};
		self.ctx.begin_path();
		self.ctx.move_to(x0, y0);
		for &(x, y) in rest {
			self.ctx.line_to(x, y);
		}
		self.ctx.close_path();
		self.fill_style(color);
		self.ctx.fill();
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		self.ctx.set_global_alpha(alpha);
	}

	fn save(&mut self) {
		self.ctx.save();
	}

	fn restore(&mut self) {
		self.ctx.restore();
	}

	fn translate(&mut self, x: f64, y: f64) {
		let _ = self.ctx.translate(x, y);
	}

	fn rotate(&mut self, radians: f64) {
		let _ = self.ctx.rotate(radians);
	}

	fn detach(&mut self) {
		self.canvas.remove();
	}
}
