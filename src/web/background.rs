//! Ambient particles on the page's `#background-canvas`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement};

use super::{CanvasSurface, FrameLoop, PageEvents, random_seed, viewport_size};
use crate::effects::config::AmbientConfig;
use crate::effects::{AmbientField, EventKind, PageEvent, Subscription, ThemeMode};

/// Id of the canvas the page provides for the background field.
pub const BACKGROUND_CANVAS_ID: &str = "background-canvas";

/// A running background field: its frame loop and its event subscriptions.
///
/// Dropping the handle stops the loop and unsubscribes both handlers.
pub struct AmbientHandle {
	frame_loop: FrameLoop,
	events: PageEvents,
	subscriptions: Vec<Subscription>,
}

impl AmbientHandle {
	/// Cancels the loop and removes the resize and theme handlers. Idempotent.
	pub fn stop(&mut self) {
		self.frame_loop.cancel();
		for subscription in self.subscriptions.drain(..) {
			self.events.unsubscribe(subscription);
		}
	}

	/// Whether the field is still animating.
	pub fn is_running(&self) -> bool {
		self.frame_loop.is_running()
	}
}

impl Drop for AmbientHandle {
	fn drop(&mut self) {
		self.stop();
	}
}

/// Starts the field on the page's background canvas.
///
/// Returns `Ok(None)` when the page has no such canvas: the field stays
/// inert and nothing is mounted in its place.
pub fn start_background(
	document: &Document,
	mode: ThemeMode,
	config: AmbientConfig,
	events: &PageEvents,
) -> Result<Option<AmbientHandle>, JsValue> {
	let Some(element) = document.get_element_by_id(BACKGROUND_CANVAS_ID) else {
		debug!("ambient: no #{} on this page", BACKGROUND_CANVAS_ID);
		return Ok(None);
	};
	let canvas: HtmlCanvasElement = element
		.dyn_into()
		.map_err(|_| JsValue::from_str("#background-canvas is not a canvas"))?;
	let handle = start_field(canvas, mode, config, events)?;
	info!("ambient: {} particles running", config.count);
	Ok(Some(handle))
}

fn start_field(
	canvas: HtmlCanvasElement,
	mode: ThemeMode,
	config: AmbientConfig,
	events: &PageEvents,
) -> Result<AmbientHandle, JsValue> {
	let window = web_sys::window().ok_or("no window")?;
	let surface = CanvasSurface::new(canvas)?;
	let (width, height) = viewport_size(&window);

	let field = Rc::new(RefCell::new(AmbientField::new(surface, config, random_seed())));
	field.borrow_mut().setup(width, height, mode);
	let current_mode = Rc::new(Cell::new(mode));

	let (field_resize, mode_resize) = (field.clone(), current_mode.clone());
	let on_resize = events.subscribe(EventKind::Resize, move |event| {
		if let PageEvent::Resize { width, height } = *event {
			field_resize
				.borrow_mut()
				.setup(width, height, mode_resize.get());
		}
	});

	let field_theme = field.clone();
	let on_theme = events.subscribe(EventKind::ThemeChanged, move |event| {
		if let PageEvent::ThemeChanged(mode) = *event {
			current_mode.set(mode);
			let (width, height) = viewport_size(&window);
			field_theme.borrow_mut().setup(width, height, mode);
		}
	});

	let subscriptions = vec![on_resize, on_theme];
	match FrameLoop::start(field) {
		Ok(frame_loop) => Ok(AmbientHandle {
			frame_loop,
			events: events.clone(),
			subscriptions,
		}),
		Err(e) => {
			for subscription in subscriptions {
				events.unsubscribe(subscription);
			}
			Err(e)
		}
	}
}
