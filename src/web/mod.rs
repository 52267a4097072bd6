//! Browser glue: canvas surfaces, frame loops, storage and DOM wiring.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use web_sys::Window;

use crate::effects::{Dispatcher, EventKind, PageEvent, Subscription, ThemeMode};

mod background;
mod canvas;
mod components;
mod frame_loop;
pub mod page;
mod storage;

pub use background::{AmbientHandle, BACKGROUND_CANVAS_ID, start_background};
pub use canvas::CanvasSurface;
pub use components::{SharedTheme, THEME_TOGGLE_ID, ThemeToggle, bind_theme_toggle};
pub use frame_loop::FrameLoop;
pub use storage::LocalStore;

/// Shared handle to the page's event dispatcher.
#[derive(Clone, Default)]
pub struct PageEvents(Rc<RefCell<Dispatcher>>);

impl PageEvents {
	/// Registers `handler` for events of `kind`.
	pub fn subscribe(
		&self,
		kind: EventKind,
		handler: impl FnMut(&PageEvent) + 'static,
	) -> Subscription {
		self.0.borrow_mut().subscribe(kind, handler)
	}

	/// Removes a handler. Returns `false` if it was already gone.
	pub fn unsubscribe(&self, subscription: Subscription) -> bool {
		self.0.borrow_mut().unsubscribe(subscription)
	}

	/// Runs every handler for the event and returns how many ran.
	/// Handlers must not dispatch; a nested dispatch is dropped with a warning.
	pub fn dispatch(&self, event: PageEvent) -> usize {
		match self.0.try_borrow_mut() {
			Ok(mut dispatcher) => dispatcher.dispatch(&event),
			Err(_) => {
				warn!("events: dropped nested {:?}", event.kind());
				0
			}
		}
	}
}

/// Current `(innerWidth, innerHeight)`, or zeros if unavailable.
pub fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
		v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
	};
	(dim(window.inner_width()), dim(window.inner_height()))
}

/// Fresh RNG seed for an effect instance.
pub fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Puts exactly one of the mode classes on `<body>`.
pub fn apply_theme_class(mode: ThemeMode) {
	let Some(body) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
	else {
		return;
	};
	let classes = body.class_list();
	let _ = classes.remove_2(
		ThemeMode::Dark.as_str(),
		ThemeMode::Light.as_str(),
	);
	let _ = classes.add_1(mode.as_str());
}
