//! `requestAnimationFrame` driver for [`Animation`]s.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::effects::{Animation, FrameStatus};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running frame loop. Every loop has its own callback and
/// request id, so loops never interfere with each other.
#[derive(Clone)]
pub struct FrameLoop {
	callback: FrameCallback,
	request_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
	/// Calls `animation.frame()` once per display frame until it reports
	/// [`FrameStatus::Finished`] or the loop is cancelled.
	pub fn start(mut animation: impl Animation + 'static) -> Result<FrameLoop, JsValue> {
		let window = web_sys::window().ok_or("no window")?;
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let request_id = Rc::new(Cell::new(None));

		let (callback_inner, request_inner) = (callback.clone(), request_id.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			request_inner.set(None);
			if animation.frame() == FrameStatus::Finished {
				// Dropping the closure ends the loop.
				let _ = callback_inner.borrow_mut().take();
				return;
			}
			let next = callback_inner.borrow().as_ref().map(request_frame);
			match next {
				Some(Some(id)) => request_inner.set(Some(id)),
				// Could not reschedule: release the closure so the loop reads as stopped.
				Some(None) => {
					let _ = callback_inner.borrow_mut().take();
				}
				None => {}
			}
		}));

		if let Some(ref cb) = *callback.borrow() {
			request_id.set(Some(
				window.request_animation_frame(cb.as_ref().unchecked_ref())?,
			));
		}

		Ok(FrameLoop {
			callback,
			request_id,
		})
	}

	/// Stops the loop before its next frame.
	pub fn cancel(&self) {
		if let (Some(id), Some(window)) = (self.request_id.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		let _ = self.callback.borrow_mut().take();
	}

	/// Whether another frame is still scheduled or being run.
	pub fn is_running(&self) -> bool {
		self.callback.borrow().is_some()
	}
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	let Some(window): Option<Window> = web_sys::window() else {
		warn!("frame loop: no window to schedule on");
		return None;
	};
	match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
		Ok(id) => Some(id),
		Err(e) => {
			warn!("frame loop: requestAnimationFrame failed: {:?}", e);
			None
		}
	}
}
