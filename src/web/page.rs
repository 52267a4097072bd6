//! Wires the static page markup to the effects: scroll reveals, modals,
//! confetti triggers and typewriter headings.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, KeyboardEvent, MouseEvent, Window};

use super::{CanvasSurface, FrameLoop, PageEvents, random_seed, viewport_size};
use crate::effects::config::{BurstConfig, EffectsConfig, RevealConfig, TypewriterConfig};
use crate::effects::{Burst, EventKind, PageEvent, RevealTracker, Trigger, Typewriter};

const VISIBLE_CLASS: &str = "is-visible";
const OPEN_CLASS: &str = "open";

/// Hooks every page effect up to the DOM and to `events`.
pub fn wire(config: &EffectsConfig, events: &PageEvents) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or("no window")?;
	let document = window.document().ok_or("no document")?;

	forward_window_events(&window, events)?;
	wire_reveals(&window, &document, &config.reveal, events)?;
	wire_bursts(&window, &document, &config.burst, events);
	wire_modals(&window, &document, events)?;
	start_typewriters(&window, &document, &config.typewriter);

	info!("page: effects wired");
	Ok(())
}

fn forward_window_events(window: &Window, events: &PageEvents) -> Result<(), JsValue> {
	let scroll_events = events.clone();
	listen(window, "scroll", move |_: web_sys::Event| {
		scroll_events.dispatch(PageEvent::Scroll);
	})?;

	let resize_events = events.clone();
	let resize_window = window.clone();
	listen(window, "resize", move |_: web_sys::Event| {
		let (width, height) = viewport_size(&resize_window);
		resize_events.dispatch(PageEvent::Resize { width, height });
	})?;
	Ok(())
}

fn wire_reveals(
	window: &Window,
	document: &Document,
	config: &RevealConfig,
	events: &PageEvents,
) -> Result<(), JsValue> {
	let nodes = select_all(document, &config.selector)?;
	debug!("page: tracking {} scroll reveal elements", nodes.len());
	let mut tracker = RevealTracker::new(nodes, config.offset);

	let window = window.clone();
	events.subscribe(EventKind::Scroll, move |_| {
		let (_, viewport_height) = viewport_size(&window);
		let revealed = tracker.check(viewport_height, |el| el.get_bounding_client_rect().top());
		for el in revealed {
			let _ = el.class_list().add_1(VISIBLE_CLASS);
		}
	});

	// Reveal whatever is already on screen at load.
	events.dispatch(PageEvent::Scroll);
	Ok(())
}

fn wire_bursts(window: &Window, document: &Document, config: &BurstConfig, events: &PageEvents) {
	let (window, document, config) = (window.clone(), document.clone(), config.clone());
	events.subscribe(EventKind::Burst, move |event| {
		if let PageEvent::Burst { x, y } = *event {
			if let Err(e) = spawn_burst(&window, &document, &config, x, y) {
				warn!("page: confetti burst failed: {:?}", e);
			}
		}
	});
}

/// Starts an independent burst on its own overlay canvas and frame loop.
fn spawn_burst(
	window: &Window,
	document: &Document,
	config: &BurstConfig,
	x: f64,
	y: f64,
) -> Result<FrameLoop, JsValue> {
	let (width, height) = viewport_size(window);
	let surface = CanvasSurface::overlay(document, width, height)?;
	let burst = Burst::emit(surface, config.clone(), x, y, random_seed());
	FrameLoop::start(burst)
}

fn wire_modals(window: &Window, document: &Document, events: &PageEvents) -> Result<(), JsValue> {
	for card in select_all(document, ".card[data-target]")? {
		if let Some(card) = card.dyn_ref::<web_sys::HtmlElement>() {
			let _ = card.style().set_property("cursor", "pointer");
		}
		let Some(target) = card.get_attribute("data-target") else {
			continue;
		};
		let document = document.clone();
		listen(&card, "click", move |_: MouseEvent| {
			match document.get_element_by_id(&target) {
				Some(modal) => {
					let _ = modal.class_list().add_1(OPEN_CLASS);
				}
				None => debug!("page: no modal #{}", target),
			}
		})?;
	}

	for button in select_all(document, ".modal-close")? {
		let events = events.clone();
		let close_button = button.clone();
		listen(&button, "click", move |ev: MouseEvent| {
			if let Ok(Some(modal)) = close_button.closest(".modal") {
				let _ = modal.class_list().remove_1(OPEN_CLASS);
			}
			burst_at(&events, pointer(&ev), (0.0, 0.0));
		})?;
	}

	for modal in select_all(document, ".modal")? {
		let events = events.clone();
		let backdrop = modal.clone();
		listen(&modal, "click", move |ev: MouseEvent| {
			// Only clicks on the backdrop itself, not the dialog content.
			let backdrop_target: &EventTarget = backdrop.as_ref();
			if ev.target().as_ref() == Some(backdrop_target) {
				let _ = backdrop.class_list().remove_1(OPEN_CLASS);
				burst_at(&events, pointer(&ev), (0.0, 0.0));
			}
		})?;
	}

	let (key_events, key_window, key_document) = (events.clone(), window.clone(), document.clone());
	listen(document, "keydown", move |ev: KeyboardEvent| {
		if ev.key() != "Escape" {
			return;
		}
		let open = select_all(&key_document, ".modal.open").unwrap_or_default();
		if open.is_empty() {
			return;
		}
		for modal in &open {
			let _ = modal.class_list().remove_1(OPEN_CLASS);
		}
		burst_at(&key_events, Trigger::Keyboard, viewport_size(&key_window));
	})?;

	Ok(())
}

fn pointer(ev: &MouseEvent) -> Trigger {
	Trigger::Pointer {
		x: f64::from(ev.client_x()),
		y: f64::from(ev.client_y()),
	}
}

fn burst_at(events: &PageEvents, trigger: Trigger, (width, height): (f64, f64)) {
	let (x, y) = trigger.origin(width, height);
	events.dispatch(PageEvent::Burst { x, y });
}

fn start_typewriters(window: &Window, document: &Document, config: &TypewriterConfig) {
	for target in &config.targets {
		let Some(element) = document.get_element_by_id(&target.id) else {
			debug!("page: typewriter #{} not on this page", target.id);
			continue;
		};
		let text = element.get_attribute("data-text").unwrap_or_default();
		let Some(typewriter) = Typewriter::new(&text, target.delay_ms, config.speed_ms) else {
			debug!("page: typewriter #{} has no data-text", target.id);
			continue;
		};
		element.set_text_content(Some(""));
		if let Err(e) = run_typewriter(window, element, typewriter) {
			warn!("page: typewriter #{} failed: {:?}", target.id, e);
		}
	}
}

/// Types into `element` from timer callbacks until the text is complete.
fn run_typewriter(
	window: &Window,
	element: Element,
	mut typewriter: Typewriter,
) -> Result<(), JsValue> {
	let performance = window.performance().ok_or("no performance timer")?;
	let start = performance.now();
	let Some(first) = typewriter.next_deadline() else {
		return Ok(());
	};

	let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (tick_inner, timer_window) = (tick.clone(), window.clone());
	*tick.borrow_mut() = Some(Closure::new(move || {
		let elapsed = performance.now() - start;
		if let Some(text) = typewriter.advance(elapsed) {
			element.set_text_content(Some(text));
		}
		match typewriter.next_deadline() {
			Some(deadline) => {
				let scheduled = tick_inner
					.borrow()
					.as_ref()
					.map(|cb| set_timeout(&timer_window, cb, deadline - elapsed));
				if let Some(Err(e)) = scheduled {
					warn!("page: typewriter stopped, setTimeout failed: {:?}", e);
					let _ = tick_inner.borrow_mut().take();
				}
			}
			None => {
				let _ = tick_inner.borrow_mut().take();
			}
		}
	}));

	if let Some(ref cb) = *tick.borrow() {
		set_timeout(window, cb, first)?;
	}
	Ok(())
}

fn set_timeout(window: &Window, cb: &Closure<dyn FnMut()>, delay_ms: f64) -> Result<i32, JsValue> {
	window.set_timeout_with_callback_and_timeout_and_arguments_0(
		cb.as_ref().unchecked_ref(),
		delay_ms.max(0.0).ceil() as i32,
	)
}

fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
	let list = document.query_selector_all(selector)?;
	Ok((0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect())
}

/// Adds a listener that lives as long as the page.
pub(crate) fn listen<E>(
	target: &EventTarget,
	event: &str,
	handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
	E: FromWasmAbi + 'static,
{
	let cb = Closure::<dyn FnMut(E)>::new(handler);
	target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
	cb.forget();
	Ok(())
}
