//! personal-effects: the visual effects layer of a personal site.
//!
//! Scroll reveals, an ambient particle background, confetti bursts when
//! modals close, typewriter headings and a persisted light/dark toggle. The
//! effect logic lives in [`effects`] and is host-testable; [`web`] binds it
//! to the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod effects;
pub mod web;

pub use effects::EffectsConfig;
use effects::ThemeState;
use web::{LocalStore, PageEvents, ThemeToggle};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("personal-effects: logging initialized");
}

/// Load effect settings from a script element with id="effects-config".
/// Expected format: JSON matching [`EffectsConfig`]; every field is optional.
pub fn load_config() -> Option<EffectsConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("effects-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<EffectsConfig>(&json_text) {
		Ok(config) => {
			info!(
				"personal-effects: loaded config ({} typewriter targets)",
				config.typewriter.targets.len()
			);
			Some(config)
		}
		Err(e) => {
			warn!("personal-effects: failed to parse effects config: {}", e);
			None
		}
	}
}

/// Main application component.
///
/// Wires the existing page markup. The background field runs on the page's
/// `#background-canvas` if there is one and stays inert otherwise. The
/// page's `#theme-toggle` is reused when present; otherwise one is mounted.
#[component]
pub fn App() -> impl IntoView {
	let config = load_config().unwrap_or_default();
	let events = PageEvents::default();

	let theme = Rc::new(RefCell::new(ThemeState::load(LocalStore::new(
		config.theme.storage_key.clone(),
	))));
	let mode = RwSignal::new(theme.borrow().mode());
	Effect::new(move |_| web::apply_theme_class(mode.get()));

	let document = web_sys::window().and_then(|w| w.document());

	if let Some(document) = &document {
		match web::start_background(document, mode.get_untracked(), config.ambient, &events) {
			// Dropped, and so stopped, when the app's owner is cleaned up.
			Ok(Some(handle)) => {
				StoredValue::new_local(handle);
			}
			Ok(None) => {}
			Err(e) => warn!("ambient: background disabled: {:?}", e),
		}
	}

	if let Err(e) = web::page::wire(&config, &events) {
		warn!("personal-effects: page wiring failed: {:?}", e);
	}

	let existing_toggle = document.and_then(|d| d.get_element_by_id(web::THEME_TOGGLE_ID));
	match existing_toggle {
		Some(button) => {
			if let Err(e) = web::bind_theme_toggle(button, mode, theme, events) {
				warn!("theme: could not bind #{}: {:?}", web::THEME_TOGGLE_ID, e);
			}
			None
		}
		None => Some(view! { <ThemeToggle mode=mode theme=theme events=events /> }),
	}
}
