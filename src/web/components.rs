//! The theme toggle, either bound to the page's own button or mounted by Leptos.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{Element, MouseEvent};

use super::page::listen;
use super::{LocalStore, PageEvents};
use crate::effects::{PageEvent, ThemeMode, ThemeState};

/// Id of the page's toggle button.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Theme state shared between the app and the toggle button.
pub type SharedTheme = Rc<RefCell<ThemeState<LocalStore>>>;

fn flip(theme: &SharedTheme, mode: RwSignal<ThemeMode>, events: &PageEvents) {
	let next = theme.borrow_mut().toggle();
	mode.set(next);
	events.dispatch(PageEvent::ThemeChanged(next));
}

/// Button that flips between light and dark mode and persists the choice.
/// Mounted only when the page has no `#theme-toggle` of its own.
#[component]
pub fn ThemeToggle(mode: RwSignal<ThemeMode>, theme: SharedTheme, events: PageEvents) -> impl IntoView {
	let on_click = move |_: MouseEvent| flip(&theme, mode, &events);

	view! {
		<button id=THEME_TOGGLE_ID class="theme-toggle" on:click=on_click>
			{move || mode.get().toggle_label()}
		</button>
	}
}

/// Gives an existing toggle button the same behavior as [`ThemeToggle`]:
/// clicks flip the theme and its label follows `mode`.
pub fn bind_theme_toggle(
	button: Element,
	mode: RwSignal<ThemeMode>,
	theme: SharedTheme,
	events: PageEvents,
) -> Result<(), JsValue> {
	listen(&button, "click", move |_: MouseEvent| flip(&theme, mode, &events))?;
	Effect::new(move |_| button.set_text_content(Some(mode.get().toggle_label())));
	Ok(())
}
