//! `localStorage`-backed theme preference.

use log::warn;
use web_sys::Storage;

use crate::effects::PreferenceStore;

/// One `localStorage` key. Without storage access (private mode, sandboxed
/// frames) reads return nothing and writes are dropped.
pub struct LocalStore {
	storage: Option<Storage>,
	key: String,
}

impl LocalStore {
	/// Binds to `key` in `localStorage`, logging once if storage is unavailable.
	pub fn new(key: impl Into<String>) -> Self {
		let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
		if storage.is_none() {
			warn!("storage: localStorage unavailable, theme will not persist");
		}
		Self {
			storage,
			key: key.into(),
		}
	}
}

impl PreferenceStore for LocalStore {
	fn load(&self) -> Option<String> {
		self.storage.as_ref()?.get_item(&self.key).ok().flatten()
	}

	fn save(&mut self, value: &str) {
		if let Some(storage) = &self.storage {
			if let Err(e) = storage.set_item(&self.key, value) {
				warn!("storage: failed to persist {}: {:?}", self.key, e);
			}
		}
	}
}
