//! Colors, the light/dark mode and its persisted preference.

use log::debug;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	#[allow(missing_docs)]
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses a CSS color string.
	/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation.
	pub fn parse(color_str: &str) -> Option<Color> {
		let s = color_str.trim();
		if let Some(hex) = s.strip_prefix('#') {
			if hex.len() != 6 || !hex.is_ascii() {
				return None;
			}
			let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
			let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
			let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
			Some(Color::rgb(r, g, b))
		} else if s.starts_with("rgb") {
			let nums: Vec<&str> = s
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.map(str::trim)
				.collect();
			if !(3..=4).contains(&nums.len()) {
				return None;
			}
			let r = nums[0].parse().ok()?;
			let g = nums[1].parse().ok()?;
			let b = nums[2].parse().ok()?;
			let a = match nums.get(3) {
				Some(a) => a.parse::<f64>().ok()?.clamp(0.0, 1.0),
				None => 1.0,
			};
			Some(Color::rgba(r, g, b, a))
		} else {
			None
		}
	}
}

/// Confetti palette used when the configuration does not supply one.
pub const CONFETTI_PALETTE: [Color; 7] = [
	Color::rgb(255, 99, 71),   // Tomato
	Color::rgb(255, 165, 0),   // Orange
	Color::rgb(255, 215, 0),   // Gold
	Color::rgb(173, 255, 47),  // Green yellow
	Color::rgb(64, 224, 208),  // Turquoise
	Color::rgb(30, 144, 255),  // Dodger blue
	Color::rgb(238, 130, 238), // Violet
];

/// Page color mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ThemeMode {
	Dark,
	#[default]
	Light,
}

impl ThemeMode {
	/// The persisted value, which doubles as the body class name.
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Dark => "dark-mode",
			ThemeMode::Light => "light-mode",
		}
	}

	/// Inverse of [`as_str`](Self::as_str).
	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"dark-mode" => Some(ThemeMode::Dark),
			"light-mode" => Some(ThemeMode::Light),
			_ => None,
		}
	}

	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Dark => ThemeMode::Light,
			ThemeMode::Light => ThemeMode::Dark,
		}
	}

	/// Ambient particle color: faint white on dark pages, faint black on light ones.
	pub fn particle_color(self) -> Color {
		match self {
			ThemeMode::Dark => Color::rgba(255, 255, 255, 0.4),
			ThemeMode::Light => Color::rgba(0, 0, 0, 0.2),
		}
	}

	/// Toggle button text, naming the mode a click switches to.
	pub fn toggle_label(self) -> &'static str {
		match self {
			ThemeMode::Dark => "☀️ Light Mode",
			ThemeMode::Light => "🌙 Dark Mode",
		}
	}
}

/// Key/value storage for the single persisted theme preference.
pub trait PreferenceStore {
	/// The stored value, if any.
	fn load(&self) -> Option<String>;
	/// Overwrites the stored value. Failures are the store's to log.
	fn save(&mut self, value: &str);
}

/// Owns the current mode and writes every change through to its store.
#[derive(Debug)]
pub struct ThemeState<S> {
	mode: ThemeMode,
	store: S,
}

impl<S: PreferenceStore> ThemeState<S> {
	/// Reads the stored preference once. Missing or unknown values mean light mode.
	pub fn load(store: S) -> Self {
		let mode = store
			.load()
			.and_then(|v| ThemeMode::parse(&v))
			.unwrap_or_default();
		debug!("theme: starting in {}", mode.as_str());
		Self { mode, store }
	}

	/// The current mode.
	pub fn mode(&self) -> ThemeMode {
		self.mode
	}

	/// Flips the mode, persists it and returns the new value.
	pub fn toggle(&mut self) -> ThemeMode {
		self.mode = self.mode.toggled();
		self.store.save(self.mode.as_str());
		self.mode
	}

	/// The backing store.
	pub fn store(&self) -> &S {
		&self.store
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Default)]
	struct MemoryStore(Option<String>);

	impl PreferenceStore for MemoryStore {
		fn load(&self) -> Option<String> {
			self.0.clone()
		}

		fn save(&mut self, value: &str) {
			self.0 = Some(value.to_string());
		}
	}

	#[test]
	fn missing_preference_starts_light() {
		let state = ThemeState::load(MemoryStore::default());
		assert_eq!(state.mode(), ThemeMode::Light);
	}

	#[test]
	fn garbage_preference_starts_light() {
		let state = ThemeState::load(MemoryStore(Some("solarized".into())));
		assert_eq!(state.mode(), ThemeMode::Light);
	}

	#[test]
	fn toggle_persists_every_change() {
		let mut state = ThemeState::load(MemoryStore(Some("dark-mode".into())));
		assert_eq!(state.mode(), ThemeMode::Dark);

		assert_eq!(state.toggle(), ThemeMode::Light);
		assert_eq!(state.store().0.as_deref(), Some("light-mode"));
	}

	#[test]
	fn double_toggle_restores_value_and_particle_color() {
		let mut state = ThemeState::load(MemoryStore(Some("dark-mode".into())));
		let color_before = state.mode().particle_color();

		state.toggle();
		assert_ne!(state.mode().particle_color(), color_before);
		state.toggle();

		assert_eq!(state.store().0.as_deref(), Some("dark-mode"));
		assert_eq!(state.mode().particle_color(), color_before);
	}

	#[test]
	fn toggle_label_names_the_other_mode() {
		assert_eq!(ThemeMode::Dark.toggle_label(), "☀️ Light Mode");
		assert_eq!(ThemeMode::Light.toggle_label(), "🌙 Dark Mode");
	}

	#[test]
	fn parses_hex_and_functional_colors() {
		assert_eq!(Color::parse("#1e90ff"), Some(Color::rgb(30, 144, 255)));
		assert_eq!(
			Color::parse("rgba(0, 0, 0, 0.2)"),
			Some(Color::rgba(0, 0, 0, 0.2))
		);
		assert_eq!(Color::parse("rgb(1,2,3)"), Some(Color::rgb(1, 2, 3)));
		assert_eq!(Color::parse("#fff"), None);
		assert_eq!(Color::parse("papayawhip"), None);
	}

	#[test]
	fn css_output_drops_alpha_when_opaque() {
		assert_eq!(Color::rgb(255, 99, 71).to_css(), "#ff6347");
		assert_eq!(
			ThemeMode::Dark.particle_color().to_css(),
			"rgba(255, 255, 255, 0.4)"
		);
	}
}
