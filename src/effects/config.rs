//! Tunables for every effect, deserialized from the page's JSON config block.
//!
//! Every field has a default, so an empty object (or no config at all) yields
//! the stock look.

use serde::Deserialize;

use super::theme::{CONFETTI_PALETTE, Color};

/// Complete effects configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct EffectsConfig {
	pub reveal: RevealConfig,
	pub ambient: AmbientConfig,
	pub burst: BurstConfig,
	pub typewriter: TypewriterConfig,
	pub theme: ThemeConfig,
}

/// Scroll reveal settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
	/// CSS selector for elements that fade in on scroll.
	pub selector: String,
	/// How far (px) an element must be above the viewport bottom to reveal.
	pub offset: f64,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			selector: ".scroll-animate".into(),
			offset: 50.0,
		}
	}
}

/// Background particle field settings.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
	/// Particles per batch.
	pub count: usize,
	/// Radius range (px), sampled uniformly.
	pub radius_min: f64,
	#[allow(missing_docs)]
	pub radius_max: f64,
	/// Upper bound on each velocity component (px/frame).
	pub max_speed: f64,
}

impl Default for AmbientConfig {
	fn default() -> Self {
		Self {
			count: 100,
			radius_min: 0.8,
			radius_max: 2.8,
			max_speed: 0.25,
		}
	}
}

/// Confetti burst settings. Velocities are px/frame.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
	/// Particles per burst.
	pub count: usize,
	/// Added to vertical velocity every frame.
	pub gravity: f64,
	/// Initial vertical velocity; negative is upward.
	pub launch_velocity: f64,
	/// Horizontal velocity is drawn from `[-spread, spread)`.
	pub spread: f64,
	/// Opacity lost per frame.
	pub opacity_decay: f64,
	/// Degrees of rotation per unit of horizontal velocity per frame.
	pub spin: f64,
	/// Piece size range (px).
	pub size_min: f64,
	#[allow(missing_docs)]
	pub size_max: f64,
	/// CSS colors. Unparseable entries are skipped.
	pub palette: Vec<String>,
}

impl Default for BurstConfig {
	fn default() -> Self {
		Self {
			count: 100,
			gravity: 0.08,
			launch_velocity: -6.0,
			spread: 4.0,
			opacity_decay: 0.005,
			spin: 2.0,
			size_min: 3.0,
			size_max: 8.0,
			palette: CONFETTI_PALETTE.iter().map(|c| c.to_css()).collect(),
		}
	}
}

impl BurstConfig {
	/// Parsed palette, falling back to the stock colors if nothing parses.
	pub fn colors(&self) -> Vec<Color> {
		let colors: Vec<Color> = self.palette.iter().filter_map(|c| Color::parse(c)).collect();
		if colors.is_empty() {
			CONFETTI_PALETTE.to_vec()
		} else {
			colors
		}
	}
}

/// Typewriter settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
	/// Milliseconds between characters.
	pub speed_ms: u32,
	/// Elements typed out at startup, each on its own timer.
	pub targets: Vec<TypewriterTarget>,
}

/// An element to type out. Its text comes from the `data-text` attribute.
#[derive(Clone, Debug, Deserialize)]
pub struct TypewriterTarget {
	/// Element id.
	pub id: String,
	/// Milliseconds before the first character.
	#[serde(default)]
	pub delay_ms: u32,
}

impl Default for TypewriterConfig {
	fn default() -> Self {
		let target = |id: &str, delay_ms| TypewriterTarget {
			id: id.into(),
			delay_ms,
		};
		Self {
			speed_ms: 50,
			targets: vec![
				target("typewriter-name", 100),
				target("typewriter-subtitle", 500),
				target("typewriter-about", 1500),
			],
		}
	}
}

/// Theme persistence settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
	/// `localStorage` key holding `"dark-mode"` or `"light-mode"`.
	pub storage_key: String,
}

impl Default for ThemeConfig {
	fn default() -> Self {
		Self {
			storage_key: "theme".into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_gives_defaults() {
		let config: EffectsConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config.reveal.offset, 50.0);
		assert_eq!(config.ambient.count, 100);
		assert_eq!(config.burst.count, 100);
		assert_eq!(config.typewriter.speed_ms, 50);
		assert_eq!(config.typewriter.targets.len(), 3);
		assert_eq!(config.theme.storage_key, "theme");
	}

	#[test]
	fn partial_sections_keep_remaining_defaults() {
		let config: EffectsConfig = serde_json::from_str(
			r##"{
				"burst": { "count": 40, "palette": ["#000000", "nope"] },
				"typewriter": { "targets": [{ "id": "hero" }] }
			}"##,
		)
		.unwrap();

		assert_eq!(config.burst.count, 40);
		assert_eq!(config.burst.gravity, 0.08);
		assert_eq!(config.burst.colors(), vec![Color::rgb(0, 0, 0)]);
		assert_eq!(config.typewriter.targets[0].id, "hero");
		assert_eq!(config.typewriter.targets[0].delay_ms, 0);
		assert_eq!(config.typewriter.speed_ms, 50);
	}

	#[test]
	fn default_palette_round_trips_through_css() {
		assert_eq!(BurstConfig::default().colors(), CONFETTI_PALETTE.to_vec());
	}

	#[test]
	fn unusable_palette_falls_back() {
		let config = BurstConfig {
			palette: vec!["chartreuse".into()],
			..BurstConfig::default()
		};
		assert_eq!(config.colors().len(), 7);
	}

	#[test]
	fn rejects_wrong_types() {
		assert!(serde_json::from_str::<EffectsConfig>(r#"{ "ambient": { "count": "lots" } }"#).is_err());
	}
}
