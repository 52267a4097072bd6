//! Character-by-character text reveal.

/// Reveals `text` one character every `speed_ms`, starting `delay_ms` after
/// the sequencer starts. Character `k` (1-based) appears at
/// `delay_ms + k * speed_ms`. Once the full text is shown it never changes.
#[derive(Clone, Debug)]
pub struct Typewriter {
	text: String,
	/// Byte offset after each character.
	ends: Vec<usize>,
	delay_ms: f64,
	speed_ms: f64,
	shown: usize,
}

impl Typewriter {
	/// Returns `None` for empty text: there is nothing to type.
	pub fn new(text: &str, delay_ms: u32, speed_ms: u32) -> Option<Self> {
		if text.is_empty() {
			return None;
		}
		let ends = text.char_indices().map(|(i, c)| i + c.len_utf8()).collect();
		Some(Self {
			text: text.to_string(),
			ends,
			delay_ms: f64::from(delay_ms),
			speed_ms: f64::from(speed_ms),
			shown: 0,
		})
	}

	/// Number of characters visible `elapsed_ms` after start.
	pub fn shown_at(&self, elapsed_ms: f64) -> usize {
		let typing = elapsed_ms - self.delay_ms;
		if typing < self.speed_ms {
			return 0;
		}
		if self.speed_ms <= 0.0 {
			return self.ends.len();
		}
		((typing / self.speed_ms).floor() as usize).min(self.ends.len())
	}

	/// Moves to the state for `elapsed_ms`. Returns the new visible text if
	/// it changed. Time never runs backwards: earlier instants are ignored.
	pub fn advance(&mut self, elapsed_ms: f64) -> Option<&str> {
		let shown = self.shown_at(elapsed_ms);
		if shown <= self.shown {
			return None;
		}
		self.shown = shown;
		Some(self.visible())
	}

	/// The prefix typed so far.
	pub fn visible(&self) -> &str {
		match self.shown {
			0 => "",
			n => &self.text[..self.ends[n - 1]],
		}
	}

	/// Whether every character is shown.
	pub fn is_done(&self) -> bool {
		self.shown == self.ends.len()
	}

	/// When (ms after start) the next character is due, or `None` once done.
	pub fn next_deadline(&self) -> Option<f64> {
		if self.is_done() {
			None
		} else {
			Some(self.delay_ms + (self.shown + 1) as f64 * self.speed_ms)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_text_is_a_no_op() {
		assert!(Typewriter::new("", 100, 50).is_none());
	}

	#[test]
	fn types_one_character_per_interval() {
		let mut tw = Typewriter::new("Hi", 100, 50).unwrap();
		assert_eq!(tw.advance(0.0), None);
		assert_eq!(tw.advance(149.0), None);
		assert_eq!(tw.visible(), "");

		assert_eq!(tw.advance(150.0), Some("H"));
		assert_eq!(tw.advance(199.0), None);
		assert_eq!(tw.advance(200.0), Some("Hi"));
		assert!(tw.is_done());

		assert_eq!(tw.advance(10_000.0), None);
		assert_eq!(tw.visible(), "Hi");
	}

	#[test]
	fn deadlines_follow_the_cadence() {
		let mut tw = Typewriter::new("abc", 500, 50).unwrap();
		assert_eq!(tw.next_deadline(), Some(550.0));
		tw.advance(550.0);
		assert_eq!(tw.next_deadline(), Some(600.0));
		tw.advance(700.0);
		assert_eq!(tw.next_deadline(), None);
	}

	#[test]
	fn late_timer_catches_up() {
		let mut tw = Typewriter::new("hello", 0, 50).unwrap();
		assert_eq!(tw.advance(175.0), Some("hel"));
	}

	#[test]
	fn multibyte_text_splits_on_characters() {
		let mut tw = Typewriter::new("héllo ✨", 0, 10).unwrap();
		assert_eq!(tw.advance(20.0), Some("hé"));
		assert_eq!(tw.advance(70.0), Some("héllo ✨"));
	}

	#[test]
	fn sequencers_are_independent() {
		let mut name = Typewriter::new("Ada", 100, 50).unwrap();
		let mut about = Typewriter::new("Engineer", 1500, 50).unwrap();

		name.advance(400.0);
		assert!(name.is_done());
		assert_eq!(about.advance(400.0), None);
		assert_eq!(about.visible(), "");
	}
}
