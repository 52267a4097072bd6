//! Scroll-triggered reveal detection.

/// Whether an element whose top edge sits at `element_top` (viewport
/// coordinates) has scrolled at least `offset` pixels into a viewport of
/// `viewport_height`.
pub fn is_in_view(element_top: f64, viewport_height: f64, offset: f64) -> bool {
	element_top <= viewport_height - offset
}

/// A tracked element and its one-way reveal flag.
#[derive(Clone, Debug)]
pub struct VisibleElement<T> {
	/// The tracked element.
	pub node: T,
	revealed: bool,
}

impl<T> VisibleElement<T> {
	/// Whether this element has been revealed. Never goes back to `false`.
	pub fn revealed(&self) -> bool {
		self.revealed
	}
}

/// Tracks which elements have been revealed. Reveals are monotonic.
#[derive(Clone, Debug)]
pub struct RevealTracker<T> {
	elements: Vec<VisibleElement<T>>,
	offset: f64,
}

impl<T> RevealTracker<T> {
	/// Tracks `nodes`, none revealed yet. See [`is_in_view`] for `offset`.
	pub fn new(nodes: impl IntoIterator<Item = T>, offset: f64) -> Self {
		Self {
			elements: nodes
				.into_iter()
				.map(|node| VisibleElement {
					node,
					revealed: false,
				})
				.collect(),
			offset,
		}
	}

	/// Checks every unrevealed element against the viewport and marks the
	/// ones in view. Returns the nodes revealed by this call only.
	pub fn check(&mut self, viewport_height: f64, top_of: impl Fn(&T) -> f64) -> Vec<&T> {
		let offset = self.offset;
		self.elements
			.iter_mut()
			.filter(|e| !e.revealed)
			.filter_map(|e| {
				if is_in_view(top_of(&e.node), viewport_height, offset) {
					e.revealed = true;
					Some(&e.node)
				} else {
					None
				}
			})
			.collect()
	}

	/// Every tracked element, revealed or not.
	pub fn elements(&self) -> &[VisibleElement<T>] {
		&self.elements
	}

	/// How many elements are still hidden.
	pub fn pending(&self) -> usize {
		self.elements.iter().filter(|e| !e.revealed).count()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn boundary_counts_as_in_view() {
		assert!(is_in_view(750.0, 800.0, 50.0));
		assert!(is_in_view(749.9, 800.0, 50.0));
		assert!(!is_in_view(750.1, 800.0, 50.0));
	}

	#[test]
	fn zero_offset_uses_viewport_bottom() {
		assert!(is_in_view(800.0, 800.0, 0.0));
		assert!(!is_in_view(801.0, 800.0, 0.0));
		assert!(is_in_view(-300.0, 800.0, 0.0));
	}

	#[test]
	fn reveals_only_elements_in_view() {
		let mut tracker = RevealTracker::new([100.0, 760.0, 2000.0], 50.0);
		let revealed: Vec<f64> = tracker.check(800.0, |top| *top).into_iter().copied().collect();
		assert_eq!(revealed, vec![100.0]);
		assert_eq!(tracker.pending(), 2);
	}

	#[test]
	fn repeated_checks_are_no_ops() {
		let mut tracker = RevealTracker::new(["a"], 50.0);
		assert_eq!(tracker.check(800.0, |_| 0.0).len(), 1);
		assert!(tracker.check(800.0, |_| 0.0).is_empty());
	}

	#[test]
	fn revealed_elements_stay_revealed() {
		let mut tracker = RevealTracker::new(["hero", "footer"], 50.0);
		tracker.check(800.0, |n| if *n == "hero" { 10.0 } else { 5000.0 });

		// Scrolled back up: everything is now far below the fold.
		tracker.check(800.0, |_| 10_000.0);

		let states: Vec<bool> = tracker.elements().iter().map(|e| e.revealed()).collect();
		assert_eq!(states, vec![true, false]);
	}
}
