//! Page-level event fan-out.
//!
//! Browser listeners translate DOM events into [`PageEvent`]s and hand them
//! to one [`Dispatcher`]; effects subscribe to the kinds they care about.

use super::theme::ThemeMode;

/// An event the effects react to.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum PageEvent {
	Scroll,
	/// New viewport size.
	Resize { width: f64, height: f64 },
	/// The mode after the change.
	ThemeChanged(ThemeMode),
	/// Request for a confetti burst at client coordinates.
	Burst { x: f64, y: f64 },
}

/// Discriminant of [`PageEvent`], used as the subscription key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum EventKind {
	Scroll,
	Resize,
	ThemeChanged,
	Burst,
}

impl PageEvent {
	/// The subscription key this event is delivered under.
	pub fn kind(&self) -> EventKind {
		match self {
			PageEvent::Scroll => EventKind::Scroll,
			PageEvent::Resize { .. } => EventKind::Resize,
			PageEvent::ThemeChanged(_) => EventKind::ThemeChanged,
			PageEvent::Burst { .. } => EventKind::Burst,
		}
	}
}

/// Handle returned by [`Dispatcher::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription(u64);

type Handler = Box<dyn FnMut(&PageEvent)>;

/// Routes events to handlers in subscription order.
#[derive(Default)]
pub struct Dispatcher {
	next_id: u64,
	handlers: Vec<(Subscription, EventKind, Handler)>,
}

impl Dispatcher {
	/// An empty dispatcher.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `handler` for `kind`. Handlers run in subscription order.
	pub fn subscribe(
		&mut self,
		kind: EventKind,
		handler: impl FnMut(&PageEvent) + 'static,
	) -> Subscription {
		let id = Subscription(self.next_id);
		self.next_id += 1;
		self.handlers.push((id, kind, Box::new(handler)));
		id
	}

	/// Returns false if the subscription was already gone.
	pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
		let before = self.handlers.len();
		self.handlers.retain(|(id, _, _)| *id != subscription);
		self.handlers.len() != before
	}

	/// Calls every handler subscribed to the event's kind. Returns how many ran.
	pub fn dispatch(&mut self, event: &PageEvent) -> usize {
		let kind = event.kind();
		let mut ran = 0;
		for (_, _, handler) in self.handlers.iter_mut().filter(|(_, k, _)| *k == kind) {
			handler(event);
			ran += 1;
		}
		ran
	}
}
