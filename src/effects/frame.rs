//! Per-frame driving contract.
//!
//! Effects never schedule themselves. Whoever owns the clock calls
//! [`Animation::frame`] once per display frame: the browser through
//! `requestAnimationFrame`, tests through a plain loop.

use std::cell::RefCell;
use std::rc::Rc;

/// What the driver should do after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
	/// Schedule another frame.
	Continue,
	/// Done; the driver drops the animation.
	Finished,
}

/// Something advanced and drawn once per frame.
pub trait Animation {
	/// Updates state, renders it, and reports whether more frames are wanted.
	fn frame(&mut self) -> FrameStatus;
}

impl<A: Animation> Animation for Rc<RefCell<A>> {
	fn frame(&mut self) -> FrameStatus {
		self.borrow_mut().frame()
	}
}

/// Runs `animation` until it finishes or `max_frames` have elapsed.
/// Returns the number of frames it took to finish, if it did.
pub fn run_to_completion(animation: &mut impl Animation, max_frames: usize) -> Option<usize> {
	(1..=max_frames).find(|_| animation.frame() == FrameStatus::Finished)
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Countdown(u32);

	impl Animation for Countdown {
		fn frame(&mut self) -> FrameStatus {
			self.0 -= 1;
			if self.0 == 0 {
				FrameStatus::Finished
			} else {
				FrameStatus::Continue
			}
		}
	}

	#[test]
	fn stops_on_the_finishing_frame() {
		let mut c = Countdown(3);
		assert_eq!(run_to_completion(&mut c, 10), Some(3));
	}

	#[test]
	fn gives_up_after_the_frame_budget() {
		let mut c = Countdown(50);
		assert_eq!(run_to_completion(&mut c, 10), None);
		assert_eq!(c.0, 40);
	}

	#[test]
	fn shared_handle_drives_the_inner_animation() {
		let shared = Rc::new(RefCell::new(Countdown(2)));
		let mut handle = shared.clone();
		assert_eq!(handle.frame(), FrameStatus::Continue);
		assert_eq!(shared.borrow().0, 1);
	}
}
