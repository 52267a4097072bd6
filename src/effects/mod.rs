//! Visual effects core.
//!
//! Everything in here is plain Rust with no DOM access, so it runs (and is
//! tested) on the host. The browser glue in [`crate::web`] supplies:
//! - a [`Surface`] backed by a 2D canvas context
//! - a frame clock that calls [`Animation::frame`]
//! - DOM listeners that feed the [`Dispatcher`]
//!
//! # Example
//!
//! ```ignore
//! let mut field = AmbientField::new(surface, AmbientConfig::default(), seed);
//! field.setup(width, height, ThemeMode::Dark);
//! loop {
//!     field.frame();
//! }
//! ```

mod ambient;
mod burst;
pub mod config;
mod dispatch;
mod frame;
mod surface;
pub mod theme;
mod typewriter;
mod visibility;

pub use ambient::{AmbientField, AmbientParticle};
pub use burst::{Burst, BurstParticle, BurstShape, Trigger};
pub use config::EffectsConfig;
pub use dispatch::{Dispatcher, EventKind, PageEvent, Subscription};
pub use frame::{Animation, FrameStatus, run_to_completion};
pub use surface::Surface;
pub use theme::{Color, PreferenceStore, ThemeMode, ThemeState};
pub use typewriter::Typewriter;
pub use visibility::{RevealTracker, VisibleElement, is_in_view};
