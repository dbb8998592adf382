//! Animation timing decoded from themes.
//!
//! - [`AnimationCurve`]: easing, parsed leniently from names
//! - [`AnimationSpecifier`]: delay, duration and curve read from a key cluster
//! - [`AnimationEngine`] and [`Completion`]: hand-off to the code that runs it

mod curve;
mod engine;
mod specifier;

pub use curve::AnimationCurve;
pub use engine::{AnimationEngine, AnimationWork, Completion, ImmediateEngine, ThreadEngine};
pub use specifier::AnimationSpecifier;
