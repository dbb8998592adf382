//! The seam to whatever actually runs animations.
//!
//! A theme only decides *how* an animation is timed. Running it is the job of
//! an [`AnimationEngine`] supplied by the host: it receives the resolved
//! [`AnimationSpecifier`], a work closure to perform the visual change, and a
//! [`Completion`] that must be reported exactly once.
//!
//! Two small engines are included: [`ImmediateEngine`] performs the work
//! inline (handy for tests and for reduced-motion settings) and
//! [`ThreadEngine`] honors the timing on a background thread.

use std::fmt;
use std::thread;

use super::specifier::AnimationSpecifier;

/// The work performed by an animation.
pub type AnimationWork = Box<dyn FnOnce() + Send + 'static>;

/// Runs animations described by an [`AnimationSpecifier`].
pub trait AnimationEngine {
    /// Starts an animation and returns without waiting for it.
    ///
    /// The engine owns `completion` and should call
    /// [`Completion::complete`] when the animation ends. Dropping it
    /// instead reports an interrupted animation.
    fn run(&self, spec: AnimationSpecifier, work: AnimationWork, completion: Completion);
}

impl<E: AnimationEngine + ?Sized> AnimationEngine for &E {
    fn run(&self, spec: AnimationSpecifier, work: AnimationWork, completion: Completion) {
        (**self).run(spec, work, completion)
    }
}

/// A single-shot completion callback.
///
/// The callback receives `true` when the animation ran to its end and
/// `false` when it was interrupted. It fires exactly once: either through
/// [`complete`](Completion::complete), which consumes the handle, or with
/// `false` when the handle is dropped unused.
pub struct Completion {
    callback: Option<Box<dyn FnOnce(bool) + Send + 'static>>,
}

impl Completion {
    pub fn new(callback: impl FnOnce(bool) + Send + 'static) -> Self {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    /// A completion that ignores the outcome.
    pub fn noop() -> Self {
        Self { callback: None }
    }

    /// Reports the outcome and consumes the handle.
    pub fn complete(mut self, finished: bool) {
        self.fire(finished);
    }

    fn fire(&mut self, finished: bool) {
        if let Some(callback) = self.callback.take() {
            callback(finished);
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        self.fire(false);
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("pending", &self.callback.is_some())
            .finish()
    }
}

/// Performs the work immediately and reports a finished animation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateEngine;

impl AnimationEngine for ImmediateEngine {
    fn run(&self, _spec: AnimationSpecifier, work: AnimationWork, completion: Completion) {
        work();
        completion.complete(true);
    }
}

/// Honors delay and duration on a spawned thread.
///
/// The thread sleeps for the delay, performs the work, sleeps for the
/// duration and then completes. Sampling the curve is up to the work
/// closure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEngine;

impl AnimationEngine for ThreadEngine {
    fn run(&self, spec: AnimationSpecifier, work: AnimationWork, completion: Completion) {
        let spawned = thread::Builder::new()
            .name("livery-animation".to_string())
            .spawn(move || {
                thread::sleep(spec.delay());
                work();
                thread::sleep(spec.duration());
                completion.complete(true);
            });

        // On spawn failure the closure, and with it the completion, is
        // dropped, which reports an interrupted animation.
        if let Err(err) = spawned {
            tracing::warn!(error = %err, "failed to spawn animation thread");
        }
    }
}
