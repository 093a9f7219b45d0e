use anyhow::anyhow;
use log::debug;
use std::{
    any::Any,
    panic::{catch_unwind, AssertUnwindSafe},
};

use crate::outcome::Outcome;

type Cleanup<'a> = Box<dyn FnOnce() + 'a>;

/// Runs the cleanup step when dropped, so it also runs while unwinding.
struct CleanupGuard<'a>(Option<Cleanup<'a>>);

impl<'a> Drop for CleanupGuard<'a> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.0.take() {
            cleanup();
        }
    }
}

/// Guarded invocation of a fallible callable.
///
/// ```rust
/// use outcomes::{Outcome, Safe};
///
/// let mut cleaned = false;
/// let outcome = Safe::new(|| -> anyhow::Result<i32> { anyhow::bail!("no connection") })
///     .cleanup(|| cleaned = true)
///     .run();
///
/// assert!(outcome.is_failure());
/// assert!(cleaned);
/// ```
pub struct Safe<'a, F> {
    f: F,
    cleanup: Option<Cleanup<'a>>,
}

impl<'a, T, F> Safe<'a, F>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    pub fn new(f: F) -> Self {
        Self { f, cleanup: None }
    }

    /// Registers a step that runs exactly once after the callable, whatever
    /// it returned and even if it panicked.
    pub fn cleanup<C>(mut self, cleanup: C) -> Self
    where
        C: FnOnce() + 'a,
    {
        self.cleanup = Some(Box::new(cleanup));
        self
    }

    /// Calls the callable, turning a returned error or a panic into a failure.
    pub fn run(self) -> Outcome<T, anyhow::Error> {
        let _guard = CleanupGuard(self.cleanup);

        match catch_unwind(AssertUnwindSafe(self.f)) {
            Ok(Ok(value)) => Outcome::Success(value),
            Ok(Err(e)) => {
                debug!("safe: callable returned an error: {}", e);
                Outcome::Failure(e)
            }
            Err(panic) => {
                let e = panic_to_error(panic);
                debug!("safe: callable {}", e);
                Outcome::Failure(e)
            }
        }
    }
}

/// Calls `f`, capturing a returned error or a panic as a failure.
pub fn safe<T, F>(f: F) -> Outcome<T, anyhow::Error>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    Safe::new(f).run()
}

/// [`safe`] for callables that cannot return an error, only panic.
pub fn safe_value<T, F>(f: F) -> Outcome<T, anyhow::Error>
where
    F: FnOnce() -> T,
{
    safe(|| Ok(f()))
}

fn panic_to_error(panic: Box<dyn Any + Send>) -> anyhow::Error {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        anyhow!("panicked: {}", msg)
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        anyhow!("panicked: {}", msg)
    } else {
        anyhow!("panicked with a non-string payload")
    }
}
