use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::safe::safe_value;

/// Tag of an [`Outcome`]. The tag alone decides whether a fold keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Success,
    Failure,
}

/// Control signal produced by [`crate::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Continue,
    Halt,
}

/// Either a success or a failure, each side carrying its own payload.
///
/// Payloads of any arity are expressed through the payload type: `()` for a
/// bare tag, a single value, or a tuple (or `#[derive(Payload)]` struct) for
/// several values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

use Outcome::{Failure, Success};

impl<T, E> Outcome<T, E> {
    pub fn tag(&self) -> Tag {
        match self {
            Success(_) => Tag::Success,
            Failure(_) => Tag::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// Splits the outcome into its tag and its payload.
    pub fn into_parts(self) -> (Tag, Result<T, E>) {
        let tag = self.tag();
        (tag, self.into_result())
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Success(v) => Ok(v),
            Failure(e) => Err(e),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(v) => Success(v),
            Failure(e) => Failure(e),
        }
    }

    pub fn success(self) -> Option<T> {
        match self {
            Success(v) => Some(v),
            Failure(_) => None,
        }
    }

    pub fn failure(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(e) => Some(e),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(v) => Success(f(v)),
            Failure(e) => Failure(e),
        }
    }

    pub fn map_error<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Success(v) => Success(v),
            Failure(e) => Failure(f(e)),
        }
    }

    /// Maps whichever side is present, keeping the tag.
    pub fn bimap<U, G, F, H>(self, on_success: F, on_failure: H) -> Outcome<U, G>
    where
        F: FnOnce(T) -> U,
        H: FnOnce(E) -> G,
    {
        match self {
            Success(v) => Success(on_success(v)),
            Failure(e) => Failure(on_failure(e)),
        }
    }

    /// Runs a side effect on a success payload and returns the outcome unchanged.
    ///
    /// A panic raised by `f` is logged and swallowed.
    pub fn peek<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Success(ref v) = self {
            if let Failure(e) = safe_value(|| f(v)) {
                warn!("peek side effect panicked: {}", e);
            }
        }
        self
    }

    /// Single-outcome traverse: a success is handed to `f` and its outcome
    /// returned as is, a failure is returned without calling `f`.
    pub fn traverse<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.flat_map(f)
    }

    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Success(v) => f(v),
            Failure(e) => Failure(e),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(v) => v,
            Failure(_) => default,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Success(v) => v,
            Failure(e) => f(e),
        }
    }
}

impl<T, E> Outcome<T, E>
where
    E: Debug,
{
    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics on a failure, with the failure payload in the message.
    pub fn unwrap(self) -> T {
        match self {
            Success(v) => v,
            Failure(e) => panic!("called `Outcome::unwrap()` on a `Failure` value: {:?}", e),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics on a failure with `msg` followed by the failure payload.
    pub fn expect(self, msg: &str) -> T {
        match self {
            Success(v) => v,
            Failure(e) => panic!("{}: {:?}", msg, e),
        }
    }
}

impl<T, E> Outcome<T, E>
where
    T: Debug,
{
    /// Returns the failure payload, panicking on a success.
    pub fn unwrap_error(self) -> E {
        match self {
            Success(v) => panic!(
                "called `Outcome::unwrap_error()` on a `Success` value: {:?}",
                v
            ),
            Failure(e) => e,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Success(v),
            Err(e) => Failure(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
