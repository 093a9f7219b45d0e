//! Conversions between an [`Outcome`] and its payload.
//!
//! Arity lives in the payload type, so extracting and rebuilding an outcome
//! never inspects its shape: a bare tag round-trips through `()`, a single
//! value through itself and several values through a tuple.

use crate::outcome::{Flow, Outcome};

/// Extracts the payload of an outcome regardless of its tag.
///
/// ```rust
/// use outcomes::{unwrap_payload, Outcome};
///
/// assert_eq!(unwrap_payload(Outcome::<_, (i32, i32, i32)>::Success((1, 2, 3))), (1, 2, 3));
/// assert_eq!(unwrap_payload(Outcome::<(), ()>::Failure(())), ());
/// ```
pub fn unwrap_payload<P>(outcome: Outcome<P, P>) -> P {
    match outcome {
        Outcome::Success(payload) | Outcome::Failure(payload) => payload,
    }
}

/// Wraps a payload as a success. `make_success(())` is the bare success tag.
pub fn make_success<T, E>(payload: T) -> Outcome<T, E> {
    Outcome::Success(payload)
}

/// Wraps a payload as a failure. `make_failure(())` is the bare failure tag.
pub fn make_failure<T, E>(payload: E) -> Outcome<T, E> {
    Outcome::Failure(payload)
}

/// The only control signal folds consume: success continues, failure halts.
pub fn classify<T, E>(outcome: &Outcome<T, E>) -> Flow {
    match outcome {
        Outcome::Success(_) => Flow::Continue,
        Outcome::Failure(_) => Flow::Halt,
    }
}

/// Guard for a success-tagged outcome.
pub fn is_success<T, E>(outcome: &Outcome<T, E>) -> bool {
    classify(outcome) == Flow::Continue
}

/// Guard for a failure-tagged outcome.
pub fn is_failure<T, E>(outcome: &Outcome<T, E>) -> bool {
    classify(outcome) == Flow::Halt
}
