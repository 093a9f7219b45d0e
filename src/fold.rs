//! Short-circuiting folds over collections of outcomes.
//!
//! Every fold is a sequential left-to-right scan that pulls one element at a
//! time from its input and returns as soon as it meets a failure. Elements
//! after the failure are never pulled, so lazy and infinite iterators are
//! fine as inputs. Success payloads of arity 0 are skipped, everything else is
//! accumulated in input order.

use log::{debug, trace};
use std::fmt::{self, Debug, Display};

use crate::{normalize::make_failure, outcome::Outcome, payload::Payload};

/// A fold stopped at a failure.
///
/// Carries the position of the halting element and its failure payload,
/// which is never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldHalted<E> {
    pub index: usize,
    pub failure: E,
}

impl<E> FoldHalted<E> {
    pub fn into_failure(self) -> E {
        self.failure
    }
}

impl<E> Display for FoldHalted<E>
where
    E: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fold halted at element {}: {}", self.index, self.failure)
    }
}

impl<E> std::error::Error for FoldHalted<E> where E: Debug + Display {}

/// Success payloads gathered by one fold call.
struct Accumulator<T> {
    name: &'static str,
    values: Vec<T>,
    index: usize,
}

impl<T> Accumulator<T>
where
    T: Payload,
{
    fn new(name: &'static str) -> Self {
        trace!("{}: fold started", name);
        Self {
            name,
            values: Vec::new(),
            index: 0,
        }
    }

    /// Folds `outcomes` into the accumulator, stopping at the first failure.
    fn run<E, I>(mut self, outcomes: I) -> Result<Vec<T>, FoldHalted<E>>
    where
        I: Iterator<Item = Outcome<T, E>>,
    {
        for outcome in outcomes {
            match outcome {
                Outcome::Success(payload) => self.push(payload),
                Outcome::Failure(failure) => {
                    debug!("{}: halted at element {}", self.name, self.index);
                    return Err(FoldHalted {
                        index: self.index,
                        failure,
                    });
                }
            }
            self.index += 1;
        }

        trace!(
            "{}: fold finished after {} elements, {} kept",
            self.name,
            self.index,
            self.values.len()
        );
        Ok(self.values)
    }

    fn push(&mut self, payload: T) {
        if payload.arity() > 0 {
            self.values.push(payload);
        }
    }
}

fn into_outcome<T, E>(result: Result<Vec<T>, FoldHalted<E>>) -> Outcome<Vec<T>, E> {
    match result {
        Ok(values) => Outcome::Success(values),
        Err(halted) => make_failure(halted.into_failure()),
    }
}

/// Like [`sequence`], but reports where the fold halted.
pub fn try_sequence<T, E, I>(outcomes: I) -> Result<Vec<T>, FoldHalted<E>>
where
    T: Payload,
    I: IntoIterator<Item = Outcome<T, E>>,
{
    Accumulator::new("sequence").run(outcomes.into_iter())
}

/// Turns a collection of outcomes into one outcome.
///
/// Returns a success with every payload that is not a bare tag, in input
/// order, or the first failure. Nothing after the first failure is pulled
/// from `outcomes`.
///
/// ```rust
/// use outcomes::{sequence, Outcome::{self, Success}};
///
/// let bare: Outcome<Vec<()>, ()> = sequence(vec![Success(()), Success(())]);
/// assert_eq!(bare, Success(vec![]));
/// ```
pub fn sequence<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    T: Payload,
    I: IntoIterator<Item = Outcome<T, E>>,
{
    into_outcome(try_sequence(outcomes))
}

/// Like [`traverse`], but reports where the fold halted.
pub fn try_traverse<A, T, E, I, F>(items: I, f: F) -> Result<Vec<T>, FoldHalted<E>>
where
    T: Payload,
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Outcome<T, E>,
{
    Accumulator::new("traverse").run(items.into_iter().map(f))
}

/// Applies `f` to each plain value of `items` in order and folds the
/// resulting outcomes as [`sequence`] does.
///
/// `f` is called at most once per element and never after it returned a
/// failure. For a single outcome use [`Outcome::traverse`].
pub fn traverse<A, T, E, I, F>(items: I, f: F) -> Outcome<Vec<T>, E>
where
    T: Payload,
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Outcome<T, E>,
{
    into_outcome(try_traverse(items, f))
}

/// Like [`flat_map`], but reports where the fold halted.
pub fn try_flat_map<T, U, E, I, F>(outcomes: I, mut f: F) -> Result<Vec<U>, FoldHalted<E>>
where
    U: Payload,
    I: IntoIterator<Item = Outcome<T, E>>,
    F: FnMut(T) -> Outcome<U, E>,
{
    let chained = outcomes.into_iter().map(move |outcome| match outcome {
        Outcome::Success(payload) => f(payload),
        Outcome::Failure(failure) => make_failure(failure),
    });

    Accumulator::new("flat_map").run(chained)
}

/// Chains `f` over every success of `outcomes`.
///
/// A failing element halts the fold without calling `f`; a failure returned
/// by `f` halts it as well and is returned as is. For a single outcome use
/// [`Outcome::flat_map`].
pub fn flat_map<T, U, E, I, F>(outcomes: I, f: F) -> Outcome<Vec<U>, E>
where
    U: Payload,
    I: IntoIterator<Item = Outcome<T, E>>,
    F: FnMut(T) -> Outcome<U, E>,
{
    into_outcome(try_flat_map(outcomes, f))
}
