/// Takes the success payload out of an outcome.
///
/// With one argument a failure panics with its payload in the message. With a
/// second argument the default is returned instead.
///
/// ```rust
/// use outcomes::{unwrap, Outcome};
///
/// let ok: Outcome<i32, &str> = Outcome::Success(1);
/// let err: Outcome<i32, &str> = Outcome::Failure("bad");
///
/// assert_eq!(unwrap!(ok), 1);
/// assert_eq!(unwrap!(err, 0), 0);
/// ```
#[macro_export]
macro_rules! unwrap {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(failure) => {
                panic!("unwrap! called on a failure: {:?}", failure)
            }
        }
    };
    ($outcome:expr, $default:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(_) => $default,
        }
    };
}
