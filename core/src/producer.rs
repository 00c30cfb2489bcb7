//! Producer - Zero-Argument Fallible Operations
//!
//! A producer is the unit a [`Chain`](crate::chain::Chain) is built from.
//! Whatever it does internally (network calls, file reads) stays opaque;
//! the chain only sees the `Outcome` it returns.

use crate::outcome::Outcome;

/// The contract for a fallible operation that takes no input.
///
/// Implementations must not panic across this boundary: faults are
/// reported as `Outcome::Fault`, usually via [`Outcome::capture`].
///
/// # Example
/// ```rust
/// use tandem_core::{Failure, Outcome, Producer};
///
/// struct Fixed(&'static str);
///
/// impl Producer for Fixed {
///     type Value = String;
///     type Error = Failure;
///
///     fn produce(&self) -> Outcome<String, Failure> {
///         Outcome::success(self.0.to_string())
///     }
/// }
///
/// assert!(Fixed("A").produce().is_success());
/// ```
pub trait Producer {
    /// Success type
    type Value;

    /// Error type
    type Error;

    /// Invoke the operation
    fn produce(&self) -> Outcome<Self::Value, Self::Error>;
}

/// Type-erased producer, the element type a `Chain` stores.
///
/// A boxed producer is itself a [`Producer`], so it can be handed to
/// `Chain::start`, `Chain::then` or `Traced::new` like any other.
pub type BoxProducer<S, E> = Box<dyn Producer<Value = S, Error = E>>;

/// A producer backed by a closure. Built with [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F>(F);

/// Turn a zero-argument closure into a [`Producer`].
///
/// Closures are wrapped rather than implementing `Producer` directly;
/// a blanket impl over `Fn` would collide with the `Box<P>` impl, since
/// `Box<F>` is itself `Fn`.
///
/// ```rust
/// use tandem_core::{Failure, Outcome, Producer, producer};
///
/// let seed = producer::from_fn(|| Outcome::<_, Failure>::success(1));
/// assert_eq!(seed.produce(), Outcome::Success(1));
/// ```
pub fn from_fn<F, S, E>(op: F) -> FromFn<F>
where
    F: Fn() -> Outcome<S, E>,
{
    FromFn(op)
}

impl<F, S, E> Producer for FromFn<F>
where
    F: Fn() -> Outcome<S, E>,
{
    type Value = S;
    type Error = E;

    fn produce(&self) -> Outcome<S, E> {
        (self.0)()
    }
}

impl<P> Producer for Box<P>
where
    P: Producer + ?Sized,
{
    type Value = P::Value;
    type Error = P::Error;

    fn produce(&self) -> Outcome<Self::Value, Self::Error> {
        (**self).produce()
    }
}
