use crate::failure::Panicked;
use serde::{Deserialize, Serialize};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// The explicit result of a fallible step.
///
/// An `Outcome` holds exactly one of a success value or a fault. It is
/// consumed by every combinator; a new `Outcome` comes out the other side.
/// The only way to get a value back out is [`Outcome::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use = "an Outcome must be dispatched or passed on"]
pub enum Outcome<S, E> {
    /// The step produced a value
    Success(S),

    /// The step failed (Error path)
    Fault(E),
}

impl<S, E> Outcome<S, E> {
    /// Wrap a success value.
    pub fn success(value: S) -> Self {
        Outcome::Success(value)
    }

    /// Wrap a captured fault.
    pub fn fault(error: E) -> Self {
        Outcome::Fault(error)
    }

    /// Run a fallible call site, converting both its error and any panic
    /// into `Fault`. This is the scoped catch a producer wraps around the
    /// operation it guards.
    pub fn capture<X, F>(op: F) -> Self
    where
        F: FnOnce() -> Result<S, X>,
        X: Into<E>,
        E: From<Panicked>,
    {
        match catch_unwind(AssertUnwindSafe(op)) {
            Ok(Ok(value)) => Outcome::Success(value),
            Ok(Err(err)) => Outcome::Fault(err.into()),
            Err(payload) => Outcome::Fault(Panicked::from_payload(payload).into()),
        }
    }

    /// `true` if this holds a success value.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// `true` if this holds a fault.
    pub fn is_fault(&self) -> bool {
        matches!(self, Outcome::Fault(_))
    }

    /// Borrow the content without consuming the outcome.
    pub fn as_ref(&self) -> Outcome<&S, &E> {
        match self {
            Outcome::Success(s) => Outcome::Success(s),
            Outcome::Fault(e) => Outcome::Fault(e),
        }
    }

    /// Transform the success value.
    ///
    /// A fault passes through untouched and `op` is not called. If `op`
    /// panics, the panic becomes the new fault, even though `self` was a
    /// success.
    pub fn map<V, F>(self, op: F) -> Outcome<V, E>
    where
        F: FnOnce(S) -> V,
        E: From<Panicked>,
    {
        match self {
            Outcome::Success(s) => match catch_unwind(AssertUnwindSafe(move || op(s))) {
                Ok(v) => Outcome::Success(v),
                Err(payload) => Outcome::Fault(Panicked::from_payload(payload).into()),
            },
            Outcome::Fault(e) => Outcome::Fault(e),
        }
    }

    /// Like [`Outcome::map`], for transforms that report failure through a
    /// `Result`. An `Err` from `op` replaces the success.
    pub fn try_map<V, X, F>(self, op: F) -> Outcome<V, E>
    where
        F: FnOnce(S) -> Result<V, X>,
        X: Into<E>,
        E: From<Panicked>,
    {
        match self {
            Outcome::Success(s) => Outcome::capture(move || op(s)),
            Outcome::Fault(e) => Outcome::Fault(e),
        }
    }

    /// Chain another fallible step.
    ///
    /// On a fault, `op` is never invoked and the original error is returned
    /// unchanged. On a success, whatever `op` returns is the result.
    pub fn and_then<V, F>(self, op: F) -> Outcome<V, E>
    where
        F: FnOnce(S) -> Outcome<V, E>,
    {
        match self {
            Outcome::Success(s) => op(s),
            Outcome::Fault(e) => Outcome::Fault(e),
        }
    }

    /// Transform the fault, leaving a success untouched.
    pub fn map_fault<E2, F>(self, op: F) -> Outcome<S, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Success(s) => Outcome::Success(s),
            Outcome::Fault(e) => Outcome::Fault(op(e)),
        }
    }

    /// Terminal operation: invoke exactly one of the two handlers.
    pub fn dispatch<R, OnSuccess, OnFailure>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
    ) -> R
    where
        OnSuccess: FnOnce(S) -> R,
        OnFailure: FnOnce(E) -> R,
    {
        match self {
            Outcome::Success(s) => on_success(s),
            Outcome::Fault(e) => on_failure(e),
        }
    }
}

impl<S, E> From<Result<S, E>> for Outcome<S, E> {
    fn from(result: Result<S, E>) -> Self {
        match result {
            Ok(s) => Outcome::Success(s),
            Err(e) => Outcome::Fault(e),
        }
    }
}
