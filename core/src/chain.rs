//! # Chain: Short-Circuiting Fold over Producers
//!
//! A `Chain` is an ordered, non-empty list of producers evaluated into a
//! single [`Outcome`].
//!
//! * The head producer seeds the accumulator.
//! * Each tail producer runs only while the accumulator is a success.
//! * Successes merge as `combine(newest, accumulated)`.
//! * The first fault ends the chain and is returned as-is.
//!
//! For `[s0, s1, s2]` the result is `combine(s2, combine(s1, s0))`.

use crate::compose::Compose;
use crate::failure::Panicked;
use crate::outcome::Outcome;
use crate::producer::{BoxProducer, Producer};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("chain `{label}` needs at least one producer")]
    Empty { label: String },
}

/// An ordered sequence of producers with a distinguished head.
///
/// ## Example
///
/// ```rust
/// use tandem_core::producer::from_fn;
/// use tandem_core::{Chain, Failure, Outcome};
///
/// let chain = Chain::start(
///     "letters",
///     from_fn(|| Outcome::<_, Failure>::success("A".to_string())),
/// )
/// .then(from_fn(|| Outcome::<_, Failure>::success("B".to_string())));
///
/// let joined = chain.evaluate_with(|new, acc| format!("{new}+{acc}"));
/// assert_eq!(joined, Outcome::Success("B+A".to_string()));
/// ```
pub struct Chain<S, E> {
    label: String,
    head: BoxProducer<S, E>,
    tail: Vec<BoxProducer<S, E>>,
}

impl<S: 'static, E: 'static> Chain<S, E> {
    /// Start a chain with its seed producer.
    pub fn start<P>(label: &str, head: P) -> Self
    where
        P: Producer<Value = S, Error = E> + 'static,
    {
        Self {
            label: label.to_string(),
            head: Box::new(head),
            tail: Vec::new(),
        }
    }

    /// Append a producer to the tail.
    pub fn then<P>(mut self, producer: P) -> Self
    where
        P: Producer<Value = S, Error = E> + 'static,
    {
        self.tail.push(Box::new(producer));
        self
    }

    /// Build a chain from an ordered list; the first element becomes the head.
    pub fn from_producers<I>(label: &str, producers: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = BoxProducer<S, E>>,
    {
        let mut iter = producers.into_iter();
        let head = iter.next().ok_or_else(|| ChainError::Empty {
            label: label.to_string(),
        })?;

        Ok(Self {
            label: label.to_string(),
            head,
            tail: iter.collect(),
        })
    }
}

impl<S, E> Chain<S, E> {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of producers, head included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Evaluate the chain, merging successes with `combine(newest, accumulated)`.
    ///
    /// Producers run strictly in order. Once the accumulator is a fault no
    /// further producer is invoked. A panicking `combine` is contained into a
    /// fault the same way a panicking transform is.
    pub fn evaluate_with<C>(&self, mut combine: C) -> Outcome<S, E>
    where
        C: FnMut(S, S) -> S,
        E: From<Panicked>,
    {
        let span = tracing::debug_span!("chain", chain.label = %self.label, chain.len = self.len());
        let _enter = span.enter();

        let mut acc = self.head.produce();
        tracing::trace!(step = 0, success = acc.is_success(), "seed produced");

        for (offset, producer) in self.tail.iter().enumerate() {
            if acc.is_fault() {
                tracing::debug!(
                    step = offset + 1,
                    skipped = self.tail.len() - offset,
                    "chain short-circuited"
                );
                break;
            }

            acc = acc.and_then(|accumulated| {
                producer
                    .produce()
                    .map(|fresh| combine(fresh, accumulated))
            });
            tracing::trace!(step = offset + 1, success = acc.is_success(), "producer folded");
        }

        acc
    }

    /// Evaluate the chain using the success type's own [`Compose`].
    pub fn evaluate(&self) -> Outcome<S, E>
    where
        S: Compose,
        E: From<Panicked>,
    {
        self.evaluate_with(|newest, accumulated| newest.compose(accumulated))
    }
}

impl<S, E> std::fmt::Debug for Chain<S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("label", &self.label)
            .field("len", &self.len())
            .finish()
    }
}
