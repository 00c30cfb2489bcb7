//! # Telemetry: Observability Decorators
//!
//! Wrap any [`Producer`] in [`Traced`] to record each invocation.

use crate::outcome::Outcome;
use crate::producer::Producer;
use std::fmt::Debug;
use std::time::Instant;

/// A wrapper Producer that adds tracing to any inner Producer.
///
/// Value and error types are passed through unchanged, so a traced
/// producer can sit anywhere in a chain.
#[derive(Clone)]
pub struct Traced<P> {
    inner: P,
    name: String,
}

impl<P> Traced<P> {
    pub fn new(inner: P, name: &str) -> Self {
        Self {
            inner,
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<P> Producer for Traced<P>
where
    P: Producer,
    P::Value: Debug,
    P::Error: Debug,
{
    type Value = P::Value;
    type Error = P::Error;

    fn produce(&self) -> Outcome<Self::Value, Self::Error> {
        let span = tracing::info_span!("producer", tandem.producer = %self.name);
        let _enter = span.enter();

        tracing::debug!("Invoking producer");
        let start = Instant::now();

        let result = self.inner.produce();

        let duration = start.elapsed();
        match &result {
            Outcome::Success(val) => {
                tracing::info!(?val, ?duration, "Producer completed: Success");
            }
            Outcome::Fault(e) => {
                tracing::error!(error = ?e, ?duration, "Producer failed: Fault");
            }
        }
        result
    }
}
