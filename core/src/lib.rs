//! Tandem Core - Short-Circuiting Fallible Chains
//!
//! This crate defines the building blocks:
//! - `Outcome`: a success value or a captured fault
//! - `Producer`: a zero-argument operation yielding an `Outcome`
//! - `Chain`: an ordered fold of producers that stops at the first fault
//!
//! **IMPORTANT**: This layer is Pure Rust - no IO, no Async.

pub mod chain;
pub mod compose;
pub mod failure;
pub mod outcome;
pub mod producer;
pub mod telemetry;

#[cfg(test)]
mod test_utils;

pub mod prelude {
    pub use crate::chain::{Chain, ChainError};
    pub use crate::compose::Compose;
    pub use crate::failure::{Failure, Panicked};
    pub use crate::outcome::Outcome;
    pub use crate::producer::{BoxProducer, FromFn, Producer, from_fn};
    pub use crate::telemetry::Traced;
}

pub use chain::{Chain, ChainError};
pub use compose::Compose;
pub use failure::{Failure, Panicked};
pub use outcome::Outcome;
pub use producer::{BoxProducer, FromFn, Producer};
pub use telemetry::Traced;
