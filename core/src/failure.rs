use serde::{Deserialize, Serialize};
use std::any::Any;
use thiserror::Error;

/// A panic captured while running a caller-supplied closure.
///
/// `Outcome::map`, `Outcome::try_map` and `Outcome::capture` turn unwinding
/// closures into this value instead of letting the panic escape. Any error
/// type used with those operations must be constructible from it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("panicked: {message}")]
pub struct Panicked {
    pub message: String,
}

impl Panicked {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extract a readable message from a `catch_unwind` payload.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        Self { message }
    }
}

/// The opaque failure carried through a chain.
///
/// The core never inspects it; it only moves it from the producer that
/// raised it to the failure handler of `Outcome::dispatch`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Failure {
    #[error("{0}")]
    Raised(String),
    #[error(transparent)]
    Panicked(#[from] Panicked),
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Failure::Raised(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Failure::Raised(message) => message,
            Failure::Panicked(panicked) => &panicked.message,
        }
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        // `{:#}` keeps the whole context chain on one line
        Failure::Raised(format!("{err:#}"))
    }
}
