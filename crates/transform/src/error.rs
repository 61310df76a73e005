//! Error types for the transform contract.
//!
//! Forwarding overrides perform no error recovery of their own: a relayed
//! error is the delegate's error, unmodified. Both concrete error types here
//! compare structurally so callers (and tests) can assert that relaying
//! preserved identity.

use miette::Diagnostic;
use thiserror::Error;

use crate::encoding::TypedValue;

/// Boxed error raised by a transform's expansion.
///
/// The contract imposes no taxonomy on expansion failures; each transform
/// raises whatever error type its expansion owns.
pub type ApplyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error raised when a transform rejects its input.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("invalid transform input: {message}")]
#[diagnostic(code(pipewright_transform::validate::rejected))]
pub struct ValidationError {
    /// Why the input was rejected.
    message: String,
}

impl ValidationError {
    /// Create a validation error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The rejection message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error raised when no encoding can be determined for an output slot.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("cannot infer an encoding for output '{slot}' of type {type_name}")]
#[diagnostic(code(pipewright_transform::encoding::cannot_infer))]
pub struct EncodingInferenceError {
    /// Name of the output slot whose encoding could not be inferred.
    slot: String,
    /// Element type carried by the slot.
    type_name: &'static str,
}

impl EncodingInferenceError {
    /// Create an inference error for the output slot `output`.
    #[must_use]
    pub fn for_slot<T>(output: &TypedValue<T>) -> Self {
        Self {
            slot: output.name().to_owned(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Name of the slot that failed inference.
    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Element type carried by the slot.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}
