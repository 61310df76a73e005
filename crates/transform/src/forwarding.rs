//! Forwarding overrides for transform nodes.
//!
//! A pipeline rewrite pass substitutes a node with a specialized expansion
//! (a runner-specific read strategy, a fused composite, and so on) without
//! re-implementing the node's other observable behavior. [`ForwardingTransform`]
//! gives that substitution its shape: implementors supply the delegate node
//! and the replacement expansion, and inherit name, validation, and encoding
//! inference as verbatim forwards to the delegate.

use tracing::debug;

use crate::{ApplyError, Encoding, EncodingInferenceError, Transform, TypedValue, ValidationError};

/// A transform override that behaves identically to its delegate except for
/// the operations the implementor overrides.
///
/// [`delegate`](Self::delegate) and [`apply`](Self::apply) are required: an
/// override always names the node it stands in for, and always supplies its
/// own expansion. The remaining operations forward to the delegate unless
/// overridden, so an override cannot drift out of sync with the delegate's
/// metadata.
///
/// The delegate is not owned by the override: implementors hold `&D`, `Rc<D>`,
/// or `Arc<D>` and lend a reference out of it. The same delegate may back any
/// number of overrides and still appear directly in the pipeline graph.
pub trait ForwardingTransform<I, O> {
    /// The transform type calls are forwarded to.
    type Delegate: Transform<I, O> + ?Sized;

    /// The transform this override stands in for.
    ///
    /// Must be a pure accessor returning the same delegate, by identity, on
    /// every call for the lifetime of the override.
    fn delegate(&self) -> &Self::Delegate;

    /// Replacement expansion, in place of the delegate's `apply`.
    ///
    /// # Errors
    ///
    /// Failure semantics are owned entirely by the implementor; see
    /// [`ApplyError`].
    fn apply(&self, input: I) -> Result<O, ApplyError>;

    /// Forwards to the delegate's `validate`.
    ///
    /// # Errors
    ///
    /// Relays the delegate's [`ValidationError`] verbatim.
    fn validate(&self, input: &I) -> Result<(), ValidationError> {
        self.delegate().validate(input)
    }

    /// Forwards to the delegate's `name`.
    fn name(&self) -> String {
        self.delegate().name()
    }

    /// Forwards to the delegate's `infer_output_encoding`, with no inference
    /// logic of its own.
    ///
    /// # Errors
    ///
    /// Relays the delegate's [`EncodingInferenceError`] verbatim.
    fn infer_output_encoding<T>(
        &self,
        input: &I,
        output: &TypedValue<T>,
    ) -> Result<Encoding<T>, EncodingInferenceError> {
        self.delegate().infer_output_encoding(input, output)
    }
}

/// Adapter that lets a [`ForwardingTransform`] stand wherever a [`Transform`]
/// is expected.
///
/// Coherence forbids a blanket `impl<F: ForwardingTransform> Transform for F`
/// alongside ordinary `Transform` impls, so the bridge is an explicit
/// newtype. Every operation routes through the override, so overridden bodies
/// take effect.
#[derive(Clone, Copy, Debug)]
pub struct Forwarded<F>(F);

impl<F> Forwarded<F> {
    /// Wrap an override for use as a transform node.
    pub fn new(transform: F) -> Self {
        Self(transform)
    }

    /// A reference to the wrapped override.
    #[must_use]
    pub fn get_ref(&self) -> &F {
        &self.0
    }

    /// Unwrap the override.
    #[must_use]
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<I, O, F> Transform<I, O> for Forwarded<F>
where
    F: ForwardingTransform<I, O>,
{
    fn apply(&self, input: I) -> Result<O, ApplyError> {
        debug!(transform = %self.0.name(), "expanding transform override");
        self.0.apply(input)
    }

    fn validate(&self, input: &I) -> Result<(), ValidationError> {
        self.0.validate(input)
    }

    fn name(&self) -> String {
        self.0.name()
    }

    fn infer_output_encoding<T>(
        &self,
        input: &I,
        output: &TypedValue<T>,
    ) -> Result<Encoding<T>, EncodingInferenceError> {
        self.0.infer_output_encoding(input, output)
    }
}
