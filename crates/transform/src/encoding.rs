//! Output encoding declarations for transform nodes.
//!
//! The execution layer owns real coders; pipeline construction only needs a
//! name for the serialization strategy and the element type it is tied to.
//! [`Encoding`] is that tag, and [`TypedValue`] is the output slot an encoding
//! is inferred for.

use std::fmt;
use std::marker::PhantomData;

/// A named serialization strategy for values of type `T`.
///
/// Encodings compare by strategy name; the element type is carried in the
/// type parameter so mismatched slots are rejected at compile time.
pub struct Encoding<T> {
    name: String,
    _elements: PhantomData<fn(T) -> T>,
}

impl<T> Encoding<T> {
    /// Create an encoding referring to the strategy `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            _elements: PhantomData,
        }
    }

    /// The strategy name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Clone for Encoding<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            _elements: PhantomData,
        }
    }
}

impl<T> PartialEq for Encoding<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for Encoding<T> {}

impl<T> fmt::Debug for Encoding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoding")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A named output slot whose element type is `T`.
///
/// Placeholders stand in for a node's eventual output while the pipeline is
/// being assembled. A slot may carry an explicitly declared encoding, which
/// the default inference in [`Transform`](crate::Transform) picks up.
pub struct TypedValue<T> {
    name: String,
    encoding: Option<Encoding<T>>,
}

impl<T> TypedValue<T> {
    /// Create a placeholder for the output slot `name`, with no declared
    /// encoding.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            encoding: None,
        }
    }

    /// Declare the encoding for this slot.
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding<T>) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// The slot name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The explicitly declared encoding, if any.
    #[must_use]
    pub fn declared_encoding(&self) -> Option<&Encoding<T>> {
        self.encoding.as_ref()
    }
}

impl<T> Clone for TypedValue<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            encoding: self.encoding.clone(),
        }
    }
}

impl<T> PartialEq for TypedValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.encoding == other.encoding
    }
}

impl<T> Eq for TypedValue<T> {}

impl<T> fmt::Debug for TypedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedValue")
            .field("name", &self.name)
            .field("encoding", &self.encoding)
            .finish()
    }
}
