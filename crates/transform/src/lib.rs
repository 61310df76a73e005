//! Transform node contract and forwarding overrides for pipewright pipelines.
//!
//! This crate defines the capability every pipeline transform node exposes,
//! and the override machinery rewrite passes use to substitute a node's
//! expansion while keeping the rest of its observable behavior intact.
//!
//! # Key Types
//!
//! - [`Transform`]: the four-operation contract a pipeline node implements
//! - [`ForwardingTransform`]: base for overrides that forward unoverridden
//!   operations to a delegate node
//! - [`Forwarded`]: adapter that lets an override stand wherever a transform
//!   node is expected
//! - [`Encoding`] / [`TypedValue`]: the slice of the coder model that encoding
//!   inference needs at pipeline-construction time
//!
//! # Example
//!
//! ```ignore
//! use pipewright_transform::{ApplyError, Forwarded, ForwardingTransform, Transform};
//!
//! // A rewrite pass swaps in a sharded expansion for `read`, keeping its
//! // name, validation rules, and output encoding.
//! struct ShardedRead<'a> {
//!     delegate: &'a ReadFromSource,
//!     shards: usize,
//! }
//!
//! impl ForwardingTransform<SourceSpec, RecordSet> for ShardedRead<'_> {
//!     type Delegate = ReadFromSource;
//!
//!     fn delegate(&self) -> &ReadFromSource {
//!         self.delegate
//!     }
//!
//!     fn apply(&self, input: SourceSpec) -> Result<RecordSet, ApplyError> {
//!         read_sharded(input, self.shards)
//!     }
//! }
//!
//! let node = Forwarded::new(ShardedRead { delegate: &read, shards: 4 });
//! assert_eq!(node.name(), read.name());
//! ```

mod encoding;
mod error;
mod forwarding;

pub use encoding::{Encoding, TypedValue};
pub use error::{ApplyError, EncodingInferenceError, ValidationError};
pub use forwarding::{Forwarded, ForwardingTransform};

/// A named unit of data-processing logic in a pipeline.
///
/// Transforms are build-time objects: the construction framework calls
/// [`validate`](Self::validate) and
/// [`infer_output_encoding`](Self::infer_output_encoding) while assembling the
/// pipeline graph, and [`apply`](Self::apply) to expand the node into its
/// output. `I` and `O` are the input and output capability types the node is
/// parameterized over; their concrete shapes belong to the framework.
///
/// Only [`apply`](Self::apply) is required. The remaining operations default
/// to the behaviors a plain node is expected to have: accept every input,
/// report the implementing type's name, and infer an output encoding only
/// when the output slot declares one.
pub trait Transform<I, O> {
    /// Expand this transform into its output for `input`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the expansion raises. The contract imposes no
    /// taxonomy on expansion failures; see [`ApplyError`].
    fn apply(&self, input: I) -> Result<O, ApplyError>;

    /// Check `input` before expansion.
    ///
    /// The default accepts every input.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing why `input` was rejected.
    fn validate(&self, _input: &I) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Human-readable node name, used in pipeline displays and diagnostics.
    ///
    /// The default is the implementing type's name with module paths
    /// stripped.
    fn name(&self) -> String {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Infer the encoding for the output slot `output`.
    ///
    /// The default returns the encoding declared on the slot, if any.
    ///
    /// # Errors
    ///
    /// Returns an [`EncodingInferenceError`] when no encoding can be
    /// determined for `output`.
    fn infer_output_encoding<T>(
        &self,
        _input: &I,
        output: &TypedValue<T>,
    ) -> Result<Encoding<T>, EncodingInferenceError> {
        output
            .declared_encoding()
            .cloned()
            .ok_or_else(|| EncodingInferenceError::for_slot(output))
    }
}

/// Strip module paths from a type name, preserving generic structure.
///
/// `core::option::Option<alloc::string::String>` becomes `Option<String>`.
/// Used for the default [`Transform::name`].
#[must_use]
pub fn short_type_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut segment_start = 0;
    for (idx, ch) in full.char_indices() {
        if matches!(ch, '<' | '>' | '(' | ')' | '[' | ']' | ',' | ' ' | '&' | ';') {
            short.push_str(last_path_segment(&full[segment_start..idx]));
            short.push(ch);
            segment_start = idx + ch.len_utf8();
        }
    }
    short.push_str(last_path_segment(&full[segment_start..]));
    short
}

/// Text after the final `::` of a path, or the path itself when it has none.
fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
