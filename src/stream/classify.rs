//! Stream classifier - tells stream shapes apart.
//!
//! Checks run in a fixed order and the first match wins:
//!
//! 1. array-stream predicate → [`StreamKind::Array`]
//! 2. standard readable stream (when the type is available) → [`StreamKind::Web`]
//! 3. legacy native pull stream → [`ProbeError::UnsupportedLegacyStream`]
//! 4. reader acquisition capability → [`StreamKind::WebLike`]
//! 5. anything else → `None`

use std::any::Any;
use std::fmt;

use super::{StreamCandidate, is_array_stream};
use crate::config::Environment;
use crate::error::ProbeError;

/// The shape of a recognized stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// An in-memory, array-backed stream.
    Array,
    /// A standard readable stream.
    Web,
    /// A stream of another implementation that exposes a reader.
    WebLike,
}

impl StreamKind {
    /// Returns the short tag used in diagnostics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StreamKind::Array => "array",
            StreamKind::Web => "web",
            StreamKind::WebLike => "web-like",
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies values by stream shape.
///
/// The classifier is configured with the host [`Environment`] and the
/// predicate used to recognize array-backed streams.
///
/// # Example
///
/// ```
/// use streamprobe::{ArrayStream, Environment, StreamClassifier, StreamKind};
///
/// let classifier = StreamClassifier::new(Environment::detect());
///
/// assert_eq!(classifier.classify(Some(&ArrayStream::new()))?, Some(StreamKind::Array));
/// assert_eq!(classifier.classify(Some(&42i32))?, None);
/// assert_eq!(classifier.classify(None)?, None);
/// # Ok::<(), streamprobe::ProbeError>(())
/// ```
#[derive(Clone, Copy)]
pub struct StreamClassifier {
    env: Environment,
    is_array: fn(&dyn Any) -> bool,
}

impl StreamClassifier {
    /// Creates a classifier for the given environment.
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            is_array: is_array_stream,
        }
    }

    /// Replaces the array-stream predicate.
    pub fn with_array_predicate(mut self, predicate: fn(&dyn Any) -> bool) -> Self {
        self.is_array = predicate;
        self
    }

    /// Returns the environment this classifier was built for.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Classifies `input`, where `None` stands for a missing value.
    ///
    /// Returns `Ok(None)` for values that are not a recognized stream.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::UnsupportedLegacyStream`] if `input` has the
    /// shape of a legacy native pull stream and is not a standard readable
    /// stream.
    pub fn classify(
        &self,
        input: Option<&dyn StreamCandidate>,
    ) -> Result<Option<StreamKind>, ProbeError> {
        let kind = self.classify_inner(input)?;
        log::trace!(
            "classified stream: {}",
            kind.map_or("not a stream", |k| k.as_str())
        );
        Ok(kind)
    }

    fn classify_inner(
        &self,
        input: Option<&dyn StreamCandidate>,
    ) -> Result<Option<StreamKind>, ProbeError> {
        let Some(input) = input else {
            return Ok(None);
        };

        if (self.is_array)(input.as_any()) {
            return Ok(Some(StreamKind::Array));
        }

        if self.is_readable_stream(input.as_any()) {
            return Ok(Some(StreamKind::Web));
        }

        // Reached only for values that are not standard readable streams
        if input.has_read_trigger() && input.has_readable_state() {
            log::debug!("rejecting legacy native pull stream");
            return Err(ProbeError::UnsupportedLegacyStream);
        }

        if input.reader().is_some() {
            return Ok(Some(StreamKind::WebLike));
        }

        Ok(None)
    }

    #[cfg(feature = "async-io")]
    fn is_readable_stream(&self, input: &dyn Any) -> bool {
        self.env.readable_stream() && input.is::<super::ReadableStream>()
    }

    #[cfg(not(feature = "async-io"))]
    fn is_readable_stream(&self, _input: &dyn Any) -> bool {
        false
    }
}

impl Default for StreamClassifier {
    fn default() -> Self {
        Self::new(Environment::detect())
    }
}

impl fmt::Debug for StreamClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamClassifier")
            .field("env", &self.env)
            .finish_non_exhaustive()
    }
}

/// Classifies `input` with a classifier for the detected environment.
///
/// # Example
///
/// ```
/// use streamprobe::classify_stream;
///
/// assert_eq!(classify_stream(Some(&"abc"))?, None);
/// # Ok::<(), streamprobe::ProbeError>(())
/// ```
pub fn classify_stream(
    input: Option<&dyn StreamCandidate>,
) -> Result<Option<StreamKind>, ProbeError> {
    StreamClassifier::default().classify(input)
}
