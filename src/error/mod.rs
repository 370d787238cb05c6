//! Error types for streamprobe.

use std::fmt;

/// Errors raised by stream classification and buffer assembly.
#[derive(Debug)]
pub enum ProbeError {
    /// The classifier was handed a legacy native pull stream.
    ///
    /// These expose a low-level read trigger and readable state instead of a
    /// reader. Convert them to a standard readable stream before classifying.
    UnsupportedLegacyStream,

    /// An element passed to [`concat`](crate::concat) is not a byte array.
    InvalidByteArray {
        /// Position of the offending element in the input sequence.
        index: usize,
    },

    /// An I/O error occurred while reading from an adapted reader.
    Io(std::io::Error),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::UnsupportedLegacyStream => write!(
                f,
                "native pull streams are no longer supported: convert the stream to a \
                 ReadableStream first, e.g. with `ReadableStream::from_reader`"
            ),
            ProbeError::InvalidByteArray { index } => {
                write!(
                    f,
                    "concat: data must be in the form of a byte array (element {})",
                    index
                )
            }
            ProbeError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(e: std::io::Error) -> Self {
        ProbeError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "test");
        let err: ProbeError = io_err.into();
        assert!(matches!(err, ProbeError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_legacy_stream_message() {
        let msg = ProbeError::UnsupportedLegacyStream.to_string();
        assert!(msg.contains("no longer supported"));
        assert!(msg.contains("ReadableStream"));
    }

    #[test]
    fn test_invalid_byte_array_message() {
        let err = ProbeError::InvalidByteArray { index: 3 };
        let msg = err.to_string();
        assert!(msg.contains("byte array"));
        assert!(msg.contains("element 3"));
        assert!(std::error::Error::source(&err).is_none());
    }
}
