//! Host environment description.
//!
//! - [`Environment`] - What the running host provides to the classifier
//! - [`is_server`] - Process-wide server flag, computed once
//!
//! # Example
//!
//! ```
//! use streamprobe::Environment;
//!
//! // Detected from the compilation target and enabled features
//! let env = Environment::detect();
//!
//! // Simulate a browser-like host without the readable stream type
//! let env = Environment::detect()
//!     .with_server(false)
//!     .with_readable_stream(false);
//! assert!(!env.server());
//! ```

use std::sync::OnceLock;

/// Capabilities of the host the crate is running in.
///
/// `Environment` is a plain value: compute it once with
/// [`Environment::detect`] and hand it to the components that branch on it,
/// such as [`StreamClassifier`](crate::StreamClassifier).
///
/// # Fields
///
/// - `server` - The host exposes a process with environment and version
///   information (a native process, WASI). Browser-like hosts do not.
/// - `readable_stream` - The standard readable stream type is available.
///   This follows the `async-io` feature unless overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Environment {
    server: bool,
    readable_stream: bool,
}

impl Environment {
    /// Creates an environment with explicit capabilities.
    pub const fn new(server: bool, readable_stream: bool) -> Self {
        Self {
            server,
            readable_stream,
        }
    }

    /// Detects the capabilities of the current host.
    ///
    /// A `wasm32` target without an operating system is treated as a
    /// browser-like host; every other target runs inside a process.
    pub const fn detect() -> Self {
        Self {
            server: !cfg!(all(target_family = "wasm", target_os = "unknown")),
            readable_stream: cfg!(feature = "async-io"),
        }
    }

    /// Overrides the server flag.
    pub const fn with_server(mut self, server: bool) -> Self {
        self.server = server;
        self
    }

    /// Overrides the availability of the standard readable stream type.
    ///
    /// Disabling it makes the classifier ignore
    /// `ReadableStream` values, as if the type did not exist.
    /// Enabling it without the `async-io` feature has no effect on
    /// classification, since no value of that type can be constructed.
    pub const fn with_readable_stream(mut self, available: bool) -> Self {
        self.readable_stream = available;
        self
    }

    /// Returns true if the host exposes a server-style process.
    pub const fn server(&self) -> bool {
        self.server
    }

    /// Returns true if the standard readable stream type is available.
    pub const fn readable_stream(&self) -> bool {
        self.readable_stream
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::detect()
    }
}

static SERVER: OnceLock<bool> = OnceLock::new();

/// Returns true if the current host exposes a server-style process.
///
/// The value is computed on first access and never changes afterward.
///
/// ```
/// assert_eq!(streamprobe::is_server(), streamprobe::is_server());
/// ```
pub fn is_server() -> bool {
    *SERVER.get_or_init(|| {
        let server = Environment::detect().server();
        log::trace!("host environment detected: server={}", server);
        server
    })
}
