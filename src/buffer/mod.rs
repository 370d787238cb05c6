//! Byte array helpers.
//!
//! - [`is_byte_array`] / [`as_byte_slice`] - Recognize byte buffers behind `&dyn Any`
//! - [`concat`] - Join dynamically typed byte arrays, validating each element
//! - [`concat_bytes`] - Join canonical [`Bytes`](bytes::Bytes) buffers

mod concat;
mod detect;

pub use concat::{concat, concat_bytes};
pub use detect::{as_byte_slice, is_byte_array};
