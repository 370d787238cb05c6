//! Byte array recognition.
//!
//! [`Bytes`] is the canonical byte buffer type of this crate. Values that
//! cross a dynamically typed boundary may still arrive in another owned or
//! borrowed representation, so recognition walks a fixed list of accepted
//! types, most common first.

use std::any::Any;

use bytes::{Bytes, BytesMut};

/// Returns a view of the bytes held by `input`, if it is a byte array.
///
/// Accepted representations, in the order they are tried:
///
/// - [`Bytes`]
/// - [`BytesMut`]
/// - `Vec<u8>`
/// - `Box<[u8]>`
/// - `&'static [u8]`
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use streamprobe::as_byte_slice;
///
/// let data = Bytes::from_static(b"abc");
/// assert_eq!(as_byte_slice(&data), Some(&b"abc"[..]));
/// assert_eq!(as_byte_slice(&"abc"), None);
/// ```
pub fn as_byte_slice(input: &dyn Any) -> Option<&[u8]> {
    if let Some(b) = input.downcast_ref::<Bytes>() {
        return Some(&b[..]);
    }
    if let Some(b) = input.downcast_ref::<BytesMut>() {
        return Some(&b[..]);
    }
    if let Some(v) = input.downcast_ref::<Vec<u8>>() {
        return Some(&v[..]);
    }
    if let Some(b) = input.downcast_ref::<Box<[u8]>>() {
        return Some(&b[..]);
    }
    input.downcast_ref::<&'static [u8]>().copied()
}

/// Returns true if `input` is a byte array.
///
/// The unit value and `Option` values never qualify, nor do strings or
/// vectors of wider integers.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use streamprobe::is_byte_array;
///
/// assert!(is_byte_array(&Bytes::from_static(&[1, 2, 3])));
/// assert!(!is_byte_array(&vec![1u32, 2, 3]));
/// assert!(!is_byte_array(&None::<Bytes>));
/// ```
pub fn is_byte_array(input: &dyn Any) -> bool {
    as_byte_slice(input).is_some()
}
