//! Byte array concatenation.

use std::any::Any;

use bytes::{BufMut, Bytes, BytesMut};

use super::as_byte_slice;
use crate::error::ProbeError;

/// Concatenates dynamically typed byte arrays into one contiguous buffer.
///
/// Every element must be recognized by [`is_byte_array`](crate::is_byte_array).
/// A single [`Bytes`] element is returned as a handle to the same storage,
/// without copying. Otherwise one buffer of the combined length is allocated
/// and the inputs are copied into it in order.
///
/// # Errors
///
/// Returns [`ProbeError::InvalidByteArray`] with the position of the first
/// element that is not a byte array. No partial result is produced.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use streamprobe::concat;
///
/// let a = Bytes::from_static(&[1, 2]);
/// let b = vec![3u8, 4, 5];
/// let joined = concat(&[&a, &b])?;
/// assert_eq!(&joined[..], &[1, 2, 3, 4, 5]);
///
/// assert!(concat(&[&a, &"not a byte array"]).is_err());
/// # Ok::<(), streamprobe::ProbeError>(())
/// ```
pub fn concat(arrays: &[&dyn Any]) -> Result<Bytes, ProbeError> {
    if let [only] = arrays {
        if let Some(bytes) = only.downcast_ref::<Bytes>() {
            return Ok(bytes.clone());
        }
    }

    // Validate and size in one pass
    let mut slices = Vec::with_capacity(arrays.len());
    let mut total_len = 0;
    for (index, array) in arrays.iter().enumerate() {
        let slice = as_byte_slice(*array).ok_or(ProbeError::InvalidByteArray { index })?;
        total_len += slice.len();
        slices.push(slice);
    }

    Ok(join(slices, total_len))
}

/// Concatenates [`Bytes`] buffers into one contiguous buffer.
///
/// A single input is returned as a handle to the same storage. An empty
/// input yields an empty buffer.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use streamprobe::concat_bytes;
///
/// let parts = [Bytes::from_static(b"hello "), Bytes::from_static(b"world")];
/// assert_eq!(concat_bytes(&parts), Bytes::from_static(b"hello world"));
/// ```
pub fn concat_bytes(arrays: &[Bytes]) -> Bytes {
    if let [only] = arrays {
        return only.clone();
    }

    let total_len: usize = arrays.iter().map(Bytes::len).sum();
    join(arrays.iter().map(|b| &b[..]), total_len)
}

fn join<'a>(slices: impl IntoIterator<Item = &'a [u8]>, total_len: usize) -> Bytes {
    let mut combined = BytesMut::with_capacity(total_len);
    for slice in slices {
        combined.put_slice(slice);
    }
    debug_assert_eq!(combined.len(), total_len);
    combined.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bytes_shares_storage() {
        let a = Bytes::from(vec![1u8, 2, 3]);
        let out = concat(&[&a]).unwrap();
        assert_eq!(out, a);
        assert_eq!(out.as_ptr(), a.as_ptr());
    }

    #[test]
    fn test_single_foreign_is_converted() {
        let v = vec![4u8, 5];
        let out = concat(&[&v]).unwrap();
        assert_eq!(&out[..], &[4, 5]);
    }

    #[test]
    fn test_single_invalid_rejected() {
        let err = concat(&[&"abc"]).unwrap_err();
        assert!(matches!(err, ProbeError::InvalidByteArray { index: 0 }));
    }

    #[test]
    fn test_two_arrays() {
        let a = Bytes::from_static(&[1, 2]);
        let b = Bytes::from_static(&[3, 4, 5]);
        let out = concat(&[&a, &b]).unwrap();
        assert_eq!(&out[..], &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_mixed_representations_preserve_order() {
        let a = Bytes::from_static(b"ab");
        let b = BytesMut::from(&b"cd"[..]);
        let c = vec![b'e'];
        let d: Box<[u8]> = Box::from(&b"fg"[..]);
        let e: &'static [u8] = b"";
        let out = concat(&[&a, &b, &c, &d, &e]).unwrap();
        assert_eq!(&out[..], b"abcdefg");
    }

    #[test]
    fn test_invalid_element_reports_index() {
        let a = Bytes::from_static(&[1]);
        let err = concat(&[&a, &a, &"not a byte array"]).unwrap_err();
        assert!(matches!(err, ProbeError::InvalidByteArray { index: 2 }));
    }

    #[test]
    fn test_empty_input() {
        assert!(concat(&[]).unwrap().is_empty());
        assert!(concat_bytes(&[]).is_empty());
    }

    #[test]
    fn test_concat_bytes_single_shares_storage() {
        let a = Bytes::from(vec![9u8; 16]);
        let out = concat_bytes(std::slice::from_ref(&a));
        assert_eq!(out.as_ptr(), a.as_ptr());
    }

    #[test]
    fn test_concat_bytes_length_is_sum() {
        let parts: Vec<Bytes> = (0..10u8).map(|i| Bytes::from(vec![i; i as usize])).collect();
        let out = concat_bytes(&parts);
        assert_eq!(out.len(), (0..10).sum::<usize>());

        let mut offset = 0;
        for part in &parts {
            assert_eq!(&out[offset..offset + part.len()], &part[..]);
            offset += part.len();
        }
    }
}
