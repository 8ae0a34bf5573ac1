//! Typed views over byte buffers
//!
//! Tests often stage data as raw bytes (e.g. a packed point cloud read from
//! disk) and then compare it as `f32`/`i32` values. The zero-copy views are
//! checked for length and alignment; [`decode`] copies and works on any
//! alignment.
//!
//! ```
//! use numeric_expectations::view;
//!
//! let values = [1.5f32, -2.0, 3.25];
//! let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
//!
//! // A Vec<u8> has no alignment guarantee for f32, so decode instead of view
//! let decoded: Vec<f32> = view::decode(&bytes).unwrap();
//! assert_eq!(decoded, values);
//! ```

use bytemuck::{Pod, PodCastError};
use std::mem;

use crate::compare::ExpectScalar;
use crate::errors::ViewError;

fn map_cast_error<T>(len: usize, err: PodCastError) -> ViewError {
    match err {
        PodCastError::TargetAlignmentGreaterAndInputNotAligned | PodCastError::AlignmentMismatch => {
            ViewError::Misaligned {
                align: mem::align_of::<T>(),
            }
        }
        _ => ViewError::TrailingBytes {
            len,
            element_size: mem::size_of::<T>(),
        },
    }
}

/// View a whole byte buffer as a slice of `T` without copying
pub fn cast_slice<T: Pod + ExpectScalar>(bytes: &[u8]) -> Result<&[T], ViewError> {
    bytemuck::try_cast_slice(bytes).map_err(|e| map_cast_error::<T>(bytes.len(), e))
}

/// Mutable counterpart of [`cast_slice`], for staging values in place
pub fn cast_slice_mut<T: Pod + ExpectScalar>(bytes: &mut [u8]) -> Result<&mut [T], ViewError> {
    let len = bytes.len();
    bytemuck::try_cast_slice_mut(bytes).map_err(|e| map_cast_error::<T>(len, e))
}

/// View the first `len` elements of a byte buffer as `T`
///
/// Bytes past `len * size_of::<T>()` are ignored.
pub fn cast_prefix<T: Pod + ExpectScalar>(bytes: &[u8], len: usize) -> Result<&[T], ViewError> {
    let element_size = mem::size_of::<T>();
    let required = len
        .checked_mul(element_size)
        .ok_or(ViewError::LengthOverflow { len, element_size })?;
    if bytes.len() < required {
        return Err(ViewError::TooShort {
            required,
            available: bytes.len(),
        });
    }
    cast_slice(&bytes[..required])
}

/// Copy a byte buffer into a `Vec<T>`, regardless of alignment
pub fn decode<T: Pod + ExpectScalar>(bytes: &[u8]) -> Result<Vec<T>, ViewError> {
    let element_size = mem::size_of::<T>();
    if bytes.len() % element_size != 0 {
        return Err(ViewError::TrailingBytes {
            len: bytes.len(),
            element_size,
        });
    }
    Ok(bytes
        .chunks_exact(element_size)
        .map(bytemuck::pod_read_unaligned)
        .collect())
}

/// Byte representation of a typed slice (native endianness)
pub fn as_bytes<T: Pod + ExpectScalar>(values: &[T]) -> &[u8] {
    bytemuck::cast_slice(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_slice_of_aligned_bytes() {
        let values = [1.0f32, 2.5, -3.0];
        let bytes = as_bytes(&values);
        let view: &[f32] = cast_slice(bytes).unwrap();
        assert_eq!(view, &values);
    }

    #[test]
    fn test_cast_slice_rejects_trailing_bytes() {
        let values = [0u32; 2];
        let bytes = &as_bytes(&values)[..7];
        assert_eq!(
            cast_slice::<u32>(bytes),
            Err(ViewError::TrailingBytes {
                len: 7,
                element_size: 4
            })
        );
    }

    #[test]
    fn test_cast_slice_rejects_misaligned_start() {
        let values = [0u32; 3];
        let bytes = &as_bytes(&values)[1..9];
        assert_eq!(
            cast_slice::<u32>(bytes),
            Err(ViewError::Misaligned { align: 4 })
        );
    }

    #[test]
    fn test_cast_prefix_checks_length() {
        let values = [7i32, 8, 9];
        let bytes = as_bytes(&values);
        assert_eq!(cast_prefix::<i32>(bytes, 2).unwrap(), &[7, 8]);
        assert_eq!(
            cast_prefix::<i32>(bytes, 4),
            Err(ViewError::TooShort {
                required: 16,
                available: 12
            })
        );
    }

    #[test]
    fn test_cast_prefix_rejects_overflowing_length() {
        let bytes = [0u8; 8];
        assert_eq!(
            cast_prefix::<f32>(&bytes, usize::MAX / 2),
            Err(ViewError::LengthOverflow {
                len: usize::MAX / 2,
                element_size: 4
            })
        );
    }

    #[test]
    fn test_cast_slice_mut_writes_through() {
        let mut storage = [0u32; 2];
        {
            let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut storage);
            let floats: &mut [f32] = cast_slice_mut(bytes).unwrap();
            floats[1] = 1.0;
        }
        assert_eq!(storage[1], 1.0f32.to_bits());
    }

    #[test]
    fn test_decode_handles_misaligned_input() {
        let values = [1.25f64, -0.5];
        let mut bytes = vec![0u8];
        bytes.extend_from_slice(as_bytes(&values));
        let decoded: Vec<f64> = decode(&bytes[1..]).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn test_decode_empty() {
        let decoded: Vec<u8> = decode(&[]).unwrap();
        assert!(decoded.is_empty());
    }
}
