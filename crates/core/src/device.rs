//! Accelerator interop for vector buffers.
//!
//! [`Vector3`] is `#[repr(C)]` over three same-size floating-point fields,
//! so it has no padding bytes and a stable layout on every target. This
//! module marks it plain-old-data for [`bytemuck`] and provides the slice
//! views used when staging vector buffers for accelerator kernels: a
//! `&[Vector3<f32>]` uploads to a device storage buffer and reads back
//! without copying or translation, and the kernel-side definition of the
//! operations is the same compiled code as on the host.

use bytemuck::{Pod, Zeroable};

use crate::scalar::Scalar;
use crate::vector3::Vector3;

// SAFETY: all-zero bits are the zero vector, a valid value for every
// floating-point component type.
unsafe impl<T: Scalar + Zeroable> Zeroable for Vector3<T> {}

// SAFETY: `Vector3` is `#[repr(C)]` with three fields of one `Pod` type,
// so it has no padding bytes and every bit pattern is a valid value.
unsafe impl<T: Scalar + Pod> Pod for Vector3<T> {}

/// Views a vector buffer as a flat component buffer `[x0, y0, z0, x1, ..]`.
#[inline]
#[must_use]
pub fn as_components<T: Scalar + Pod>(vectors: &[Vector3<T>]) -> &[T] {
    bytemuck::cast_slice(vectors)
}

/// Views a vector buffer as raw bytes for upload to a device buffer.
#[inline]
#[must_use]
pub fn as_bytes<T: Scalar + Pod>(vectors: &[Vector3<T>]) -> &[u8] {
    bytemuck::cast_slice(vectors)
}

/// Views bytes read back from a device buffer as vectors.
///
/// Panics if the byte length is not a whole number of vectors or the
/// allocation is misaligned for `T`.
#[inline]
#[must_use]
#[track_caller]
pub fn from_bytes<T: Scalar + Pod>(bytes: &[u8]) -> &[Vector3<T>] {
    bytemuck::cast_slice(bytes)
}
