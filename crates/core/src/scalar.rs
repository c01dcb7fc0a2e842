//! Scalar component constraint for the vector primitive.
//!
//! The vector types in this crate only make sense over IEEE floating-point
//! components: division is reciprocal multiplication, normalization divides
//! by a possibly-zero length, and both rely on silent inf/NaN semantics
//! rather than error paths. The [`Scalar`] trait enforces that constraint at
//! compile time by being sealed over `f32` and `f64`.

use std::fmt::{Debug, Display};

use num_traits::Float;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point component type for [`Vector3`](crate::Vector3).
///
/// Sealed trait, implemented for `f32` and `f64` only. Instantiating a
/// vector with an integral or otherwise non-floating scalar is rejected at
/// compile time.
///
/// The conversion methods are infallible: every `f32` is exactly
/// representable in both implementing types, and narrowing follows the
/// usual IEEE rounding. They exist so precision-narrowing operations (see
/// [`Vector3::length`](crate::Vector3::length)) can be written once,
/// generically.
pub trait Scalar:
    Float + Debug + Display + Default + Send + Sync + sealed::Sealed + 'static
{
    /// Converts an `f32` into this scalar type.
    fn from_f32(value: f32) -> Self;

    /// Narrows this scalar to `f32`.
    fn as_f32(self) -> f32;

    /// Converts an `f64` into this scalar type, narrowing if needed.
    fn from_f64(value: f64) -> Self;

    /// Widens this scalar to `f64`.
    fn as_f64(self) -> f64;
}

impl Scalar for f32 {
    #[inline]
    fn from_f32(value: f32) -> Self {
        value
    }

    #[inline]
    fn as_f32(self) -> f32 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_f32(value: f32) -> Self {
        f64::from(value)
    }

    #[inline]
    fn as_f32(self) -> f32 {
        self as f32
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}
