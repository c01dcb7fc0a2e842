//! linalg3 Core Library
//!
//! Foundational fixed-dimension vector primitive for the linalg3
//! linear-algebra stack. Provides [`Vector3`], a small `Copy` value type
//! over `f32` or `f64` components with the full elementwise operation set:
//! broadcast and per-component arithmetic, reversed subtraction, dot and
//! cross products, length and in-place normalization.
//!
//! ## Host/device duality
//!
//! Every operation is allocation-free, panic-free on the arithmetic paths,
//! and independent of global state, so one definition serves both ordinary
//! host code and accelerator kernel code. With the default `gpu` feature
//! the type is additionally plain-old-data: the `device` module provides
//! zero-copy byte and component views for staging vector buffers.

// Core scalar constraint and the vector primitive
pub mod scalar;
pub mod vector3;

// Accelerator interop (plain-old-data views over vector buffers)
#[cfg(feature = "gpu")]
pub mod device;

// Re-export core types
pub use scalar::Scalar;
pub use vector3::{DVec3, Vec3, Vector3};
