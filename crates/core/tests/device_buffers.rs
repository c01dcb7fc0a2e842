#![cfg(feature = "gpu")]
//! Device buffer staging validation.
//!
//! Exercises the zero-copy views used to move vector buffers to and from
//! accelerator storage: the byte view handed to the upload path must round
//! trip losslessly, and the flat component view must match the documented
//! `[x0, y0, z0, x1, ..]` interleaving for any buffer contents.

use linalg3_core::device::{as_bytes, as_components, from_bytes};
use linalg3_core::{DVec3, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_buffer(rng: &mut StdRng, len: usize) -> Vec<Vec3> {
    (0..len)
        .map(|_| {
            Vec3::new(
                rng.random_range(-1e6..1e6),
                rng.random_range(-1e6..1e6),
                rng.random_range(-1e6..1e6),
            )
        })
        .collect()
}

#[test]
fn test_upload_byte_view_round_trips() {
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    let buffer = random_buffer(&mut rng, 1024);

    let bytes = as_bytes(&buffer);
    assert_eq!(bytes.len(), buffer.len() * 12, "Vec3 is 12 bytes on device");

    let readback: &[Vec3] = from_bytes(bytes);
    assert_eq!(readback, buffer.as_slice());
}

#[test]
fn test_component_view_matches_field_order() {
    let mut rng = StdRng::seed_from_u64(0xFACE);
    let buffer = random_buffer(&mut rng, 64);

    let flat = as_components(&buffer);
    assert_eq!(flat.len(), buffer.len() * 3);
    for (i, v) in buffer.iter().enumerate() {
        assert_eq!(flat[3 * i], v.x);
        assert_eq!(flat[3 * i + 1], v.y);
        assert_eq!(flat[3 * i + 2], v.z);
    }
}

#[test]
fn test_double_precision_buffers_stage_identically() {
    let buffer = [DVec3::new(1.0, -2.0, 3.5), DVec3::new(0.0, 1e-300, 4.0)];
    let bytes = as_bytes(&buffer);
    assert_eq!(bytes.len(), buffer.len() * 24, "DVec3 is 24 bytes on device");
    let readback: &[DVec3] = from_bytes(bytes);
    assert_eq!(readback, &buffer);
}
