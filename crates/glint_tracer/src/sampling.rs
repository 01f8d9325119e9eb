//! Random sampling and optics helpers shared by materials and the camera.
//!
//! All randomness is drawn from an explicitly passed [`RngCore`], so a caller
//! that seeds its sampler gets the same image on every run.

use glint_math::Vec3;
use rand::{Rng, RngCore};

/// Seed used when the caller does not choose one.
pub const DEFAULT_SEED: u64 = 0x5EED;

/// Uniform sample in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform point strictly inside the unit sphere.
///
/// Rejection sampling: draw from the cube [-1, 1]^3 until the squared length is below 1.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = 2.0 * Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng)) - Vec3::ONE;
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniform point strictly inside the unit disk in the z = 0 plane.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = 2.0 * Vec3::new(gen_f32(rng), gen_f32(rng), 0.0) - Vec3::new(1.0, 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Schlick's approximation for reflectance at a dielectric boundary.
#[inline]
pub fn schlick(cosine: f32, ior: f32) -> f32 {
    let r0 = ((1.0 - ior) / (1.0 + ior)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

/// Mirror `v` about the normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract `v` through a surface with normal `n` (Snell's law, vector form).
///
/// `v` does not need to be normalized. Returns `None` on total internal reflection.
pub fn refract(v: Vec3, n: Vec3, ni_over_nt: f32) -> Option<Vec3> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant < 0.0 {
        return None;
    }
    Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
}
