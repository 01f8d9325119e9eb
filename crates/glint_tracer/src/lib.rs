//! Glint tracer - CPU path tracing core.
//!
//! A Monte Carlo path tracer over spheres with diffuse, metal and glass
//! materials. Everything runs on the calling thread; randomness comes from a
//! sampler the caller passes in, so a fixed seed gives a fixed image.

mod camera;
mod hittable;
mod material;
mod renderer;
pub mod sampling;
mod sphere;

pub use camera::{Camera, CameraConfig, CameraError};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use renderer::{
    color_to_rgb, linear_to_gamma, radiance, radiance_with, render, render_pixel, ImageBuffer,
    RenderConfig, RenderError, SkyGradient, MAX_DEPTH, T_MIN,
};
pub use sampling::{gen_f32, DEFAULT_SEED};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};
