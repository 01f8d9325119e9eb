//! Thin-lens camera for ray generation.

use crate::sampling::random_in_unit_disk;
use glint_math::{Interval, Ray, Vec3};
use log::debug;
use rand::RngCore;
use thiserror::Error;

/// Errors for camera settings that cannot produce a valid view.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("look_from and look_at are the same point")]
    NoViewDirection,

    #[error("up vector is parallel to the view direction")]
    DegenerateUp,

    #[error("vertical field of view must be between 0 and 180 degrees, got {0}")]
    InvalidFov(f32),

    #[error("aspect ratio must be positive and finite, got {0}")]
    InvalidAspectRatio(f32),

    #[error("aperture must not be negative, got {0}")]
    InvalidAperture(f32),

    #[error("focus distance must be positive, got {0}")]
    InvalidFocusDistance(f32),
}

/// View parameters used to build a [`Camera`].
#[derive(Debug, Clone)]
pub struct CameraConfig {
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,
    vfov: f32,         // Vertical field of view in degrees
    aspect_ratio: f32, // Width over height
    aperture: f32,     // Lens diameter, 0 disables depth of field
    focus_dist: f32,   // Distance from camera to plane of perfect focus
}

impl CameraConfig {
    /// Create camera settings looking down -Z from the origin.
    pub fn new() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 2.0,
            aperture: 0.0,
            focus_dist: 1.0,
        }
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, aperture: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self
    }

    /// Set image aspect ratio (width / height).
    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Validate the settings and derive the camera frame.
    pub fn build(&self) -> Result<Camera, CameraError> {
        let view = self.look_from - self.look_at;
        if view.length_squared() == 0.0 || !view.is_finite() {
            return Err(CameraError::NoViewDirection);
        }
        if !Interval::new(0.0, 180.0).surrounds(self.vfov) {
            return Err(CameraError::InvalidFov(self.vfov));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(CameraError::InvalidAspectRatio(self.aspect_ratio));
        }
        if self.aperture.is_nan() || self.aperture < 0.0 {
            return Err(CameraError::InvalidAperture(self.aperture));
        }
        if self.focus_dist.is_nan() || self.focus_dist <= 0.0 {
            return Err(CameraError::InvalidFocusDistance(self.focus_dist));
        }

        let w = view.normalize();
        let up_cross_w = self.vup.cross(w);
        if up_cross_w.length_squared() <= f32::EPSILON * self.vup.length_squared() {
            return Err(CameraError::DegenerateUp);
        }
        let u = up_cross_w.normalize();
        let v = w.cross(u);

        let half_height = (self.vfov.to_radians() / 2.0).tan();
        let half_width = self.aspect_ratio * half_height;

        let origin = self.look_from;
        let lower_left_corner = origin
            - half_width * self.focus_dist * u
            - half_height * self.focus_dist * v
            - self.focus_dist * w;
        let horizontal = 2.0 * half_width * self.focus_dist * u;
        let vertical = 2.0 * half_height * self.focus_dist * v;

        debug!(
            "Camera at {:?} looking at {:?}: vfov={} aspect={} aperture={} focus={}",
            self.look_from, self.look_at, self.vfov, self.aspect_ratio, self.aperture, self.focus_dist
        );

        Ok(Camera {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: self.aperture / 2.0,
        })
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera for generating rays into the scene. Immutable once built.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Generate a ray through normalized image coordinates (s, t).
    ///
    /// (0, 0) is the lower-left corner of the image plane and (1, 1) the upper-right.
    /// The origin is jittered across the lens to give depth of field.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;
        let origin = self.origin + offset;
        let target = self.lower_left_corner + s * self.horizontal + t * self.vertical;
        Ray::new(origin, target - origin)
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Orthonormal camera frame (u, v, w); the camera looks along -w.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }
}
