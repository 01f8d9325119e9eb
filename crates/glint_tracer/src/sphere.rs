//! Sphere primitive for ray tracing.

use crate::hittable::{HitRecord, Hittable};
use crate::Material;
use glint_math::{Interval, Ray, Vec3};
use std::sync::Arc;

/// A sphere primitive.
///
/// A negative radius is allowed: the surface is the same, but the normal points
/// inward. Nesting one inside a positive sphere of the same dielectric makes a
/// hollow glass shell.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere sharing `material` with any other surfaces that hold it.
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    fn record(&self, ray: &Ray, t: f32) -> HitRecord<'_> {
        let p = ray.at(t);
        HitRecord {
            t,
            p,
            // Signed radius flips the normal for inverted spheres
            normal: (p - self.center) / self.radius,
            material: self.material.as_ref(),
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root first
        let near = (-b - sqrtd) / a;
        if ray_t.surrounds(near) {
            return Some(self.record(ray, near));
        }
        let far = (-b + sqrtd) / a;
        if ray_t.surrounds(far) {
            return Some(self.record(ray, far));
        }

        None
    }
}
