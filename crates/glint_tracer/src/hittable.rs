//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use glint_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal, pointing out of the surface as the geometry defines it
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the closest intersection whose parameter lies strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// An ordered list of hittable objects.
///
/// Every member is tested on each query; there is no acceleration structure.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Create a list from objects, keeping their order.
    pub fn from_objects(objects: Vec<Box<dyn Hittable>>) -> Self {
        Self { objects }
    }

    /// Add an object to the end of the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for object in &self.objects {
            // Only strictly closer hits can pass the narrowed bound, so ties keep the earlier object
            let interval = closest.map_or(ray_t, |rec| ray_t.with_max(rec.t));
            if let Some(rec) = object.hit(ray, interval) {
                closest = Some(rec);
            }
        }

        closest
    }
}
