//! Material trait for surface scattering.

use crate::hittable::HitRecord;
use crate::sampling::{gen_f32, random_in_unit_sphere, reflect, refract, schlick};
use glint_math::{Interval, Ray, Vec3};
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// An attenuated outgoing ray.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
///
/// Materials hold no per-ray state and are shared between surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult>;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let direction = rec.normal + random_in_unit_sphere(rng);
        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, direction),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: Interval::UNIT.clamp(fuzz),
        }
    }

    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }
}

impl Material for Metal {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction().normalize(), rec.normal);
        let direction = reflected + self.fuzz * random_in_unit_sphere(rng);

        // A fuzzed ray pointing into the surface is absorbed
        if direction.dot(rec.normal) > 0.0 {
            Some(ScatterResult {
                attenuation: self.albedo,
                scattered: Ray::new(rec.p, direction),
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone)]
pub struct Dielectric {
    /// Index of refraction
    ior: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `ior`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn new(ior: f32) -> Self {
        Self { ior }
    }

    pub fn ior(&self) -> f32 {
        self.ior
    }
}

impl Material for Dielectric {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        // Glass never tints
        let attenuation = Color::ONE;
        let direction = ray_in.direction();
        let reflected = reflect(direction, rec.normal);
        let d_dot_n = direction.dot(rec.normal);

        let (outward_normal, ni_over_nt, cosine) = if d_dot_n > 0.0 {
            // Leaving the medium
            (-rec.normal, self.ior, self.ior * d_dot_n / direction.length())
        } else {
            (rec.normal, 1.0 / self.ior, -d_dot_n / direction.length())
        };

        let refracted = refract(direction, outward_normal, ni_over_nt);
        let reflect_prob = match refracted {
            Some(_) => schlick(cosine, self.ior),
            None => 1.0,
        };

        // Drawn even under total internal reflection so every call consumes one sample
        let sample = gen_f32(rng);
        let scattered_dir = match refracted {
            Some(refracted) if sample >= reflect_prob => refracted,
            _ => reflected,
        };

        Some(ScatterResult {
            attenuation,
            scattered: Ray::new(rec.p, scattered_dir),
        })
    }
}
