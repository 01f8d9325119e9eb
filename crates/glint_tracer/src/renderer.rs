//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive radiance estimation with a bounce limit
//! - Sky gradient background
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma 2 output encoding

use crate::sampling::gen_f32;
use crate::{Camera, Color, Hittable};
use glint_math::{Interval, Ray};
use log::{debug, info};
use rand::RngCore;
use std::time::Instant;
use thiserror::Error;

/// Lower bound of every intersection query, keeps scattered rays off their own surface.
pub const T_MIN: f32 = 0.001;

/// Default bounce limit for the radiance estimator.
pub const MAX_DEPTH: u32 = 50;

/// Errors for render settings that cannot produce an image.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("image resolution must be non-zero, got {width}x{height}")]
    ZeroResolution { width: u32, height: u32 },

    #[error("samples per pixel must be non-zero")]
    ZeroSamples,
}

/// Vertical background gradient seen by rays that escape the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyGradient {
    /// Color looking straight down (-Y)
    pub horizon: Color,
    /// Color looking straight up (+Y)
    pub zenith: Color,
}

impl SkyGradient {
    /// Background color for a ray, interpolated on its normalized y component.
    pub fn color(&self, ray: &Ray) -> Color {
        let unit_direction = ray.direction().normalize();
        let a = 0.5 * (unit_direction.y + 1.0);
        (1.0 - a) * self.horizon + a * self.zenith
    }
}

impl Default for SkyGradient {
    fn default() -> Self {
        Self {
            horizon: Color::new(1.0, 1.0, 1.0),
            zenith: Color::new(0.5, 0.7, 1.0),
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Background for rays that hit nothing
    pub sky: SkyGradient,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 100,
            samples_per_pixel: 100,
            max_depth: MAX_DEPTH,
            sky: SkyGradient::default(),
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    /// Width over height, for building a matching camera.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Check that the settings describe a renderable image.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::ZeroResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::ZeroSamples);
        }
        Ok(())
    }
}

/// Compute the radiance carried back along a ray.
///
/// `depth` is the number of bounces already taken. Uses [`MAX_DEPTH`] and the
/// default sky.
pub fn radiance(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    trace(ray, world, depth, MAX_DEPTH, &SkyGradient::default(), rng)
}

/// Like [`radiance`], with the bounce limit and sky taken from `config`.
pub fn radiance_with(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    trace(ray, world, depth, config.max_depth, &config.sky, rng)
}

fn trace(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    max_depth: u32,
    sky: &SkyGradient,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(rec) = world.hit(ray, Interval::new(T_MIN, f32::INFINITY)) else {
        return sky.color(ray);
    };

    // Out of bounces or absorbed: no light comes back along this path
    if depth >= max_depth {
        return Color::ZERO;
    }
    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            result.attenuation * trace(&result.scattered, world, depth + 1, max_depth, sky, rng)
        }
        None => Color::ZERO,
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let encode = |c: f32| (255.99 * Interval::UNIT.clamp(linear_to_gamma(c))) as u8;
    [encode(color.x), encode(color.y), encode(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// `y` counts rows from the bottom of the image.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let s = (x as f32 + gen_f32(rng)) / config.width as f32;
        let t = (y as f32 + gen_f32(rng)) / config.height as f32;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += radiance_with(&ray, world, 0, config, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}

/// Linear color image, stored top row first.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y), with y = 0 the top row.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y), with y = 0 the top row.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Gamma-encode to packed 8-bit RGB, row-major from the top.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer on the calling thread.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Result<ImageBuffer, RenderError> {
    config.validate()?;
    info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        config.width, config.height, config.samples_per_pixel, config.max_depth
    );
    let start = Instant::now();

    let mut image = ImageBuffer::new(config.width, config.height);

    // Bottom-up image coordinates, top-down storage
    for j in (0..config.height).rev() {
        debug!("Scanlines remaining: {}", j + 1);
        let row = config.height - 1 - j;
        for i in 0..config.width {
            let color = render_pixel(camera, world, i, j, config, rng);
            image.set(i, row, color);
        }
    }

    info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CameraConfig, Dielectric, HittableList, Lambertian, Material, Metal, Sphere};
    use glint_math::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn single_sphere(material: Arc<dyn Material>) -> HittableList {
        HittableList::from_objects(vec![Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -3.0),
            1.0,
            material,
        ))])
    }

    #[test]
    fn test_sky_gradient_extremes() {
        let sky = SkyGradient::default();
        let up = Ray::new(Vec3::ZERO, Vec3::Y);
        let down = Ray::new(Vec3::ZERO, Vec3::NEG_Y);

        assert_eq!(sky.color(&up), sky.zenith);
        assert_eq!(sky.color(&down), sky.horizon);
    }

    #[test]
    fn test_miss_returns_background() {
        let world = HittableList::new();
        let mut rng = StdRng::seed_from_u64(42);

        let up = radiance(&Ray::new(Vec3::ZERO, Vec3::Y), &world, 0, &mut rng);
        assert_eq!(up, Color::new(0.5, 0.7, 1.0));

        let down = radiance(&Ray::new(Vec3::ZERO, Vec3::NEG_Y), &world, 0, &mut rng);
        assert_eq!(down, Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_depth_limit_returns_black() {
        let materials: Vec<Arc<dyn Material>> = vec![
            Arc::new(Lambertian::new(Color::splat(0.9))),
            Arc::new(Metal::new(Color::splat(0.9), 0.0)),
            Arc::new(Dielectric::new(1.5)),
        ];
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rng = StdRng::seed_from_u64(42);

        for material in materials {
            let world = single_sphere(material);
            assert_eq!(radiance(&ray, &world, MAX_DEPTH, &mut rng), Color::ZERO);
        }
    }

    #[test]
    fn test_configured_depth_limit() {
        let world = single_sphere(Arc::new(Lambertian::new(Color::ONE)));
        let config = RenderConfig::default().with_quality(1, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(radiance_with(&ray, &world, 0, &config, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_mirror_reflects_sky() {
        let albedo = Color::new(0.8, 0.6, 0.2);
        let world = single_sphere(Arc::new(Metal::new(albedo, 0.0)));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rng = StdRng::seed_from_u64(42);

        // Head-on hit bounces straight back (+Z), where the sky is halfway
        let color = radiance(&ray, &world, 0, &mut rng);
        let expected = albedo * Color::new(0.75, 0.85, 1.0);
        assert!((color - expected).length() < 1e-5);
    }

    #[test]
    fn test_diffuse_attenuates() {
        let world = single_sphere(Arc::new(Lambertian::new(Color::splat(0.5))));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rng = StdRng::seed_from_u64(42);

        // The sky never exceeds 1.0, so one bounce off albedo 0.5 caps every channel at 0.5
        for _ in 0..200 {
            let color = radiance(&ray, &world, 0, &mut rng);
            assert!(color.max_element() <= 0.5);
            assert!(color.min_element() >= 0.0);
        }
    }

    #[test]
    fn test_closed_diffuse_shell_ends_black() {
        // Inverted sphere: normals face the center, so every bounce stays inside
        let world = HittableList::from_objects(vec![Box::new(Sphere::new(
            Vec3::ZERO,
            -10.0,
            Arc::new(Lambertian::new(Color::splat(0.5))),
        ))]);
        let config = RenderConfig::default().with_quality(1, 4);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let mut rng = StdRng::seed_from_u64(3);

        let color = radiance_with(&ray, &world, 0, &config, &mut rng);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_render_config_validate() {
        assert!(RenderConfig::default().validate().is_ok());
        assert_eq!(
            RenderConfig::default().with_resolution(0, 10).validate(),
            Err(RenderError::ZeroResolution { width: 0, height: 10 })
        );
        assert_eq!(
            RenderConfig::default().with_quality(0, 5).validate(),
            Err(RenderError::ZeroSamples)
        );
    }

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::splat(4.0)), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::new(0.25, -1.0, 1.0)), [127, 0, 255]);
    }

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-0.5), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 0.0001);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_render_pixel() {
        let world = single_sphere(Arc::new(Lambertian::new(Color::splat(0.5))));
        let config = RenderConfig::default()
            .with_resolution(10, 10)
            .with_quality(4, 5);
        let camera = CameraConfig::new()
            .with_aspect_ratio(config.aspect_ratio())
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        // Center pixel hits the sphere and is darker than the sky behind it
        let color = render_pixel(&camera, &world, 5, 5, &config, &mut rng);
        assert!(color.length() > 0.0);
        assert!(color.max_element() <= 0.5);
    }

    #[test]
    fn test_render_is_reproducible() {
        let world = single_sphere(Arc::new(Lambertian::new(Color::splat(0.5))));
        let config = RenderConfig::default()
            .with_resolution(8, 4)
            .with_quality(2, 5);
        let camera = CameraConfig::new()
            .with_aspect_ratio(config.aspect_ratio())
            .build()
            .unwrap();

        let a = render(&camera, &world, &config, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = render(&camera, &world, &config, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(a.pixels, b.pixels);
        assert_eq!(a.to_rgb8().len(), 8 * 4 * 3);
    }

    #[test]
    fn test_render_orientation() {
        // Empty scene: the top row sees more of the zenith color than the bottom row
        let world = HittableList::new();
        let config = RenderConfig::default()
            .with_resolution(4, 4)
            .with_quality(1, 5);
        let camera = CameraConfig::new()
            .with_aspect_ratio(config.aspect_ratio())
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let image = render(&camera, &world, &config, &mut rng).unwrap();
        assert!(image.get(0, 0).x < image.get(0, 3).x);
    }

    #[test]
    fn test_render_rejects_bad_config() {
        let world = HittableList::new();
        let camera = CameraConfig::new().build().unwrap();
        let config = RenderConfig::default().with_resolution(0, 0);
        let mut rng = StdRng::seed_from_u64(5);

        assert!(render(&camera, &world, &config, &mut rng).is_err());
    }
}
