//! Built-in scenes and the cameras that frame them.

use crate::cli::SceneKind;
use glint_tracer::{
    gen_f32, CameraConfig, Color, Dielectric, HittableList, Lambertian, Material, Metal, Sphere,
    Vec3,
};
use log::info;
use rand::RngCore;
use std::sync::Arc;

/// Build the world for `kind`, drawing any random placement from `rng`.
pub fn build(kind: SceneKind, rng: &mut dyn RngCore) -> HittableList {
    let world = match kind {
        SceneKind::Cover => cover(rng),
        SceneKind::Showcase => showcase(),
    };
    info!("Built {:?} scene with {} spheres", kind, world.len());
    world
}

/// Camera shared by the built-in scenes, focused on its look-at point.
pub fn camera(aspect_ratio: f32) -> CameraConfig {
    let look_from = Vec3::new(3.0, 3.0, 2.0);
    let look_at = Vec3::new(0.0, 0.0, -1.0);
    let focus_dist = (look_from - look_at).length();
    CameraConfig::new()
        .with_position(look_from, look_at, Vec3::Y)
        .with_lens(20.0, 2.0, focus_dist)
        .with_aspect_ratio(aspect_ratio)
}

/// Ground sphere, a 22x22 grid of small random spheres and three large ones.
pub fn cover(rng: &mut dyn RngCore) -> HittableList {
    let mut world = HittableList::new();
    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(Color::splat(0.5))),
    )));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f32(rng);
            let center = Vec3::new(
                a as f32 + 0.9 * gen_f32(rng),
                0.2,
                b as f32 + 0.9 * gen_f32(rng),
            );

            // Keep clear of the large metal sphere
            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material: Arc<dyn Material> = if choose_mat < 0.8 {
                let albedo = Color::new(
                    gen_f32(rng) * gen_f32(rng),
                    gen_f32(rng) * gen_f32(rng),
                    gen_f32(rng) * gen_f32(rng),
                );
                Arc::new(Lambertian::new(albedo))
            } else if choose_mat < 0.95 {
                let albedo = Color::new(
                    0.5 * (1.0 + gen_f32(rng)),
                    0.5 * (1.0 + gen_f32(rng)),
                    0.5 * (1.0 + gen_f32(rng)),
                );
                Arc::new(Metal::new(albedo, 0.5 * gen_f32(rng)))
            } else {
                glass.clone()
            };
            world.add(Box::new(Sphere::new(center, 0.2, material)));
        }
    }

    world.add(Box::new(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, glass)));
    world.add(Box::new(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1))),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    world
}

/// Diffuse, metal and hollow glass spheres resting on a large diffuse ground.
pub fn showcase() -> HittableList {
    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));

    HittableList::from_objects(vec![
        Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5))),
        )),
        Box::new(Sphere::new(
            Vec3::new(0.0, -100.5, -1.0),
            100.0,
            Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0))),
        )),
        Box::new(Sphere::new(
            Vec3::new(1.0, 0.0, -1.0),
            0.5,
            Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.3)),
        )),
        // Outer and inverted inner surface form a glass shell
        Box::new(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, glass.clone())),
        Box::new(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), -0.45, glass)),
    ])
}
