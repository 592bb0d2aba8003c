//! Built-in demo scenes.
//!
//! Each preset returns the world together with a camera configuration
//! framed for it. CLI flags and config files are applied on top.

use std::path::Path;
use std::sync::Arc;

use clap::ValueEnum;
use lumen_renderer::{
    make_box, CameraConfig, CheckerTexture, Color, Dielectric, DiffuseLight, HittableList,
    ImageTexture, Lambertian, Material, Metal, Point3, Quad, RotateY, Sphere, Translate, Vec3,
};

/// Scene preset selected with `--scene`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scene {
    /// Ground, diffuse, glass and metal spheres
    Spheres,
    /// Two checker-textured spheres
    Checkered,
    /// Image-textured globe
    Earth,
    /// Five colored quads
    Quads,
    /// Emissive quad and sphere in the dark
    SimpleLight,
    /// Cornell box with two rotated boxes
    Cornell,
}

const SKY: Color = Color::new(0.70, 0.80, 1.00);

/// Build the world and camera settings for a preset.
///
/// `texture` is only read by the earth scene.
pub fn build(scene: Scene, texture: &Path) -> (HittableList, CameraConfig) {
    match scene {
        Scene::Spheres => spheres(),
        Scene::Checkered => checkered(),
        Scene::Earth => earth(texture),
        Scene::Quads => quads(),
        Scene::SimpleLight => simple_light(),
        Scene::Cornell => cornell(),
    }
}

fn spheres() -> (HittableList, CameraConfig) {
    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let center: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let left: Arc<dyn Material> = Arc::new(Dielectric::new(1.50));
    let bubble: Arc<dyn Material> = Arc::new(Dielectric::new(1.00 / 1.50));
    let right: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.5));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, ground)));
    world.add(Arc::new(Sphere::new(Point3::new(0.0, 0.0, -1.2), 0.5, center)));
    world.add(Arc::new(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.5, left)));
    // Air pocket inside the glass makes it a hollow shell
    world.add(Arc::new(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.4, bubble)));
    world.add(Arc::new(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, right)));

    let config = CameraConfig::default()
        .with_position(Point3::new(-2.0, 2.0, 1.0), Point3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_lens(20.0, 10.0, 3.4)
        .with_background(SKY);

    (world, config)
}

fn checkered() -> (HittableList, CameraConfig) {
    let checker = Arc::new(CheckerTexture::from_colors(
        0.32,
        Color::new(0.2, 0.3, 0.1),
        Color::new(0.9, 0.9, 0.9),
    ));
    let material: Arc<dyn Material> = Arc::new(Lambertian::from_texture(checker));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(Point3::new(0.0, -10.0, 0.0), 10.0, material.clone())));
    world.add(Arc::new(Sphere::new(Point3::new(0.0, 10.0, 0.0), 10.0, material)));

    let config = CameraConfig::default()
        .with_position(Point3::new(13.0, 2.0, 3.0), Point3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.0, 10.0)
        .with_background(SKY);

    (world, config)
}

fn earth(texture: &Path) -> (HittableList, CameraConfig) {
    let earth_texture = Arc::new(ImageTexture::open(texture));
    let surface: Arc<dyn Material> = Arc::new(Lambertian::from_texture(earth_texture));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(Point3::ZERO, 2.0, surface)));

    let config = CameraConfig::default()
        .with_position(Point3::new(0.0, 0.0, 12.0), Point3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.0, 10.0)
        .with_background(SKY);

    (world, config)
}

fn quads() -> (HittableList, CameraConfig) {
    let lambertian =
        |r, g, b| -> Arc<dyn Material> { Arc::new(Lambertian::new(Color::new(r, g, b))) };

    let mut world = HittableList::new();
    let faces = [
        // left red, back green, right blue, upper orange, lower teal
        (
            Point3::new(-3.0, -2.0, 5.0),
            Vec3::new(0.0, 0.0, -4.0),
            Vec3::new(0.0, 4.0, 0.0),
            lambertian(1.0, 0.2, 0.2),
        ),
        (
            Point3::new(-2.0, -2.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 4.0, 0.0),
            lambertian(0.2, 1.0, 0.2),
        ),
        (
            Point3::new(3.0, -2.0, 1.0),
            Vec3::new(0.0, 0.0, 4.0),
            Vec3::new(0.0, 4.0, 0.0),
            lambertian(0.2, 0.2, 1.0),
        ),
        (
            Point3::new(-2.0, 3.0, 1.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 4.0),
            lambertian(1.0, 0.5, 0.0),
        ),
        (
            Point3::new(-2.0, -3.0, 5.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -4.0),
            lambertian(0.2, 0.8, 0.8),
        ),
    ];
    for (q, u, v, material) in faces {
        world.add(Arc::new(Quad::new(q, u, v, material)));
    }

    let config = CameraConfig::default()
        .with_image(1.0, 400)
        .with_position(Point3::new(0.0, 0.0, 9.0), Point3::ZERO, Vec3::Y)
        .with_lens(80.0, 0.0, 10.0)
        .with_background(SKY);

    (world, config)
}

fn simple_light() -> (HittableList, CameraConfig) {
    let ground = Arc::new(CheckerTexture::from_colors(
        0.5,
        Color::new(0.2, 0.2, 0.2),
        Color::new(0.6, 0.6, 0.6),
    ));
    let light: Arc<dyn Material> = Arc::new(DiffuseLight::new(Color::splat(4.0)));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::from_texture(ground)),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, 2.0, 0.0),
        2.0,
        Arc::new(Lambertian::new(Color::new(0.6, 0.4, 0.3))),
    )));
    world.add(Arc::new(Quad::new(
        Point3::new(3.0, 1.0, -2.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
        light.clone(),
    )));
    world.add(Arc::new(Sphere::new(Point3::new(0.0, 7.0, 0.0), 2.0, light)));

    let config = CameraConfig::default()
        .with_position(Point3::new(26.0, 3.0, 6.0), Point3::new(0.0, 2.0, 0.0), Vec3::Y)
        .with_lens(20.0, 0.0, 10.0)
        .with_background(Color::ZERO);

    (world, config)
}

fn cornell() -> (HittableList, CameraConfig) {
    let red: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.65, 0.05, 0.05)));
    let white: Arc<dyn Material> = Arc::new(Lambertian::new(Color::splat(0.73)));
    let green: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.12, 0.45, 0.15)));
    let light: Arc<dyn Material> = Arc::new(DiffuseLight::new(Color::splat(15.0)));

    let mut world = HittableList::new();
    let walls = [
        (
            Point3::new(555.0, 0.0, 0.0),
            Vec3::new(0.0, 555.0, 0.0),
            Vec3::new(0.0, 0.0, 555.0),
            green,
        ),
        (Point3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 555.0, 0.0), Vec3::new(0.0, 0.0, 555.0), red),
        (
            Point3::new(343.0, 554.0, 332.0),
            Vec3::new(-130.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -105.0),
            light,
        ),
        (
            Point3::new(0.0, 0.0, 0.0),
            Vec3::new(555.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 555.0),
            white.clone(),
        ),
        (
            Point3::new(555.0, 555.0, 555.0),
            Vec3::new(-555.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -555.0),
            white.clone(),
        ),
        (
            Point3::new(0.0, 0.0, 555.0),
            Vec3::new(555.0, 0.0, 0.0),
            Vec3::new(0.0, 555.0, 0.0),
            white.clone(),
        ),
    ];
    for (q, u, v, material) in walls {
        world.add(Arc::new(Quad::new(q, u, v, material)));
    }

    let tall = make_box(Point3::ZERO, Point3::new(165.0, 330.0, 165.0), white.clone());
    world.add(Arc::new(Translate::new(
        RotateY::new(tall, 15.0),
        Vec3::new(265.0, 0.0, 295.0),
    )));

    let short = make_box(Point3::ZERO, Point3::splat(165.0), white);
    world.add(Arc::new(Translate::new(
        RotateY::new(short, -18.0),
        Vec3::new(130.0, 0.0, 65.0),
    )));

    let config = CameraConfig::default()
        .with_image(1.0, 600)
        .with_quality(200, 50)
        .with_position(
            Point3::new(278.0, 278.0, -800.0),
            Point3::new(278.0, 278.0, 0.0),
            Vec3::Y,
        )
        .with_lens(40.0, 0.0, 10.0)
        .with_background(Color::ZERO);

    (world, config)
}
