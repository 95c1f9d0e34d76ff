use std::error::Error;
use std::time::Instant;

use clap::Parser;
use image::{Rgb, RgbImage};
use log::{info, LevelFilter};
use rayon::prelude::*;

use lumen::{Ray, RayTracer, RenderParameters, Scene, Vec3};

#[derive(Parser)]
#[command(name = "lumen", about = "A small Whitted-style ray tracer")]
struct Args {
    /// Scene description to render.
    #[arg(short, long, default_value = "scene.json")]
    scene: String,

    /// Output image path.
    #[arg(short, long, default_value = "render.png")]
    output: String,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Maximum number of reflection bounces per ray.
    #[arg(short, long, default_value_t = 2)]
    depth: u32,

    #[arg(short, long)]
    verbose: bool,
}

/// Dimensions of the image plane sitting one unit in front of the camera.
struct Viewport {
    width: f64,
    height: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let scene = Scene::load(&args.scene)?;
    info!(
        "loaded {}: {} objects, {} lights",
        args.scene,
        scene.objects.len(),
        scene.lights.len()
    );

    let parameters = RenderParameters {
        reflection_depth: args.depth,
        ..RenderParameters::default()
    };
    let tracer = RayTracer::new(&scene, parameters);

    let (width, height) = (args.width, args.height);
    let viewport = Viewport {
        width: 1.0,
        height: 1.0,
    };
    let origin = Vec3::new(0.0, 0.0, -2.0);

    let now = Instant::now();

    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    buffer.par_chunks_mut(3).enumerate().for_each(|(n, pixel)| {
        let x = n % width as usize;
        let y = n / width as usize;

        let sx = x as f64 + width as f64 / -2.0;
        let sy = height as f64 / 2.0 - y as f64;

        let direction = Vec3::new(
            sx * viewport.width / width as f64,
            sy * viewport.height / height as f64,
            1.0,
        );

        let ray = Ray::new(origin, direction);
        let color = Rgb::from(tracer.trace(&ray));

        pixel.copy_from_slice(&color.0);
    });

    info!(
        "rendered {}x{} in {:.3} ms",
        width,
        height,
        now.elapsed().as_micros() as f64 / 1000.0
    );

    let image = RgbImage::from_raw(width, height, buffer)
        .ok_or("render buffer does not match the image dimensions")?;
    image.save(&args.output)?;
    info!("wrote {}", args.output);

    Ok(())
}
