//! `lumen` - render a built-in scene to an image file.

mod scenes;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::{render, BvhNode, Camera, CameraConfig};
use scenes::Scene;

/// Log levels accepted by `--log-level`.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "Offline CPU path tracer")]
struct Args {
    /// Scene preset to render
    #[arg(long, value_enum, default_value = "spheres")]
    scene: Scene,

    /// Output image; the format follows the extension
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// JSON camera settings layered over the scene's own
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Samples per pixel (rounded down to a square number)
    #[arg(short, long)]
    samples: Option<u32>,

    /// Maximum ray bounce depth
    #[arg(long)]
    max_depth: Option<u32>,

    /// Seed for the per-pixel random streams
    #[arg(long)]
    seed: Option<u64>,

    /// Texture image for the earth scene
    #[arg(long, default_value = "earthmap.jpg")]
    texture: PathBuf,

    /// Build a BVH over the scene before rendering
    #[arg(long)]
    bvh: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

impl Args {
    /// Apply explicit flags on top of `config`.
    fn apply_overrides(&self, mut config: CameraConfig) -> CameraConfig {
        if let Some(width) = self.width {
            config.image_width = width;
        }
        if let Some(samples) = self.samples {
            config.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }
}

/// Overlay the fields present in a JSON file onto `base`.
///
/// Fields missing from the file keep the preset's values.
fn layer_config_file(base: &CameraConfig, path: &Path) -> Result<CameraConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let overlay: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    let serde_json::Value::Object(fields) = overlay else {
        anyhow::bail!("Config {} must be a JSON object", path.display());
    };

    let mut merged = serde_json::to_value(base)?;
    if let serde_json::Value::Object(target) = &mut merged {
        target.extend(fields);
    }

    serde_json::from_value(merged)
        .with_context(|| format!("Invalid camera settings in {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let (world, mut config) = scenes::build(args.scene, &args.texture);
    log::info!("Scene {:?} with {} objects", args.scene, world.len());

    if let Some(path) = &args.config {
        config = layer_config_file(&config, path)?;
    }
    let config = args.apply_overrides(config);

    let camera = Camera::new(&config).context("Invalid camera settings")?;

    let image = if args.bvh {
        let bvh = BvhNode::from_list(&world);
        log::debug!("BVH depth {}", bvh.depth());
        render(&camera, &bvh)
    } else {
        render(&camera, &world)
    };

    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Wrote {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_renderer::{Color, Point3};

    #[test]
    fn test_flags_override_preset() {
        let args = Args::try_parse_from([
            "lumen",
            "--scene",
            "cornell",
            "--width",
            "64",
            "--samples",
            "9",
            "--seed",
            "5",
        ])
        .unwrap();
        assert_eq!(args.scene, Scene::Cornell);
        assert!(!args.bvh);

        let config = args.apply_overrides(CameraConfig::default());
        assert_eq!(config.image_width, 64);
        assert_eq!(config.samples_per_pixel, 9);
        assert_eq!(config.seed, 5);
        assert_eq!(config.max_depth, CameraConfig::default().max_depth);
    }

    #[test]
    fn test_config_file_layers_over_preset() {
        let path = std::env::temp_dir().join("lumen_cli_layer_test.json");
        std::fs::write(&path, r#"{ "image_width": 32, "background": [1.0, 0.0, 0.0] }"#).unwrap();

        let base = CameraConfig::default()
            .with_position(Point3::new(1.0, 2.0, 3.0), Point3::ZERO, lumen_renderer::Vec3::Y)
            .with_quality(16, 8);
        let merged = layer_config_file(&base, &path).unwrap();

        assert_eq!(merged.image_width, 32);
        assert_eq!(merged.background, Color::new(1.0, 0.0, 0.0));
        // Untouched fields keep the preset's values
        assert_eq!(merged.look_from, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(merged.samples_per_pixel, 16);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_config_file_must_be_object() {
        let path = std::env::temp_dir().join("lumen_cli_array_test.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(layer_config_file(&CameraConfig::default(), &path).is_err());

        let _ = std::fs::remove_file(&path);
    }
}
