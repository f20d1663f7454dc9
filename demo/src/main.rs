use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meshmath::math::*;
use meshmath::mesh::*;
use std::path::{Path, PathBuf};

mod config;
mod convert;

use config::SceneConfig;

/// Inspect and author binary meshes for the armadillo-in-a-cube scene.
#[derive(Debug, Parser)]
#[command(name = "demo", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a mesh, report its layout and the scene matrices that frame it.
    Info {
        #[arg(default_value = "data/armadillo.bin")]
        mesh: PathBuf,

        /// Scene description in TOML; built-in defaults when omitted.
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Seconds of model spin; the angle is `rotation_speed * time`.
        #[arg(long, value_name = "SECONDS", default_value_t = 0.0, allow_negative_numbers = true)]
        time: f32,
    },
    /// Convert a Wavefront OBJ file to the binary mesh format.
    Convert { obj: PathBuf, out: PathBuf },
    /// Write the flat-shaded cube that surrounds the model.
    Cube {
        out: PathBuf,

        #[arg(long, default_value_t = 1.0)]
        size: f32,
    },
    /// Print the default scene configuration as TOML.
    Config {
        /// Write to this file instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Info { mesh, config, time } => info(&mesh, config.as_deref(), time),
        Command::Convert { obj, out } => {
            let mesh = convert::load_obj(&obj).with_context(|| format!("Failed to convert {}", obj.display()))?;
            save(&mesh, &out)
        }
        Command::Cube { out, size } => save(&MeshData::cube(size), &out),
        Command::Config { out } => dump_config(out.as_deref()),
    }
}

fn dump_config(out: Option<&Path>) -> Result<()> {
    let text = SceneConfig::default().to_toml().context("Failed to serialize the default scene")?;
    match out {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote the default scene to {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn save(mesh: &MeshData, path: &Path) -> Result<()> {
    if let Err(e) = mesh.validate() {
        log::warn!("Writing a mesh that fails validation: {}", e);
    }
    save_mesh(mesh, path).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {} vertices and {} triangles to {}", mesh.vertex_count(), mesh.triangle_count(), path.display());
    Ok(())
}

fn info(path: &Path, config: Option<&Path>, time: f32) -> Result<()> {
    let scene = match config {
        Some(config) => SceneConfig::load_from_file(config)
            .with_context(|| format!("Failed to load scene config {}", config.display()))?,
        None => SceneConfig::default(),
    };

    let mesh = load_mesh(path).with_context(|| format!("Failed to load mesh {}", path.display()))?;
    let layout = mesh.layout();
    log::info!("Loaded the mesh with {} vertices and {} triangles", mesh.vertex_count(), mesh.triangle_count());
    log::info!("Vertex layout: {} bytes per vertex", layout.vertex_size);
    log::info!("  Position size: {} bytes | offset: {} bytes", layout.positions_size, layout.positions_offset);
    log::info!("  Normal size:   {} bytes | offset: {} bytes", layout.normals_size, layout.normals_offset);
    if let Err(e) = mesh.validate() {
        log::warn!("{}: {}", path.display(), e);
    }

    let aabb = mesh.aabb();
    println!("AABB min: {}AABB max: {}", aabb.min, aabb.max);

    let model = scene.model_matrix(time);
    let view = scene.view_matrix();
    let projection = scene.projection_matrix();
    println!("Model:\n{}View:\n{}Projection:\n{}", model, view, projection);

    let modelview = view * model;
    let viewport = scene.viewport();
    println!("Window-space AABB corners:");
    for corner in aabb.corners() {
        let win = project(corner.as_point4(), &modelview, &projection, viewport);
        print!("{}", win);
        if !(0.0..=1.0).contains(&win.z) {
            log::warn!("Corner {:?} falls outside the depth range", corner);
        }
    }
    Ok(())
}
