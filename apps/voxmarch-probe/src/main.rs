//! Voxmarch Probe
//!
//! Builds a small voxel world, marches a single ray through it and logs
//! whether the ray hit a solid voxel and across which axis.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p voxmarch-probe -- [OPTIONS]
//! ```
//!
//! ## Options
//!
//! - `--start <X,Y,Z>`: Ray start in world units (default: 0.5,0.5,0.5)
//! - `--velocity <X,Y,Z>`: Ray velocity (default: 10,10,10)
//! - `--max <T>`: Maximum travel distance (default: 100)
//! - `--solid <X,Y,Z>`: Place a solid voxel; repeatable, replaces the default (5,5,5)
//! - `--axis <none|x|y|z>`: Axis crossed by the previous march (default: none)
//! - `-h, --help`: Print help message
//!
//! ## Examples
//!
//! ```bash
//! # Diagonal ray into the default solid voxel
//! cargo run -p voxmarch-probe
//!
//! # Straight down onto a floor voxel
//! cargo run -p voxmarch-probe -- --start 40.5,100.5,40.5 --velocity 0,-1,0 --solid 40,3,40
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use voxmarch_core::{Axis, DVec3, VoxelKind, WorldPos};
use voxmarch_physics::ray_march;
use voxmarch_world::VoxelWorld;

/// Probe parameters (from CLI or defaults).
#[derive(Debug, Clone, PartialEq)]
struct ProbeConfig {
    start: DVec3,
    velocity: DVec3,
    max: f64,
    solids: Vec<WorldPos>,
    axis: Axis,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            start: DVec3::splat(0.5),
            velocity: DVec3::splat(10.0),
            max: 100.0,
            solids: vec![WorldPos::new(5, 5, 5)],
            axis: Axis::None,
        }
    }
}

impl ProbeConfig {
    /// Parse probe parameters from the process arguments.
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse_args(&args)
    }

    /// Parse probe parameters, skipping values that do not parse.
    fn parse_args(args: &[String]) -> Self {
        let mut config = Self::default();
        let mut custom_solids = false;

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let Some(value) = args.get(i + 1).map(String::as_str) else {
                warn!("Missing value for argument {flag}");
                break;
            };

            match flag {
                "--start" => match parse_vec3(value) {
                    Some(v) => config.start = DVec3::from_array(v),
                    None => warn!("Ignoring invalid --start value {value:?}"),
                },
                "--velocity" => match parse_vec3(value) {
                    Some(v) => config.velocity = DVec3::from_array(v),
                    None => warn!("Ignoring invalid --velocity value {value:?}"),
                },
                "--max" => match value.parse() {
                    Ok(max) => config.max = max,
                    Err(_) => warn!("Ignoring invalid --max value {value:?}"),
                },
                "--solid" => match parse_ivec3(value) {
                    Some([x, y, z]) => {
                        if !custom_solids {
                            config.solids.clear();
                            custom_solids = true;
                        }
                        config.solids.push(WorldPos::new(x, y, z));
                    }
                    None => warn!("Ignoring invalid --solid value {value:?}"),
                },
                "--axis" => match parse_axis(value) {
                    Some(axis) => config.axis = axis,
                    None => warn!("Ignoring invalid --axis value {value:?}"),
                },
                _ => {
                    warn!("Ignoring unknown argument {flag}");
                    i += 1;
                    continue;
                }
            }
            i += 2;
        }

        config
    }

    /// Build a world holding the configured solid voxels.
    fn build_world(&self) -> anyhow::Result<VoxelWorld> {
        let mut world = VoxelWorld::new();
        for &pos in &self.solids {
            world
                .set_voxel(pos, VoxelKind::STONE)
                .with_context(|| format!("placing solid voxel at {pos:?}"))?;
        }
        Ok(world)
    }
}

fn parse_components<T: std::str::FromStr>(value: &str) -> Option<[T; 3]> {
    let mut parts = value.split(',').map(|part| part.trim().parse::<T>());
    let x = parts.next()?.ok()?;
    let y = parts.next()?.ok()?;
    let z = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some([x, y, z])
}

fn parse_vec3(value: &str) -> Option<[f64; 3]> {
    parse_components(value)
}

fn parse_ivec3(value: &str) -> Option<[i32; 3]> {
    parse_components(value)
}

fn parse_axis(value: &str) -> Option<Axis> {
    match value.to_ascii_lowercase().as_str() {
        "none" => Some(Axis::None),
        "x" => Some(Axis::X),
        "y" => Some(Axis::Y),
        "z" => Some(Axis::Z),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    // Check for help flag before doing any work
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ProbeConfig::from_args();
    info!(
        "Probe config: start={:?} velocity={:?} max={} solids={} axis={:?}",
        config.start,
        config.velocity,
        config.max,
        config.solids.len(),
        config.axis
    );

    let world = config.build_world()?;
    info!("World built with {} loaded chunks", world.chunk_count());

    let result = ray_march(
        &world,
        config.start,
        config.velocity,
        config.max,
        config.axis,
    );
    info!(hit = result.hit, axis = ?result.axis, "March finished");

    if let Some(reflected) = result.reflect(config.velocity) {
        info!("Reflected velocity: {reflected:?}");
    }

    Ok(())
}

fn print_help() {
    eprintln!(
        "Voxmarch Probe

Marches a single ray through a voxel world and reports the result.

USAGE:
    voxmarch-probe [OPTIONS]

OPTIONS:
        --start <X,Y,Z>       Ray start in world units (default: 0.5,0.5,0.5)
        --velocity <X,Y,Z>    Ray velocity (default: 10,10,10)
        --max <T>             Maximum travel distance (default: 100)
        --solid <X,Y,Z>       Place a solid voxel, repeatable (default: 5,5,5)
        --axis <none|x|y|z>   Axis crossed by the previous march (default: none)
    -h, --help                Print this help message

ENVIRONMENT:
    RUST_LOG                  Log level (e.g., info, debug, trace)"
    );
}
