use std::path::Path;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

use stereonet::api::*;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Stereogram and lattice-sum data generator")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Dump a named point catalog as JSON
    Catalog {
        /// "cube" or "stereogram"
        #[arg(long)]
        kind: String,
        /// Cube edge scale / disk radius
        #[arg(long, default_value_t = 1.0)]
        size: f64,
        #[arg(long)]
        out: Option<String>,
    },
    /// Dump the boundary curves of one area as JSON
    Region {
        /// Underscore-joined area identifier, e.g. 4_47_2347
        #[arg(long)]
        area: String,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long, default_value_t = 1000)]
        resolution: usize,
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a Madelung convergence table
    Madelung {
        /// "nacl", "square" or "square-alternating"
        #[arg(long)]
        structure: String,
        #[arg(long, default_value_t = 80)]
        half_width: i64,
    },
    /// Lennard-Jones equilibrium for an oblique 2D lattice
    Lj {
        /// Angle between basis vectors, degrees
        #[arg(long)]
        gamma_deg: f64,
        #[arg(long, default_value_t = 1.0)]
        sigma: f64,
        #[arg(long, default_value_t = 1.0)]
        epsilon: f64,
        #[arg(long, default_value_t = 100)]
        half_width: i64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Catalog { kind, size, out } => catalog(&kind, size, out.as_deref()),
        Action::Region {
            area,
            radius,
            resolution,
            out,
        } => region(&area, radius, resolution, out.as_deref()),
        Action::Madelung {
            structure,
            half_width,
        } => madelung(&structure, half_width),
        Action::Lj {
            gamma_deg,
            sigma,
            epsilon,
            half_width,
        } => lj(gamma_deg, sigma, epsilon, half_width),
    }
}

fn catalog(kind: &str, size: f64, out: Option<&str>) -> Result<()> {
    tracing::info!(kind, size, "catalog");
    let value = match kind {
        "cube" => {
            let cube = Cube::new(size);
            serde_json::json!({
                "kind": kind,
                "size": size,
                "points": cube.points(),
            })
        }
        "stereogram" => {
            let stereogram = Stereogram::with_radius(size)?;
            serde_json::json!({
                "kind": kind,
                "size": size,
                "points": stereogram.points(),
            })
        }
        other => bail!("unknown catalog kind `{other}`"),
    };
    emit(&value, out)
}

fn region(area: &str, radius: f64, resolution: usize, out: Option<&str>) -> Result<()> {
    tracing::info!(area, radius, resolution, "region");
    let cfg = StereogramCfg {
        radius,
        resolution,
        ..StereogramCfg::default()
    };
    let stereogram = Stereogram::new(cfg)?;
    let edges = stereogram.edges_of_area(area)?;
    let value = serde_json::json!({
        "area": area,
        "radius": radius,
        "curves": edges,
    });
    emit(&value, out)
}

fn madelung(structure: &str, half_width: i64) -> Result<()> {
    tracing::info!(structure, half_width, "madelung");
    let sum: fn(i64) -> f64 = match structure {
        "nacl" => madelung_nacl,
        "square" => madelung_square,
        "square-alternating" => madelung_square_alternating,
        other => bail!("unknown structure `{other}`"),
    };
    let mut r = 5i64;
    while r <= half_width {
        println!("{:>6} {:>14.8}", r, sum(r));
        r *= 2;
    }
    Ok(())
}

fn lj(gamma_deg: f64, sigma: f64, epsilon: f64, half_width: i64) -> Result<()> {
    tracing::info!(gamma_deg, sigma, epsilon, half_width, "lj");
    let gamma = gamma_deg.to_radians();
    let value = serde_json::json!({
        "gamma_deg": gamma_deg,
        "half_width": half_width,
        "equilibrium_spacing": lj_equilibrium_spacing(gamma, sigma, half_width),
        "cohesive_energy": lj_cohesive_energy(gamma, epsilon, half_width),
    });
    emit(&value, None)
}

/// Write pretty JSON to `out`, creating parent directories, or to stdout.
fn emit(value: &serde_json::Value, out: Option<&str>) -> Result<()> {
    match out {
        Some(path) => {
            let out_path = Path::new(path);
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(out_path, serde_json::to_vec_pretty(value)?)?;
            tracing::info!(path, "written");
        }
        None => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_output_is_parseable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cube.json");
        catalog("cube", 1.0, path.to_str()).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["points"].as_object().unwrap().len(), 26);
    }

    #[test]
    fn unknown_kind_fails() {
        assert!(catalog("dodecahedron", 1.0, None).is_err());
    }

    #[test]
    fn region_writes_three_curves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("region.json");
        region("4_47_2347", 1.0, 200, path.to_str()).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["curves"].as_array().unwrap().len(), 3);
    }
}
