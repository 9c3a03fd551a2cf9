use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use facemesh::exec::{Backend, DefaultBackend};
use facemesh::geom2::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use facemesh::{ClipCfg, GeomCfg, Mesh, Revalidate};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod meshio;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Planar face to triangle mesh")]
struct Cmd {
    /// More logging (-v info, -vv debug, -vvv trace); default warn
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy, Debug)]
struct Tolerances {
    /// Inclusive slack of the ear-blocking point-in-triangle test
    #[arg(long, default_value_t = GeomCfg::default().eps_inside)]
    eps_inside: f64,
    /// Per-axis distance under which two boundary points coincide
    #[arg(long, default_value_t = GeomCfg::default().eps_coincide)]
    eps_coincide: f64,
    /// Reclassify every active vertex after each clip
    #[arg(long)]
    full_revalidate: bool,
}

impl Tolerances {
    fn geom(&self) -> GeomCfg {
        GeomCfg {
            eps_coincide: self.eps_coincide,
            eps_inside: self.eps_inside,
        }
    }

    fn clip(&self) -> ClipCfg {
        ClipCfg {
            revalidate: if self.full_revalidate {
                Revalidate::Full
            } else {
                Revalidate::Neighbors
            },
        }
    }

    fn params(&self) -> serde_json::Value {
        serde_json::json!({
            "eps_inside": self.eps_inside,
            "eps_coincide": self.eps_coincide,
            "full_revalidate": self.full_revalidate,
        })
    }
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate the single face of a STEP file
    Step {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        tol: Tolerances,
    },
    /// Triangulate a JSON array of 2D or 3D points
    Points {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        tol: Tolerances,
    },
    /// Triangulate a random star polygon
    Random {
        #[arg(long, default_value_t = 16)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        tol: Tolerances,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Step { input, out, tol } => step(&input, &out, tol),
        Action::Points { input, out, tol } => points(&input, &out, tol),
        Action::Random {
            vertices,
            seed,
            index,
            out,
            tol,
        } => random(vertices, seed, index, &out, tol),
        Action::Report => report(),
    }
}

fn step(input: &Path, out: &Path, tol: Tolerances) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "step");
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let mesh = facemesh::mesh_from_step(&text, tol.geom(), tol.clip())
        .with_context(|| format!("triangulating {}", input.display()))?;
    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "tolerances": tol.params(),
    });
    finish(out, &mesh, Payload::new("step", params))
}

fn points(input: &Path, out: &Path, tol: Tolerances) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "points");
    let pts = meshio::read_points(input)?;
    let mesh = facemesh::mesh_from_points(&pts, tol.geom(), tol.clip())
        .with_context(|| format!("triangulating {}", input.display()))?;
    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "tolerances": tol.params(),
    });
    finish(out, &mesh, Payload::new("points", params))
}

fn random(vertices: usize, seed: u64, index: u64, out: &Path, tol: Tolerances) -> Result<()> {
    tracing::info!(vertices, seed, index, out = %out.display(), "random");
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..StarCfg::default()
    };
    let poly = draw_star_polygon(cfg, ReplayToken::new(seed, index));
    let mesh = facemesh::triangulate_2d(&poly, tol.geom(), tol.clip())
        .with_context(|| format!("triangulating star polygon seed={seed} index={index}"))?;
    let params = serde_json::json!({
        "vertices": poly.len(),
        "seed": seed,
        "index": index,
        "tolerances": tol.params(),
    });
    finish(out, &mesh, Payload::new("random", params))
}

fn finish(out: &Path, mesh: &Mesh, payload: Payload) -> Result<()> {
    meshio::write_mesh(out, mesh)?;
    let prov = write_sidecar(out, payload.with_summary(meshio::Summary::from(mesh)))?;
    tracing::info!(
        triangles = mesh.triangle_count(),
        provenance = %prov.display(),
        "wrote mesh"
    );
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "facemesh_version": facemesh::VERSION,
        "backend": DefaultBackend::default().name(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
