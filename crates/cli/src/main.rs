use anyhow::{bail, Context, Result};
use arcshape::api::{draw_generation, GenCfg, GridCfg, PointCount, ReplayToken, Status, MIN_TARGET};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod provenance;

use export::{Layout, TableFormat};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "arcshape")]
#[command(about = "Generate arc triplets for procedural shapes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a batch of triplet sets and write them under --out
    Generate(GenerateArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of independent triplet sets (one per image)
    #[arg(long, default_value_t = 1)]
    images: usize,
    /// Per-image point count is drawn from [3, max-points)
    #[arg(long)]
    max_points: usize,
    /// Output directory
    #[arg(long)]
    out: PathBuf,
    /// Batch seed; drawn at random (and logged) when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Fraction of the chosen gap the center angle may roam
    #[arg(long, default_value_t = 0.0)]
    spread: f64,
    /// Multiplier on the default spacing buffer
    #[arg(long, default_value_t = 1.0)]
    buffer_scale: f64,
    /// Export image-grid coordinates instead of unit-circle coordinates
    #[arg(long)]
    grid: bool,
    #[arg(long, default_value_t = 200.0)]
    grid_scale: f64,
    #[arg(long, default_value_t = 256.0)]
    grid_offset: f64,
    /// Reorder triplets by nearest-neighbor chaining
    #[arg(long)]
    chain: bool,
    #[arg(long, value_enum, default_value_t = TableFormat::Csv)]
    format: TableFormat,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate(args) => generate(args),
        Action::Report => report(),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    if args.images == 0 {
        bail!("--images must be >= 1");
    }
    if args.max_points < MIN_TARGET {
        bail!(
            "--max-points must be >= {MIN_TARGET}, got {}",
            args.max_points
        );
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(
        images = args.images,
        max_points = args.max_points,
        seed,
        out = %args.out.display(),
        "generate"
    );
    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output dir {}", args.out.display()))?;

    let cfg = GenCfg {
        center_spread: args.spread,
        buffer_scale: args.buffer_scale,
        ..GenCfg::default()
    };
    let count = PointCount::Uniform {
        min: MIN_TARGET,
        max: args.max_points,
    };
    let layout = Layout {
        grid: args.grid.then_some(GridCfg {
            scale: args.grid_scale,
            offset: args.grid_offset,
        }),
        chain: args.chain,
    };
    let params = json!({
        "seed": seed,
        "images": args.images,
        "max_points": args.max_points,
        "spread": args.spread,
        "buffer_scale": args.buffer_scale,
        "grid": layout.grid.map(|g| json!({"scale": g.scale, "offset": g.offset})),
        "chain": args.chain,
    });

    let mut batch = Vec::with_capacity(args.images);
    for image in 0..args.images {
        let tok = ReplayToken {
            seed,
            index: image as u64,
        };
        let generation = draw_generation(count, &cfg, tok)?;
        if generation.status == Status::Exhausted {
            tracing::info!(
                image,
                produced = generation.triplets.len(),
                requested = generation.requested,
                "exhausted"
            );
        }
        let placed = export::arrange(&generation.triplets, layout);
        let path = export::write_image_json(&args.out, image, &generation, &placed)?;
        let mut image_params = params.clone();
        image_params["image"] = json!(image);
        image_params["requested"] = json!(generation.requested);
        provenance::write_sidecar(&path, Payload::new(image_params))?;
        batch.push((image, placed));
    }

    let table = export::write_table(&args.out, args.format, &batch)?;
    provenance::write_sidecar(&table, Payload::new(params))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "arcshape_version": arcshape::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
