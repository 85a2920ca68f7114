//! Triplet export: per-image JSON documents and one combined table.

use anyhow::{Context, Result};
use arcshape::api::{chain_nearest, to_grid, Generation, GridCfg, Status, Triplet};
use clap::ValueEnum;
use polars::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Table format for the combined export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    fn extension(self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Parquet => "parquet",
        }
    }
}

/// How triplets are laid out before export.
#[derive(Clone, Copy, Debug, Default)]
pub struct Layout {
    /// Map into image-grid coordinates.
    pub grid: Option<GridCfg>,
    /// Reorder by nearest-neighbor chaining.
    pub chain: bool,
}

/// A triplet ready for export; `snapped` is decided in circle space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placed {
    pub triplet: Triplet,
    pub snapped: bool,
}

/// Chain in circle space first, then map to the grid.
pub fn arrange(triplets: &[Triplet], layout: Layout) -> Vec<Placed> {
    let ordered = if layout.chain {
        chain_nearest(triplets)
    } else {
        triplets.to_vec()
    };
    ordered
        .iter()
        .map(|t| Placed {
            triplet: layout.grid.map_or(*t, |g| to_grid(t, g)),
            snapped: t.is_fallback(),
        })
        .collect()
}

#[derive(Serialize)]
struct ImageDoc<'a> {
    image: usize,
    requested: usize,
    produced: usize,
    exhausted: bool,
    triplets: Vec<PointsDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
}

#[derive(Serialize)]
struct PointsDoc {
    left: [f64; 2],
    center: [f64; 2],
    right: [f64; 2],
    snapped: bool,
}

impl From<&Placed> for PointsDoc {
    fn from(p: &Placed) -> Self {
        let t = &p.triplet;
        Self {
            left: [t.left.x, t.left.y],
            center: [t.center.x, t.center.y],
            right: [t.right.x, t.right.y],
            snapped: p.snapped,
        }
    }
}

/// Write `image_{i}.json` under `dir`.
pub fn write_image_json(
    dir: &Path,
    image: usize,
    generation: &Generation,
    placed: &[Placed],
) -> Result<PathBuf> {
    let exhausted = generation.status == Status::Exhausted;
    let doc = ImageDoc {
        image,
        requested: generation.requested,
        produced: placed.len(),
        exhausted,
        triplets: placed.iter().map(PointsDoc::from).collect(),
        note: exhausted.then_some("arc space saturated before the requested count"),
    };
    let path = dir.join(format!("image_{image}.json"));
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// One row per triplet across the whole batch.
pub fn triplet_frame(batch: &[(usize, Vec<Placed>)]) -> PolarsResult<DataFrame> {
    let rows = batch.iter().map(|(_, p)| p.len()).sum();
    let mut image = Vec::with_capacity(rows);
    let mut index = Vec::with_capacity(rows);
    let mut xs: [Vec<f64>; 6] = Default::default();
    let mut snapped = Vec::with_capacity(rows);
    for (img, placed) in batch {
        for (k, p) in placed.iter().enumerate() {
            image.push(*img as u32);
            index.push(k as u32);
            for (col, pt) in p.triplet.points().iter().enumerate() {
                xs[2 * col].push(pt.x);
                xs[2 * col + 1].push(pt.y);
            }
            snapped.push(p.snapped);
        }
    }
    let [left_x, left_y, center_x, center_y, right_x, right_y] = xs;
    df!(
        "image" => image,
        "index" => index,
        "left_x" => left_x,
        "left_y" => left_y,
        "center_x" => center_x,
        "center_y" => center_y,
        "right_x" => right_x,
        "right_y" => right_y,
        "snapped" => snapped
    )
}

/// Write `triplets.{csv,parquet}` under `dir`.
pub fn write_table(
    dir: &Path,
    format: TableFormat,
    batch: &[(usize, Vec<Placed>)],
) -> Result<PathBuf> {
    let mut df = triplet_frame(batch)?;
    let path = dir.join(format!("triplets.{}", format.extension()));
    let mut file =
        File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        TableFormat::Csv => CsvWriter::new(&mut file).finish(&mut df)?,
        TableFormat::Parquet => {
            ParquetWriter::new(&mut file).finish(&mut df)?;
        }
    }
    tracing::info!(path = %path.display(), rows = df.height(), "table");
    Ok(path)
}
