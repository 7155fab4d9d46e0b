use std::path::PathBuf;
use std::time::Instant;

use cellgrid::immutable::{DensityPolicy, ImmutableGrid};
use cellgrid::mutable::{MutableGrid, MutableGridKind};
use cellgrid::{Grid, GridError};
use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

mod movingai;

#[derive(Copy, Clone, ValueEnum)]
enum Storage {
    Dense,
    Sparse,
    Hash,
}

impl From<Storage> for MutableGridKind {
    fn from(storage: Storage) -> Self {
        match storage {
            Storage::Dense => MutableGridKind::Dense,
            Storage::Sparse => MutableGridKind::Sparse,
            Storage::Hash => MutableGridKind::Hash,
        }
    }
}

#[derive(Parser)]
struct Options {
    /// MovingAI map to load; a random grid is generated when absent.
    map: Option<PathBuf>,
    #[clap(long, default_value_t = 64)]
    rows: i32,
    #[clap(long, default_value_t = 64)]
    columns: i32,
    /// Fraction of cells filled in a random grid.
    #[clap(long, default_value_t = 0.25)]
    fill: f64,
    #[clap(long, default_value_t = 0)]
    seed: u64,
    #[clap(long, value_enum, default_value_t = Storage::Hash)]
    storage: Storage,
    /// Fill ratio at which the frozen copy switches to dense storage.
    #[clap(long)]
    dense_ratio: Option<f64>,
}

fn random_grid(opt: &Options) -> Result<MutableGrid<char>, GridError> {
    let mut rng = Pcg64::seed_from_u64(opt.seed);
    let fill = opt.fill.clamp(0.0, 1.0);
    let mut grid = MutableGrid::create(opt.storage.into(), opt.rows, opt.columns)?;
    for row in 0..opt.rows {
        for column in 0..opt.columns {
            if rng.gen_bool(fill) {
                grid.put(row, column, rng.gen_range('a'..='z'))?;
            }
        }
    }
    Ok(grid)
}

fn main() {
    let opt = Options::parse();

    let t1 = Instant::now();
    let grid = match &opt.map {
        Some(path) => movingai::read_obstacles(path, opt.storage.into()).unwrap(),
        None => random_grid(&opt).unwrap(),
    };
    let t2 = Instant::now();

    let frozen = match opt.dense_ratio {
        Some(ratio) => {
            ImmutableGrid::copy_with_policy(&grid, DensityPolicy::FillRatio(ratio)).unwrap()
        }
        None => ImmutableGrid::copy_of(&grid),
    };
    let t3 = Instant::now();

    let busiest_row = grid
        .rows()
        .iter()
        .max_by_key(|row| row.occupied_len())
        .map(|row| (row.index(), row.occupied_len()));

    println!(
        "{}x{} grid, {} of {} cells occupied",
        grid.row_count(),
        grid.column_count(),
        grid.size(),
        grid.capacity()
    );
    println!("build: {:.2?}, freeze: {:.2?}", t2 - t1, t3 - t2);
    println!("frozen as {:?}, equal to source: {}", frozen.kind(), frozen == grid);
    if let Some((row, count)) = busiest_row {
        println!("busiest row: {row} with {count} cells");
    }
    if grid.size() <= 16 {
        println!("{frozen}");
    }
}
