//! Invariants that hold for every storage engine:
//!
//! 1. Grids with the same dimensions and cells are equal and hash alike.
//! 2. Cells iterate in row-major order.
//! 3. Removal never fails on a mutable grid, whatever the coordinates.
//! 4. A dense grid's capacity is rows times columns.
//! 5. Copying an immutable copy returns the same grid.

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use cellgrid::{
    DenseGrid, Grid, HashGrid, ImmutableGrid, MutableGrid, MutableGridKind, SparseGrid,
};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Dimensions plus a set of in-bounds cells keyed by position.
fn populated_strategy() -> impl Strategy<Value = (i32, i32, BTreeMap<(i32, i32), u16>)> {
    (1i32..=12, 1i32..=12).prop_flat_map(|(rows, columns)| {
        let cells = prop::collection::btree_map((0..rows, 0..columns), any::<u16>(), 0..40);
        (Just(rows), Just(columns), cells)
    })
}

fn fill<G: Grid<Value = u16>>(grid: &mut G, cells: &BTreeMap<(i32, i32), u16>) {
    for (&(row, column), &value) in cells {
        grid.put(row, column, value).unwrap();
    }
}

proptest! {
    #[test]
    fn equality_ignores_representation((rows, columns, cells) in populated_strategy()) {
        let mut dense = DenseGrid::create(rows, columns).unwrap();
        let mut sparse = SparseGrid::create(rows, columns).unwrap();
        let mut hash = HashGrid::create(rows, columns).unwrap();
        fill(&mut dense, &cells);
        fill(&mut sparse, &cells);
        fill(&mut hash, &cells);
        let frozen = ImmutableGrid::copy_of(&hash);

        prop_assert!(dense == sparse);
        prop_assert!(sparse == hash);
        prop_assert!(frozen == dense);
        prop_assert_eq!(hash_of(&dense), hash_of(&sparse));
        prop_assert_eq!(hash_of(&hash), hash_of(&frozen));
        prop_assert_eq!(dense.to_string(), frozen.to_string());
    }

    #[test]
    fn cells_are_row_major((rows, columns, cells) in populated_strategy()) {
        let mut hash = HashGrid::create(rows, columns).unwrap();
        fill(&mut hash, &cells);
        let positions: Vec<_> = hash.iter().map(|cell| (cell.row(), cell.column())).collect();
        let expected: Vec<_> = cells.keys().copied().collect();
        prop_assert_eq!(positions, expected);
        prop_assert_eq!(hash.iter().len(), cells.len());
    }

    #[test]
    fn removal_is_lenient(
        (rows, columns, cells) in populated_strategy(),
        row in any::<i32>(),
        column in any::<i32>(),
    ) {
        for kind in [MutableGridKind::Dense, MutableGridKind::Sparse, MutableGridKind::Hash] {
            let mut grid = MutableGrid::create(kind, rows, columns).unwrap();
            fill(&mut grid, &cells);
            let present = cells.contains_key(&(row, column));
            prop_assert_eq!(grid.remove(row, column), Ok(present));
            prop_assert_eq!(grid.size(), cells.len() - present as usize);
        }
    }

    #[test]
    fn dense_capacity_is_area(rows in 0i32..200, columns in 0i32..200) {
        let grid = DenseGrid::<u8>::create(rows, columns).unwrap();
        prop_assert_eq!(grid.capacity(), rows as usize * columns as usize);
        prop_assert_eq!(grid.storage().len(), grid.capacity());
        prop_assert!(grid.is_empty());
    }

    #[test]
    fn copy_of_copy_is_same_grid((rows, columns, cells) in populated_strategy()) {
        let mut sparse = SparseGrid::create(rows, columns).unwrap();
        fill(&mut sparse, &cells);
        let once = ImmutableGrid::copy_of(&sparse);
        let twice = ImmutableGrid::copy_of(&once);
        prop_assert!(ImmutableGrid::ptr_eq(&once, &twice));
        prop_assert_eq!((once.row_count(), once.column_count()), (rows, columns));
    }
}

#[test]
fn random_edits_agree_across_engines() {
    let mut rng = Pcg64::seed_from_u64(0x5eed);
    let mut dense = DenseGrid::create(16, 9).unwrap();
    let mut hash = HashGrid::create(16, 9).unwrap();

    for _ in 0..2000 {
        let row = rng.gen_range(-2..18);
        let column = rng.gen_range(-2..11);
        if rng.gen_bool(0.6) {
            let value = rng.gen::<u16>();
            assert_eq!(dense.put(row, column, value), hash.put(row, column, value));
        } else {
            assert_eq!(dense.take(row, column), hash.take(row, column));
        }
        assert_eq!(dense.size(), hash.size());
    }

    assert!(dense == hash);
    assert_eq!(dense.to_string(), hash.to_string());
}
