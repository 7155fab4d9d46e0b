use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use cellgrid::{
    Cell, DenseGrid, DensityPolicy, ErrorKind, Grid, GridError, HashGrid, ImmutableGrid,
    ImmutableKind, Layout, MutableGrid, MutableGridKind,
};

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn copy_of_is_idempotent_on_immutable_grids() {
    let mut source = HashGrid::create(6, 6).unwrap();
    source.put(5, 0, 1.5f32.to_bits()).unwrap();
    source.put(0, 5, 2.5f32.to_bits()).unwrap();
    let once = ImmutableGrid::copy_of(&source);
    let twice = ImmutableGrid::copy_of(&once);
    assert!(ImmutableGrid::ptr_eq(&once, &twice));
    assert_eq!(once, twice);
    assert_eq!(hash_of(&once), hash_of(&source));
}

#[test]
fn policy_decides_layout() {
    let mut source = DenseGrid::create(10, 10).unwrap();
    for i in 0..10 {
        source.put(i, i, i).unwrap();
    }
    let sparse = ImmutableGrid::copy_of_grid(&source).unwrap();
    assert_eq!(sparse.kind(), ImmutableKind::Sparse);
    assert_eq!(sparse.layout(), Layout::Sparse);

    let dense = ImmutableGrid::copy_with_policy(&source, DensityPolicy::FillRatio(0.1)).unwrap();
    assert_eq!(dense.kind(), ImmutableKind::Dense);
    let forced = ImmutableGrid::copy_with_policy(&source, DensityPolicy::AlwaysDense).unwrap();
    assert_eq!(forced.kind(), ImmutableKind::Dense);
    assert!(sparse == dense);
    assert_eq!(sparse.to_string(), forced.to_string());
}

#[test]
fn copy_of_cells_sizes_to_fit() {
    let grid = ImmutableGrid::copy_of_cells([
        Cell::of(2, 0, 'x').unwrap(),
        Cell::of(0, 4, 'y').unwrap(),
        Cell::of(2, 0, 'z').unwrap(),
    ])
    .unwrap();
    assert_eq!((grid.row_count(), grid.column_count()), (3, 5));
    assert_eq!(grid.size(), 2);
    assert_eq!(grid.get(2, 0), Some(&'z'));

    let err = ImmutableGrid::copy_of_cells_in(2, 2, [Cell::of(2, 0, 'x').unwrap()]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfBounds);
}

#[test]
fn constructors_validate_dimensions() {
    assert_eq!(
        ImmutableGrid::<u8>::of_dimensions(-1, 3).unwrap_err(),
        GridError::NegativeDimensions {
            rows: -1,
            columns: 3
        }
    );
    assert_eq!(
        ImmutableGrid::of_cell(-1, 0, 0u8).unwrap_err().kind(),
        ErrorKind::IndexOutOfBounds
    );
    let grid = ImmutableGrid::of_cell_in(5, 5, 4, 4, "corner").unwrap();
    assert_eq!(grid.kind(), ImmutableKind::Singleton);
    assert_eq!(grid.cell(4, 4).map(|cell| *cell.value()), Some(&"corner"));
    assert!(ImmutableGrid::of_cell_in(5, 5, 5, 0, "out").is_err());
}

#[test]
fn every_mutator_is_unsupported() {
    let mut grid = ImmutableGrid::of_cell(1, 1, 10).unwrap();
    let source = DenseGrid::<i32>::create(2, 2).unwrap();
    let results = [
        grid.put(0, 0, 1).err(),
        grid.take(1, 1).err(),
        grid.remove(1, 1).err(),
        grid.clear().err(),
        grid.put_all(&source).err(),
    ];
    for result in results {
        assert_eq!(result.map(|err| err.kind()), Some(ErrorKind::UnsupportedOperation));
    }
    assert_eq!(grid.get(1, 1), Some(&10));
}

#[test]
fn conversions_from_owned_grids() {
    let mut grid = MutableGrid::create(MutableGridKind::Sparse, 8, 8).unwrap();
    grid.put(7, 7, String::from("end")).unwrap();
    grid.put(0, 0, String::from("start")).unwrap();
    let expected = grid.clone();
    let frozen = ImmutableGrid::from(grid);
    assert_eq!(frozen.kind(), ImmutableKind::Sparse);
    assert!(frozen == expected);

    let mut mutable = DenseGrid::create(8, 8).unwrap();
    mutable.put_all(&frozen).unwrap();
    assert!(mutable == frozen);
}
