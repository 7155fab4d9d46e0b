use std::fs::File;
use std::io::{BufRead, BufReader, Error, Lines, Result};
use std::path::Path;

use cellgrid::mutable::{MutableGrid, MutableGridKind};
use cellgrid::Grid;

/// Reads the next `key value` header line and returns its value.
fn header(lines: &mut Lines<impl BufRead>, key: &str) -> Result<String> {
    let line = lines
        .next()
        .transpose()?
        .ok_or_else(|| Error::other(format!("missing {key} header")))?;
    match line.split_whitespace().collect::<Vec<_>>()[..] {
        [found, value] if found == key => Ok(value.to_owned()),
        [found, _] => Err(Error::other(format!("expected {key}, got {found}"))),
        _ => Err(Error::other(format!("malformed {key} header: {line:?}"))),
    }
}

fn dimension(lines: &mut Lines<impl BufRead>, key: &str) -> Result<i32> {
    header(lines, key)?.parse().map_err(Error::other)
}

/// Reads a MovingAI `.map` file, storing every blocked tile with its map character.
///
/// Rows are map lines and columns are characters. Passable tiles (`.`, `G`, `S`) stay empty.
pub fn read_obstacles(map: &Path, kind: MutableGridKind) -> Result<MutableGrid<char>> {
    let mut lines = BufReader::new(File::open(map)?).lines();

    if header(&mut lines, "type")? != "octile" {
        return Err(Error::other("expected type to be octile"));
    }
    let rows = dimension(&mut lines, "height")?;
    let columns = dimension(&mut lines, "width")?;
    if lines.next().transpose()?.as_deref() != Some("map") {
        return Err(Error::other("expected map token"));
    }

    let mut grid = MutableGrid::create(kind, rows, columns).map_err(Error::other)?;
    for (row, line) in lines.enumerate() {
        let line = line?;
        let blocked = line
            .chars()
            .enumerate()
            .filter(|&(_, tile)| !matches!(tile, '.' | 'G' | 'S'));
        for (column, tile) in blocked {
            // Out-of-range tiles surface as `CellOutOfBounds`.
            grid.put(row as i32, column as i32, tile)
                .map_err(Error::other)?;
        }
    }

    Ok(grid)
}
