//! Digit-per-cell text format for grids.
//!
//! ```text
//! 1110
//! 1201
//! 9990
//! ```
//!
//! Each line is one row and each character one cell weight (`0`-`9`, `0`
//! meaning blocked). Whitespace around a line is ignored and blank lines
//! are skipped, so files written on any platform read back the same.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{GridError, Result};
use crate::geom::Point;
use crate::grid::WeightedGrid;

/// Parse a grid from digit rows.
pub fn read_grid<R: BufRead>(reader: R) -> Result<WeightedGrid> {
    let mut width = None;
    let mut height = 0;
    let mut weights = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut found = 0;
        for (x, ch) in line.chars().enumerate() {
            let digit = ch
                .to_digit(10)
                .ok_or(GridError::InvalidDigit { ch, x, y: height })?;
            weights.push(digit as u8);
            found += 1;
        }
        match width {
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(GridError::RaggedRow {
                    row: height,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        height += 1;
    }

    let width = width.ok_or(GridError::EmptyGrid)?;
    log::debug!("read {width}x{height} grid");
    WeightedGrid::new(width, height, weights)
}

/// Write a grid as digit rows, one `\n`-terminated line per row.
pub fn write_grid<W: Write>(grid: &WeightedGrid, mut writer: W) -> Result<()> {
    let mut line = String::with_capacity(grid.width() as usize + 1);
    for (y, row) in grid.rows().enumerate() {
        line.clear();
        for (x, &weight) in row.iter().enumerate() {
            let ch = char::from_digit(u32::from(weight), 10).ok_or(GridError::WeightOutOfRange {
                weight,
                pos: Point::new(x as i32, y as i32),
            })?;
            line.push(ch);
        }
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a grid file.
pub fn load_grid(path: impl AsRef<Path>) -> Result<WeightedGrid> {
    read_grid(BufReader::new(File::open(path)?))
}

/// Write a grid file, replacing any existing one.
pub fn save_grid(grid: &WeightedGrid, path: impl AsRef<Path>) -> Result<()> {
    write_grid(grid, BufWriter::new(File::create(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "\
1110
1201
9990
";

    #[test]
    fn parse_digits() {
        let g = read_grid(MAP.as_bytes()).unwrap();
        assert_eq!((g.width(), g.height()), (4, 3));
        assert_eq!(g.weight(Point::new(1, 1)), Some(2));
        assert_eq!(g.weight(Point::new(0, 2)), Some(9));
        assert_eq!(g.walkable_count(), 9);
    }

    #[test]
    fn round_trip_preserves_weights() {
        let g = read_grid(MAP.as_bytes()).unwrap();
        let mut out = Vec::new();
        write_grid(&g, &mut out).unwrap();
        assert_eq!(String::from_utf8(out.clone()).unwrap(), MAP);
        let back = read_grid(out.as_slice()).unwrap();
        assert!(g.rows().eq(back.rows()));
    }

    #[test]
    fn tolerates_crlf_and_blank_lines() {
        let g = read_grid("12\r\n\r\n34\r\n".as_bytes()).unwrap();
        assert_eq!((g.width(), g.height()), (2, 2));
        assert_eq!(g.weight(Point::new(1, 1)), Some(4));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            read_grid("12\n3x\n".as_bytes()),
            Err(GridError::InvalidDigit { ch: 'x', x: 1, y: 1 })
        ));
        assert!(matches!(
            read_grid("12\n345\n".as_bytes()),
            Err(GridError::RaggedRow { row: 1, expected: 2, found: 3 })
        ));
        assert!(matches!(read_grid("\n\n".as_bytes()), Err(GridError::EmptyGrid)));
    }

    #[test]
    fn refuses_multi_digit_weights() {
        let g = WeightedGrid::new(2, 1, vec![1, 12]).unwrap();
        assert!(matches!(
            write_grid(&g, Vec::new()),
            Err(GridError::WeightOutOfRange { weight: 12, .. })
        ));
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.txt");
        let g = read_grid(MAP.as_bytes()).unwrap();
        save_grid(&g, &path).unwrap();
        let back = load_grid(&path).unwrap();
        assert!(g.rows().eq(back.rows()));
        assert!(matches!(
            load_grid(dir.path().join("missing.txt")),
            Err(GridError::Io(_))
        ));
    }
}
