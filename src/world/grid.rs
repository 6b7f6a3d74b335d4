//! Tile grid the player walks around in.
//!
//! * Row-major storage, `(x, y)` addressing with `x` = column.
//! * Every border cell is occupied, so any ray cast from inside the grid
//!   is guaranteed to hit something.
//! * Immutable after construction; the engine and the movement code only
//!   ever borrow it.

use std::{fmt, fs, path::Path, str::FromStr};

use thiserror::Error;

/// Cell contents: `0` = empty, anything else = wall type id.
pub type Cell = u8;

/// The empty cell.
pub const EMPTY: Cell = 0;

/// Built-in 16×16 map. One text row per `y`, one char per `x`.
const CLASSIC_MAP: &str = "\
1111111111111111
1..............1
1..............1
1..............1
1..............1
1...1..........1
1..1...........1
1..............1
1..............1
1..............1
1...11.........1
1...1..........1
1..............1
1..............1
1..............1
1111111111111111";

/// Things that can go wrong when building a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows without any cells.
    #[error("grid is empty")]
    Empty,

    /// `cells.len()` does not match `width * height`.
    #[error("expected {expected} cells for the given size, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A text row is shorter or longer than the first one.
    #[error("row {row} has {len} cells, expected {width}")]
    RaggedRow { row: usize, len: usize, width: usize },

    /// Unrecognised character in map text.
    #[error("unknown cell `{ch}` at ({x}, {y})")]
    BadCell { ch: char, x: usize, y: usize },

    /// A border cell is empty; rays could escape the grid.
    #[error("border cell ({x}, {y}) is empty")]
    OpenBorder { x: usize, y: usize },

    /// Map file could not be read.
    #[error("cannot read map: {0}")]
    Io(String),
}

/// Static occupancy map.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from row-major `cells` (`cells[y * width + x]`).
    pub fn new(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }

        let grid = Self {
            width,
            height,
            cells,
        };
        grid.check_border()?;
        Ok(grid)
    }

    /// Parse ASCII map text.
    ///
    /// `.`, `0` and space are empty, `1`..`9` are wall types, `#` is wall
    /// type 1. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != width {
                return Err(GridError::RaggedRow { row: y, len, width });
            }
            for (x, ch) in row.chars().enumerate() {
                cells.push(match ch {
                    '.' | ' ' | '0' => EMPTY,
                    '#' => 1,
                    '1'..='9' => ch as u8 - b'0',
                    _ => return Err(GridError::BadCell { ch, x, y }),
                });
            }
        }

        Self::new(width, rows.len(), cells)
    }

    /// Read and parse a map file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| GridError::Io(format!("{}: {e}", path.display())))?;
        Self::parse(&text)
    }

    /// The built-in 16×16 world.
    pub fn classic() -> Self {
        Self::parse(CLASSIC_MAP).expect("built-in map is valid")
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at integer coordinates, `None` outside the grid.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// `true` for an in-bounds empty cell.
    #[inline]
    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.cell(x, y) == Some(EMPTY)
    }

    /// Same as [`Grid::is_open`] for world coordinates.
    ///
    /// Coordinates are truncated toward zero; negative values saturate to
    /// 0, which is always a border wall.
    #[inline]
    pub fn is_open_at(&self, wx: f64, wy: f64) -> bool {
        self.is_open(wx as usize, wy as usize)
    }

    fn check_border(&self) -> Result<(), GridError> {
        let (w, h) = (self.width, self.height);
        let top_bottom = (0..w).flat_map(|x| [(x, 0), (x, h - 1)]);
        let sides = (0..h).flat_map(|y| [(0, y), (w - 1, y)]);
        match top_bottom.chain(sides).find(|&(x, y)| self.is_open(x, y)) {
            Some((x, y)) => Err(GridError::OpenBorder { x, y }),
            None => Ok(()),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::classic()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        for row in self.cells.chunks(self.width) {
            let line: String = row
                .iter()
                .map(|&c| if c == EMPTY { '.' } else { (b'0' + c.min(9)) as char })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn classic_map_layout() {
        let g = Grid::classic();
        assert_eq!((g.width(), g.height()), (16, 16));
        for (x, y) in [(3, 6), (4, 5), (4, 10), (5, 10), (4, 11)] {
            assert_eq!(g.cell(x, y), Some(1), "expected wall at ({x}, {y})");
        }
        assert!(g.is_open(8, 8));
        assert!(!g.is_open(0, 8));
    }

    #[test]
    fn open_border_rejected() {
        let err = Grid::parse("111\n1.1\n1.1").unwrap_err();
        assert_eq!(err, GridError::OpenBorder { x: 1, y: 2 });
    }

    #[test]
    fn blank_row_is_an_open_row() {
        // spaces are empty cells, not a missing row
        let err = Grid::parse("111\n   \n111").unwrap_err();
        assert_eq!(err, GridError::OpenBorder { x: 0, y: 1 });

        let g = Grid::parse("11111\n1   1\n11111\n").unwrap();
        assert_eq!((g.width(), g.height()), (5, 3));
        assert!(g.is_open(2, 1));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Grid::parse("1111\n1.1\n1111").unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                len: 3,
                width: 4
            }
        );
    }

    #[test]
    fn unknown_char_rejected() {
        let err = "111\n1x1\n111".parse::<Grid>().unwrap_err();
        assert_eq!(err, GridError::BadCell { ch: 'x', x: 1, y: 1 });
    }

    #[test]
    fn size_mismatch_rejected() {
        let err = Grid::new(3, 3, vec![1; 8]).unwrap_err();
        assert_eq!(
            err,
            GridError::SizeMismatch {
                expected: 9,
                actual: 8
            }
        );
        assert_eq!(Grid::new(0, 3, vec![]).unwrap_err(), GridError::Empty);
        assert_eq!(Grid::parse("\n\n").unwrap_err(), GridError::Empty);
    }

    #[test]
    fn wall_types_and_hash() {
        let g = Grid::parse("#####\n#.2.#\n#3.9#\n11111").unwrap();
        assert_eq!(g.cell(2, 1), Some(2));
        assert_eq!(g.cell(1, 2), Some(3));
        assert_eq!(g.cell(3, 2), Some(9));
        assert_eq!(g.cell(0, 0), Some(1));
    }

    #[test]
    fn world_lookup_truncates_and_guards_bounds() {
        let g = Grid::classic();
        assert!(g.is_open_at(8.99, 8.01));
        assert!(!g.is_open_at(3.5, 6.5));
        assert!(!g.is_open_at(-0.5, 8.0));
        assert!(!g.is_open_at(100.0, 8.0));
        assert_eq!(g.cell(16, 0), None);
    }

    #[test]
    fn load_reads_map_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CLASSIC_MAP.as_bytes()).unwrap();
        writeln!(file).unwrap();

        let g = Grid::load(file.path()).unwrap();
        assert_eq!(g, Grid::classic());
    }

    #[test]
    fn load_reports_bad_map_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "111\r\n1.1\r\n1.1\r\n").unwrap();
        assert_eq!(
            Grid::load(file.path()).unwrap_err(),
            GridError::OpenBorder { x: 1, y: 2 }
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Grid::load("/definitely/not/here.map").unwrap_err();
        assert!(matches!(err, GridError::Io(_)));
    }
}
