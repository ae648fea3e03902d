//! Square board of cells, each empty or holding one stone.
//!
//! Points are addressed as `(row, col)` with row 0 at the top. Storage is a
//! flat row-major `Vec`, so every point maps to exactly one cell.

use std::fmt;

use crate::constants::{COLUMN_LETTERS, GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Color::Black => GLYPH_BLACK,
            Color::White => GLYPH_WHITE,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Canonical row-major serialization of a board, one glyph per cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Snapshot(String);

impl Snapshot {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Empty `size`x`size` board. Size limits are enforced by [`crate::game::Game`].
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from text rows of `B`, `W` and `.` (whitespace ignored).
    ///
    /// Returns `None` unless the rows form a square grid of known glyphs.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut board = Board::new(size);
        for (row, line) in rows.iter().enumerate() {
            let glyphs: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != size {
                return None;
            }
            for (col, glyph) in glyphs.into_iter().enumerate() {
                let cell = match glyph {
                    GLYPH_BLACK => Some(Color::Black),
                    GLYPH_WHITE => Some(Color::White),
                    GLYPH_EMPTY => None,
                    _ => return None,
                };
                board.set(Point::new(row, col), cell);
            }
        }
        Some(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, p: Point) -> bool {
        p.row < self.size && p.col < self.size
    }

    /// Flat index of an in-bounds point.
    pub(crate) fn idx(&self, p: Point) -> usize {
        p.row * self.size + p.col
    }

    /// Cell contents; `None` for empty or off-board points.
    pub fn get(&self, p: Point) -> Option<Color> {
        if !self.contains(p) {
            return None;
        }
        self.cells[self.idx(p)]
    }

    pub fn is_empty_at(&self, p: Point) -> bool {
        self.contains(p) && self.cells[self.idx(p)].is_none()
    }

    /// Overwrite one cell. Off-board points are ignored.
    pub fn set(&mut self, p: Point, cell: Option<Color>) {
        if self.contains(p) {
            let i = self.idx(p);
            self.cells[i] = cell;
        }
    }

    /// Orthogonal neighbors that lie on the board.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + use<> {
        let s = self.size;
        let up = (p.row > 0).then(|| Point::new(p.row - 1, p.col));
        let down = (p.row + 1 < s).then(|| Point::new(p.row + 1, p.col));
        let left = (p.col > 0).then(|| Point::new(p.row, p.col - 1));
        let right = (p.col + 1 < s).then(|| Point::new(p.row, p.col + 1));
        [up, down, left, right].into_iter().flatten()
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let s = self.size;
        (0..s).flat_map(move |row| (0..s).map(move |col| Point::new(row, col)))
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == Some(color)).count()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(
            self.cells
                .iter()
                .map(|c| c.map_or(GLYPH_EMPTY, Color::glyph))
                .collect(),
        )
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = || {
            COLUMN_LETTERS
                .iter()
                .take(self.size)
                .map(|&b| format!("{} ", b as char))
                .collect::<String>()
        };
        writeln!(f, "   {}", letters())?;
        for row in 0..self.size {
            write!(f, "{:>2} ", self.size - row)?;
            for col in 0..self.size {
                let ch = match self.get(Point::new(row, col)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f, "{}", self.size - row)?;
        }
        writeln!(f, "   {}", letters())
    }
}
