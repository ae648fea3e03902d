//! Connected regions and liberties.
//!
//! Every traversal here uses an explicit stack, so group size is bounded only
//! by the board, never by the call stack. The same flood fill serves stone
//! groups (captures) and empty regions (territory).

use crate::board::{Board, Color, Point};

/// Marked points on one board: a flat mark per cell plus the marking order.
#[derive(Clone, Debug)]
pub struct Visited {
    size: usize,
    marks: Vec<bool>,
    order: Vec<Point>,
}

impl Visited {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            marks: vec![false; size * size],
            order: Vec::new(),
        }
    }

    pub fn for_board(board: &Board) -> Self {
        Self::new(board.size())
    }

    fn idx(&self, p: Point) -> usize {
        p.row * self.size + p.col
    }

    /// Mark `p`; returns false if it was already marked.
    pub fn insert(&mut self, p: Point) -> bool {
        let i = self.idx(p);
        if self.marks[i] {
            return false;
        }
        self.marks[i] = true;
        self.order.push(p);
        true
    }

    pub fn contains(&self, p: Point) -> bool {
        self.marks[self.idx(p)]
    }

    /// Mark every point of `other`.
    pub fn extend(&mut self, other: &Visited) {
        for &p in &other.order {
            self.insert(p);
        }
    }

    /// Marked points in the order they were reached.
    pub fn points(&self) -> &[Point] {
        &self.order
    }
}

/// What touches a flooded region from outside.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Border {
    pub empty: bool,
    pub black: bool,
    pub white: bool,
}

impl Border {
    fn note(&mut self, cell: Option<Color>) {
        match cell {
            None => self.empty = true,
            Some(Color::Black) => self.black = true,
            Some(Color::White) => self.white = true,
        }
    }

    /// The one stone color bordering the region, if exactly one does.
    pub fn sole_color(&self) -> Option<Color> {
        match (self.black, self.white) {
            (true, false) => Some(Color::Black),
            (false, true) => Some(Color::White),
            _ => None,
        }
    }
}

/// Flood the maximal 4-connected region of cells equal to `board.get(start)`.
///
/// Members are marked in `visited`; members already marked there are treated
/// as part of an earlier fill and not re-entered. Returns the cell values
/// found next to the region.
pub fn flood(board: &Board, start: Point, visited: &mut Visited) -> Border {
    let mut border = Border::default();
    if !board.contains(start) || !visited.insert(start) {
        return border;
    }
    let target = board.get(start);
    let mut stack = vec![start];

    while let Some(p) = stack.pop() {
        for n in board.neighbors(p) {
            let cell = board.get(n);
            if cell == target {
                if visited.insert(n) {
                    stack.push(n);
                }
            } else {
                border.note(cell);
            }
        }
    }
    border
}

/// Does the `color` group containing `p` touch at least one empty cell?
///
/// The whole group is always explored and recorded in `visited`, so the
/// caller can remove it in one step when this returns false. Returns false
/// if `p` does not hold a `color` stone.
pub fn has_liberty(board: &Board, p: Point, color: Color, visited: &mut Visited) -> bool {
    if board.get(p) != Some(color) {
        return false;
    }
    flood(board, p, visited).empty
}

/// Number of distinct liberties of the group at `p` (0 for an empty point).
pub fn liberties(board: &Board, p: Point) -> usize {
    if board.get(p).is_none() {
        return 0;
    }
    let mut group = Visited::for_board(board);
    flood(board, p, &mut group);

    let mut libs = Visited::for_board(board);
    for &member in group.points() {
        for n in board.neighbors(member) {
            if board.is_empty_at(n) {
                libs.insert(n);
            }
        }
    }
    libs.points().len()
}
