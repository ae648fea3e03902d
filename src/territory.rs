//! Territory counting over empty regions.
//!
//! Empty cells are split into maximal 4-connected regions. A region bordered
//! only by one color's stones belongs to that color; a region touching both
//! colors, or no stones at all, is neutral. No captures or komi are added.

use std::fmt;

use crate::board::{Board, Color, Point};
use crate::group::{flood, Visited};

/// Raw territory counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// Color with more territory, or `None` on a tie.
    pub fn leader(&self) -> Option<Color> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// GTP result notation: `B+n`, `W+n` or `0`.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.leader() {
            Some(Color::Black) => write!(f, "B+{}", self.black - self.white),
            Some(Color::White) => write!(f, "W+{}", self.white - self.black),
            None => write!(f, "0"),
        }
    }
}

/// One maximal empty region and who, if anyone, it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub points: Vec<Point>,
    pub owner: Option<Color>,
}

/// All empty regions in row-major order of their first cell.
pub fn regions(board: &Board) -> Vec<Region> {
    let mut seen = Visited::for_board(board);
    let mut out = Vec::new();

    for p in board.points() {
        if !board.is_empty_at(p) || seen.contains(p) {
            continue;
        }
        let mut region = Visited::for_board(board);
        let border = flood(board, p, &mut region);
        seen.extend(&region);
        out.push(Region {
            points: region.points().to_vec(),
            owner: border.sole_color(),
        });
    }
    out
}

pub fn score(board: &Board) -> Score {
    regions(board)
        .into_iter()
        .fold(Score::default(), |mut score, region| {
            match region.owner {
                Some(Color::Black) => score.black += region.points.len(),
                Some(Color::White) => score.white += region.points.len(),
                None => {}
            }
            score
        })
}
