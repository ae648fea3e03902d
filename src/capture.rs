//! Removal of liberty-less groups after a placement.

use crate::board::{Board, Color, Point};
use crate::group::{has_liberty, Visited};

/// Remove every `color.opponent()` group left without liberties.
///
/// Opposing stones are scanned in row-major order and each group is examined
/// once per pass. Returns the removed points so a caller can restore them.
pub fn resolve_captures(board: &mut Board, color: Color) -> Vec<Point> {
    let opp = color.opponent();
    let mut seen = Visited::for_board(board);
    let mut captured = Vec::new();

    for p in board.points() {
        if board.get(p) != Some(opp) || seen.contains(p) {
            continue;
        }
        let mut group = Visited::for_board(board);
        let alive = has_liberty(board, p, opp, &mut group);
        seen.extend(&group);
        if !alive {
            for &stone in group.points() {
                board.set(stone, None);
            }
            captured.extend_from_slice(group.points());
        }
    }

    if !captured.is_empty() {
        tracing::debug!(by = %color, stones = captured.len(), "captured");
    }
    captured
}

/// Put captured `color` stones back, undoing [`resolve_captures`].
pub fn restore(board: &mut Board, captured: &[Point], color: Color) {
    for &p in captured {
        board.set(p, Some(color));
    }
}
