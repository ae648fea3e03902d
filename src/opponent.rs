//! Random opponent.
//!
//! Picks a uniformly random placement that the engine would accept, and
//! passes when there is none worth playing. It skips its own single-point
//! eyes and placements that would leave its stone without liberties, so a
//! game between two of these reaches two passes.

use crate::board::{Board, Color, Point};
use crate::game::Game;
use crate::group::{has_liberty, Visited};

/// What the opponent wants to do on its turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    Place(Point),
    Pass,
}

pub struct RandomOpponent {
    rng: fastrand::Rng,
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomOpponent {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Deterministic opponent for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Choose a move for `color` without changing `game`.
    pub fn choose(&mut self, game: &Game, color: Color) -> Choice {
        let board = game.board();
        let mut candidates: Vec<Point> = board
            .points()
            .filter(|&p| board.is_empty_at(p) && !is_own_eye(board, p, color))
            .collect();
        self.rng.shuffle(&mut candidates);

        candidates
            .into_iter()
            .find(|&p| match game.preview_placement(p, color) {
                Ok(after) => keeps_liberty(&after, p, color),
                Err(_) => false,
            })
            .map_or(Choice::Pass, Choice::Place)
    }
}

/// An empty point whose on-board neighbors are all `color` stones.
fn is_own_eye(board: &Board, p: Point, color: Color) -> bool {
    board.neighbors(p).all(|n| board.get(n) == Some(color))
}

fn keeps_liberty(board: &Board, p: Point, color: Color) -> bool {
    let mut group = Visited::for_board(board);
    has_liberty(board, p, color, &mut group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GamePhase;

    #[test]
    fn test_choice_is_legal() {
        let game = Game::new(9).unwrap();
        let mut opponent = RandomOpponent::with_seed(7);
        match opponent.choose(&game, Color::Black) {
            Choice::Place(p) => assert!(game.check_placement(p, Color::Black).is_ok()),
            Choice::Pass => panic!("empty board has legal moves"),
        }
    }

    #[test]
    fn test_same_seed_same_choice() {
        let game = Game::new(9).unwrap();
        let a = RandomOpponent::with_seed(42).choose(&game, Color::Black);
        let b = RandomOpponent::with_seed(42).choose(&game, Color::Black);
        assert_eq!(a, b);
    }

    #[test]
    fn test_passes_when_only_eyes_remain() {
        let board = Board::from_rows(&["B.B", "BBB", "B.B"]).unwrap();
        let game = Game::from_board(board, Color::Black).unwrap();
        let mut opponent = RandomOpponent::with_seed(1);
        assert_eq!(opponent.choose(&game, Color::Black), Choice::Pass);
    }

    #[test]
    fn test_avoids_self_capture() {
        // White's only empty points are inside Black's two eyes.
        let board = Board::from_rows(&["B.B", "BBB", "B.B"]).unwrap();
        let game = Game::from_board(board, Color::White).unwrap();
        let mut opponent = RandomOpponent::with_seed(1);
        assert_eq!(opponent.choose(&game, Color::White), Choice::Pass);
    }

    #[test]
    fn test_self_play_reaches_end() {
        let mut game = Game::new(5).unwrap();
        let mut opponent = RandomOpponent::with_seed(3);
        for _ in 0..2000 {
            if game.phase() == GamePhase::Ended {
                break;
            }
            let color = game.current_player();
            match opponent.choose(&game, color) {
                Choice::Place(p) => {
                    game.attempt_placement(p, color).unwrap();
                }
                Choice::Pass => {
                    game.pass(color).unwrap();
                }
            }
        }
        assert_eq!(game.phase(), GamePhase::Ended);
        assert!(game.final_score().is_ok());
    }
}
