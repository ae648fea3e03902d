//! The rules engine: one game on one board.
//!
//! [`Game`] owns the board, the ko snapshot and the turn state. Front-ends
//! hold it by value and call into it one operation at a time.
//!
//! A placement is checked for phase, turn, bounds and occupancy, then the
//! stone is set, captures are resolved, and finally the ko guard compares the
//! result against the retained position. A ko retake undoes the stone and its
//! captures together, so a rejected call leaves the game exactly as it was.
//!
//! There is no suicide rule: a stone left without liberties stays on the
//! board until the opponent's next placement captures it.

use crate::board::{Board, Color, Point};
use crate::capture::{resolve_captures, restore};
use crate::constants::{MAX_SIZE, MIN_SIZE, PASSES_TO_END};
use crate::error::{GameError, MoveError};
use crate::ko::KoGuard;
use crate::territory::{self, Score};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GamePhase {
    InProgress,
    Ended,
}

/// An accepted placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub point: Point,
    pub color: Color,
    /// Opponent stones removed by this placement
    pub captured: Vec<Point>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PassOutcome {
    /// The other player is now to move
    Continue,
    /// The pass ended the game with this territory count
    Ended(Score),
}

/// Read-only view for rendering.
#[derive(Copy, Clone, Debug)]
pub struct GameView<'a> {
    pub board: &'a Board,
    pub current_player: Color,
    pub phase: GamePhase,
    pub consecutive_passes: u32,
    pub move_number: usize,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    ko: KoGuard,
    current_player: Color,
    consecutive_passes: u32,
    phase: GamePhase,
    final_score: Option<Score>,
    /// Placements and passes accepted so far
    move_number: usize,
    /// Stones captured by Black and by White
    prisoners: [usize; 2],
}

impl Game {
    /// Fresh empty board, Black to move.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Self::from_board(Board::new(size), Color::Black)
    }

    /// Start from an arbitrary position. No prior position is retained for ko.
    pub fn from_board(board: Board, to_move: Color) -> Result<Self, GameError> {
        let size = board.size();
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(GameError::InvalidSize(size));
        }
        tracing::debug!(size, to_move = %to_move, "new game");
        Ok(Self {
            board,
            ko: KoGuard::new(),
            current_player: to_move,
            consecutive_passes: 0,
            phase: GamePhase::InProgress,
            final_score: None,
            move_number: 0,
            prisoners: [0, 0],
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn current_state(&self) -> GameView<'_> {
        GameView {
            board: &self.board,
            current_player: self.current_player,
            phase: self.phase,
            consecutive_passes: self.consecutive_passes,
            move_number: self.move_number,
        }
    }

    /// Stones of the opponent that `color` has captured.
    pub fn prisoners(&self, color: Color) -> usize {
        self.prisoners[color_index(color)]
    }

    /// Territory count; available once two consecutive passes end the game.
    pub fn final_score(&self) -> Result<Score, GameError> {
        self.final_score.ok_or(GameError::NotEnded)
    }

    /// Place a `color` stone at `point`, resolving captures and ko.
    pub fn attempt_placement(&mut self, point: Point, color: Color) -> Result<Placement, MoveError> {
        if let Err(err) = self.check_preconditions(point, color) {
            tracing::debug!(?point, %color, %err, "placement rejected");
            return Err(err);
        }

        let before = self.board.snapshot();
        let captured = match place_stone(&mut self.board, &self.ko, point, color) {
            Ok(captured) => captured,
            Err(err) => {
                tracing::debug!(?point, %color, %err, "placement reverted");
                return Err(err);
            }
        };
        self.ko.remember(before);

        self.prisoners[color_index(color)] += captured.len();
        self.consecutive_passes = 0;
        self.current_player = color.opponent();
        self.move_number += 1;
        tracing::debug!(?point, %color, captured = captured.len(), "placement accepted");

        Ok(Placement {
            point,
            color,
            captured,
        })
    }

    /// Would [`Game::attempt_placement`] accept this move? The game is not changed.
    pub fn check_placement(&self, point: Point, color: Color) -> Result<(), MoveError> {
        self.preview_placement(point, color).map(|_| ())
    }

    /// The board an accepted placement would produce, without playing it.
    pub fn preview_placement(&self, point: Point, color: Color) -> Result<Board, MoveError> {
        self.check_preconditions(point, color)?;
        let mut scratch = self.board.clone();
        place_stone(&mut scratch, &self.ko, point, color)?;
        Ok(scratch)
    }

    /// `color` declines to place a stone. The second consecutive pass ends the game.
    pub fn pass(&mut self, color: Color) -> Result<PassOutcome, MoveError> {
        self.check_turn(color)?;

        self.consecutive_passes += 1;
        self.move_number += 1;
        if self.consecutive_passes >= PASSES_TO_END {
            let score = territory::score(&self.board);
            self.phase = GamePhase::Ended;
            self.final_score = Some(score);
            tracing::info!(black = score.black, white = score.white, "game ended");
            return Ok(PassOutcome::Ended(score));
        }

        tracing::debug!(%color, "pass");
        self.current_player = color.opponent();
        Ok(PassOutcome::Continue)
    }

    fn check_turn(&self, color: Color) -> Result<(), MoveError> {
        if self.phase == GamePhase::Ended {
            return Err(MoveError::GameOver);
        }
        if color != self.current_player {
            return Err(MoveError::OutOfTurn);
        }
        Ok(())
    }

    fn check_preconditions(&self, point: Point, color: Color) -> Result<(), MoveError> {
        self.check_turn(color)?;
        if !self.board.contains(point) {
            return Err(MoveError::OutOfBounds);
        }
        if self.board.get(point).is_some() {
            return Err(MoveError::Occupied);
        }
        Ok(())
    }
}

/// Set the stone, capture, then test ko. On a ko retake `board` is restored.
fn place_stone(board: &mut Board, ko: &KoGuard, point: Point, color: Color) -> Result<Vec<Point>, MoveError> {
    board.set(point, Some(color));
    let captured = resolve_captures(board, color);

    if ko.repeats(board) {
        restore(board, &captured, color.opponent());
        board.set(point, None);
        return Err(MoveError::KoViolation);
    }
    Ok(captured)
}

fn color_index(color: Color) -> usize {
    match color {
        Color::Black => 0,
        Color::White => 1,
    }
}
