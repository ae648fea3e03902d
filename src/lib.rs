//! Goban-Rules: a Go rules engine.
//!
//! This crate implements the rules of a square-board Go variant: legality
//! of placements, connected groups and their liberties, captures, a
//! single-position ko guard and territory scoring. Front-ends (a GTP
//! server, self-play, rendering) sit outside the engine and drive it
//! through [`game::Game`].
//!
//! ## Modules
//!
//! - [`constants`] - Default board size and turn rules
//! - [`board`] - Board cells, points and snapshots
//! - [`group`] - Iterative flood fill for groups, liberties and regions
//! - [`capture`] - Removal of groups without liberties
//! - [`ko`] - Single-snapshot repetition guard
//! - [`territory`] - Empty-region territory scoring
//! - [`game`] - The engine: move validation, turns and game end
//! - [`opponent`] - Random move chooser
//! - [`gtp`] - Go Text Protocol front-end
//!
//! ## Example
//!
//! ```
//! use goban_rules::board::{Color, Point};
//! use goban_rules::game::{Game, PassOutcome};
//!
//! let mut game = Game::new(9).unwrap();
//! game.attempt_placement(Point::new(4, 4), Color::Black).unwrap();
//! game.pass(Color::White).unwrap();
//!
//! match game.pass(Color::Black).unwrap() {
//!     PassOutcome::Ended(score) => assert_eq!(score.black, 80),
//!     PassOutcome::Continue => unreachable!(),
//! }
//! ```

pub mod board;
pub mod capture;
pub mod constants;
pub mod error;
pub mod game;
pub mod group;
pub mod gtp;
pub mod ko;
pub mod opponent;
pub mod territory;
