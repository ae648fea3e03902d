//! Board size limits, turn rules and display glyphs.
//!
//! # Default Board Size
//!
//! The board size is chosen at runtime, but the default used by the CLI and
//! the text protocol is selected by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//! - `board19x19`: 19x19 board
//!
//! ```sh
//! cargo build                                              # 9x9 (default)
//! cargo build --no-default-features --features board19x19  # 19x19
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN) when none is requested.
#[cfg(feature = "board9x9")]
pub const DEFAULT_SIZE: usize = 9;

#[cfg(feature = "board13x13")]
pub const DEFAULT_SIZE: usize = 13;

#[cfg(feature = "board19x19")]
pub const DEFAULT_SIZE: usize = 19;

#[cfg(any(
    all(feature = "board9x9", feature = "board13x13"),
    all(feature = "board9x9", feature = "board19x19"),
    all(feature = "board13x13", feature = "board19x19"),
))]
compile_error!("Enable only one of 'board9x9', 'board13x13' or 'board19x19'");

#[cfg(not(any(feature = "board9x9", feature = "board13x13", feature = "board19x19")))]
compile_error!("Must enable exactly one board size feature: 'board9x9', 'board13x13' or 'board19x19'");

/// Smallest accepted board.
pub const MIN_SIZE: usize = 1;

/// Largest accepted board. Vertex letters run out past 25 columns (A-Z without I).
pub const MAX_SIZE: usize = 25;

// =============================================================================
// Turn Rules
// =============================================================================

/// Consecutive passes that end the game.
pub const PASSES_TO_END: u32 = 2;

// =============================================================================
// Cell Glyphs (board snapshots and text rendering)
// =============================================================================

pub const GLYPH_BLACK: char = 'B';
pub const GLYPH_WHITE: char = 'W';
pub const GLYPH_EMPTY: char = '.';

/// Column letters for vertices. 'I' is skipped by Go convention.
pub const COLUMN_LETTERS: &[u8; 25] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";
