//! Go Text Protocol (GTP) front-end.
//!
//! GTP is a text-based protocol for communicating with Go-playing programs.
//! This module implements a subset of GTP version 2 on top of [`Game`], so
//! the rules engine can be driven from a terminal or a graphical client
//! such as Sabaki or GoGui. Moves for `genmove` come from the random
//! opponent.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Start a new game on a `size`x`size` board
//! - `clear_board` - Start a new game on the current size
//! - `play <color> <vertex|pass>` - Play a move (must be that color's turn)
//! - `genmove <color>` - Let the random opponent move for `color`
//! - `showboard` - Render the board
//! - `captures <color>` - Stones captured by `color`
//! - `final_score` - Territory result, once two passes ended the game
//!
//! ## Example
//!
//! ```ignore
//! use goban_rules::gtp::GtpEngine;
//! let mut engine = GtpEngine::new(9)?;
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use crate::board::{Color, Point};
use crate::constants::COLUMN_LETTERS;
use crate::error::{GameError, MoveError};
use crate::game::Game;
use crate::opponent::{Choice, RandomOpponent};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "final_score",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// A parsed GTP vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Vertex {
    Pass,
    Point(Point),
}

/// GTP engine state.
pub struct GtpEngine {
    /// Current game
    game: Game,
    /// Move generator for `genmove`
    opponent: RandomOpponent,
}

impl GtpEngine {
    /// Create a GTP engine with an empty `size`x`size` board.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Self::with_opponent(size, RandomOpponent::new())
    }

    pub fn with_opponent(size: usize, opponent: RandomOpponent) -> Result<Self, GameError> {
        Ok(Self {
            game: Game::new(size)?,
            opponent,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the GTP command loop on stdin and stdout.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Answer commands from `input` until `quit` or end of input.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            if !success {
                tracing::debug!(%command, %message, "gtp command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(trimmed.len());

        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<usize>() else {
                    return (false, "invalid size".to_string());
                };
                match Game::new(size) {
                    Ok(game) => {
                        self.game = game;
                        (true, String::new())
                    }
                    Err(err) => (false, err.to_string()),
                }
            }

            "clear_board" => {
                let size = self.game.board().size();
                match Game::new(size) {
                    Ok(game) => {
                        self.game = game;
                        (true, String::new())
                    }
                    Err(err) => (false, err.to_string()),
                }
            }

            "play" => {
                let [color, vertex, ..] = args else {
                    return (false, "missing arguments".to_string());
                };
                let Some(color) = parse_color(color) else {
                    return (false, "invalid color".to_string());
                };
                let Some(vertex) = parse_vertex(vertex, self.game.board().size()) else {
                    return (false, "invalid vertex".to_string());
                };
                let result = match vertex {
                    Vertex::Pass => self.game.pass(color).map(|_| ()),
                    Vertex::Point(p) => self.game.attempt_placement(p, color).map(|_| ()),
                };
                match result {
                    Ok(()) => (true, String::new()),
                    Err(err) => (false, err.to_string()),
                }
            }

            "genmove" => {
                let Some(color) = args.first().and_then(|c| parse_color(c)) else {
                    return (false, "invalid color".to_string());
                };
                match self.genmove(color) {
                    Ok(vertex) => (true, str_vertex(vertex, self.game.board().size())),
                    Err(err) => (false, err.to_string()),
                }
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "captures" => {
                let Some(color) = args.first().and_then(|c| parse_color(c)) else {
                    return (false, "invalid color".to_string());
                };
                (true, self.game.prisoners(color).to_string())
            }

            "final_score" => match self.game.final_score() {
                Ok(score) => (true, score.to_string()),
                Err(err) => (false, err.to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn genmove(&mut self, color: Color) -> Result<Vertex, MoveError> {
        match self.opponent.choose(&self.game, color) {
            Choice::Place(p) => {
                self.game.attempt_placement(p, color)?;
                Ok(Vertex::Point(p))
            }
            Choice::Pass => {
                self.game.pass(color)?;
                Ok(Vertex::Pass)
            }
        }
    }
}

/// Parse `b`, `black`, `w` or `white` (any case).
pub fn parse_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}

/// Parse a vertex such as `D4` or `pass` for a `size`x`size` board.
///
/// Columns are letters A-Z skipping I; rows count from 1 at the bottom.
/// Vertices off the board are still returned, so the engine can reject them.
pub fn parse_vertex(s: &str, size: usize) -> Option<Vertex> {
    if s.eq_ignore_ascii_case("pass") {
        return Some(Vertex::Pass);
    }

    let (letter, digits) = s.split_at_checked(1)?;
    let letter = letter.as_bytes()[0].to_ascii_uppercase();
    let col = COLUMN_LETTERS.iter().position(|&b| b == letter)?;
    let number: usize = digits.parse().ok()?;
    if number == 0 {
        return None;
    }

    // Row numbers above the board land past the last row, not below zero.
    let row = size.checked_sub(number).unwrap_or(usize::MAX);
    Some(Vertex::Point(Point::new(row, col)))
}

/// Format a vertex for a `size`x`size` board (e.g. `D4`, `pass`).
pub fn str_vertex(vertex: Vertex, size: usize) -> String {
    match vertex {
        Vertex::Pass => "pass".into(),
        Vertex::Point(p) => {
            let letter = COLUMN_LETTERS.get(p.col).map_or('?', |&b| b as char);
            match size.checked_sub(p.row).filter(|&n| n > 0) {
                Some(number) => format!("{letter}{number}"),
                None => format!("{letter}?"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GamePhase;

    fn engine() -> GtpEngine {
        GtpEngine::with_opponent(9, RandomOpponent::with_seed(5)).unwrap()
    }

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = GtpEngine::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = GtpEngine::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_name_command() {
        let mut engine = engine();
        let (success, response) = engine.execute("name", &[]);
        assert!(success);
        assert_eq!(response, "goban-rules");
    }

    #[test]
    fn test_protocol_version() {
        let mut engine = engine();
        let (success, response) = engine.execute("protocol_version", &[]);
        assert!(success);
        assert_eq!(response, "2");
    }

    #[test]
    fn test_known_command() {
        let mut engine = engine();

        let (success, response) = engine.execute("known_command", &["showboard"]);
        assert!(success);
        assert_eq!(response, "true");

        let (success, response) = engine.execute("known_command", &["unknown_cmd"]);
        assert!(success);
        assert_eq!(response, "false");
    }

    #[test]
    fn test_boardsize() {
        let mut engine = engine();

        let (success, _) = engine.execute("boardsize", &["13"]);
        assert!(success);
        assert_eq!(engine.game().board().size(), 13);

        let (success, _) = engine.execute("boardsize", &["30"]);
        assert!(!success);
        assert_eq!(engine.game().board().size(), 13);
    }

    #[test]
    fn test_play_and_clear() {
        let mut engine = engine();

        let (success, _) = engine.execute("play", &["black", "D4"]);
        assert!(success);
        assert_eq!(engine.game().board().get(Point::new(5, 3)), Some(Color::Black));

        // Same color again is out of turn.
        let (success, response) = engine.execute("play", &["b", "E5"]);
        assert!(!success);
        assert!(response.contains("turn"));

        let (success, response) = engine.execute("play", &["w", "D4"]);
        assert!(!success);
        assert!(response.contains("not empty"));

        let (success, _) = engine.execute("clear_board", &[]);
        assert!(success);
        assert_eq!(engine.game().board().count(Color::Black), 0);
        assert_eq!(engine.game().current_player(), Color::Black);
    }

    #[test]
    fn test_play_off_board() {
        let mut engine = engine();
        let (success, response) = engine.execute("play", &["b", "K1"]);
        assert!(!success);
        assert!(response.contains("off the board"));

        let (success, _) = engine.execute("play", &["b", "A10"]);
        assert!(!success);
    }

    #[test]
    fn test_final_score_after_passes() {
        let mut engine = engine();
        let (success, _) = engine.execute("final_score", &[]);
        assert!(!success);

        engine.execute("play", &["b", "E5"]);
        engine.execute("play", &["w", "pass"]);
        engine.execute("play", &["b", "pass"]);
        assert_eq!(engine.game().phase(), GamePhase::Ended);

        let (success, response) = engine.execute("final_score", &[]);
        assert!(success);
        assert_eq!(response, "B+80");
    }

    #[test]
    fn test_genmove_plays_for_color() {
        let mut engine = engine();
        let (success, response) = engine.execute("genmove", &["black"]);
        assert!(success);
        assert_ne!(response, "pass");
        assert_eq!(engine.game().board().count(Color::Black), 1);
        assert_eq!(engine.game().current_player(), Color::White);
    }

    #[test]
    fn test_serve_formats_responses() {
        let mut engine = engine();
        let input = "1 name\n# comment\n\nplay b A1\nshowboard\n2 quit\nname\n";
        let mut output = Vec::new();
        engine.serve(input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("=1 goban-rules\n\n"));
        assert!(text.contains("=2 \n\n"));
        // Nothing is answered after quit.
        assert_eq!(text.matches("goban-rules").count(), 1);
        assert_eq!(engine.game().board().get(Point::new(8, 0)), Some(Color::Black));
    }

    #[test]
    fn test_vertex_roundtrip() {
        for (s, p) in [("A1", Point::new(8, 0)), ("J9", Point::new(0, 8)), ("H5", Point::new(4, 7))] {
            assert_eq!(parse_vertex(s, 9), Some(Vertex::Point(p)));
            assert_eq!(str_vertex(Vertex::Point(p), 9), s);
        }
        assert_eq!(parse_vertex("PASS", 9), Some(Vertex::Pass));
        assert_eq!(parse_vertex("I5", 9), None);
        assert_eq!(parse_vertex("A0", 9), None);
        assert_eq!(parse_vertex("", 9), None);
    }

    #[test]
    fn test_str_vertex_off_board_row() {
        assert_eq!(str_vertex(Vertex::Point(Point::new(12, 0)), 9), "A?");
        assert_eq!(str_vertex(Vertex::Point(Point::new(9, 1)), 9), "B?");
        assert_eq!(str_vertex(Vertex::Point(Point::new(0, 30)), 9), "?9");
    }

    #[test]
    fn test_new_engine_starts_empty() {
        let engine = GtpEngine::new(5).unwrap();
        assert_eq!(engine.game().board().size(), 5);
        assert_eq!(engine.game().current_player(), Color::Black);
        assert!(GtpEngine::new(0).is_err());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("B"), Some(Color::Black));
        assert_eq!(parse_color("white"), Some(Color::White));
        assert_eq!(parse_color("red"), None);
    }
}
