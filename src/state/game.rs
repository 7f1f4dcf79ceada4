//! Game session and turn control.
//!
//! A [`Game`] composes the board, the two players, the current-turn seat,
//! and a terminal status. Each column-click notification enters through
//! [`Game::column_clicked`] and is processed to completion; the returned
//! [`TurnOutcome`] is everything a rendering surface needs to react.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::{Board, BoardError, WIN_LENGTH};
use super::player::{Player, Seat};

/// Default board width.
pub const DEFAULT_WIDTH: usize = 7;

/// Default board height.
pub const DEFAULT_HEIGHT: usize = 6;

/// Construction-time board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Check the dimensions against the win-window geometry.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width < WIN_LENGTH || self.height < WIN_LENGTH {
            return Err(GameError::BoardTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Game state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Accepting moves.
    #[default]
    InProgress,
    /// Terminal: `winner` made four in a row.
    Won { winner: Seat },
    /// Terminal: the top row filled with no winner.
    Tied,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Won { .. } => "won",
            Self::Tied => "tied",
        }
    }

    /// Check if the game can receive moves.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Check if the game is over. No transitions leave a terminal status.
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    pub fn winner(&self) -> Option<Seat> {
        match self {
            Self::Won { winner } => Some(*winner),
            _ => None,
        }
    }
}

/// A piece placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub seat: Seat,
}

/// Externally observable result of one click notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Piece placed; the game continues with the other seat.
    Placed(Placement),
    /// Piece placed and won the game.
    Won(Placement),
    /// Piece placed and filled the board with no winner.
    Tied(Placement),
    /// The column is full; nothing changed.
    ColumnFull,
    /// The game is already over, or the notification is stale; nothing
    /// changed.
    Ignored,
}

impl TurnOutcome {
    /// The placement to render, if the move was accepted.
    pub fn placement(&self) -> Option<Placement> {
        match self {
            Self::Placed(p) | Self::Won(p) | Self::Tied(p) => Some(*p),
            Self::ColumnFull | Self::Ignored => None,
        }
    }

    /// Check if this outcome ended the game.
    pub fn ended_game(&self) -> bool {
        matches!(self, Self::Won(_) | Self::Tied(_))
    }
}

/// Game errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Dimensions too small for any four-cell window.
    BoardTooSmall { width: usize, height: usize },
    /// Click notification named a column outside the board.
    ColumnOutOfRange { column: usize, width: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoardTooSmall { width, height } => write!(
                f,
                "board {}x{} cannot fit a run of {}",
                width, height, WIN_LENGTH
            ),
            Self::ColumnOutOfRange { column, width } => {
                write!(f, "column {} is outside the board (width {})", column, width)
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::ColumnOutOfRange { column, width } => {
                Self::ColumnOutOfRange { column, width }
            }
        }
    }
}

/// Game session state.
///
/// Created once per game start; replaced wholesale when a new game begins.
/// Once terminal, every further click is a no-op for both the grid and the
/// notifications, so the end-of-game notice is produced exactly once.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,

    /// Player identities indexed by seat.
    players: [Player; 2],

    /// Seat whose turn it is. Left on the winner when the game ends.
    current: Seat,

    status: GameStatus,

    /// Accepted placements so far.
    move_count: u32,

    /// When the session was created.
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// When the session reached a terminal status.
    pub ended_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Game {
    /// Create a session on the default 7x6 board. The first player opens.
    pub fn new(first: Player, second: Player) -> Self {
        Self::build(GameConfig::default(), first, second)
    }

    /// Create a session with explicit dimensions.
    pub fn with_config(
        config: GameConfig,
        first: Player,
        second: Player,
    ) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::build(config, first, second))
    }

    fn build(config: GameConfig, first: Player, second: Player) -> Self {
        debug!(width = config.width, height = config.height, "game created");
        Self {
            board: Board::new(config.width, config.height),
            players: [first, second],
            current: Seat::First,
            status: GameStatus::InProgress,
            move_count: 0,
            created_at: chrono::Utc::now(),
            ended_at: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player identity seated at `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<&Player> {
        self.status.winner().map(|seat| self.player(seat))
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Process one column click.
    ///
    /// A terminal session ignores the click entirely: no grid write, no
    /// notification. A full column is a silent no-op. Otherwise the piece
    /// lands, the board is checked for a win and then for a tie, and the
    /// turn passes to the other seat.
    pub fn column_clicked(&mut self, column: usize) -> Result<TurnOutcome, GameError> {
        if self.status.is_terminal() {
            return Ok(TurnOutcome::Ignored);
        }

        let row = match self.board.landing_row(column)? {
            Some(row) => row,
            None => return Ok(TurnOutcome::ColumnFull),
        };

        let seat = self.current;
        self.board.place(row, column, seat);
        self.move_count += 1;
        let placement = Placement { row, column, seat };

        if self.board.has_four_in_a_row(seat) {
            self.status = GameStatus::Won { winner: seat };
            self.ended_at = Some(chrono::Utc::now());
            debug!(winner = %seat, moves = self.move_count, "game won");
            return Ok(TurnOutcome::Won(placement));
        }

        if self.board.is_top_row_full() {
            self.status = GameStatus::Tied;
            self.ended_at = Some(chrono::Utc::now());
            debug!(moves = self.move_count, "game tied");
            return Ok(TurnOutcome::Tied(placement));
        }

        self.current = seat.other();
        Ok(TurnOutcome::Placed(placement))
    }

    /// End-of-game notice for the user, once terminal.
    pub fn end_message(&self) -> Option<String> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won { winner } => {
                Some(format!("Player {} won!", self.player(winner).color()))
            }
            GameStatus::Tied => Some("Tie!".to_string()),
        }
    }

    /// Convert full session state to a JSON snapshot.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "status": self.status.as_str(),
            "winner": self.winner().map(|p| p.color()),
            "current_turn": self.current_player().color(),
            "board": self.board.to_json(),
            "players": {
                "first": self.player(Seat::First).to_json(),
                "second": self.player(Seat::Second).to_json(),
            },
            "move_count": self.move_count,
        })
    }
}
