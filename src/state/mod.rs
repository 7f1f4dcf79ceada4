//! State management module for Connect Four.
//!
//! This module provides the core state types:
//!
//! - `player` - Seat markers and player identities
//! - `board` - Occupancy grid, landing rows, win detection
//! - `game` - Turn controller state machine
//! - `session` - Session lifecycle and click routing
//! - `render` - Board-coordinate to render-target mapping
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       SessionManager                       │
//! │                                                            │
//! │  session_id ─▶ Game                                        │
//! │                 ├── Board         (grid of Option<Seat>)   │
//! │                 ├── [Player; 2]   (seat → color)           │
//! │                 ├── current Seat                           │
//! │                 └── GameStatus                             │
//! │                                                            │
//! │   InProgress ──▶ Won { winner } │ Tied      (terminal)     │
//! └────────────────────────────────────────────────────────────┘
//!
//!  host UI ──── column_clicked(session, column) ────▶ Game
//!  host UI ◀─── TurnOutcome (placed / won / tied / no-op) ───┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use connect_four_state::state::{GameConfig, Player, SessionManager};
//!
//! let mut sessions = SessionManager::new();
//! let id = sessions.start_game(
//!     GameConfig::default(),
//!     Player::new("teal"),
//!     Player::new("purple"),
//! )?;
//!
//! let outcome = sessions.column_clicked(id, 3)?;
//! ```

pub mod board;
pub mod game;
pub mod player;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use board::{Board, BoardError, WIN_LENGTH};
pub use game::{
    Game, GameConfig, GameError, GameStatus, Placement, TurnOutcome, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
pub use player::{Player, Seat};
pub use render::RenderTargets;
pub use session::{SessionId, SessionManager};
