//! Connect Four State Library
//!
//! This crate provides state management for Connect Four game logic.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Board State Manager** - Occupancy grid with landing-row queries and
//!   four-in-a-row / tie detection.
//!
//! - **Turn Controller** - Current-player tracking, move acceptance, and the
//!   `InProgress -> Won / Tied` state machine.
//!
//! - **Session Lifecycle** - One live game at a time; starting a new game
//!   replaces the prior session and stale click notifications land nowhere.
//!
//! - **Render Mapping** - Explicit coordinate-to-handle tables for whatever
//!   surface draws the board.
//!
//! # Design Principles
//!
//! 1. **State machines validate transitions** - A terminal game rejects
//!    every further move; a full column is a silent no-op.
//!
//! 2. **No rendering** - This crate is pure state, no DOM or widgets. The
//!    host UI consumes returned outcomes and snapshots.
//!
//! 3. **Serialization-ready** - Board and game state convert to JSON for
//!    clients.
//!
//! # Example
//!
//! ```rust
//! use connect_four_state::state::{GameConfig, Player, SessionManager, TurnOutcome};
//!
//! let mut sessions = SessionManager::new();
//!
//! let id = sessions
//!     .start_game(
//!         GameConfig::default(),
//!         Player::new("teal"),
//!         Player::new("purple"),
//!     )
//!     .unwrap();
//!
//! // The first player drops a piece into column 3; it lands on the bottom row.
//! let outcome = sessions.column_clicked(id, 3).unwrap();
//! assert!(matches!(outcome, TurnOutcome::Placed(p) if p.row == 5 && p.column == 3));
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
