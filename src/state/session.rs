//! Game session lifecycle.
//!
//! At most one game is live at a time. Starting a new game replaces the old
//! session wholesale, and click notifications carry the session id they were
//! wired for, so anything left over from a replaced game lands nowhere.

use std::fmt;

use tracing::debug;

use super::game::{Game, GameConfig, GameError, TurnOutcome};
use super::player::Player;

/// Identifies one started game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Owns the live game session, if any.
#[derive(Debug, Default)]
pub struct SessionManager {
    current: Option<(SessionId, Game)>,
    next_id: u64,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new game, replacing and dropping any prior session.
    pub fn start_game(
        &mut self,
        config: GameConfig,
        first: Player,
        second: Player,
    ) -> Result<SessionId, GameError> {
        let game = Game::with_config(config, first, second)?;
        let id = SessionId(self.next_id);
        self.next_id += 1;

        if let Some((old_id, _)) = self.current.replace((id, game)) {
            debug!(%old_id, %id, "session replaced");
        } else {
            debug!(%id, "session started");
        }

        Ok(id)
    }

    /// The live session id, if a game is running.
    pub fn session_id(&self) -> Option<SessionId> {
        self.current.as_ref().map(|(id, _)| *id)
    }

    /// The live game.
    pub fn game(&self) -> Option<&Game> {
        self.current.as_ref().map(|(_, game)| game)
    }

    /// Route a column click to the live game.
    ///
    /// A click wired to a replaced or never-started session is ignored
    /// without touching the live game.
    pub fn column_clicked(
        &mut self,
        session: SessionId,
        column: usize,
    ) -> Result<TurnOutcome, GameError> {
        match &mut self.current {
            Some((id, game)) if *id == session => game.column_clicked(column),
            _ => Ok(TurnOutcome::Ignored),
        }
    }

    /// Drop the live session.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
