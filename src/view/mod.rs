//! Presentation snapshots of a game.
//!
//! The engine keeps the secret in full; hiding it from guessing clients is
//! done here. [`GameView::from`] omits the secret while the game is running
//! and reveals it once the game is won or lost.

use serde::Serialize;

use crate::core::Code;
use crate::game::{Game, GameId, GameStatus, Guess};

/// One guess as shown to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GuessView {
    pub code: Code,
    pub black_pegs: usize,
    pub white_pegs: usize,
}

impl From<&Guess> for GuessView {
    fn from(guess: &Guess) -> Self {
        Self {
            code: guess.code().clone(),
            black_pegs: guess.exact_matches(),
            white_pegs: guess.color_matches(),
        }
    }
}

/// A game as shown to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub id: Option<GameId>,
    pub reference: String,
    pub num_slots: usize,
    pub num_colors: usize,
    pub max_guesses: usize,
    pub status: GameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_code: Option<Code>,
    /// In submission order.
    pub guesses: Vec<GuessView>,
}

impl GameView {
    /// View including the secret regardless of status.
    #[must_use]
    pub fn revealed(game: &Game) -> Self {
        let mut view = Self::from(game);
        view.secret_code = Some(game.secret_code().clone());
        view
    }
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        let status = game.status();
        let config = game.config();
        Self {
            id: game.id(),
            reference: game.reference().to_string(),
            num_slots: config.num_slots,
            num_colors: config.num_colors,
            max_guesses: config.max_guesses,
            status,
            secret_code: status.is_terminal().then(|| game.secret_code().clone()),
            guesses: game.guesses().iter().map(GuessView::from).collect(),
        }
    }
}
