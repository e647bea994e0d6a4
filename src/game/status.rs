//! Game status and its derivation from guess history.

use serde::{Deserialize, Serialize};

use super::guess::Guess;

/// Lifecycle state of a game.
///
/// `Running` is initial; `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Running,
    Won,
    Lost,
}

impl GameStatus {
    /// Derive the status from the configuration and the guess history.
    ///
    /// A winning guess takes precedence over running out of attempts, so
    /// a win on the last allowed guess is `Won`.
    ///
    /// ```
    /// use mastermind_engine::GameStatus;
    ///
    /// assert_eq!(GameStatus::evaluate(4, 2, []), GameStatus::Running);
    /// ```
    pub fn evaluate<'a>(
        num_slots: usize,
        max_guesses: usize,
        guesses: impl IntoIterator<Item = &'a Guess>,
    ) -> Self {
        let mut count = 0;
        for guess in guesses {
            if guess.score().is_win(num_slots) {
                return GameStatus::Won;
            }
            count += 1;
        }
        if count >= max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::Running
        }
    }

    /// Whether the game accepts no further guesses.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::Running => "running",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
