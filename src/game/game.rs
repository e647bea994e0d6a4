//! The game aggregate.
//!
//! A `Game` owns its configuration, secret and guess history. It changes
//! only through [`Game::submit`]. There is no stored status field: the
//! status is always [`GameStatus::evaluate`] over the history, so a game
//! cannot be `Won` without a winning guess or `Lost` before its last attempt.

use im::Vector;
use tracing::{debug, info, instrument};

use super::guess::Guess;
use super::record::{GameId, GameRecord, GuessRecord, RestoreError};
use super::status::GameStatus;
use crate::core::{Code, ConfigError, DomainError, GameConfig, GameRng, Palette};
use crate::generator::{self, Reference};
use crate::scoring;

/// A single code-breaking game.
///
/// ## Example
///
/// ```
/// use mastermind_engine::core::{Code, Color::*, GameConfig};
/// use mastermind_engine::generator::Reference;
/// use mastermind_engine::{Game, GameStatus};
///
/// let config = GameConfig::new(4, 6, 2).unwrap();
/// let secret = Code::from([Green, Blue, Blue, Red]);
/// let mut game = Game::with_secret(config, Reference::parse("DEMO").unwrap(), secret).unwrap();
///
/// let guess = game.submit(Code::from([Green, Blue, Red, Blue])).unwrap();
/// assert_eq!((guess.exact_matches(), guess.color_matches()), (2, 2));
/// assert_eq!(game.status(), GameStatus::Running);
///
/// game.submit(Code::from([Green, Blue, Blue, Red])).unwrap();
/// assert_eq!(game.status(), GameStatus::Won);
/// assert!(game.submit(Code::from([Red, Red, Red, Red])).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    id: Option<GameId>,
    reference: Reference,
    config: GameConfig,
    palette: Palette,
    secret: Code,
    guesses: Vector<Guess>,
}

impl Game {
    /// Create a running game with a freshly generated secret and reference.
    ///
    /// The secret is drawn before the reference, both from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `config` is out of range.
    #[instrument(skip(rng))]
    pub fn new(config: GameConfig, rng: &mut GameRng) -> Result<Self, DomainError> {
        config.validate()?;
        let palette = config.palette()?;
        let secret = generator::generate(config.num_slots, palette, rng);
        let reference = Reference::generate(rng);

        info!(reference = %reference, "Game created");
        Ok(Self {
            id: None,
            reference,
            config,
            palette,
            secret,
            guesses: Vector::new(),
        })
    }

    /// Create a running game around a known secret.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `config` is out of range or the
    /// secret does not fit it.
    #[instrument(skip(secret), fields(secret_len = secret.len()))]
    pub fn with_secret(config: GameConfig, reference: Reference, secret: Code) -> Result<Self, DomainError> {
        config.validate()?;
        let palette = config.palette()?;
        secret
            .check(config.num_slots, palette)
            .map_err(ConfigError::SecretCode)?;

        debug!(reference = %reference, "Game created with fixed secret");
        Ok(Self {
            id: None,
            reference,
            config,
            palette,
            secret,
            guesses: Vector::new(),
        })
    }

    /// Score `code` against the secret and append it to the history.
    ///
    /// Returns the new guess. On error the game is unchanged.
    ///
    /// # Errors
    ///
    /// - `GameFinished` if the game is already won or lost
    /// - `InvalidGuess` if `code` has the wrong length or an inactive color
    #[instrument(skip(self, code), fields(reference = %self.reference, attempt = self.guesses.len() + 1))]
    pub fn submit(&mut self, code: Code) -> Result<Guess, DomainError> {
        let status = self.status();
        if status.is_terminal() {
            debug!(%status, "Guess rejected, game finished");
            return Err(DomainError::GameFinished { status });
        }
        code.check(self.config.num_slots, self.palette)?;

        let guess = self.append(code);
        debug!(score = %guess.score(), "Guess scored");

        match self.status() {
            GameStatus::Won => info!(attempts = self.guesses.len(), "Game won"),
            GameStatus::Lost => info!(attempts = self.guesses.len(), "Game lost"),
            GameStatus::Running => {}
        }
        Ok(guess)
    }

    /// Parse color names, then [`submit`](Self::submit).
    ///
    /// # Errors
    ///
    /// As `submit`, plus `InvalidGuess` for an unknown color name.
    pub fn submit_names<S: AsRef<str>>(
        &mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Result<Guess, DomainError> {
        let code = Code::parse(names)?;
        self.submit(code)
    }

    fn append(&mut self, code: Code) -> Guess {
        let score = scoring::score(&self.secret, &code);
        let guess = Guess::new(code, score);
        self.guesses.push_back(guess.clone());
        guess
    }

    // === Accessors ===

    /// Storage identity, `None` until first saved.
    #[must_use]
    pub fn id(&self) -> Option<GameId> {
        self.id
    }

    /// Record the identity chosen by the persistence layer.
    ///
    /// For repository implementations only. A repository must refuse to
    /// store a game under an id it issued to a different game.
    pub fn assign_id(&mut self, id: GameId) {
        self.id = Some(id);
    }

    #[must_use]
    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// The full secret. Hide it from guessing clients; see [`crate::view`].
    #[must_use]
    pub fn secret_code(&self) -> &Code {
        &self.secret
    }

    /// Guesses in submission order.
    #[must_use]
    pub fn guesses(&self) -> &Vector<Guess> {
        &self.guesses
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.config.num_slots, self.config.max_guesses, &self.guesses)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status().is_terminal()
    }

    /// Attempts left while running; zero once finished.
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        if self.is_finished() {
            0
        } else {
            self.config.max_guesses - self.guesses.len()
        }
    }

    /// The guess that won the game, if it is won.
    #[must_use]
    pub fn winning_guess(&self) -> Option<&Guess> {
        self.guesses
            .last()
            .filter(|g| g.score().is_win(self.config.num_slots))
    }

    // === Persistence ===

    /// Snapshot the persisted field set.
    #[must_use]
    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            id: self.id,
            reference: self.reference.to_string(),
            num_slots: self.config.num_slots,
            num_colors: self.config.num_colors,
            max_guesses: self.config.max_guesses,
            secret_code: self.secret.pegs().to_vec(),
            status: self.status(),
            guesses: self
                .guesses
                .iter()
                .map(|g| GuessRecord {
                    code: g.code().pegs().to_vec(),
                    exact_matches: g.exact_matches(),
                    color_matches: g.color_matches(),
                })
                .collect(),
        }
    }

    /// Rebuild a game from a stored record, re-checking every invariant.
    ///
    /// Guesses are replayed in stored order; each must be well formed, be
    /// accepted by a still-running game, and carry the score the secret
    /// actually gives it. The stored status must match the replayed one.
    ///
    /// # Errors
    ///
    /// Returns a [`RestoreError`] describing the first inconsistency.
    #[instrument(skip(record), fields(id = ?record.id, reference = %record.reference))]
    pub fn from_record(record: GameRecord) -> Result<Self, RestoreError> {
        let reference = Reference::parse(record.reference)?;
        let config = GameConfig {
            num_slots: record.num_slots,
            num_colors: record.num_colors,
            max_guesses: record.max_guesses,
        };
        let mut game = Self::with_secret(config, reference, Code::from(record.secret_code))
            .map_err(RestoreError::Configuration)?;
        game.id = record.id;

        for (index, stored) in record.guesses.into_iter().enumerate() {
            let status = game.status();
            if status.is_terminal() {
                return Err(RestoreError::GuessAfterEnd { index, status });
            }
            let stored_score = stored.score();
            let code = Code::from(stored.code);
            code.check(config.num_slots, game.palette)
                .map_err(|source| RestoreError::Guess { index, source })?;

            let computed = game.append(code).score();
            if computed != stored_score {
                return Err(RestoreError::ScoreMismatch {
                    index,
                    stored: stored_score,
                    computed,
                });
            }
        }

        let derived = game.status();
        if derived != record.status {
            return Err(RestoreError::StatusMismatch {
                stored: record.status,
                derived,
            });
        }

        debug!(guesses = game.guesses.len(), %derived, "Game restored");
        Ok(game)
    }
}
