//! In-memory repository.
//!
//! Records are kept bincode-encoded, so every `get` goes through the same
//! decode-and-restore path a durable store would.

use rustc_hash::FxHashMap;
use tracing::{debug, info, instrument, warn};

use super::{GameRepository, RepositoryError};
use crate::game::{Game, GameId, GameRecord};

/// Games held in process memory.
///
/// ## Example
///
/// ```
/// use mastermind_engine::core::{GameConfig, GameRng};
/// use mastermind_engine::repository::{GameRepository, InMemoryGames};
/// use mastermind_engine::Game;
///
/// let mut games = InMemoryGames::new();
/// let mut game = Game::new(GameConfig::default(), &mut GameRng::new(1)).unwrap();
///
/// let id = games.save(&mut game).unwrap();
/// assert_eq!(game.id(), Some(id));
/// assert_eq!(games.get(id).unwrap().reference(), game.reference());
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryGames {
    records: FxHashMap<GameId, Vec<u8>>,
    references: FxHashMap<String, GameId>,
    next_id: u64,
}

impl InMemoryGames {
    /// Create an empty repository. Ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load a game by its human-facing reference.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the stored record cannot be restored.
    pub fn find_by_reference(&self, reference: &str) -> Result<Option<Game>, RepositoryError> {
        match self.references.get(reference) {
            Some(&id) => self.get(id).map(Some),
            None => Ok(None),
        }
    }

    fn load_record(&self, id: GameId) -> Result<GameRecord, RepositoryError> {
        let bytes = self.records.get(&id).ok_or(RepositoryError::NotFound(id))?;
        Ok(bincode::deserialize(bytes)?)
    }

    fn allocate_id(&mut self) -> GameId {
        self.next_id += 1;
        GameId::new(self.next_id)
    }
}

/// Whether two records describe the same game: reference, configuration
/// and secret are fixed at creation.
fn same_game(stored: &GameRecord, incoming: &GameRecord) -> bool {
    stored.reference == incoming.reference
        && stored.num_slots == incoming.num_slots
        && stored.num_colors == incoming.num_colors
        && stored.max_guesses == incoming.max_guesses
        && stored.secret_code == incoming.secret_code
}

impl GameRepository for InMemoryGames {
    #[instrument(skip(self, game), fields(id = ?game.id(), reference = %game.reference()))]
    fn save(&mut self, game: &mut Game) -> Result<GameId, RepositoryError> {
        let mut record = game.to_record();

        if let Some(&owner) = self.references.get(&record.reference) {
            if game.id() != Some(owner) {
                warn!(owner = %owner, "Reference collision");
                return Err(RepositoryError::DuplicateReference(record.reference));
            }
        }

        let id = match game.id() {
            Some(id) => {
                let stored = self.load_record(id)?;
                if !same_game(&stored, &record) {
                    warn!(stored_reference = %stored.reference, "Identity conflict rejected");
                    return Err(RepositoryError::IdentityConflict(id));
                }
                if !record.guesses.starts_with(&stored.guesses) {
                    warn!(stored = stored.guesses.len(), incoming = record.guesses.len(), "Stale write rejected");
                    return Err(RepositoryError::StaleWrite {
                        id,
                        stored: stored.guesses.len(),
                        incoming: record.guesses.len(),
                    });
                }
                id
            }
            None => self.allocate_id(),
        };

        record.id = Some(id);
        let bytes = bincode::serialize(&record)?;
        debug!(bytes = bytes.len(), guesses = record.guesses.len(), "Record encoded");

        self.records.insert(id, bytes);
        self.references.insert(record.reference, id);
        game.assign_id(id);

        info!(id = %id, status = %record.status, "Game saved");
        Ok(id)
    }

    #[instrument(skip(self))]
    fn get(&self, id: GameId) -> Result<Game, RepositoryError> {
        let record = self.load_record(id)?;
        Game::from_record(record).map_err(|source| RepositoryError::Corrupt { id, source })
    }

    #[instrument(skip(self))]
    fn all(&self) -> Result<Vec<Game>, RepositoryError> {
        let mut ids: Vec<GameId> = self.records.keys().copied().collect();
        ids.sort_unstable();
        debug!(count = ids.len(), "Loading all games");
        ids.into_iter().map(|id| self.get(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Color::*, GameConfig, GameRng};
    use crate::generator::Reference;
    use crate::game::GameStatus;

    fn fixed(reference: &str) -> Game {
        let config = GameConfig::new(4, 4, 2).unwrap();
        Game::with_secret(
            config,
            Reference::parse(reference).unwrap(),
            Code::from([Red, Red, Green, Yellow]),
        )
        .unwrap()
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut games = InMemoryGames::new();
        let mut rng = GameRng::new(42);
        for expected in 1..=3 {
            let mut game = Game::new(GameConfig::default(), &mut rng).unwrap();
            assert_eq!(games.save(&mut game).unwrap(), GameId::new(expected));
        }
        assert_eq!(games.len(), 3);
    }

    #[test]
    fn test_update_keeps_id() {
        let mut games = InMemoryGames::new();
        let mut game = fixed("MYREF");
        let id = games.save(&mut game).unwrap();

        game.submit(Code::from([Red, Blue, Blue, Blue])).unwrap();
        assert_eq!(games.save(&mut game).unwrap(), id);
        assert_eq!(games.len(), 1);
        assert_eq!(games.get(id).unwrap().guesses().len(), 1);
    }

    #[test]
    fn test_duplicate_reference_rejected() {
        let mut games = InMemoryGames::new();
        games.save(&mut fixed("MYREF")).unwrap();

        let mut other = fixed("MYREF");
        assert!(matches!(
            games.save(&mut other),
            Err(RepositoryError::DuplicateReference(r)) if r == "MYREF"
        ));
        assert_eq!(other.id(), None);
    }

    #[test]
    fn test_stale_write_rejected() {
        let mut games = InMemoryGames::new();
        let mut game = fixed("MYREF");
        let id = games.save(&mut game).unwrap();

        let mut stale = games.get(id).unwrap();
        game.submit(Code::from([Red, Red, Red, Red])).unwrap();
        games.save(&mut game).unwrap();

        stale.submit(Code::from([Blue, Blue, Blue, Blue])).unwrap();
        assert!(matches!(
            games.save(&mut stale),
            Err(RepositoryError::StaleWrite { stored: 1, incoming: 1, .. })
        ));
        assert_eq!(
            games.get(id).unwrap().guesses()[0].code(),
            &Code::from([Red, Red, Red, Red])
        );
    }

    #[test]
    fn test_other_game_cannot_take_over_id() {
        let mut games = InMemoryGames::new();
        let mut original = fixed("ORIG");
        let id = games.save(&mut original).unwrap();

        let config = GameConfig::new(2, 8, 9).unwrap();
        let mut other = Game::with_secret(
            config,
            Reference::parse("OTHER").unwrap(),
            Code::from([Blue, Blue]),
        )
        .unwrap();
        other.assign_id(id);
        assert!(matches!(
            games.save(&mut other),
            Err(RepositoryError::IdentityConflict(conflict)) if conflict == id
        ));

        // same reference, different secret
        let mut twin = Game::with_secret(
            GameConfig::new(4, 4, 2).unwrap(),
            Reference::parse("ORIG").unwrap(),
            Code::from([Blue, Blue, Blue, Blue]),
        )
        .unwrap();
        twin.assign_id(id);
        assert!(matches!(
            games.save(&mut twin),
            Err(RepositoryError::IdentityConflict(_))
        ));

        let stored = games.get(id).unwrap();
        assert_eq!(stored.secret_code(), &Code::from([Red, Red, Green, Yellow]));
        assert_eq!(stored.config().num_slots, 4);
        assert_eq!(stored.reference().as_str(), "ORIG");
        assert!(games.find_by_reference("OTHER").unwrap().is_none());
    }

    #[test]
    fn test_missing_id() {
        let games = InMemoryGames::new();
        assert!(matches!(
            games.get(GameId::new(5)),
            Err(RepositoryError::NotFound(id)) if id == GameId::new(5)
        ));

        let mut games = InMemoryGames::new();
        let mut game = fixed("ABC");
        game.assign_id(GameId::new(77));
        assert!(matches!(games.save(&mut game), Err(RepositoryError::NotFound(_))));
    }

    #[test]
    fn test_corrupt_record_detected() {
        let mut games = InMemoryGames::new();
        let mut game = fixed("MYREF");
        let id = games.save(&mut game).unwrap();

        let mut record = game.to_record();
        record.status = GameStatus::Lost;
        games.records.insert(id, bincode::serialize(&record).unwrap());

        assert!(matches!(games.get(id), Err(RepositoryError::Corrupt { .. })));
    }

    #[test]
    fn test_find_by_reference() {
        let mut games = InMemoryGames::new();
        games.save(&mut fixed("FIRST")).unwrap();
        games.save(&mut fixed("SECOND")).unwrap();

        let found = games.find_by_reference("SECOND").unwrap().unwrap();
        assert_eq!(found.id(), Some(GameId::new(2)));
        assert!(games.find_by_reference("THIRD").unwrap().is_none());
    }
}
