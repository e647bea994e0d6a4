//! Persistence round-trip tests.
//!
//! These tests verify the in-memory repository against the collaborator
//! contract:
//! - Id assignment and listing order
//! - Guess history survives save/reload in order
//! - Reloaded games keep enforcing the state machine

use mastermind_engine::core::{Code, Color::*, GameConfig, GameRng};
use mastermind_engine::generator::Reference;
use mastermind_engine::repository::{GameRepository, InMemoryGames, RepositoryError};
use mastermind_engine::{ErrorKind, Game, GameId, GameStatus, GameView};

fn fixed(reference: &str, num_colors: usize, secret: Code) -> Game {
    let config = GameConfig::new(secret.len(), num_colors, 2).unwrap();
    Game::with_secret(config, Reference::parse(reference).unwrap(), secret).unwrap()
}

/// Saved games come back from `all` in id order.
#[test]
fn test_all_lists_games_by_id() {
    let mut games = InMemoryGames::new();
    let mut rng = GameRng::new(3);
    let mut references = Vec::new();
    for _ in 0..4 {
        let mut game = Game::new(GameConfig::default(), &mut rng).unwrap();
        games.save(&mut game).unwrap();
        references.push(game.reference().clone());
    }

    let listed = games.all().unwrap();
    let ids: Vec<_> = listed.iter().map(|g| g.id().unwrap().raw()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    let listed_refs: Vec<_> = listed.iter().map(|g| g.reference().clone()).collect();
    assert_eq!(listed_refs, references);
}

/// Guesses and scores persist across a save and reload.
#[test]
fn test_guess_history_survives_reload() {
    let mut games = InMemoryGames::new();
    let mut game = fixed("MYREF", 5, Code::from([Green, Blue, Yellow, Red]));
    let id = games.save(&mut game).unwrap();

    let mut loaded = games.get(id).unwrap();
    loaded.submit_names(["orange", "orange", "orange", "orange"]).unwrap();
    games.save(&mut loaded).unwrap();

    let mut loaded = games.get(id).unwrap();
    loaded.submit_names(["blue", "red", "orange", "orange"]).unwrap();
    games.save(&mut loaded).unwrap();

    let view = GameView::from(&games.get(id).unwrap());
    assert_eq!(view.status, GameStatus::Lost);
    assert_eq!(view.guesses.len(), 2);
    assert_eq!(view.guesses[0].code, Code::from([Orange, Orange, Orange, Orange]));
    assert_eq!((view.guesses[0].black_pegs, view.guesses[0].white_pegs), (0, 0));
    assert_eq!(view.guesses[1].code, Code::from([Blue, Red, Orange, Orange]));
    assert_eq!((view.guesses[1].black_pegs, view.guesses[1].white_pegs), (0, 2));
}

/// A finished game stays finished after reload.
#[test]
fn test_reloaded_finished_game_rejects_guess() {
    let mut games = InMemoryGames::new();
    let mut game = fixed("DONE", 4, Code::from([Red, Red, Green, Yellow]));
    game.submit(Code::from([Red, Red, Green, Yellow])).unwrap();
    let id = games.save(&mut game).unwrap();

    let mut loaded = games.get(id).unwrap();
    assert_eq!(loaded.status(), GameStatus::Won);
    let err = loaded.submit(Code::from([Red, Red, Red, Red])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::GameFinished);
}

/// Looking up an id that was never saved is `NotFound`.
#[test]
fn test_unknown_id() {
    let games = InMemoryGames::new();
    assert!(matches!(games.get(GameId::new(1)), Err(RepositoryError::NotFound(_))));
    assert!(games.all().unwrap().is_empty());
}

/// Reloading does not leak the secret of a running game.
#[test]
fn test_running_view_hides_secret_after_reload() {
    let mut games = InMemoryGames::new();
    let mut game = fixed("HIDDEN", 4, Code::from([Red, Blue, Green, Yellow]));
    let id = games.save(&mut game).unwrap();

    let json = serde_json::to_value(GameView::from(&games.get(id).unwrap())).unwrap();
    assert_eq!(json["status"], "running");
    assert_eq!(json["reference"], "HIDDEN");
    assert!(json.get("secret_code").is_none());
}
