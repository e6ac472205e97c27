//! A table of independent games keyed by host-chosen ids.
//!
//! Each game sits behind its own mutex, so actions on one game never wait
//! on another. The map lock is only held long enough to find or change an
//! entry.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use crate::error::BoostError;
use crate::game::GameState;
use crate::ruleset::new_game;

/// A shared handle to one game.
pub type SharedGame = Arc<Mutex<GameState>>;

/// Games keyed by `K`, for example a chat channel id.
#[derive(Debug)]
pub struct GameTable<K> {
    games: RwLock<HashMap<K, SharedGame>>,
}

impl<K> Default for GameTable<K> {
    fn default() -> Self {
        GameTable {
            games: RwLock::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash + Clone> GameTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a standard game under `key`. Fails if `key` already has one.
    pub fn create(
        &self,
        key: K,
        player_count: u8,
        board_size: u8,
        dragons: Option<u8>,
        seed: u64,
    ) -> Result<SharedGame, BoostError> {
        let game = new_game(player_count, board_size, dragons, seed)?;
        let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);
        if games.contains_key(&key) {
            return Err(BoostError::Config("a game is already running here".to_string()));
        }
        let shared = Arc::new(Mutex::new(game));
        games.insert(key, Arc::clone(&shared));
        Ok(shared)
    }

    /// Stores `game` under `key`, returning the game it replaced.
    pub fn insert(&self, key: K, game: GameState) -> Option<SharedGame> {
        self.games
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::new(Mutex::new(game)))
    }

    pub fn get(&self, key: &K) -> Option<SharedGame> {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn remove(&self, key: &K) -> Option<SharedGame> {
        self.games
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }

    /// Runs `f` with exclusive access to the game under `key`.
    pub fn with_game<R>(&self, key: &K, f: impl FnOnce(&mut GameState) -> R) -> Option<R> {
        let shared = self.get(key)?;
        let mut game = lock(&shared);
        Some(f(&mut game))
    }

    pub fn keys(&self) -> Vec<K> {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.games.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Locks a game. A panic while a game was locked does not make it unusable;
/// every mutation either completes or leaves the state as it was.
pub fn lock(game: &SharedGame) -> MutexGuard<'_, GameState> {
    game.lock().unwrap_or_else(PoisonError::into_inner)
}
