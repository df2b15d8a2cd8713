//! Session module - a player's sitting at the game
//!
//! A [`Session`] owns the current [`GameState`], the seeded RNG that feeds tile
//! spawns, and the [`BestScore`] over an injected store. Front ends translate
//! their input into [`GameAction`]s and call [`Session::apply_action`]; they read
//! back a [`GameSnapshot`] to draw.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::best_score::{BestScore, KeyValueStore};
use crate::game_state::{GameState, MoveOutcome};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, GameStatus};

/// Game session with persistence of the best score
#[derive(Debug, Clone)]
pub struct Session<S> {
    state: GameState,
    rng: StdRng,
    seed: u64,
    best: BestScore<S>,
    /// Monotonic game id (increments on new game).
    episode_id: u32,
    /// Successful moves in the current game.
    move_count: u32,
    /// Player dismissed the win message and keeps going.
    keep_playing: bool,
    last_outcome: MoveOutcome,
}

impl<S: KeyValueStore> Session<S> {
    /// Start a session with the given spawn seed
    pub fn new(seed: u64, store: S) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::start(&mut rng);
        let best = BestScore::load(store);
        log::debug!("session started with seed {}", seed);

        Self {
            state,
            rng,
            seed,
            best,
            episode_id: 0,
            move_count: 0,
            keep_playing: false,
            last_outcome: MoveOutcome::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn best_score(&self) -> u32 {
        self.best.value()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn last_outcome(&self) -> &MoveOutcome {
        &self.last_outcome
    }

    pub fn best(&self) -> &BestScore<S> {
        &self.best
    }

    /// Won and waiting for the player to keep playing or start over
    ///
    /// Shown even when the winning move also blocked the board; the loss is
    /// reported once the win is dismissed.
    pub fn win_pending(&self) -> bool {
        self.state.won() && !self.keep_playing
    }

    /// Moves are accepted in this state
    pub fn accepts_moves(&self) -> bool {
        !self.state.lost() && !self.win_pending()
    }

    /// Apply a game action
    ///
    /// Returns true if the action changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction).moved,
            GameAction::NewGame => {
                self.new_game();
                true
            }
            GameAction::KeepPlaying => {
                if self.win_pending() {
                    self.keep_playing = true;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Slide in `direction`, spawn, and record the best score
    ///
    /// Ignored (returns an unmoved outcome) while the game is lost or the win
    /// message is pending.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if !self.accepts_moves() {
            return MoveOutcome {
                status: self.state.status(),
                ..MoveOutcome::default()
            };
        }

        let (next, outcome) = self.state.apply_move(direction, &mut self.rng);
        if outcome.moved {
            log::trace!(
                "moved {}, +{}, {}",
                direction.as_str(),
                outcome.score_delta,
                outcome.status.as_str()
            );
            self.state = next;
            self.move_count = self.move_count.wrapping_add(1);
            self.record_best();
            self.last_outcome = outcome.clone();
        }
        outcome
    }

    /// Throw away the current game; the best score survives
    pub fn new_game(&mut self) {
        self.state = GameState::start(&mut self.rng);
        self.episode_id = self.episode_id.wrapping_add(1);
        self.move_count = 0;
        self.keep_playing = false;
        self.last_outcome = MoveOutcome::default();
        log::debug!("new game, episode {}", self.episode_id);
    }

    fn record_best(&mut self) {
        match self.best.record(self.state.score()) {
            Ok(true) => log::debug!("new best score {}", self.best.value()),
            Ok(false) => {}
            Err(e) => log::warn!("failed to persist best score: {}", e),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.state.board().rows();
        out.score = self.state.score();
        out.best = self.best.value();
        out.status = self.state.status();
        out.won = self.state.won();
        out.lost = self.state.lost();
        out.win_pending = self.win_pending();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.move_count = self.move_count;
        out.last_spawn = self.last_outcome.spawned;
        out.last_merges = self.last_outcome.merges.clone();
        out.last_score_delta = self.last_outcome.score_delta;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Replace the current game (tests and tooling)
    pub fn restore(&mut self, state: GameState) {
        self.state = state;
        self.keep_playing = false;
        self.last_outcome = MoveOutcome::default();
    }
}
