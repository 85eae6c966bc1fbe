//! Game state module - the playing session
//!
//! Ties together board, catalog, bag, scoring and timing. The session is owned
//! by a single control loop: intents come in through [`GameState::apply_action`],
//! time through [`GameState::advance`], and renderers read [`GameState::snapshot`].

use std::time::Duration;

use log::{debug, info, trace};

use crate::board::Board;
use crate::pieces::{self, get_shape};
use crate::rng::BagRandomizer;
use crate::scoring::{calculate_drop_score, calculate_score, gravity_speed, next_level};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, TimersSnapshot};
use crate::timing::Timing;
use crate::types::*;

/// The falling piece: kind, rotation and the board position of its 4x4 mask origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// A new piece at the spawn position and rotation.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn shape(&self) -> [(i8, i8); 4] {
        get_shape(self.kind, self.rotation)
    }

    pub fn fits(&self, board: &Board) -> bool {
        board.can_place(self.kind, self.x, self.y, self.rotation)
    }

    fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    ghost_y: Option<i8>,
    hold: Option<PieceKind>,
    /// Set by a hold, cleared by the next spawn.
    hold_used: bool,
    next_queue: [PieceKind; NEXT_QUEUE_LEN],
    bag: BagRandomizer,
    seed: u32,
    episode_id: u32,
    score: u32,
    level: u32,
    lines: u32,
    back_to_back: bool,
    timing: Timing,
    last_event: Option<LockEvent>,
    paused: bool,
    game_over: bool,
}

impl GameState {
    /// Fresh session: seeded bag, full preview queue and the first piece spawned.
    pub fn new(seed: u32) -> Self {
        let mut bag = BagRandomizer::new(seed);
        let mut next_queue = [PieceKind::I; NEXT_QUEUE_LEN];
        for slot in next_queue.iter_mut() {
            *slot = bag.next();
        }

        let mut state = Self {
            board: Board::new(),
            active: None,
            ghost_y: None,
            hold: None,
            hold_used: false,
            next_queue,
            bag,
            seed,
            episode_id: 0,
            score: 0,
            level: 1,
            lines: 0,
            back_to_back: false,
            timing: Timing::new(),
            last_event: None,
            paused: false,
            game_over: false,
        };
        state.spawn_piece();
        state
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn hold_used(&self) -> bool {
        self.hold_used
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn back_to_back(&self) -> bool {
        self.back_to_back
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn next_queue(&self) -> &[PieceKind; NEXT_QUEUE_LEN] {
        &self.next_queue
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn ghost_y(&self) -> Option<i8> {
        self.ghost_y
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_cells(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y;
        out.hold = self.hold;
        out.hold_used = self.hold_used;
        out.next_queue = self.next_queue;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.back_to_back = self.back_to_back;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.timers = TimersSnapshot {
            lock_timer: self.timing.lock_timer(),
            gravity_accumulator: self.timing.gravity_accumulator(),
            lock_resets: self.timing.lock_resets(),
        };
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take the front of the preview queue as the new active piece.
    ///
    /// The queue is refilled from the bag. Returns false and ends the game if
    /// the spawn position is already occupied.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.next_queue[0];
        self.next_queue.rotate_left(1);
        self.next_queue[NEXT_QUEUE_LEN - 1] = self.bag.next();

        self.hold_used = false;
        self.timing.on_spawn();

        let piece = Tetromino::new(kind);
        if !piece.fits(&self.board) {
            info!("spawn of {:?} blocked, game over at score {}", kind, self.score);
            self.active = None;
            self.ghost_y = None;
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        self.update_ghost();
        true
    }

    /// Whether the active piece could be shifted by (dx, dy).
    pub fn can_move(&self, dx: i8, dy: i8) -> bool {
        self.active
            .is_some_and(|p| p.shifted(dx, dy).fits(&self.board))
    }

    /// Shift the active piece one column. Success resets the lock delay.
    pub(crate) fn try_move(&mut self, dx: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let moved = active.shifted(dx, 0);
        if !moved.fits(&self.board) {
            return false;
        }
        self.active = Some(moved);
        self.timing.reset_lock_delay();
        self.update_ghost();
        true
    }

    /// One row down for a point. The lock delay is left running.
    pub(crate) fn soft_drop(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let moved = active.shifted(0, 1);
        if !moved.fits(&self.board) {
            return false;
        }
        self.active = Some(moved);
        self.score = self.score.saturating_add(calculate_drop_score(1, false));
        true
    }

    /// Drop to the lowest free row and lock at once. Returns the rows fallen.
    pub(crate) fn hard_drop(&mut self) -> u32 {
        let Some(mut active) = self.active else {
            return 0;
        };

        let mut distance: u32 = 0;
        while active.shifted(0, 1).fits(&self.board) {
            active = active.shifted(0, 1);
            distance += 1;
        }
        self.active = Some(active);
        self.score = self.score.saturating_add(calculate_drop_score(distance, true));

        self.lock_piece();
        distance
    }

    /// One SRS step with wall kicks. Success counts as a lock reset.
    pub(crate) fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let board = &self.board;
        let result = pieces::try_rotate(
            active.kind,
            active.rotation,
            active.x,
            active.y,
            clockwise,
            |x, y, rotation| board.can_place(active.kind, x, y, rotation),
        );

        let Some(r) = result else {
            return false;
        };
        trace!(
            "{} {} -> {} via kick {}",
            active.kind.as_str(),
            active.rotation.as_str(),
            r.rotation.as_str(),
            r.kick_index
        );

        self.active = Some(Tetromino {
            rotation: r.rotation,
            x: r.x,
            y: r.y,
            ..active
        });
        self.timing.register_lock_reset();
        self.update_ghost();
        true
    }

    /// Two clockwise steps, each kick-tested. If only the first step fits the
    /// piece stays a quarter turn in.
    pub(crate) fn rotate_180(&mut self) -> bool {
        if !self.try_rotate(true) {
            return false;
        }
        self.try_rotate(true);
        true
    }

    /// Store or swap the active piece, once per piece lifetime.
    pub fn hold(&mut self) -> bool {
        if self.hold_used {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match self.hold.replace(active.kind) {
            None => {
                self.spawn_piece();
            }
            Some(held) => {
                let piece = Tetromino::new(held);
                self.timing.reset_lock_delay();
                if piece.fits(&self.board) {
                    self.active = Some(piece);
                    self.update_ghost();
                } else {
                    info!("held {:?} does not fit at spawn, game over", held);
                    self.active = None;
                    self.ghost_y = None;
                    self.game_over = true;
                }
            }
        }

        self.hold_used = true;
        true
    }

    /// Merge the active piece into the board, clear lines, score and spawn.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .lock_piece(active.kind, active.x, active.y, active.rotation);
        let cleared = self.board.clear_lines().len();

        let result = calculate_score(cleared, self.level, self.back_to_back);
        self.score = self.score.saturating_add(result.total);
        self.back_to_back = result.back_to_back;
        self.lines += cleared as u32;

        let level = next_level(self.lines, self.level);
        let level_up = level != self.level;
        if level_up {
            info!("level {} reached at {} lines", level, self.lines);
        }
        self.level = level;

        debug!(
            "locked {:?} at ({}, {}): {} lines, +{} points, b2b={}",
            active.kind, active.x, active.y, cleared, result.total, self.back_to_back
        );
        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            score_delta: result.total,
            back_to_back: self.back_to_back,
            level_up,
        });

        self.spawn_piece();
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Whether the active piece rests on the stack or the floor.
    pub fn is_grounded(&self) -> bool {
        self.active.is_some() && !self.can_move(0, 1)
    }

    fn update_ghost(&mut self) {
        self.ghost_y = self.active.map(|active| {
            let mut ghost = active;
            for _ in 0..BOARD_HEIGHT {
                let below = ghost.shifted(0, 1);
                if !below.fits(&self.board) {
                    break;
                }
                ghost = below;
            }
            ghost.y
        });
    }

    /// Grounded for another `dt`; locks once the delay has run out.
    fn touchdown(&mut self, dt: Duration) -> bool {
        if self.timing.touchdown(dt) {
            self.lock_piece();
            return true;
        }
        false
    }

    /// Advance gravity and lock delay by one external time step.
    ///
    /// Returns true if a piece locked during this step. Frozen while paused or
    /// after game over.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.paused || self.game_over {
            return false;
        }

        let mut locked = false;
        self.timing.accumulate(dt, gravity_speed(self.level));

        while self.timing.take_gravity_step() {
            if self.game_over {
                return locked;
            }
            if self.can_move(0, 1) {
                if let Some(active) = self.active {
                    self.active = Some(active.shifted(0, 1));
                }
                self.timing.reset_lock_delay();
                self.update_ghost();
            } else {
                locked |= self.touchdown(dt);
            }
        }

        // Lock delay must progress while grounded even when no whole row of
        // gravity accumulated this step.
        if !self.game_over && self.is_grounded() {
            locked |= self.touchdown(dt);
        }

        locked
    }

    /// Apply one intent. Returns true if it changed the session.
    ///
    /// While paused or after game over only `Pause` and `Restart` are accepted.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if (self.paused || self.game_over) && !action.is_meta() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1),
            GameAction::MoveRight => self.try_move(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => {
                if self.active.is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::RotateCw => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
            GameAction::Rotate180 => self.rotate_180(),
            GameAction::Hold => self.hold(),
            GameAction::Pause => {
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Replace the session with a fresh one, continuing the RNG stream.
    pub fn reset(&mut self) {
        let seed = self.bag.seed();
        let episode = self.episode_id.wrapping_add(1);
        info!("reset to episode {} (seed {})", episode, seed);
        *self = Self::new(seed);
        self.episode_id = episode;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
