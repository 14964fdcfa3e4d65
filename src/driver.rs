//! Frame driver
//!
//! Steps the game once per display refresh and stops on a terminal outcome.
//! Scheduling is abstracted behind `FrameScheduler` so the same driver runs
//! on `requestAnimationFrame`, a native loop or a test queue.

use std::collections::VecDeque;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::Game;
use crate::input::InputAdapter;
use crate::sim::{GameOutcome, RenderSnapshot, StepResult};

/// Identifies one scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Source of frame callbacks
pub trait FrameScheduler {
    /// Ask for one callback on the next refresh
    fn request_frame(&mut self) -> FrameHandle;
    /// Withdraw a requested callback. Unknown or fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Receives frames and terminal notifications
pub trait GameHost {
    /// Paint one frame
    fn present(&mut self, _snapshot: &RenderSnapshot) {}
    fn on_win(&mut self);
    fn on_loss(&mut self);
}

/// Drives one game from frame callbacks
pub struct FrameDriver<S: FrameScheduler, H: GameHost> {
    game: Game,
    input: InputAdapter,
    scheduler: S,
    host: H,
    /// The only callback allowed to step the game
    pending: Option<FrameHandle>,
    /// Terminal notification already sent for this session
    notified: bool,
}

impl<S: FrameScheduler, H: GameHost> FrameDriver<S, H> {
    /// Driver around an uninitialized game; call `restart` to begin
    pub fn new(scheduler: S, host: H) -> Self {
        Self {
            game: Game::new(),
            input: InputAdapter::new(),
            scheduler,
            host,
            pending: None,
            notified: false,
        }
    }

    /// Schedule the first tick of the current session.
    ///
    /// No-op when already running or when the session has ended.
    pub fn start(&mut self) -> Result<(), GameError> {
        let outcome = self.game.outcome().ok_or(GameError::NotInitialized)?;
        if self.pending.is_some() || outcome.is_terminal() {
            return Ok(());
        }
        self.pending = Some(self.scheduler.request_frame());
        Ok(())
    }

    /// Frame callback. Stale handles (cancelled or superseded) are ignored
    /// and return `Ok(None)`.
    pub fn on_frame(&mut self, handle: FrameHandle) -> Result<Option<StepResult>, GameError> {
        if self.pending != Some(handle) {
            log::warn!("Ignoring stale frame callback {:?}", handle);
            return Ok(None);
        }
        self.pending = None;

        let signals = self.input.signals();
        let result = self.game.step(&signals)?;
        self.host.present(&result.snapshot);

        if result.should_continue() {
            self.pending = Some(self.scheduler.request_frame());
        } else {
            self.finish(result.outcome);
        }
        Ok(Some(result))
    }

    /// Cancel the pending tick, if any. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
            log::debug!("Frame driver stopped");
        }
    }

    /// Start a new session with `config`
    pub fn restart(&mut self, config: GameConfig) -> Result<(), GameError> {
        self.stop();
        self.input.clear();
        self.notified = false;
        self.game.reset(config)?;
        self.start()
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Host event sink
    pub fn input_mut(&mut self) -> &mut InputAdapter {
        &mut self.input
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.stop();
        if self.notified {
            return;
        }
        self.notified = true;
        match outcome {
            GameOutcome::Won => self.host.on_win(),
            GameOutcome::Lost => self.host.on_loss(),
            GameOutcome::InProgress => {}
        }
    }
}

impl<H: GameHost> FrameDriver<ManualScheduler, H> {
    /// Fire queued frames until the driver stops or `max_frames` have run
    pub fn run(&mut self, max_frames: u64) -> Result<Option<GameOutcome>, GameError> {
        let mut frames = 0;
        while frames < max_frames {
            let Some(handle) = self.scheduler.next_due() else {
                break;
            };
            if self.on_frame(handle)?.is_some() {
                frames += 1;
            }
        }
        Ok(self.game.outcome())
    }
}

impl<S: FrameScheduler, H: GameHost> Drop for FrameDriver<S, H> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// In-process scheduler: requested frames queue up until fired with `next_due`
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    queue: VecDeque<FrameHandle>,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next callback to fire
    pub fn next_due(&mut self) -> Option<FrameHandle> {
        self.queue.pop_front()
    }

    /// Callbacks requested and not yet fired or cancelled
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Callbacks withdrawn before firing
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.queue.push_back(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.queue.len();
        self.queue.retain(|h| *h != handle);
        if self.queue.len() < before {
            self.cancelled += 1;
        }
    }
}
