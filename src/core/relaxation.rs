/// Relaxation bookkeeping carried from one tick to the next.
///
/// Instead of iterating the all-pairs sweep many times inside a tick, the
/// core sweeps once per tick and counts how many consecutive ticks belong to
/// the current relaxation episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelaxationState {
    /// Ticks left in the current episode
    budget: i32,

    /// Whether the most recent sweep resolved at least one pair
    collision_occurred_last_sweep: bool,

    /// Whether the current tick opened a new episode
    episode_started: bool,
}

impl RelaxationState {
    /// Creates the state of a core that has not ticked yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining budget of the current episode
    pub fn budget(&self) -> i32 {
        self.budget
    }

    /// Whether the most recent sweep resolved at least one pair
    pub fn collision_occurred_last_sweep(&self) -> bool {
        self.collision_occurred_last_sweep
    }

    /// Whether the latest tick started a fresh episode
    pub fn episode_started(&self) -> bool {
        self.episode_started
    }

    /// Opens the tick's sweep: refills the budget when it is spent or the
    /// previous sweep was quiet, then consumes one unit. The refill must come
    /// before the decrement.
    ///
    /// Returns whether a new episode began.
    pub(crate) fn begin_sweep(&mut self, iterations: u32) -> bool {
        self.episode_started = self.budget <= 0 || !self.collision_occurred_last_sweep;
        if self.episode_started {
            self.budget = i32::try_from(iterations).unwrap_or(i32::MAX);
        }
        self.budget -= 1;
        self.collision_occurred_last_sweep = false;
        self.episode_started
    }

    /// Marks that the current sweep resolved a collision
    pub(crate) fn record_collision(&mut self) {
        self.collision_occurred_last_sweep = true;
    }
}
