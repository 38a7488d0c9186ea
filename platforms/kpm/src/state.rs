//! Per-level power-domain state model.

/// Number of power-domain levels any platform may distinguish
/// (core, cluster, system).
pub const PWR_LVL_COUNT: usize = 3;

/// Highest valid level index.
pub const MAX_PWR_LVL: usize = PWR_LVL_COUNT - 1;

/// Topology tier a transition applies to. Values are contiguous and
/// zero-based; a platform's own maximum bounds which tiers it uses.
#[repr(usize)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum PowerLevel {
    Core = 0,
    Cluster = 1,
    System = 2,
}

/// Local state of a single power domain.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LocalState {
    /// Fully powered and running.
    #[default]
    Run,
    /// Low-power state that preserves context.
    Retention,
    /// Powered down; context is lost.
    Off,
}

/// Normalized per-level target states for one transition request.
///
/// Indexed by level; entries above a platform's maximum level stay at their
/// [`Run`](LocalState::Run) default and are never inspected.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PowerDomainState {
    levels: [LocalState; PWR_LVL_COUNT],
}

impl PowerDomainState {
    /// All levels running.
    pub const fn new() -> Self {
        Self {
            levels: [LocalState::Run; PWR_LVL_COUNT],
        }
    }

    pub fn get(&self, lvl: usize) -> LocalState {
        self.levels[lvl]
    }

    pub fn set(&mut self, lvl: usize, state: LocalState) {
        self.levels[lvl] = state;
    }

    /// Target state of the calling core's own domain.
    pub fn core_state(&self) -> LocalState {
        self.levels[PowerLevel::Core as usize]
    }

    /// Target state of the platform's topmost domain.
    pub fn system_state(&self, max_lvl: usize) -> LocalState {
        self.levels[max_lvl]
    }

    /// Marks every level from the core up to and including `lvl` as off.
    pub fn set_off_through(&mut self, lvl: usize) {
        for state in &mut self.levels[..=lvl] {
            *state = LocalState::Off;
        }
    }

    /// Marks every level as off (deepest full-system suspend).
    pub fn set_all_off(&mut self) {
        self.levels = [LocalState::Off; PWR_LVL_COUNT];
    }
}
