//! Per-core hold flags.
//!
//! A parked secondary spins in its cold-boot wait loop until the core that
//! powers it on publishes [`HoldState::Go`] in the cell owned by that core.
//! The region is device-mapped and never cached, so a volatile store plus
//! the caller's barrier/event sequence is the whole publication protocol;
//! each index has exactly one writer at a time.

/// Value a parked core waits for in its hold cell.
#[repr(u64)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HoldState {
    /// Stay parked in the wait loop.
    Hold = 0,
    /// Proceed to the registered secondary entry point.
    Go = 1,
}

/// Bounds-checked view over the per-core hold-flag cells.
pub struct HoldFlagStore {
    base: *mut u64,
    cores: usize,
}

impl HoldFlagStore {
    /// Creates a view over `cores` consecutive 64-bit cells at `base`.
    ///
    /// # Safety
    ///
    /// `base` must point to at least `cores` u64 cells that stay valid for
    /// the lifetime of the store, mapped uncached, with no concurrent writer
    /// for any index this store writes.
    pub const unsafe fn new(base: *mut u64, cores: usize) -> Self {
        Self { base, cores }
    }

    pub fn core_count(&self) -> usize {
        self.cores
    }

    /// Releases `core` from its wait loop.
    pub fn set_go(&self, core: usize) {
        self.write(core, HoldState::Go);
    }

    /// Parks `core` again; its next pass through the wait loop blocks.
    pub fn set_hold(&self, core: usize) {
        self.write(core, HoldState::Hold);
    }

    fn write(&self, core: usize, state: HoldState) {
        assert!(
            core < self.cores,
            "hold flag index {core} out of range (cores = {})",
            self.cores
        );
        // Device memory: no cache maintenance needed, visibility is the
        // caller's barrier sequence.
        unsafe { self.base.add(core).write_volatile(state as u64) };
    }
}
