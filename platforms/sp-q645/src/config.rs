// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Static platform layout for the q645.

use kpm::hold::HoldFlagStore;

/// Physical cores (one CA55 cluster).
pub const CORE_COUNT: usize = 4;
pub const CORES_PER_CLUSTER: usize = 4;

/// Highest power level this SoC distinguishes: core, cluster, system.
pub const MAX_PWR_LVL: usize = 2;

/// Normal-world DRAM window checked by the entry-point validator.
pub const NS_DRAM_BASE: usize = 0x0000_0000;
pub const NS_DRAM_SIZE: usize = 0x4000_0000;

/// Per-core hold-flag cells in always-on SRAM, device-mapped and uncached.
pub const HOLD_BASE: usize = 0x9e80_9fc0;

/// G0 register group; G0.21 carries the system reset request bit.
pub const RGST_BASE: usize = 0xf800_0000;
pub const RESET_REQ: usize = RGST_BASE + 0x54;
pub const RESET_REQ_BIT: u32 = 1 << 0;

/// STC watchdog block.
pub const WDG_ENABLE: usize = RGST_BASE + 0x0274;
pub const WDG_CTRL: usize = RGST_BASE + 0x0630;
pub const WDG_CNT: usize = RGST_BASE + 0x0634;

/// Watchdog command/value sequence for an immediate reset: enable the reset
/// output, stop the counter, unlock it, load a one-tick countdown, resume.
pub const WDG_ENABLE_VAL: u32 = 0x0600;
pub const WDG_CMD_STOP: u32 = 0x3877;
pub const WDG_CMD_UNLOCK: u32 = 0xab00;
pub const WDG_CMD_RESUME: u32 = 0x4a4b;
pub const WDG_COUNTDOWN: u32 = 0x0001;

/// Grace period for the watchdog to fire before the fatal fallback.
pub const RESET_GRACE_MS: u32 = 1000;

/// Dense core index from a hardware affinity id.
pub fn core_pos_by_mpidr(mpidr: u64) -> usize {
    let aff1 = (mpidr >> 8 & 0xff) as usize;
    let aff0 = (mpidr & 0xff) as usize;
    aff1 * CORES_PER_CLUSTER + aff0
}

cfg_if::cfg_if! {
    if #[cfg(test)] {
        struct HoldCells(core::cell::UnsafeCell<[u64; CORE_COUNT]>);

        // Tests serialize on their own gate before touching the cells.
        unsafe impl Sync for HoldCells {}

        static HOLD_CELLS: HoldCells = HoldCells(core::cell::UnsafeCell::new([0; CORE_COUNT]));

        /// View over the in-process stand-in for the hold-flag SRAM.
        pub fn hold_flags() -> HoldFlagStore {
            // SAFETY: the cells live for the whole test binary.
            unsafe { HoldFlagStore::new(HOLD_CELLS.0.get().cast(), CORE_COUNT) }
        }

        pub(crate) fn hold_cells_seed(value: u64) {
            // SAFETY: callers hold the test gate.
            unsafe { *HOLD_CELLS.0.get() = [value; CORE_COUNT] };
        }

        pub(crate) fn hold_cells_snapshot() -> [u64; CORE_COUNT] {
            // SAFETY: callers hold the test gate.
            unsafe { *HOLD_CELLS.0.get() }
        }
    } else {
        /// View over this platform's hold-flag cells.
        pub fn hold_flags() -> HoldFlagStore {
            // SAFETY: HOLD_BASE..+CORE_COUNT*8 is the dedicated hold-flag SRAM,
            // device-mapped at boot; writers are exclusive per index by the
            // dispatcher's per-core serialization.
            unsafe { HoldFlagStore::new(HOLD_BASE as *mut u64, CORE_COUNT) }
        }
    }
}
