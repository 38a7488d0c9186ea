// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Power-domain transition handlers.
//!
//! The dispatcher has already normalized and coordinated the target state
//! when these run; each handler only sequences the q645 hardware for its
//! transition. State-precondition mismatches are programming errors and
//! assert rather than report.

use kpm::error::PmResult;
use kpm::impl_pm_interface;
use kpm::ops::PowerDomainOps;
use kpm::pstate::PowerStateReq;
use kpm::state::{LocalState, PowerDomainState};
use kpm::{intr, sys, validator};

use crate::{arch, config, reset};

pub struct SpPm;

#[impl_pm_interface]
impl PowerDomainOps for SpPm {
    fn cpu_standby(cpu_state: LocalState) {
        debug_assert_eq!(cpu_state, LocalState::Retention);
        let saved = arch::scr_enable_irq_wake();
        arch::isb_sy();
        arch::dsb_sy();
        arch::wfi();
        // The wait can end on any pending physical interrupt; the mask is
        // restored unconditionally either way.
        arch::scr_restore(saved);
    }

    fn domain_on(mpidr: u64) -> PmResult {
        let pos = config::core_pos_by_mpidr(mpidr);
        assert!(pos < config::CORE_COUNT, "mpidr {mpidr:#x} out of topology");

        // Device memory: the flag is visible without cache maintenance. The
        // barriers order the store before the wake event.
        config::hold_flags().set_go(pos);
        arch::dsb_sy();
        arch::isb_sy();
        arch::sev();
        Ok(())
    }

    fn domain_off(target: &PowerDomainState) {
        assert_eq!(target.core_state(), LocalState::Off);
        intr::disable_cpu_interface();
    }

    fn domain_on_finish(target: &PowerDomainState) {
        assert_eq!(target.core_state(), LocalState::Off);
        intr::init_pcpu_distif();
        intr::enable_cpu_interface();
    }

    fn domain_suspend(target: &PowerDomainState) {
        // Shallow suspend keeps the core's context; nothing to tear down.
        if target.core_state() != LocalState::Off {
            return;
        }
        // Keep spurious interrupts from waking the core mid-descent.
        intr::disable_cpu_interface();
    }

    fn domain_suspend_finish(target: &PowerDomainState) {
        if target.system_state(config::MAX_PWR_LVL) == LocalState::Off {
            intr::init_distif();
        }
        if target.core_state() == LocalState::Off {
            intr::init_pcpu_distif();
            intr::enable_cpu_interface();
        }
    }

    fn domain_suspend_down_early(_target: &PowerDomainState) {
        // Contract point only; the q645 has nothing to sequence before the
        // final power-down wait.
    }

    fn domain_down_wfi(_target: &PowerDomainState) -> ! {
        sys::flush_dcache_all();
        sys::secondary_cold_boot();
    }

    fn validate_power_state(req: PowerStateReq, out: &mut PowerDomainState) -> PmResult {
        validator::validate_power_state(req, config::MAX_PWR_LVL, out)
    }

    fn validate_ns_entrypoint(entry: usize) -> PmResult {
        validator::validate_ns_entrypoint(entry, config::NS_DRAM_BASE, config::NS_DRAM_SIZE)
    }

    fn sys_suspend_state(out: &mut PowerDomainState) {
        // Deepest request: every affinity level powers down.
        out.set_all_off();
    }

    fn system_off() -> ! {
        intr::disable_cpu_interface();
        info!("system off: parking secondary cores");
        park_secondaries();
        info!("system off: halt");
        loop {
            arch::wfi();
        }
    }

    fn system_reset() -> ! {
        reset::watchdog_reset()
    }
}

/// Drives every other core's hold flag back to `Hold` so its next pass
/// through the wait loop parks it for good.
fn park_secondaries() {
    let me = config::core_pos_by_mpidr(arch::current_mpidr());
    let flags = config::hold_flags();
    for core in 0..config::CORE_COUNT {
        if core != me {
            flags.set_hold(core);
        }
    }
    arch::dsb_sy();
    arch::sev();
}
