#![cfg(test)]

//! Host-side tests of the handler sequencing. The GIC and system hooks are
//! recording mocks bound through the `kpm` interfaces, and the arch wrappers
//! record into an event log off target, so every check below is about
//! ordering and preconditions, not hardware.

use std::sync::{Mutex, MutexGuard};

use kpm::error::PmError;
use kpm::hold::HoldState;
use kpm::impl_pm_interface;
use kpm::intr::IntrCtrl;
use kpm::ops;
use kpm::pstate::{PowerStateReq, StateType};
use kpm::state::{LocalState, PowerDomainState};
use kpm::sys::SysHooks;

use crate::{arch, config};

static CALLS: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());
static GATE: Mutex<()> = Mutex::new(());

fn lock<T>(m: &'static Mutex<T>) -> MutexGuard<'static, T> {
    // A should_panic test may poison a lock; the data is still usable.
    m.lock().unwrap_or_else(|e| e.into_inner())
}

fn record(op: &'static str) {
    lock(&CALLS).push(op);
}

/// Serializes a test against the shared call and event logs and clears them.
fn isolated() -> MutexGuard<'static, ()> {
    let gate = lock(&GATE);
    lock(&CALLS).clear();
    arch::drain_events();
    gate
}

fn calls() -> Vec<&'static str> {
    lock(&CALLS).clone()
}

struct TestGic;

#[impl_pm_interface]
impl IntrCtrl for TestGic {
    fn disable_cpu_interface() {
        record("cpuif_disable");
    }

    fn enable_cpu_interface() {
        record("cpuif_enable");
    }

    fn init_pcpu_distif() {
        record("pcpu_distif_init");
    }

    fn init_distif() {
        record("distif_init");
    }
}

struct TestHooks;

#[impl_pm_interface]
impl SysHooks for TestHooks {
    fn console_flush() {
        record("console_flush");
    }

    fn mdelay(_ms: u32) {
        record("mdelay");
    }

    fn flush_dcache_all() {
        record("dcache_flush");
    }

    fn secondary_cold_boot() -> ! {
        panic!("cold boot re-entry");
    }
}

fn state(core: LocalState, cluster: LocalState, system: LocalState) -> PowerDomainState {
    let mut st = PowerDomainState::new();
    st.set(0, core);
    st.set(1, cluster);
    st.set(2, system);
    st
}

#[test]
fn off_disables_cpu_interface_once() {
    let _g = isolated();
    ops::domain_off(&state(LocalState::Off, LocalState::Run, LocalState::Run));
    assert_eq!(calls(), ["cpuif_disable"]);
}

#[test]
#[should_panic]
fn off_requires_core_level_off() {
    let _g = isolated();
    ops::domain_off(&PowerDomainState::new());
}

#[test]
fn on_finish_restores_interrupt_plumbing() {
    let _g = isolated();
    ops::domain_on_finish(&state(LocalState::Off, LocalState::Off, LocalState::Run));
    assert_eq!(calls(), ["pcpu_distif_init", "cpuif_enable"]);
}

#[test]
#[should_panic]
fn on_finish_requires_prior_core_off() {
    let _g = isolated();
    ops::domain_on_finish(&state(LocalState::Retention, LocalState::Run, LocalState::Run));
}

#[test]
fn shallow_suspend_is_a_no_op() {
    let _g = isolated();
    ops::domain_suspend(&state(LocalState::Retention, LocalState::Run, LocalState::Run));
    assert!(calls().is_empty());
}

#[test]
fn deep_suspend_masks_the_core() {
    let _g = isolated();
    ops::domain_suspend(&state(LocalState::Off, LocalState::Off, LocalState::Off));
    assert_eq!(calls(), ["cpuif_disable"]);
}

#[test]
fn suspend_finish_system_off_reinits_distributor_only() {
    let _g = isolated();
    ops::domain_suspend_finish(&state(LocalState::Run, LocalState::Run, LocalState::Off));
    assert_eq!(calls(), ["distif_init"]);
}

#[test]
fn suspend_finish_core_off_reinits_cpu_side_only() {
    let _g = isolated();
    ops::domain_suspend_finish(&state(LocalState::Off, LocalState::Run, LocalState::Run));
    assert_eq!(calls(), ["pcpu_distif_init", "cpuif_enable"]);
}

#[test]
fn suspend_finish_full_system_resume_reinits_both() {
    let _g = isolated();
    ops::domain_suspend_finish(&state(LocalState::Off, LocalState::Off, LocalState::Off));
    assert_eq!(calls(), ["distif_init", "pcpu_distif_init", "cpuif_enable"]);
}

#[test]
fn suspend_down_early_hook_stays_silent() {
    let _g = isolated();
    ops::domain_suspend_down_early(&state(LocalState::Off, LocalState::Off, LocalState::Off));
    assert!(calls().is_empty());
}

#[test]
#[should_panic(expected = "cold boot re-entry")]
fn down_wfi_flushes_then_reenters_cold_boot() {
    let _g = isolated();
    ops::domain_down_wfi(&state(LocalState::Off, LocalState::Off, LocalState::Off));
}

#[test]
fn sys_suspend_state_targets_every_level() {
    let mut st = PowerDomainState::new();
    ops::sys_suspend_state(&mut st);
    for lvl in 0..=config::MAX_PWR_LVL {
        assert_eq!(st.get(lvl), LocalState::Off);
    }
}

#[test]
fn validate_powerdown_through_platform_ops() {
    let mut st = PowerDomainState::new();
    let req = PowerStateReq::from_fields(StateType::Powerdown, 1, 0);
    ops::validate_power_state(req, &mut st).unwrap();
    assert_eq!(st.get(0), LocalState::Off);
    assert_eq!(st.get(1), LocalState::Off);
    assert_eq!(st.get(2), LocalState::Run);
}

#[test]
fn validate_standby_above_core_rejected() {
    let mut st = PowerDomainState::new();
    let req = PowerStateReq::from_fields(StateType::Standby, 1, 0);
    assert_eq!(
        ops::validate_power_state(req, &mut st),
        Err(PmError::InvalidParams)
    );
}

#[test]
fn ns_entrypoint_checked_against_dram_window() {
    assert!(ops::validate_ns_entrypoint(config::NS_DRAM_BASE + 0x8_0000).is_ok());
    assert_eq!(
        ops::validate_ns_entrypoint(config::NS_DRAM_BASE),
        Err(PmError::InvalidAddress)
    );
    assert_eq!(
        ops::validate_ns_entrypoint(config::NS_DRAM_BASE + config::NS_DRAM_SIZE),
        Err(PmError::InvalidAddress)
    );
}

#[test]
fn standby_restores_interrupt_mask_bitwise() {
    let _g = isolated();
    for seed in [0x0000_0438, 0x0000_043a] {
        arch::scr_seed(seed);
        ops::cpu_standby(LocalState::Retention);
        // The saved value comes back exactly, whether or not the IRQ wake
        // bit was already set when the wait started.
        assert_eq!(arch::scr_value(), seed);
        assert_eq!(arch::drain_events(), ["isb", "dsb", "wfi"]);
    }
}

#[test]
fn on_releases_hold_flag_then_signals() {
    let _g = isolated();
    config::hold_cells_seed(HoldState::Hold as u64);

    ops::domain_on(0x0002).unwrap();

    let cells = config::hold_cells_snapshot();
    assert_eq!(cells[2], HoldState::Go as u64);
    for core in [0, 1, 3] {
        assert_eq!(cells[core], HoldState::Hold as u64);
    }
    // Both barriers order the flag store before the wake event.
    assert_eq!(arch::drain_events(), ["dsb", "isb", "sev"]);
}

#[test]
#[should_panic(expected = "out of topology")]
fn on_rejects_out_of_topology_mpidr() {
    // The bounds assert fires before any hold-flag access.
    let _ = ops::domain_on(0x0207);
}

#[test]
fn core_position_resolution() {
    assert_eq!(config::core_pos_by_mpidr(0x0000), 0);
    assert_eq!(config::core_pos_by_mpidr(0x0003), 3);
    // A second cluster would land past this platform's core count.
    assert!(config::core_pos_by_mpidr(0x0100) >= config::CORE_COUNT);
}
