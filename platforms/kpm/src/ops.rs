//! Transition-handler registration and the dispatcher-facing entry points.
//!
//! The handler set is closed and known at build time, so it is bound
//! statically: the platform crate implements [`PowerDomainOps`] once with
//! [`impl_pm_interface`](crate::impl_pm_interface) and the dispatcher calls
//! the free functions below. The only runtime registration step is
//! [`setup`], which records the secondary resume address consumed by the
//! cold-boot path — written exactly once, read-only thereafter.

use crate_interface::{call_interface, def_interface};
use lazyinit::LazyInit;

use crate::error::PmResult;
use crate::pstate::PowerStateReq;
use crate::state::{LocalState, PowerDomainState};

/// The power-domain transitions a platform provides.
///
/// `domain_off`, `domain_on_finish` and the suspend handlers receive the
/// *finalized* target state the dispatcher coordinated across cores; a
/// precondition mismatch there is a programming error, not a runtime
/// condition, and the platform is expected to assert.
#[def_interface]
pub trait PowerDomainOps {
    /// Shallow wait on the calling core; returns after wake with all
    /// interrupt masking restored.
    fn cpu_standby(cpu_state: LocalState);

    /// Releases the core identified by `mpidr` from its hold loop.
    fn domain_on(mpidr: u64) -> PmResult;

    /// Tears the calling core down before the dispatcher powers it off.
    fn domain_off(target: &PowerDomainState);

    /// Runs on a core that just resumed from off; restores its interrupt
    /// plumbing. Must run exactly once per resume.
    fn domain_on_finish(target: &PowerDomainState);

    /// Prepares the calling core for the requested suspend depth.
    fn domain_suspend(target: &PowerDomainState);

    /// Undoes `domain_suspend` after wake, restoring whatever state the
    /// reached depth lost.
    fn domain_suspend_finish(target: &PowerDomainState);

    /// Hook before the final power-down wait. Contract point only; kept
    /// even where a platform has nothing to sequence here.
    fn domain_suspend_down_early(target: &PowerDomainState);

    /// Final descent of a powered-down core: flush, then re-enter the
    /// cold-boot path. Never returns.
    fn domain_down_wfi(target: &PowerDomainState) -> !;

    /// Normalizes an encoded request into `out`.
    fn validate_power_state(req: PowerStateReq, out: &mut PowerDomainState) -> PmResult;

    /// Checks a candidate non-secure resume address.
    fn validate_ns_entrypoint(entry: usize) -> PmResult;

    /// Fills `out` with the deepest full-system suspend target.
    fn sys_suspend_state(out: &mut PowerDomainState);

    /// Powers the whole system down. Never returns.
    fn system_off() -> !;

    /// Resets the whole system. Never returns.
    fn system_reset() -> !;
}

static SEC_ENTRY_POINT: LazyInit<usize> = LazyInit::new();

/// Records the address de-parked secondaries resume at.
///
/// Called exactly once by the dispatcher before any core can take a
/// transition; a second call is a contract violation and panics.
pub fn setup(sec_entrypoint: usize) {
    info!("PM: secondary entry point {sec_entrypoint:#x}");
    SEC_ENTRY_POINT.init_once(sec_entrypoint);
}

/// The resume address recorded by [`setup`]. Panics if setup has not run.
pub fn secondary_entry_point() -> usize {
    *SEC_ENTRY_POINT
}

#[inline]
pub fn cpu_standby(cpu_state: LocalState) {
    call_interface!(PowerDomainOps::cpu_standby, cpu_state)
}

#[inline]
pub fn domain_on(mpidr: u64) -> PmResult {
    call_interface!(PowerDomainOps::domain_on, mpidr)
}

#[inline]
pub fn domain_off(target: &PowerDomainState) {
    call_interface!(PowerDomainOps::domain_off, target)
}

#[inline]
pub fn domain_on_finish(target: &PowerDomainState) {
    call_interface!(PowerDomainOps::domain_on_finish, target)
}

#[inline]
pub fn domain_suspend(target: &PowerDomainState) {
    call_interface!(PowerDomainOps::domain_suspend, target)
}

#[inline]
pub fn domain_suspend_finish(target: &PowerDomainState) {
    call_interface!(PowerDomainOps::domain_suspend_finish, target)
}

#[inline]
pub fn domain_suspend_down_early(target: &PowerDomainState) {
    call_interface!(PowerDomainOps::domain_suspend_down_early, target)
}

#[inline]
pub fn domain_down_wfi(target: &PowerDomainState) -> ! {
    call_interface!(PowerDomainOps::domain_down_wfi, target)
}

#[inline]
pub fn validate_power_state(req: PowerStateReq, out: &mut PowerDomainState) -> PmResult {
    call_interface!(PowerDomainOps::validate_power_state, req, out)
}

#[inline]
pub fn validate_ns_entrypoint(entry: usize) -> PmResult {
    call_interface!(PowerDomainOps::validate_ns_entrypoint, entry)
}

#[inline]
pub fn sys_suspend_state(out: &mut PowerDomainState) {
    call_interface!(PowerDomainOps::sys_suspend_state, out)
}

#[inline]
pub fn system_off() -> ! {
    call_interface!(PowerDomainOps::system_off)
}

#[inline]
pub fn system_reset() -> ! {
    call_interface!(PowerDomainOps::system_reset)
}
