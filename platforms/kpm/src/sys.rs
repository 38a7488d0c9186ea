//! Miscellaneous collaborators consumed by the power-down paths.

use crate_interface::{call_interface, def_interface};

#[def_interface]
pub trait SysHooks {
    /// Drains any buffered console output. Reset paths call this before the
    /// hardware stops responding.
    fn console_flush();

    /// Busy-waits for `ms` milliseconds.
    fn mdelay(ms: u32);

    /// Cleans and invalidates all data-cache levels on the calling core.
    fn flush_dcache_all();

    /// Re-enters the secondary cold-boot wait loop. Never returns.
    fn secondary_cold_boot() -> !;
}

#[inline]
pub fn console_flush() {
    call_interface!(SysHooks::console_flush)
}

#[inline]
pub fn mdelay(ms: u32) {
    call_interface!(SysHooks::mdelay, ms)
}

#[inline]
pub fn flush_dcache_all() {
    call_interface!(SysHooks::flush_dcache_all)
}

#[inline]
pub fn secondary_cold_boot() -> ! {
    call_interface!(SysHooks::secondary_cold_boot)
}
